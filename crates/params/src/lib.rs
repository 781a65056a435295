//! Constant values for msgseal
//!
//! Key sizes, curve-table bit lengths and symmetric parameters shared by the
//! key factory, the codecs and the tests.

#![no_std]

pub mod traditional;
pub mod utils;
