//! Constants for supporting primitives

pub mod symmetric;
