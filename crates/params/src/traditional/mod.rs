//! Constants for the asymmetric algorithms

pub mod ecdh;
pub mod rsa;
