//! Traits at the seams between the msgseal crates

pub mod symmetric;

pub use symmetric::SymmetricMode;
