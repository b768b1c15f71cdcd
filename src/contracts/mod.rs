//! Contract bindings for the GreenCoin rewards contract

pub mod greencoin;

pub use greencoin::*;
