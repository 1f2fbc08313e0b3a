pub mod claimant;
pub mod fixture;
pub mod parameters;
pub mod pool;
