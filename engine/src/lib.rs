pub mod config;
pub mod draws;
pub mod error;
pub mod generator;
pub mod rng;
pub mod writer;

pub use config::GeneratorConfig;
pub use draws::{AllocationDraws, RngDraws};
pub use error::{ConfigError, FixtureError, FixtureResult};
pub use generator::{generate, GenerationResult};
pub use rng::FastxxHashRng;
pub use writer::write_merkle_input;
