//! Discrete weighted random sampling.
//!
//! A [`Discrete`] sampler is configured with a table of outcomes and their
//! probabilities, and returns outcomes so that their long-run frequencies
//! converge to the configured probabilities.
//!
//! ```
//! use rand::SeedableRng as _;
//! use randomgen::Discrete;
//!
//! let sampler = Discrete::new([(-1, 0.01), (0, 0.3), (1, 0.58), (2, 0.1), (3, 0.01)])?;
//! let mut rng = rand::rngs::SmallRng::seed_from_u64(0);
//! assert!(sampler.outcomes().contains(&sampler.draw(&mut rng)));
//! # Ok::<(), randomgen::ValidationError>(())
//! ```

pub mod generator;

mod error;
mod settings;
mod value;

pub use error::ValidationError;
pub use generator::Discrete;
pub use generator::Generator;
pub use generator::Shared;
pub use settings::Search;
pub use settings::Settings;
pub use value::Outcome;
pub use value::Probability;
pub use value::Value;
