//! Presentation Layer
//!
//! This layer handles:
//! - Creating use cases with infrastructure dependencies
//! - Output formatting (text/JSON)
//!
//! ## Structure
//!
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//! - `output` - Text and JSON rendering of outcomes
//!
//! ## Usage
//!
//! ```ignore
//! use compliance::presentation::factory;
//!
//! let runner = factory::create_profile_runner(&config, None)?;
//! let run = runner.run(&profile)?;
//! ```

pub mod factory;
pub mod output;

pub use factory::{create_profile_runner, provision, ConcreteProfileRunner};
pub use output::OutputFormat;
