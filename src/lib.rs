// Library interface for fittrack modules
// This allows integration tests to access the core functionality

pub mod config;
pub mod driver;
pub mod error;
pub mod factory;
pub mod logging;
pub mod models;
pub mod running;
pub mod swimming;
pub mod training;
pub mod walking;

// Re-export commonly used types for convenience
pub use driver::{process_packages, render, sample_packages, summarize, OutputFormat, Package};
pub use error::{Result, TrainingError};
pub use factory::{read_package, Workout};
pub use logging::{LogConfig, LogFormat, LogLevel};
pub use models::{Summary, WorkoutKind};
pub use running::Running;
pub use swimming::Swimming;
pub use training::{Training, TrainingData};
pub use walking::SportsWalking;
