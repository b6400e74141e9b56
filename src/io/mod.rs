/// Solver constants and runtime configuration defaults
pub mod configuration;
/// Error types and context management
pub mod error;
/// Progress display for batch evaluation
pub mod progress;
