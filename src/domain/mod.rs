// Market data domain
pub mod market;

// Model selection and prediction domain
pub mod ml;

// Domain-specific error types
pub mod errors;
