pub mod feature_registry;
pub mod model_kind;
pub mod trend;
