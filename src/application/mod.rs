// Local stock tables: listings and history summaries
pub mod market_data;

// Trend model training and prediction
pub mod ml;
