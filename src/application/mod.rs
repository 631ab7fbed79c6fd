pub mod classifier;
pub mod dialogue;
pub mod extractor;
pub mod handlers;
pub mod knowledge;
pub mod market_data;
pub mod resolver;
