pub mod clock;
pub mod market_data;
