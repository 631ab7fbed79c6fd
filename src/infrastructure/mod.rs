pub mod cache;
pub mod catalog;
pub mod clock;
pub mod coingecko;
