pub mod knowledge;
pub mod market;
