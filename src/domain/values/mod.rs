pub mod alias_match;
pub mod currency;
pub mod intent;
pub mod report_type;
pub mod signal;
