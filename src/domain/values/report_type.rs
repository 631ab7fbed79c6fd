use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportType {
    Free,
    Premium,
}

impl ReportType {
    pub fn badge(&self) -> &'static str {
        match self {
            ReportType::Free => "🆓 Free",
            ReportType::Premium => "🔒 Premium",
        }
    }
}

impl fmt::Display for ReportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportType::Free => write!(f, "free"),
            ReportType::Premium => write!(f, "premium"),
        }
    }
}
