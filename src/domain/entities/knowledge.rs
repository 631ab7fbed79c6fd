use crate::domain::values::report_type::ReportType;
use serde::Serialize;

/// Glossary entry, matched by its canonical `key` phrase.
#[derive(Debug, Clone, Serialize)]
pub struct EducationEntry {
    pub key: String,
    pub term: String,
    pub answer: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportEntry {
    pub id: String,
    pub title: String,
    pub category: String,
    pub report_type: ReportType,
    pub date: String,
    pub summary: String,
    pub keywords: Vec<String>,
}

impl ReportEntry {
    /// Lowercased text scanned for general token overlap.
    pub fn searchable_text(&self) -> String {
        format!(
            "{} {} {} {}",
            self.title,
            self.category,
            self.summary,
            self.keywords.join(" ")
        )
        .to_lowercase()
    }
}

/// A report paired with its keyword score for one query.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredReport {
    pub report: ReportEntry,
    pub score: u32,
}
