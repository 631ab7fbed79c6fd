use crate::domain::entities::knowledge::{EducationEntry, ReportEntry, ScoredReport};

/// Tokens shorter than this are ignored by report search.
const MIN_TOKEN_LEN: usize = 3;
/// Glossary key words must be longer than this to match on their own.
const MIN_KEY_WORD_LEN: usize = 3;

/// Static glossary and report-summary search. Read-only after construction.
#[derive(Debug, Clone, Default)]
pub struct KnowledgeIndex {
    education: Vec<EducationEntry>,
    reports: Vec<ReportEntry>,
}

impl KnowledgeIndex {
    pub fn new(education: Vec<EducationEntry>, reports: Vec<ReportEntry>) -> Self {
        Self { education, reports }
    }

    /// Entries whose key appears in the message, or one of whose key words
    /// (longer than three characters) does. Unscored, catalog order.
    pub fn search_education(&self, query: &str) -> Vec<&EducationEntry> {
        let q = query.to_lowercase();
        self.education
            .iter()
            .filter(|entry| {
                q.contains(entry.key.as_str())
                    || entry
                        .key
                        .split(' ')
                        .any(|word| word.len() > MIN_KEY_WORD_LEN && q.contains(word))
            })
            .collect()
    }

    /// Keyword-scored report search.
    ///
    /// Each query token (at least three characters) scores +1 when it occurs
    /// anywhere in the report text and +2 more when a keyword contains it.
    /// Zero-score reports are dropped; ties keep catalog order.
    pub fn search_reports(&self, query: &str) -> Vec<ScoredReport> {
        let q = query.to_lowercase();
        let tokens: Vec<&str> = q
            .split_whitespace()
            .filter(|t| t.chars().count() >= MIN_TOKEN_LEN)
            .collect();

        let mut scored: Vec<ScoredReport> = self
            .reports
            .iter()
            .filter_map(|report| {
                let text = report.searchable_text();
                let score = tokens.iter().fold(0u32, |acc, token| {
                    let mut s = acc;
                    if text.contains(token) {
                        s += 1;
                    }
                    if report
                        .keywords
                        .iter()
                        .any(|k| k.to_lowercase().contains(token))
                    {
                        s += 2;
                    }
                    s
                });
                (score > 0).then(|| ScoredReport {
                    report: report.clone(),
                    score,
                })
            })
            .collect();

        // sort_by is stable, so equal scores keep catalog order
        scored.sort_by(|a, b| b.score.cmp(&a.score));
        scored
    }

    pub fn reports(&self) -> &[ReportEntry] {
        &self.reports
    }

    pub fn education(&self) -> &[EducationEntry] {
        &self.education
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::values::report_type::ReportType;

    fn report(id: &str, summary: &str, keywords: &[&str]) -> ReportEntry {
        ReportEntry {
            id: id.into(),
            title: format!("Report {id}"),
            category: "TEST".into(),
            report_type: ReportType::Free,
            date: "2026-01".into(),
            summary: summary.into(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }

    fn entry(key: &str) -> EducationEntry {
        EducationEntry {
            key: key.into(),
            term: key.to_uppercase(),
            answer: format!("about {key}"),
        }
    }

    #[test]
    fn test_education_matches_full_key_or_long_word() {
        let idx = KnowledgeIndex::new(vec![entry("gas fee"), entry("max supply"), entry("dex")], vec![]);
        let hits: Vec<&str> = idx.search_education("why is supply limited").iter().map(|e| e.key.as_str()).collect();
        assert_eq!(hits, vec!["max supply"]);
        // "gas" and "fee" are too short to match alone
        assert!(idx.search_education("the fee was high").is_empty());
        assert_eq!(idx.search_education("what is a dex").len(), 1);
    }

    #[test]
    fn test_report_keyword_overlap_outranks_body_overlap() {
        let idx = KnowledgeIndex::new(
            vec![],
            vec![
                report("body", "talks about liquidity in passing", &["macro"]),
                report("kw", "unrelated text", &["liquidity"]),
                report("none", "nothing here", &["other"]),
            ],
        );
        let results = idx.search_reports("liquidity");
        let ids: Vec<&str> = results.iter().map(|r| r.report.id.as_str()).collect();
        assert_eq!(ids, vec!["kw", "body"]);
        assert_eq!(results[0].score, 3);
        assert_eq!(results[1].score, 1);
    }

    #[test]
    fn test_report_short_tokens_ignored_and_ties_stable() {
        let idx = KnowledgeIndex::new(
            vec![],
            vec![report("a", "whale watch", &[]), report("b", "whale moves", &[])],
        );
        assert!(idx.search_reports("a an of").is_empty());
        let ids: Vec<String> = idx.search_reports("whale").into_iter().map(|r| r.report.id).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }
}
