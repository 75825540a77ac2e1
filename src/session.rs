use std::collections::BTreeMap;

use crate::models::{Finding, SummaryEntry};

/// State accumulated over one program run.
///
/// The match tally spans every crawl; findings are collected per crawl and
/// drained by the caller with [`ScanSession::take_findings`].
#[derive(Debug, Default)]
pub struct ScanSession {
    matches: BTreeMap<String, usize>,
    findings: Vec<Finding>,
}

impl ScanSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a match and keep it for the current crawl's report.
    pub fn record(&mut self, finding: Finding) {
        *self.matches.entry(finding.name.clone()).or_insert(0) += 1;
        self.findings.push(finding);
    }

    pub fn take_findings(&mut self) -> Vec<Finding> {
        std::mem::take(&mut self.findings)
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Distinct matched names in ascending order, numbered from 1.
    pub fn summary(&self) -> Vec<SummaryEntry> {
        self.matches
            .iter()
            .enumerate()
            .map(|(i, (name, count))| SummaryEntry {
                index: i + 1,
                name: name.clone(),
                count: *count,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finding(name: &str, ancestors: &[&str]) -> Finding {
        Finding {
            name: name.to_string(),
            ancestors: ancestors.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_summary_sorted_and_numbered() {
        let mut session = ScanSession::new();
        session.record(finding("zeta", &[]));
        session.record(finding("alpha", &[]));
        session.record(finding("mid", &[]));

        let names: Vec<_> = session.summary().into_iter().map(|e| (e.index, e.name)).collect();
        assert_eq!(
            names,
            vec![
                (1, "alpha".to_string()),
                (2, "mid".to_string()),
                (3, "zeta".to_string())
            ]
        );
    }

    #[test]
    fn test_same_name_counted_once_per_match() {
        let mut session = ScanSession::new();
        session.record(finding("shared", &["a"]));
        session.record(finding("shared", &["b"]));

        let summary = session.summary();
        assert_eq!(summary.len(), 1);
        assert_eq!(summary[0].count, 2);
    }

    #[test]
    fn test_take_findings_keeps_tally() {
        let mut session = ScanSession::new();
        session.record(finding("x", &[]));
        assert_eq!(session.take_findings().len(), 1);
        assert!(session.take_findings().is_empty());
        assert!(!session.is_empty());
        assert_eq!(session.summary()[0].count, 1);
    }
}
