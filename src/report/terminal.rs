use std::path::Path;

use colored::*;

use crate::models::{Finding, SummaryEntry};

/// `a > b > name`, with the ancestor prefix dimmed and the match in red.
pub fn format_finding(finding: &Finding) -> String {
    let prefix: String = finding
        .ancestors
        .iter()
        .map(|name| format!("{} > ", name))
        .collect();

    if prefix.is_empty() {
        format!("{}", finding.name.red().bold())
    } else {
        format!("{}{}", prefix.dimmed(), finding.name.red().bold())
    }
}

/// Section header printed before each crawl in recursive mode.
pub fn print_header(manifest: &Path) {
    println!("{}:", manifest.display());
}

/// Print one crawl's matches, or the explicit notice when there were none.
pub fn print_findings(findings: &[Finding]) {
    if findings.is_empty() {
        println!("{}", "None found!".green().bold());
        return;
    }

    for finding in findings {
        println!("{}", format_finding(finding));
    }
}

/// Lines of the final summary; empty when nothing matched during the run.
pub fn format_summary(entries: &[SummaryEntry]) -> Vec<String> {
    if entries.is_empty() {
        return Vec::new();
    }

    // Index column fits the widest "N." label
    let width = entries.len().to_string().len() + 1;

    let mut lines = vec!["Summary of all found dependencies:".to_string()];
    for entry in entries {
        let index = format!("{:>width$}", format!("{}.", entry.index), width = width);
        lines.push(format!(
            "{} {} {}",
            index.dimmed(),
            entry.name.red().bold(),
            format!("({})", entry.count).dimmed()
        ));
    }
    lines
}

pub fn print_summary(entries: &[SummaryEntry]) {
    for line in format_summary(entries) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(names: &[(&str, usize)]) -> Vec<SummaryEntry> {
        names
            .iter()
            .enumerate()
            .map(|(i, (name, count))| SummaryEntry {
                index: i + 1,
                name: name.to_string(),
                count: *count,
            })
            .collect()
    }

    #[test]
    fn test_finding_chain() {
        colored::control::set_override(false);
        let finding = Finding {
            name: "c".to_string(),
            ancestors: vec!["a".to_string(), "b".to_string()],
        };
        assert_eq!(format_finding(&finding), "a > b > c");

        let top = Finding {
            name: "left".to_string(),
            ancestors: vec![],
        };
        assert_eq!(format_finding(&top), "left");
    }

    #[test]
    fn test_summary_lines() {
        colored::control::set_override(false);
        let lines = format_summary(&entries(&[("alpha", 1), ("mid", 2), ("zeta", 1)]));
        assert_eq!(
            lines,
            vec![
                "Summary of all found dependencies:",
                "1. alpha (1)",
                "2. mid (2)",
                "3. zeta (1)",
            ]
        );
    }

    #[test]
    fn test_summary_index_padding() {
        colored::control::set_override(false);
        let names: Vec<(String, usize)> = (0..10).map(|i| (format!("pkg{:02}", i), 1)).collect();
        let refs: Vec<(&str, usize)> = names.iter().map(|(n, c)| (n.as_str(), *c)).collect();
        let lines = format_summary(&entries(&refs));
        assert_eq!(lines[1], " 1. pkg00 (1)");
        assert_eq!(lines[10], "10. pkg09 (1)");
    }

    #[test]
    fn test_empty_summary() {
        assert!(format_summary(&[]).is_empty());
    }
}
