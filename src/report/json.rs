use std::path::Path;

use anyhow::Result;
use serde::Serialize;

use crate::models::{ScanMode, ScanResult, SummaryEntry};

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    mode: ScanMode,
    root: &'a Path,
    scans: &'a [ScanResult],
    summary: &'a [SummaryEntry],
}

pub fn to_json(
    mode: ScanMode,
    root: &Path,
    scans: &[ScanResult],
    summary: &[SummaryEntry],
) -> Result<String> {
    let report = JsonReport {
        mode,
        root,
        scans,
        summary,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

/// Print the whole run as one JSON document on stdout.
pub fn render(
    mode: ScanMode,
    root: &Path,
    scans: &[ScanResult],
    summary: &[SummaryEntry],
) -> Result<()> {
    println!("{}", to_json(mode, root, scans, summary)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Finding;
    use serde_json::Value;
    use std::path::PathBuf;

    #[test]
    fn test_json_shape() {
        let scans = vec![ScanResult {
            manifest: PathBuf::from("/work/package.json"),
            findings: vec![Finding {
                name: "c".to_string(),
                ancestors: vec!["a".to_string(), "b".to_string()],
            }],
        }];
        let summary = vec![SummaryEntry {
            index: 1,
            name: "c".to_string(),
            count: 1,
        }];

        let out = to_json(ScanMode::Recursive, Path::new("/work"), &scans, &summary).unwrap();
        let json: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["mode"], "recursive");
        assert_eq!(json["root"], "/work");
        assert_eq!(json["scans"][0]["manifest"], "/work/package.json");
        assert_eq!(json["scans"][0]["findings"][0]["ancestors"][1], "b");
        assert_eq!(json["summary"][0]["count"], 1);
    }
}
