//! Export command implementation.
//!
//! Turns resolved records into labeled training rows: positive → 1,
//! negative → 0, and optionally neutral → 2. Under-threshold records,
//! ambiguous records, and unsure pluralities are skipped and counted.

use crate::cli::ExportArgs;
use crate::error::Result;
use sentipool_domain::traits::RecordStore;
use sentipool_domain::{SentenceRecord, Sentiment, ANNOTATION_THRESHOLD};
use sentipool_store::JsonFileStore;
use std::fs;

/// Outcome of building one export
#[derive(Debug, PartialEq)]
pub struct ExportSummary {
    /// CSV rows, `label,content` per line
    pub csv: String,

    /// Sentences labeled positive (1)
    pub positive: usize,

    /// Sentences labeled negative (0)
    pub negative: usize,

    /// Sentences labeled neutral (2), only with `--include-neutral`
    pub neutral: usize,

    /// Sentences skipped for insufficient or unclear votes
    pub skipped: usize,
}

/// Build the CSV rows for every resolved record
pub fn build_export(records: &[SentenceRecord], include_neutral: bool) -> ExportSummary {
    let mut summary = ExportSummary {
        csv: String::new(),
        positive: 0,
        negative: 0,
        neutral: 0,
        skipped: 0,
    };

    for record in records {
        let label = match record.resolved_label(ANNOTATION_THRESHOLD) {
            Some(Sentiment::Positive) => {
                summary.positive += 1;
                Some(1)
            }
            Some(Sentiment::Negative) => {
                summary.negative += 1;
                Some(0)
            }
            Some(Sentiment::Neutral) if include_neutral => {
                summary.neutral += 1;
                Some(2)
            }
            _ => {
                summary.skipped += 1;
                None
            }
        };

        if let Some(label) = label {
            summary.csv.push_str(&format!("{},{}\n", label, csv_field(&record.content)));
        }
    }

    summary
}

/// Quote a CSV field when it contains a delimiter, quote, or line break
fn csv_field(text: &str) -> String {
    if text.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", text.replace('"', "\"\""))
    } else {
        text.to_string()
    }
}

/// Execute the export command.
pub fn execute_export(args: ExportArgs, store: &JsonFileStore) -> Result<()> {
    let records = store.load_all()?;
    let summary = build_export(&records, args.include_neutral);

    fs::write(&args.output, &summary.csv)?;

    println!("Results saved to {}", args.output.display());
    println!("Positive: {}", summary.positive);
    println!("Negative: {}", summary.negative);
    if args.include_neutral {
        println!("Neutral: {}", summary.neutral);
    }
    println!(
        "Skipped due to insufficient or unclear votes: {}",
        summary.skipped
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sentipool_domain::VisitorId;

    fn record(content: &str, positive: u32, neutral: u32, negative: u32, unsure: u32) -> SentenceRecord {
        let mut record = SentenceRecord::new(content);
        let votes = [
            (Sentiment::Positive, positive),
            (Sentiment::Neutral, neutral),
            (Sentiment::Negative, negative),
            (Sentiment::Unsure, unsure),
        ];
        for (sentiment, count) in votes {
            for _ in 0..count {
                record.apply_vote(sentiment, VisitorId::mint(), chrono::Utc::now());
            }
        }
        record
    }

    #[test]
    fn test_only_resolved_positive_and_negative_are_emitted() {
        let records = vec![
            record("clearly good", 3, 0, 0, 0),
            record("clearly bad", 0, 0, 3, 0),
            record("too few votes", 2, 0, 0, 0),
            record("split", 1, 1, 1, 0),
            record("mostly neutral", 0, 3, 0, 0),
            record("mostly unsure", 0, 0, 0, 3),
        ];

        let summary = build_export(&records, false);

        assert_eq!(summary.positive, 1);
        assert_eq!(summary.negative, 1);
        assert_eq!(summary.neutral, 0);
        assert_eq!(summary.skipped, 4);
        assert_eq!(summary.csv, "1,clearly good\n0,clearly bad\n");
    }

    #[test]
    fn test_include_neutral_adds_label_two() {
        let records = vec![
            record("mostly neutral", 0, 3, 0, 0),
            record("mostly unsure", 0, 0, 0, 3),
        ];

        let summary = build_export(&records, true);

        assert_eq!(summary.neutral, 1);
        // An unsure plurality never exports, even with the flag.
        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.csv, "2,mostly neutral\n");
    }

    #[test]
    fn test_csv_quoting() {
        assert_eq!(csv_field("plain"), "plain");
        assert_eq!(csv_field("has, comma"), "\"has, comma\"");
        assert_eq!(csv_field("has \"quotes\""), "\"has \"\"quotes\"\"\"");
        assert_eq!(csv_field("line\nbreak"), "\"line\nbreak\"");
    }

    #[test]
    fn test_export_writes_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("pool.json"));
        store.save_all(&[record("good", 3, 0, 0, 0)]).unwrap();
        let output = dir.path().join("labels.csv");

        execute_export(
            ExportArgs {
                output: output.clone(),
                include_neutral: false,
            },
            &store,
        )
        .unwrap();

        let written = fs::read_to_string(output).unwrap();
        assert_eq!(written, "1,good\n");
    }
}
