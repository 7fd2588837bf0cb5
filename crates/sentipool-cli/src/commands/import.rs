//! Import command implementation.

use crate::cli::ImportArgs;
use crate::error::Result;
use sentipool_domain::traits::RecordStore;
use sentipool_domain::SentenceRecord;
use sentipool_store::JsonFileStore;
use std::collections::HashSet;
use std::fs;

/// Execute the import command.
///
/// Reads one sentence per line, trims whitespace, and appends zero-tally
/// records for any text not already in the pool. Blank lines and exact
/// duplicates (of the file or the existing pool) are skipped.
pub fn execute_import(args: ImportArgs, store: &mut JsonFileStore) -> Result<()> {
    let text = fs::read_to_string(&args.file)?;
    let mut records = store.load_all()?;
    let mut existing: HashSet<String> = records.iter().map(|r| r.content.clone()).collect();

    let mut added = 0;
    let mut skipped = 0;
    for line in text.lines() {
        let sentence = line.trim();
        if sentence.is_empty() {
            continue;
        }
        if existing.contains(sentence) {
            skipped += 1;
            continue;
        }
        existing.insert(sentence.to_string());
        records.push(SentenceRecord::new(sentence));
        added += 1;
    }

    if added > 0 {
        store.save_all(&records)?;
    }

    println!("Imported {} new sentences ({} duplicates skipped)", added, skipped);

    Ok(())
}
