//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and infrastructure.
//! Infrastructure implementations live in other crates.

use crate::record::SentenceRecord;

/// Trait for persisting the sentence pool
///
/// The pool is owned as a single unit: reads return the full set and
/// writes replace it wholesale, last full write wins. Implemented by the
/// infrastructure layer (sentipool-store).
pub trait RecordStore {
    /// Error type for store operations
    type Error;

    /// Read the full persisted set
    fn load_all(&self) -> Result<Vec<SentenceRecord>, Self::Error>;

    /// Atomically replace the persisted set with the given records
    fn save_all(&mut self, records: &[SentenceRecord]) -> Result<(), Self::Error>;
}
