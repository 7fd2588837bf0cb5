//! Sentipool Domain Layer
//!
//! This crate contains the core business logic and domain model for Sentipool,
//! a crowd-sourced sentiment annotation pool. It defines the fundamental
//! concepts, value objects, and trait interfaces that all other layers depend upon.
//!
//! ## Key Concepts
//!
//! - **SentenceRecord**: One sentence with accumulated vote tallies and a voter log
//! - **Sentiment**: The four vote categories (positive, neutral, negative, unsure)
//! - **Selector**: Pure function choosing which sentences a visitor sees next
//! - **Vote Recorder**: Applies a single vote to the matching record
//! - **Threshold/Ambiguity**: A record stops circulating once it holds three or
//!   more votes with a unique plurality winner
//!
//! ## Architecture
//!
//! - Pure business logic only; no I/O
//! - Infrastructure implementations (the JSON file store) live in other crates
//! - Trait definitions for all external interactions
//! - Randomness is injected so selection order is testable

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod record;
pub mod selection;
pub mod sentiment;
pub mod traits;
pub mod voting;

// Re-exports for convenience
pub use record::{RecordId, SentenceRecord, VisitorId, VoteEvent, VoteTally};
pub use selection::{select_batch, PoolStats, Selection, ANNOTATION_THRESHOLD, BATCH_SIZE};
pub use sentiment::Sentiment;
pub use voting::{record_vote, VoteError};
