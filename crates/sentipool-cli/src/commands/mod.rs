//! Command implementations.

pub mod export;
pub mod import;
pub mod report;

pub use self::export::execute_export;
pub use self::import::execute_import;
pub use self::report::execute_report;
