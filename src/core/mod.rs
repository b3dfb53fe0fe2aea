//! Extraction engine.
//!
//! ## Module Structure
//!
//! - `template`: tokenizer, smart splitter, filter expressions, i18n tags
//! - `extract`: per-template string extraction
//! - `entries`: extracted string records
//! - `position`: byte offset to line/column
//! - `file_scanner`: template discovery
//! - `context`: config loading and the parallel per-file run

pub mod context;
pub mod entries;
pub mod extract;
pub mod file_scanner;
pub mod position;
pub mod template;

pub use context::{ExtractContext, ExtractFailure, FileExtraction};
pub use entries::{ContextualEntry, ExtractedStrings};
pub use extract::{Extraction, SkippedTag, extract_strings};
pub use position::SourcePosition;
