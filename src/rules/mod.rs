//! Rule implementations for tplx.
//!
//! Pure functions that turn per-file extraction outcomes into issues.
//!
//! ## Module Structure
//!
//! - `syntax`: unterminated tags, unparsable filter expressions, unreadable files
//! - `malformed`: i18n tags skipped because of malformed literals

pub mod malformed;
pub mod syntax;

pub use malformed::check_malformed_tag_issues;
pub use syntax::check_syntax_issues;
