//! tplx - translatable string extractor for Django-style templates
//!
//! tplx scans templates written in the Grantlee/Django template language,
//! finds every translatable string (`_("...")` calls in variables and tag
//! arguments, and the `i18n`, `i18nc`, `i18np`, `i18ncp` tag families) and
//! renders them as C/C++ source that xgettext or Qt's lupdate can read.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (argument parsing, commands, reporting)
//! - `config`: Configuration file loading and parsing
//! - `core`: Extraction engine (tokenizer, filter expressions, tag grammar)
//! - `issues`: Issue type definitions and reporting trait
//! - `render`: Gettext and Qt Linguist catalog renderers
//! - `rules`: Conversion of extraction outcomes into issues

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod render;
pub mod rules;
