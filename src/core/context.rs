//! Extraction context: config, file discovery and the parallel per-file run.

use std::{
    collections::BTreeSet,
    fs,
    path::{Component, Path, PathBuf},
};

use anyhow::{Context as _, Result, anyhow};
use rayon::prelude::*;
use thiserror::Error;
use tracing::{debug, info};

use crate::{
    cli::args::CommonArgs,
    config::{CONFIG_FILE_NAME, Config, load_config},
    core::{
        extract::{Extraction, extract_strings},
        file_scanner::scan_files,
        template::TemplateSyntaxError,
    },
};

/// Why a template produced no catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractFailure {
    #[error("cannot read file: {0}")]
    Read(String),
    #[error(transparent)]
    Syntax(#[from] TemplateSyntaxError),
}

/// Outcome of extracting one template file.
#[derive(Debug, Clone)]
pub struct FileExtraction {
    /// Path as it was scanned or given on the command line.
    pub path: String,
    /// Path relative to the source root with `/` separators.
    pub origin: String,
    /// File contents; empty if the file could not be read.
    pub source: String,
    pub outcome: Result<Extraction, ExtractFailure>,
}

impl FileExtraction {
    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }
}

pub struct ExtractContext {
    pub root_dir: PathBuf,
    pub config: Config,
    /// Template files in path order.
    pub files: Vec<String>,
    /// Directory entries the scanner could not access.
    pub skipped_count: usize,
}

impl ExtractContext {
    pub fn new(common_args: &CommonArgs) -> Result<Self> {
        let verbose = common_args.verbose;

        // Priority: CLI --source-root arg > current directory
        let root_dir = common_args
            .source_root
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));
        let path = root_dir
            .to_str()
            .with_context(|| anyhow!("Invalid path: {:?}", root_dir))?;

        let config_result = load_config(Path::new(path))?;
        if verbose && !config_result.from_file {
            eprintln!(
                "Note: No {} found, using default configuration",
                CONFIG_FILE_NAME
            );
        }
        let config = config_result.config;

        let (files, skipped_count): (Vec<String>, usize) = if common_args.files.is_empty() {
            let scan = scan_files(path, &config, verbose);
            (scan.files.into_iter().collect(), scan.skipped_count)
        } else {
            let explicit: BTreeSet<String> = common_args
                .files
                .iter()
                .map(|f| f.to_string_lossy().into_owned())
                .collect();
            (explicit.into_iter().collect(), 0)
        };

        info!(root = %root_dir.display(), files = files.len(), "templates discovered");

        Ok(Self {
            root_dir,
            config,
            files,
            skipped_count,
        })
    }

    /// Extract every file in parallel. Results keep path order.
    pub fn extract_all(&self) -> Vec<FileExtraction> {
        self.files
            .par_iter()
            .map(|file| extract_file(&self.root_dir, file))
            .collect()
    }
}

/// Read and extract a single template.
pub fn extract_file(root_dir: &Path, file: &str) -> FileExtraction {
    let origin = origin_for(root_dir, Path::new(file));

    let (source, outcome) = match fs::read_to_string(file) {
        Ok(source) => {
            let outcome = extract_strings(&source).map_err(ExtractFailure::from);
            (source, outcome)
        }
        Err(e) => (String::new(), Err(ExtractFailure::Read(e.to_string()))),
    };

    match &outcome {
        Ok(extraction) => debug!(
            file,
            strings = extraction.strings.len(),
            skipped = extraction.skipped_tags.len(),
            "extracted"
        ),
        Err(e) => debug!(file, error = %e, "extraction failed"),
    }

    FileExtraction {
        path: file.to_string(),
        origin,
        source,
        outcome,
    }
}

/// Origin label for `file`: relative to `root_dir` when it lies under it,
/// `.` components dropped, `/` separators.
pub fn origin_for(root_dir: &Path, file: &Path) -> String {
    let relative = file.strip_prefix(root_dir).unwrap_or(file);
    relative
        .components()
        .filter_map(|c| match c {
            Component::CurDir => None,
            Component::RootDir => Some(String::new()),
            Component::ParentDir => Some("..".to_string()),
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            Component::Prefix(prefix) => Some(prefix.as_os_str().to_string_lossy().into_owned()),
        })
        .collect::<Vec<_>>()
        .join("/")
}
