use crate::err::{ManifestError, Result};
use crate::log_parser::extract;
use crate::manifest::ManifestDocument;
use crate::manifest_builder::{ManifestBuilder, ParsedLog};
use crate::settings::ManifestSettings;

use log::{debug, info};

#[cfg(feature = "multithreading")]
use rayon::prelude::*;

/// Raw bytes of one input document and the label used to refer to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSource {
    pub label: String,
    pub bytes: Vec<u8>,
}

impl LogSource {
    pub fn new(label: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        LogSource {
            label: label.into(),
            bytes: bytes.into(),
        }
    }
}

fn extract_one(source: &LogSource) -> Result<ParsedLog> {
    debug!("extracting {}", source.label);
    let metadata =
        extract(&source.bytes).map_err(|e| ManifestError::parse(source.label.clone(), e))?;
    Ok(ParsedLog::new(source.label.clone(), metadata))
}

fn extract_sequential(sources: &[LogSource]) -> Result<Vec<ParsedLog>> {
    sources.iter().map(extract_one).collect()
}

#[cfg(feature = "multithreading")]
fn extract_parallel(sources: &[LogSource], num_threads: usize) -> Result<Vec<ParsedLog>> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build()
        .map_err(|e| ManifestError::ThreadPool {
            message: e.to_string(),
        })?;

    // `collect` into a `Result<Vec<_>>` keeps the input order and stops at the first error.
    pool.install(|| sources.par_iter().map(extract_one).collect())
}

/// Extracts every source, returning the results in input order.
///
/// Any single failure fails the whole batch. `num_threads == 0` uses every available CPU,
/// `num_threads == 1` never spawns a thread pool.
pub fn extract_all(sources: &[LogSource], num_threads: usize) -> Result<Vec<ParsedLog>> {
    #[cfg(feature = "multithreading")]
    {
        if num_threads != 1 && sources.len() > 1 {
            return extract_parallel(sources, num_threads);
        }
    }

    #[cfg(not(feature = "multithreading"))]
    let _ = num_threads;

    extract_sequential(sources)
}

/// Extracts every source and assembles the resulting logs into a single manifest.
pub fn generate_manifest(
    sources: &[LogSource],
    settings: &ManifestSettings,
) -> Result<ManifestDocument> {
    let logs = extract_all(sources, settings.get_num_threads())?;
    info!("extracted {} log(s)", logs.len());
    Ok(ManifestBuilder::new(settings).build(logs)?)
}
