//! Pipeline thresholds.
//!
//! Every heuristic of the pipeline reads its limit from [Config].
//! Defaults are tuned for the librusec dump, and can be overridden by a JSON file
//! where any omitted field keeps its default value:
//!
//! ```json
//! { "batch_size": 200, "min_text_len": 500 }
//! ```
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Bracketed spans (brackets included) up to this many characters are removed. Default is 20.
    pub bracket_max_len: usize,
    /// A document with more `...` than this is discarded. Default is 100.
    pub max_ellipsis: usize,
    /// A document with more `!!!` than this is discarded. Default is 100.
    pub max_exclamations: usize,
    /// Number of sentences per fragment. Default is 400.
    pub batch_size: usize,
    /// A fragment holding a sentence longer than this is discarded. Default is 1500.
    pub max_sentence_len: usize,
    /// Cleaned fragments shorter than this are discarded. Default is 300.
    pub min_text_len: usize,
    /// A fragment with more `//` than this is discarded. Default is 20.
    pub max_slashes: usize,
    /// Log progress every n documents. 0 disables progress logging.
    pub progress_every: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bracket_max_len: 20,
            max_ellipsis: 100,
            max_exclamations: 100,
            batch_size: 400,
            max_sentence_len: 1500,
            min_text_len: 300,
            max_slashes: 20,
            progress_every: 10_000,
        }
    }
}

impl Config {
    /// Load a configuration from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        let f = File::open(path)?;
        let config: Config = serde_json::from_reader(BufReader::new(f))?;
        config.validate()?;
        debug!("loaded config from {:?}: {:?}", path, config);
        Ok(config)
    }

    /// Ensure that the configuration can drive a pipeline.
    pub fn validate(&self) -> Result<(), Error> {
        if self.batch_size == 0 {
            return Err(Error::Config("batch_size must be at least 1".to_string()));
        }
        Ok(())
    }
}
