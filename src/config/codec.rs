//! Codec configuration module.
//!
//! This module defines how artifacts are named and produced: the input and
//! output file names, the gzip level, and the decoder's nesting bound.

use super::ConfigResult;
use super::Validate;
use crate::data_structures::LauTrieConfig;
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Codec configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CodecConfig {
    /// File name of a school's code set (a JSON array of strings)
    pub codes_file: String,

    /// File name of the raw serialized trie artifact
    pub trie_file: String,

    /// Suffix appended to `trie_file` for the compressed artifact
    pub compressed_suffix: String,

    /// Gzip compression level, 0 (store) to 9 (best)
    pub compression_level: u32,

    /// Maximum nesting accepted when decoding an artifact
    pub max_decode_depth: usize,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            codes_file: "codes.json".to_string(),
            trie_file: "codes_trie.json".to_string(),
            compressed_suffix: ".gz".to_string(),
            compression_level: 9,
            max_decode_depth: crate::data_structures::lau_trie::DEFAULT_MAX_DECODE_DEPTH,
        }
    }
}

impl CodecConfig {
    /// File name of the compressed artifact.
    pub fn compressed_file(&self) -> String {
        format!("{}{}", self.trie_file, self.compressed_suffix)
    }

    /// Trie settings derived from this configuration.
    pub fn trie_config(&self) -> LauTrieConfig {
        LauTrieConfig {
            max_decode_depth: self.max_decode_depth,
        }
    }
}

impl Validate for CodecConfig {
    fn validate(&self) -> ConfigResult<()> {
        for (key, name) in [
            ("codec.codes_file", &self.codes_file),
            ("codec.trie_file", &self.trie_file),
        ] {
            if name.trim().is_empty() {
                return Err(ConfigError::ValidationError(format!(
                    "{key} cannot be empty"
                )));
            }
        }

        if self.codes_file == self.trie_file {
            return Err(ConfigError::ValidationError(
                "codec.trie_file must differ from codec.codes_file".to_string(),
            ));
        }

        if self.compressed_suffix.is_empty() {
            return Err(ConfigError::ValidationError(
                "codec.compressed_suffix cannot be empty".to_string(),
            ));
        }

        if self.compression_level > 9 {
            return Err(ConfigError::ValueOutOfRange {
                key: "codec.compression_level".to_string(),
                message: format!("{} is not within 0..=9", self.compression_level),
            });
        }

        if self.max_decode_depth == 0 {
            return Err(ConfigError::ValidationError(
                "codec.max_decode_depth must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
