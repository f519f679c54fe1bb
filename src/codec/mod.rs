//! Codec pipeline.
//!
//! One codec run turns a school's code set into two artifacts and proves they
//! are faithful:
//!
//! 1. build a [`LauTrie`] from the codes and serialize it,
//! 2. write the raw JSON artifact and its gzip twin,
//! 3. decode the raw artifact and compare the codes it yields with the input
//!    as a set,
//! 4. check the gzip twin decompresses to the raw bytes,
//! 5. report sizes, failing unless the compressed artifact is smaller than the input.
//!
//! Any failure aborts the run. Artifacts already written are left in place.

mod artifact;
mod report;

use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::config::codec::CodecConfig;
use crate::data_structures::LauTrie;
use crate::error::verification::VerificationError;
use crate::error::workspace::WorkspaceError;
use crate::error::CodecResult;
use crate::workspace::{load_codes, CodeSet};

pub use artifact::{read_compressed, write_compressed, write_raw, ArtifactPaths};
pub use report::{report, SizeReport};

/// Outcome of [`CodecPipeline::encode`].
#[derive(Debug, Clone)]
pub struct EncodedArtifacts {
    /// The trie that was serialized
    pub trie: LauTrie,

    /// Where the artifacts were written
    pub paths: ArtifactPaths,

    /// Size of the raw artifact in bytes
    pub raw_size: u64,

    /// Size of the compressed artifact in bytes
    pub compressed_size: u64,
}

/// Outcome of a full, verified codec run over one school.
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// The school directory
    pub school_dir: PathBuf,

    /// Number of entries in the input file
    pub input_count: usize,

    /// Number of distinct codes in the input
    pub distinct_count: usize,

    /// Number of trie nodes, root included
    pub node_count: usize,

    /// Number of codes decoded back from the raw artifact
    pub reconstructed_count: usize,

    /// Artifact locations
    pub paths: ArtifactPaths,

    /// Sizes and savings
    pub report: SizeReport,
}

impl Display for RunSummary {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Original number of codes: {}", self.input_count)?;
        writeln!(f)?;
        writeln!(f, "{}", self.report)?;
        writeln!(f)?;
        write!(
            f,
            "Verification: {} codes reconstructed",
            self.reconstructed_count
        )
    }
}

/// Orchestrates encode, verify and report for code sets.
#[derive(Debug, Clone, Default)]
pub struct CodecPipeline {
    config: CodecConfig,
}

impl CodecPipeline {
    /// Creates a pipeline with the given codec configuration.
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    /// Returns the codec configuration.
    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Builds a trie from `codes` and writes the raw and compressed artifacts into `dir`.
    ///
    /// Nothing is written when a code is too long to be decoded again.
    ///
    /// # Errors
    ///
    /// * `LauTrieError::CodeTooLong` - If a code exceeds `max_decode_depth`.
    /// * `CodecError::Io` - If either artifact cannot be written.
    pub fn encode<I, K>(&self, codes: I, dir: &Path) -> CodecResult<EncodedArtifacts>
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        let mut trie = LauTrie::with_config(self.config.trie_config());
        let added = trie.build(codes);
        trie.check_depth()?;
        let bytes = trie.to_json_vec()?;
        debug!(codes = added, nodes = trie.node_count(), bytes = bytes.len(), "Serialized trie");

        let paths = ArtifactPaths::in_dir(dir, &self.config);
        let raw_size = write_raw(&paths.raw, &bytes)?;
        let compressed_size =
            write_compressed(&paths.compressed, &bytes, self.config.compression_level)?;
        info!(
            raw = %paths.raw.display(),
            raw_size,
            compressed_size,
            "Wrote trie artifacts"
        );

        Ok(EncodedArtifacts {
            trie,
            paths,
            raw_size,
            compressed_size,
        })
    }

    /// Decodes the raw artifact at `raw_path` and checks it yields exactly the
    /// codes in `original`, compared as sets.
    ///
    /// # Returns
    ///
    /// The decoded trie.
    ///
    /// # Errors
    ///
    /// * `LauTrieError::Malformed` - If the artifact is not a trie object.
    /// * `VerificationError::RoundTrip` - If any code is missing or extraneous.
    pub fn verify<I, K>(&self, original: I, raw_path: &Path) -> CodecResult<LauTrie>
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        let bytes = fs::read(raw_path)?;
        let trie = LauTrie::from_json_slice_with_config(&bytes, self.config.trie_config())?;

        let expected: BTreeSet<String> = original
            .into_iter()
            .map(|code| code.as_ref().to_string())
            .collect();
        let actual: BTreeSet<String> = trie.codes().collect();

        if expected != actual {
            let missing: Vec<String> = expected.difference(&actual).cloned().collect();
            let extraneous: Vec<String> = actual.difference(&expected).cloned().collect();
            return Err(VerificationError::RoundTrip {
                missing,
                extraneous,
            }
            .into());
        }

        info!(codes = actual.len(), "Round trip verified");
        Ok(trie)
    }

    /// Checks the compressed artifact decompresses to exactly the raw artifact.
    ///
    /// # Errors
    ///
    /// * `VerificationError::ArtifactMismatch` - If the contents differ.
    pub fn verify_compressed(&self, raw_path: &Path, compressed_path: &Path) -> CodecResult<()> {
        let raw = fs::read(raw_path)?;
        let decompressed = read_compressed(compressed_path)?;
        if raw != decompressed {
            return Err(VerificationError::ArtifactMismatch(compressed_path.to_path_buf()).into());
        }
        Ok(())
    }

    /// Runs the whole codec over a school directory: load, encode, verify, report.
    ///
    /// # Errors
    ///
    /// * `WorkspaceError::MissingInput` - If the code set file is absent; nothing is written.
    /// * Any error from [`encode`](Self::encode), [`verify`](Self::verify),
    ///   [`verify_compressed`](Self::verify_compressed) or [`report`].
    pub fn run(&self, school_dir: &Path) -> CodecResult<RunSummary> {
        let code_set = load_codes(&school_dir.join(&self.config.codes_file))?;
        info!(school = %school_dir.display(), codes = code_set.codes.len(), "Creating trie");

        let encoded = self.encode(&code_set.codes, school_dir)?;
        self.audit(school_dir, &code_set, encoded.paths)
    }

    /// Re-verifies the artifacts already present in a school directory.
    ///
    /// # Errors
    ///
    /// * `WorkspaceError::MissingInput` - If the code set or either artifact is absent.
    pub fn verify_school(&self, school_dir: &Path) -> CodecResult<RunSummary> {
        let code_set = load_codes(&school_dir.join(&self.config.codes_file))?;
        let paths = ArtifactPaths::in_dir(school_dir, &self.config);
        for path in [&paths.raw, &paths.compressed] {
            if !path.is_file() {
                return Err(WorkspaceError::MissingInput(path.clone()).into());
            }
        }
        self.audit(school_dir, &code_set, paths)
    }

    fn audit(
        &self,
        school_dir: &Path,
        code_set: &CodeSet,
        paths: ArtifactPaths,
    ) -> CodecResult<RunSummary> {
        let trie = self.verify(&code_set.codes, &paths.raw)?;
        self.verify_compressed(&paths.raw, &paths.compressed)?;

        let distinct_count = trie.len();
        if distinct_count != code_set.codes.len() {
            warn!(
                entries = code_set.codes.len(),
                distinct = distinct_count,
                "Code set contains duplicates"
            );
        }

        let report = report(
            code_set.byte_size,
            fs::metadata(&paths.raw)?.len(),
            fs::metadata(&paths.compressed)?.len(),
        )?;

        Ok(RunSummary {
            school_dir: school_dir.to_path_buf(),
            input_count: code_set.codes.len(),
            distinct_count,
            node_count: trie.node_count(),
            reconstructed_count: distinct_count,
            paths,
            report,
        })
    }
}
