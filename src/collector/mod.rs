//! Code collection.
//!
//! Scrapers page through an institution's catalogue and hand each page of codes
//! to a [`CodeAccumulator`]. The accumulator keeps the running set, writes it
//! to the school's code set file every few merges so a crash loses little, and
//! can resume from an earlier checkpoint. Every fetch goes through [`retry`].

mod retry;

use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::collector::CollectorConfig;
use crate::error::collector::CollectorError;
use crate::error::CodecResult;
use crate::workspace::load_codes;

pub use retry::{retry, RetryPolicy};

/// A paged source of codes, such as one institution's course catalogue.
#[cfg_attr(test, mockall::automock)]
pub trait CodeSource {
    /// Fetches page `page` (0-based).
    ///
    /// Returns `Ok(None)` once the source is exhausted and
    /// `Err(CollectorError::Fetch)` for a failure worth retrying.
    fn fetch(&mut self, page: usize) -> Result<Option<Vec<String>>, CollectorError>;
}

/// Running, deduplicated set of collected codes with periodic checkpoints.
#[derive(Debug)]
pub struct CodeAccumulator {
    codes: BTreeSet<String>,
    checkpoint_path: PathBuf,
    checkpoint_every: usize,
    merges_since_checkpoint: usize,
}

impl CodeAccumulator {
    /// Creates an empty accumulator that checkpoints to `checkpoint_path`
    /// after every `checkpoint_every` merges (at least one).
    pub fn new<P: Into<PathBuf>>(checkpoint_path: P, checkpoint_every: usize) -> Self {
        Self {
            codes: BTreeSet::new(),
            checkpoint_path: checkpoint_path.into(),
            checkpoint_every: checkpoint_every.max(1),
            merges_since_checkpoint: 0,
        }
    }

    /// Creates an accumulator from collector configuration.
    pub fn from_config<P: Into<PathBuf>>(checkpoint_path: P, config: &CollectorConfig) -> Self {
        Self::new(checkpoint_path, config.checkpoint_every)
    }

    /// Creates an accumulator seeded with the codes of an earlier checkpoint,
    /// or an empty one if no checkpoint exists yet.
    pub fn resume<P: Into<PathBuf>>(checkpoint_path: P, checkpoint_every: usize) -> CodecResult<Self> {
        let mut accumulator = Self::new(checkpoint_path, checkpoint_every);
        if accumulator.checkpoint_path.is_file() {
            let previous = load_codes(&accumulator.checkpoint_path)?;
            accumulator.codes.extend(previous.codes);
            info!(
                path = %accumulator.checkpoint_path.display(),
                codes = accumulator.codes.len(),
                "Resumed from checkpoint"
            );
        }
        Ok(accumulator)
    }

    /// Merges a batch of codes, writing a checkpoint when one is due.
    ///
    /// # Returns
    ///
    /// The number of codes that were not already present.
    pub fn merge<I, K>(&mut self, batch: I) -> CodecResult<usize>
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        let before = self.codes.len();
        self.codes.extend(batch.into_iter().map(Into::into));
        let added = self.codes.len() - before;
        debug!(added, total = self.codes.len(), "Merged batch");

        self.merges_since_checkpoint += 1;
        if self.merges_since_checkpoint >= self.checkpoint_every {
            self.checkpoint()?;
        }
        Ok(added)
    }

    /// Writes the current set as a sorted, pretty-printed JSON array.
    pub fn checkpoint(&mut self) -> CodecResult<()> {
        let mut writer = BufWriter::new(File::create(&self.checkpoint_path)?);
        serde_json::to_writer_pretty(&mut writer, &self.codes)?;
        writer.flush()?;
        self.merges_since_checkpoint = 0;
        debug!(path = %self.checkpoint_path.display(), codes = self.codes.len(), "Checkpoint written");
        Ok(())
    }

    /// Writes a final checkpoint and returns the collected codes in ascending order.
    pub fn finish(mut self) -> CodecResult<Vec<String>> {
        self.checkpoint()?;
        info!(path = %self.checkpoint_path.display(), codes = self.codes.len(), "Collection finished");
        Ok(self.codes.into_iter().collect())
    }

    /// Number of distinct codes collected so far.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Returns `true` if nothing has been collected.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Checks whether a code has been collected.
    pub fn contains(&self, code: &str) -> bool {
        self.codes.contains(code)
    }

    /// Iterates over the collected codes in ascending order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.codes.iter().map(String::as_str)
    }

    /// Where checkpoints are written.
    pub fn checkpoint_path(&self) -> &Path {
        &self.checkpoint_path
    }
}

/// Pages through `source` until it is exhausted, merging every page.
///
/// # Returns
///
/// The number of pages fetched.
///
/// # Errors
///
/// * `CollectorError::RetriesExhausted` - If a page keeps failing.
/// * `CodecError::Io` - If a checkpoint cannot be written.
pub fn collect<S>(
    source: &mut S,
    accumulator: &mut CodeAccumulator,
    policy: &RetryPolicy,
) -> CodecResult<usize>
where
    S: CodeSource + ?Sized,
{
    let mut page = 0;
    while let Some(batch) = retry(policy, |_| source.fetch(page))? {
        let added = accumulator.merge(batch)?;
        info!(page, added, total = accumulator.len(), "Fetched page");
        page += 1;
    }
    Ok(page)
}
