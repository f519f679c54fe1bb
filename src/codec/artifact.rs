//! Artifact files produced by a codec run.
//!
//! The raw artifact is the trie's JSON form written as-is; the compressed
//! artifact is the same bytes under gzip. Gzip headers are written with a zero
//! modification time and no file name, so equal input gives equal bytes.

use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;

use crate::config::codec::CodecConfig;

/// Locations of the two artifacts for one school.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    /// Raw serialized trie
    pub raw: PathBuf,

    /// Gzip-compressed serialized trie
    pub compressed: PathBuf,
}

impl ArtifactPaths {
    /// Artifact paths inside `dir` following the configured names.
    pub fn in_dir(dir: &Path, config: &CodecConfig) -> Self {
        Self {
            raw: dir.join(&config.trie_file),
            compressed: dir.join(config.compressed_file()),
        }
    }
}

/// Writes the raw artifact and returns its size on disk.
pub fn write_raw(path: &Path, bytes: &[u8]) -> io::Result<u64> {
    fs::write(path, bytes)?;
    Ok(fs::metadata(path)?.len())
}

/// Gzips `bytes` into `path` and returns the compressed size on disk.
pub fn write_compressed(path: &Path, bytes: &[u8], level: u32) -> io::Result<u64> {
    let file = BufWriter::new(File::create(path)?);
    let mut encoder = GzEncoder::new(file, Compression::new(level));
    encoder.write_all(bytes)?;
    encoder.finish()?.flush()?;
    Ok(fs::metadata(path)?.len())
}

/// Reads and gunzips a compressed artifact.
pub fn read_compressed(path: &Path) -> io::Result<Vec<u8>> {
    let mut decoder = GzDecoder::new(BufReader::new(File::open(path)?));
    let mut bytes = Vec::new();
    decoder.read_to_end(&mut bytes)?;
    Ok(bytes)
}
