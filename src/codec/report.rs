//! Size report for a codec run.

use std::fmt::{Display, Formatter};

use crate::error::verification::VerificationError;
use crate::error::CodecResult;

/// Byte sizes of the input and both artifacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeReport {
    /// Size of the original code set file
    pub original_size: u64,

    /// Size of the raw trie artifact
    pub trie_size: u64,

    /// Size of the gzip-compressed trie artifact
    pub compressed_size: u64,
}

impl SizeReport {
    /// Fraction of the original saved by the raw trie, `1 - trie/original`.
    pub fn trie_savings(&self) -> f64 {
        savings(self.trie_size, self.original_size)
    }

    /// Fraction of the original saved by the compressed trie, `1 - compressed/original`.
    pub fn compressed_savings(&self) -> f64 {
        savings(self.compressed_size, self.original_size)
    }
}

/// Builds the size report and enforces the compression gate.
///
/// # Errors
///
/// * `VerificationError::CompressionGate` - If the compressed artifact is not
///   strictly smaller than the original input.
pub fn report(original_size: u64, trie_size: u64, compressed_size: u64) -> CodecResult<SizeReport> {
    let report = SizeReport {
        original_size,
        trie_size,
        compressed_size,
    };
    if compressed_size >= original_size {
        return Err(VerificationError::CompressionGate { report }.into());
    }
    Ok(report)
}

fn savings(size: u64, original: u64) -> f64 {
    if original == 0 {
        return 0.0;
    }
    1.0 - size as f64 / original as f64
}

/// Formats `n` with `,` between groups of three digits.
fn thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, d) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(d);
    }
    out
}

impl Display for SizeReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "File sizes:")?;
        writeln!(f, "Original JSON: {} bytes", thousands(self.original_size))?;
        writeln!(f, "Trie JSON: {} bytes", thousands(self.trie_size))?;
        writeln!(
            f,
            "Trie JSON (gzipped): {} bytes",
            thousands(self.compressed_size)
        )?;
        writeln!(f)?;
        writeln!(f, "Space savings:")?;
        writeln!(f, "Trie vs Original: {:.1}%", self.trie_savings() * 100.0)?;
        write!(
            f,
            "Trie+gzip vs Original: {:.1}%",
            self.compressed_savings() * 100.0
        )
    }
}
