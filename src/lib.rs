//! Codetrie Library
//!
//! This library stores sets of course codes as prefix trees: compact, easy to
//! audit as JSON, and verified to decode back to exactly the codes that went in.
//!
//! # Architecture
//!
//! - [`data_structures::lau_trie`]: the prefix tree and its JSON form
//! - [`codec`]: encode, verify and report for one code set
//! - [`workspace`]: per-school directory layout
//! - [`collector`]: accumulation of scraped codes with checkpoints and retries
//! - [`config`] and [`error`]: configuration loading and the error taxonomy
//!
//! # Example
//!
//! ```no_run
//! use codetrie_lib::codec::CodecPipeline;
//! use std::path::Path;
//!
//! let summary = CodecPipeline::default().run(Path::new("Rutgers University"))?;
//! println!("{summary}");
//! # Ok::<(), codetrie_lib::error::CodecError>(())
//! ```

pub mod codec;
pub mod collector;
pub mod config;
pub mod data_structures;
pub mod error;
pub mod workspace;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for codetrie.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
