//! Integration tests for the codec pipeline.
//!
//! These drive the public API the way the `create-trie` command does: a school
//! directory with a `codes.json`, a full run, and checks on the artifacts left
//! behind.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use codetrie_lib::codec::{read_compressed, CodecPipeline};
use codetrie_lib::config::codec::CodecConfig;
use codetrie_lib::data_structures::{LauTrie, LauTrieError};
use codetrie_lib::error::verification::VerificationError;
use codetrie_lib::error::workspace::WorkspaceError;
use codetrie_lib::error::CodecError;
use codetrie_lib::workspace::Workspace;

/// A few hundred realistic course codes sharing department prefixes.
fn catalogue() -> Vec<String> {
    let departments = ["ACCT", "BIOL", "CHEM", "CS", "ECON", "ENGL", "HIST", "MATH"];
    departments
        .iter()
        .flat_map(|dept| (100..140).map(move |n| format!("{dept} {n}")))
        .collect()
}

fn write_codes(dir: &Path, codes: &[String]) {
    fs::write(
        dir.join("codes.json"),
        serde_json::to_string_pretty(codes).unwrap(),
    )
    .unwrap();
}

#[test]
fn test_create_trie_for_school() {
    let root = tempfile::tempdir().unwrap();
    let workspace = Workspace::new(root.path(), Vec::new());
    let dir = workspace.create_school("Rutgers University").unwrap();
    let codes = catalogue();
    write_codes(&dir, &codes);

    let summary = CodecPipeline::default().run(&dir).unwrap();

    assert_eq!(summary.input_count, codes.len());
    assert_eq!(summary.distinct_count, codes.len());
    assert_eq!(summary.reconstructed_count, codes.len());
    assert!(summary.report.compressed_size < summary.report.original_size);
    assert!(summary.paths.raw.is_file());
    assert!(summary.paths.compressed.is_file());

    let text = summary.to_string();
    assert!(text.contains(&format!("Original number of codes: {}", codes.len())));
    assert!(text.contains(&format!("Verification: {} codes reconstructed", codes.len())));

    // The compressed artifact carries the same JSON as the raw one.
    let raw = fs::read(&summary.paths.raw).unwrap();
    assert_eq!(read_compressed(&summary.paths.compressed).unwrap(), raw);

    // And that JSON decodes back to the catalogue.
    let decoded = LauTrie::from_json_slice(&raw).unwrap();
    let expected: BTreeSet<String> = codes.into_iter().collect();
    assert_eq!(decoded.codes().collect::<BTreeSet<_>>(), expected);

    // The existing artifacts can be re-verified later.
    let again = CodecPipeline::default().verify_school(&dir).unwrap();
    assert_eq!(again.report, summary.report);
}

#[test]
fn test_rerun_produces_identical_artifacts() {
    let root = tempfile::tempdir().unwrap();
    let dir = root.path();
    write_codes(dir, &catalogue());
    let pipeline = CodecPipeline::default();

    let first = pipeline.run(dir).unwrap();
    let raw = fs::read(&first.paths.raw).unwrap();
    let compressed = fs::read(&first.paths.compressed).unwrap();

    let mut shuffled = catalogue();
    shuffled.reverse();
    write_codes(dir, &shuffled);
    let second = pipeline.run(dir).unwrap();

    assert_eq!(fs::read(&second.paths.raw).unwrap(), raw);
    assert_eq!(fs::read(&second.paths.compressed).unwrap(), compressed);
}

#[test]
fn test_duplicates_in_input_collapse() {
    let root = tempfile::tempdir().unwrap();
    let dir = root.path();
    let mut codes = catalogue();
    codes.extend(catalogue());
    write_codes(dir, &codes);

    let summary = CodecPipeline::default().run(dir).unwrap();
    assert_eq!(summary.input_count, codes.len());
    assert_eq!(summary.distinct_count, codes.len() / 2);
}

#[test]
fn test_tiny_input_fails_compression_gate() {
    let root = tempfile::tempdir().unwrap();
    let dir = root.path();
    write_codes(dir, &["A".to_string()]);

    let err = CodecPipeline::default().run(dir).unwrap_err();
    match err {
        CodecError::Verification(VerificationError::CompressionGate { report }) => {
            assert_eq!(
                report.original_size,
                fs::metadata(dir.join("codes.json")).unwrap().len()
            );
            assert_eq!(
                report.compressed_size,
                fs::metadata(dir.join("codes_trie.json.gz")).unwrap().len()
            );
            assert!(report.to_string().starts_with("File sizes:"));
        }
        other => panic!("unexpected error: {other}"),
    }
    // Artifacts were written before the gate; they are not cleaned up.
    assert!(dir.join("codes_trie.json").is_file());
}

#[test]
fn test_code_longer_than_decode_depth_writes_nothing() {
    let root = tempfile::tempdir().unwrap();
    let dir = root.path();
    let mut codes = catalogue();
    codes.push("x".repeat(1100));
    write_codes(dir, &codes);

    let err = CodecPipeline::default().run(dir).unwrap_err();
    assert!(matches!(
        err,
        CodecError::Trie(LauTrieError::CodeTooLong {
            length: 1100,
            max_depth: 1024
        })
    ));
    assert!(!dir.join("codes_trie.json").exists());
    assert!(!dir.join("codes_trie.json.gz").exists());
}

#[test]
fn test_missing_codes_file() {
    let root = tempfile::tempdir().unwrap();
    let err = CodecPipeline::default().run(root.path()).unwrap_err();
    assert!(matches!(
        err,
        CodecError::Workspace(WorkspaceError::MissingInput(_))
    ));
}

#[test]
fn test_verify_school_without_artifacts() {
    let root = tempfile::tempdir().unwrap();
    write_codes(root.path(), &catalogue());

    let err = CodecPipeline::default()
        .verify_school(root.path())
        .unwrap_err();
    assert!(matches!(
        err,
        CodecError::Workspace(WorkspaceError::MissingInput(_))
    ));
}

#[test]
fn test_tampered_artifact_fails_round_trip() {
    let root = tempfile::tempdir().unwrap();
    let dir = root.path();
    write_codes(dir, &catalogue());
    let pipeline = CodecPipeline::default();
    let summary = pipeline.run(dir).unwrap();

    // Drop one code from the raw artifact.
    let mut trie = LauTrie::new();
    trie.build(catalogue().iter().filter(|code| code.as_str() != "CS 101"));
    fs::write(&summary.paths.raw, trie.to_json_vec().unwrap()).unwrap();

    let err = pipeline.verify(catalogue(), &summary.paths.raw).unwrap_err();
    match err {
        CodecError::Verification(VerificationError::RoundTrip {
            missing,
            extraneous,
        }) => {
            assert_eq!(missing, vec!["CS 101"]);
            assert!(extraneous.is_empty());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_custom_artifact_names() {
    let root = tempfile::tempdir().unwrap();
    let dir = root.path();
    write_codes(dir, &catalogue());
    let config = CodecConfig {
        trie_file: "trie.json".to_string(),
        compressed_suffix: ".gzip".to_string(),
        compression_level: 1,
        ..CodecConfig::default()
    };

    let summary = CodecPipeline::new(config).run(dir).unwrap();
    assert_eq!(summary.paths.raw, dir.join("trie.json"));
    assert_eq!(summary.paths.compressed, dir.join("trie.json.gzip"));
}

#[test]
fn test_scenarios() {
    let root = tempfile::tempdir().unwrap();
    let pipeline = CodecPipeline::default();

    // Shared prefix, two terminal leaves.
    let encoded = pipeline.encode(["CS 101", "CS 102"], root.path()).unwrap();
    assert_eq!(
        fs::read_to_string(&encoded.paths.raw).unwrap(),
        r#"{"C":{"S":{" ":{"1":{"0":{"1":{"":true},"2":{"":true}}}}}}}"#
    );

    // Empty set.
    let encoded = pipeline.encode(Vec::<String>::new(), root.path()).unwrap();
    assert_eq!(fs::read_to_string(&encoded.paths.raw).unwrap(), "{}");
    assert_eq!(pipeline.verify(Vec::<String>::new(), &encoded.paths.raw).unwrap().len(), 0);

    // Only the empty string.
    let encoded = pipeline.encode([""], root.path()).unwrap();
    assert_eq!(fs::read_to_string(&encoded.paths.raw).unwrap(), r#"{"":true}"#);
    assert_eq!(
        pipeline.verify([""], &encoded.paths.raw).unwrap().codes().collect::<Vec<_>>(),
        vec![""]
    );

    // One code repeated a thousand times.
    let encoded = pipeline
        .encode(std::iter::repeat("MATH 2415").take(1000), root.path())
        .unwrap();
    assert_eq!(encoded.trie.len(), 1);
    pipeline.verify(["MATH 2415"], &encoded.paths.raw).unwrap();

    // An array where an object belongs.
    fs::write(&encoded.paths.raw, r#"["MATH 2415"]"#).unwrap();
    let err = pipeline.verify(["MATH 2415"], &encoded.paths.raw).unwrap_err();
    assert!(matches!(
        err,
        CodecError::Trie(LauTrieError::Malformed(_))
    ));
}
