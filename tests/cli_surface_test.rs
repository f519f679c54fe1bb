//! Integration tests for the workspace operations behind the CLI.

use std::fs;

use codetrie_lib::codec::CodecPipeline;
use codetrie_lib::config::workspace::WorkspaceConfig;
use codetrie_lib::error::workspace::WorkspaceError;
use codetrie_lib::error::CodecError;
use codetrie_lib::workspace::Workspace;

#[test]
fn test_create_list_and_encode_schools() {
    let root = tempfile::tempdir().unwrap();
    let config = WorkspaceConfig {
        root: root.path().to_path_buf(),
        ..WorkspaceConfig::default()
    };
    let workspace = Workspace::from_config(&config);

    for school in ["Ohio State University", "Mercer University"] {
        workspace.create_school(school).unwrap();
    }
    fs::create_dir(root.path().join("target")).unwrap();
    assert_eq!(
        workspace.list_schools().unwrap(),
        vec!["Mercer University", "Ohio State University"]
    );

    // A school without codes cannot produce a trie.
    let dir = workspace.school_dir("Mercer University").unwrap();
    let err = CodecPipeline::default().run(&dir).unwrap_err();
    assert!(matches!(
        err,
        CodecError::Workspace(WorkspaceError::MissingInput(_))
    ));
}

#[test]
fn test_unknown_school() {
    let root = tempfile::tempdir().unwrap();
    let workspace = Workspace::new(root.path(), Vec::new());
    assert!(matches!(
        workspace.school_dir("University Of Nowhere"),
        Err(CodecError::Workspace(WorkspaceError::MissingInput(_)))
    ));
}
