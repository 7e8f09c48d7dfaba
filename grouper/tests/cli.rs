use clap::Parser;
use grouper::{run, Args};
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn parse(argv: &[&str]) -> Args { Args::try_parse_from(argv).unwrap() }

fn path(p: &Path) -> &str { p.to_str().unwrap() }

#[test]
fn writes_ranked_json() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("doc.txt");
    let output = dir.path().join("out.json");
    fs::write(&input, "run running runs ran jump").unwrap();

    let argv = ["grouper", path(&input), "english", "--output", path(&output)];
    let result = run(parse(&argv)).unwrap();
    assert_eq!(result.len(), 1);

    let json: Value = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    let obj = json.as_object().unwrap();
    assert_eq!(obj.len(), 1);
    assert_eq!(json["run"]["count"], 3);
    assert_eq!(json["run"]["words"]["run"], 1);
    assert_eq!(json["run"]["words"]["running"], 1);
    assert_eq!(json["run"]["words"]["runs"], 1);
}

#[test]
fn spanish_document() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("cuento.txt");
    let output = dir.path().join("cuento.json");
    fs::write(&input, "El gato y la gata y los gatos de la casa").unwrap();

    let argv = ["grouper", path(&input), "spanish", "--output", path(&output)];
    run(parse(&argv)).unwrap();

    let json: Value = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(json["gat"]["count"], 3);
    assert!(json.get("casa").is_none());
}

#[test]
fn unsupported_language_writes_nothing() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("doc.txt");
    let output = dir.path().join("out.json");
    fs::write(&input, "bonjour bonjour").unwrap();

    let argv = ["grouper", path(&input), "french", "--output", path(&output)];
    let err = run(parse(&argv)).unwrap_err();
    assert!(err.to_string().contains("unsupported language"));
    assert!(!output.exists());
}

#[test]
fn missing_language_reports_usage() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("out.json");
    let argv = ["grouper", "doc.txt", "--output", path(&output)];
    let err = run(parse(&argv)).unwrap_err();
    assert_eq!(err.to_string(), grouper::USAGE);
    assert!(format!("{err:#}").contains("missing argument: LANGUAGE"));
    assert!(!output.exists());
}

#[test]
fn unreadable_file_is_fatal() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("out.json");
    let missing = dir.path().join("missing.txt");
    let argv = ["grouper", path(&missing), "english", "--output", path(&output)];
    let err = run(parse(&argv)).unwrap_err();
    assert!(format!("{err:#}").contains("failed to read"));
    assert!(!output.exists());
}
