use std::fs;
use std::path::Path;
use std::sync::Once;

use pretty_assertions::assert_eq;
use tagcloud_core::{CloudConfig, CountBounds};
use tagcloud_engine::{generate_tag_cloud, CloudRequest, EngineError, HtmlRenderer, PersistError};
use tempfile::TempDir;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(cloud_logging::initialize_for_tests);
}

fn request(dir: &Path, words: usize) -> CloudRequest {
    CloudRequest {
        input: dir.join("input.txt"),
        output: dir.join("cloud.html"),
        words,
        summary: None,
    }
}

fn spans(html: &str) -> Vec<String> {
    html.lines()
        .filter(|l| l.starts_with("<span"))
        .map(str::to_string)
        .collect()
}

#[test]
fn scenario_produces_alphabetical_scaled_cloud() {
    init_logging();
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("input.txt"), "the cat sat on the mat\nthe cat ran\n").unwrap();
    let req = request(temp.path(), 3);

    let summary = generate_tag_cloud(&req, &CloudConfig::default(), &HtmlRenderer).unwrap();

    assert_eq!(summary.lines, 2);
    assert_eq!(summary.words, 9);
    assert_eq!(summary.distinct_words, 6);
    assert_eq!(summary.selected, 3);
    assert_eq!(summary.bounds, Some(CountBounds { min: 1, max: 3 }));
    assert!(summary.interruption.is_none());

    let html = fs::read_to_string(&summary.output_path).unwrap();
    assert_eq!(
        spans(&html),
        vec![
            "<span style=\"cursor:default\" class=\"f29\" title=\"count: 2\">cat</span>",
            "<span style=\"cursor:default\" class=\"f11\" title=\"count: 1\">sat</span>",
            "<span style=\"cursor:default\" class=\"f48\" title=\"count: 3\">the</span>",
        ]
    );
}

#[test]
fn repeated_runs_are_byte_identical() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let text = "a b c d e f g h\ni j k l m n\na b c\nZ z Y y\n";
    fs::write(temp.path().join("input.txt"), text).unwrap();
    let req = request(temp.path(), 6);

    generate_tag_cloud(&req, &CloudConfig::default(), &HtmlRenderer).unwrap();
    let first = fs::read(&req.output).unwrap();
    generate_tag_cloud(&req, &CloudConfig::default(), &HtmlRenderer).unwrap();
    let second = fs::read(&req.output).unwrap();

    assert_eq!(first, second);
}

#[test]
fn zero_words_renders_empty_cloud() {
    init_logging();
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("input.txt"), "words everywhere\n").unwrap();
    let req = request(temp.path(), 0);

    let summary = generate_tag_cloud(&req, &CloudConfig::default(), &HtmlRenderer).unwrap();

    assert_eq!(summary.selected, 0);
    assert_eq!(summary.bounds, None);
    let html = fs::read_to_string(&req.output).unwrap();
    assert!(spans(&html).is_empty());
    assert!(html.contains("<title>Top 0 words in "));
}

#[test]
fn missing_input_leaves_no_output() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let req = request(temp.path(), 5);

    let err = generate_tag_cloud(&req, &CloudConfig::default(), &HtmlRenderer).unwrap_err();

    assert!(matches!(err, EngineError::Input { .. }));
    assert!(!req.output.exists());
    assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 0);
}

#[test]
fn unwritable_output_is_reported_before_reading() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let mut req = request(temp.path(), 5);
    req.output = temp.path().join("no_such_dir").join("cloud.html");

    // The input is missing too; the output check must come first.
    let err = generate_tag_cloud(&req, &CloudConfig::default(), &HtmlRenderer).unwrap_err();

    assert!(matches!(err, EngineError::Output { .. }));
    assert!(!req.output.exists());
}

#[test]
fn partial_input_still_produces_a_cloud() {
    init_logging();
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("input.txt"),
        b"good good words\n\xff\xfe\nlater later later\n".as_slice(),
    )
    .unwrap();
    let req = request(temp.path(), 10);

    let summary = generate_tag_cloud(&req, &CloudConfig::default(), &HtmlRenderer).unwrap();

    assert_eq!(summary.lines, 1);
    assert_eq!(summary.selected, 2);
    assert_eq!(summary.interruption.unwrap().after_line, 1);
    let html = fs::read_to_string(&req.output).unwrap();
    assert!(!html.contains(">later<"));
}

#[test]
fn summary_json_describes_the_run() {
    init_logging();
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("input.txt"), "the cat sat on the mat\nthe cat ran\n").unwrap();
    let mut req = request(temp.path(), 2);
    req.summary = Some(temp.path().join("summary.json"));

    let summary = generate_tag_cloud(&req, &CloudConfig::default(), &HtmlRenderer).unwrap();

    let path = summary.summary_path.unwrap();
    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
    assert_eq!(json["requested"], 2);
    assert_eq!(json["distinct_words"], 6);
    assert_eq!(json["total_words"], 9);
    assert_eq!(json["partial"], false);
    assert_eq!(json["bounds"]["min"], 2);
    assert_eq!(json["bounds"]["max"], 3);
    assert_eq!(json["entries"][0]["word"], "cat");
    assert_eq!(json["entries"][0]["font_size"], 11);
    assert_eq!(json["entries"][1]["word"], "the");
    assert_eq!(json["entries"][1]["font_size"], 48);
}

#[test]
fn summary_on_the_output_path_is_rejected_before_writing() {
    init_logging();
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("input.txt"), "b a b\n").unwrap();
    let mut req = request(temp.path(), 2);
    req.summary = Some(temp.path().join(".").join("cloud.html"));

    let err = generate_tag_cloud(&req, &CloudConfig::default(), &HtmlRenderer).unwrap_err();

    assert!(matches!(
        err,
        EngineError::Output {
            source: PersistError::SameTarget(_),
            ..
        }
    ));
    assert!(!req.output.exists());
}

#[test]
fn summary_on_the_output_path_keeps_existing_cloud() {
    init_logging();
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("input.txt"), "b a b\n").unwrap();
    let mut req = request(temp.path(), 2);
    generate_tag_cloud(&req, &CloudConfig::default(), &HtmlRenderer).unwrap();
    let before = fs::read_to_string(&req.output).unwrap();

    req.summary = Some(req.output.clone());
    assert!(generate_tag_cloud(&req, &CloudConfig::default(), &HtmlRenderer).is_err());

    assert_eq!(fs::read_to_string(&req.output).unwrap(), before);
    assert!(before.starts_with("<html>"));
}

#[test]
fn cloud_and_summary_are_both_written() {
    init_logging();
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("input.txt"), "b a b\n").unwrap();
    let mut req = request(temp.path(), 2);
    req.summary = Some(temp.path().join("summary.json"));

    let summary = generate_tag_cloud(&req, &CloudConfig::default(), &HtmlRenderer).unwrap();

    assert_eq!(summary.output_path, req.output);
    assert!(fs::read_to_string(&req.output).unwrap().starts_with("<html>"));
    assert!(fs::read_to_string(summary.summary_path.unwrap())
        .unwrap()
        .starts_with('{'));
    assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 3);
}
