use assert_cmd::Command;
use serde_json::{json, Value};

fn cli(dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("takeout-insights").expect("binary exists");
    cmd.current_dir(dir)
        .env("DATA_DIR", dir.join("data"))
        .env("OUTPUTS_DIR", dir.join("outputs"))
        .env("RUST_LOG", "warn");
    cmd
}

fn stdout_json(output: &std::process::Output) -> Value {
    serde_json::from_slice(&output.stdout).expect("json on stdout")
}

#[test]
fn cli_help_runs() {
    let dir = tempfile::tempdir().unwrap();
    cli(dir.path()).arg("--help").assert().success();
}

#[test]
fn classify_prints_details() {
    let dir = tempfile::tempdir().unwrap();
    let output = cli(dir.path()).args(["classify", "kya haal hai"]).output().unwrap();
    assert!(output.status.success());
    let value = stdout_json(&output);
    assert_eq!(value["language_type"], "hinglish");
    assert_eq!(value["hinglish_marker_count"], 2);
}

#[test]
fn extract_honours_forced_language() {
    let dir = tempfile::tempdir().unwrap();
    let output = cli(dir.path())
        .args(["extract", "bhai ka vlog #dubai", "--language", "hinglish"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value = stdout_json(&output);
    assert_eq!(value["hashtags"], json!(["dubai"]));
    assert!(value["text_v1"].is_string());
    assert_eq!(value["status"], "complete");
}

#[test]
fn enrich_then_aggregate() {
    let dir = tempfile::tempdir().unwrap();
    let session = dir.path().join("session.json");
    let body = json!({
        "events": [
            {"type": "watch", "engagement": "active", "text_clean": "greg biffle wins at daytona 500",
             "language_type": "english", "language_confidence": "high"},
            {"type": "search", "text_clean": "daytona tickets"}
        ]
    });
    std::fs::write(&session, body.to_string()).unwrap();

    cli(dir.path()).args(["aggregate", "session.json"]).assert().failure();

    let output = cli(dir.path()).args(["enrich", "session.json"]).output().unwrap();
    assert!(output.status.success());
    let summary = stdout_json(&output);
    assert_eq!(summary["status"], "enriched");
    assert_eq!(summary["eligible_events"], 1);

    let saved: Value = serde_json::from_str(&std::fs::read_to_string(&session).unwrap()).unwrap();
    assert_eq!(saved["micro_topics_extracted"], true);
    assert_eq!(saved["events"][0]["micro_topics"], json!(["greg biffle", "daytona 500"]));
    assert!(saved["events"][1].get("micro_topics").is_none());

    let output = cli(dir.path()).args(["aggregate", "session.json", "--top-n", "1"]).output().unwrap();
    assert!(output.status.success());
    let report = stdout_json(&output);
    assert_eq!(report["version"], "v2");
    assert_eq!(report["top_micro_topics"][0]["topic"], "greg biffle");
    assert_eq!(report["by_language"]["english"][0]["count"], 1);
}

#[test]
fn ingest_writes_a_session() {
    let dir = tempfile::tempdir().unwrap();
    let takeout = dir.path().join("Takeout/history");
    std::fs::create_dir_all(&takeout).unwrap();
    std::fs::write(
        takeout.join("watch-history.json"),
        r#"[{"title": "Watched bhai ka vlog", "time": "2024-03-01T10:15:30Z"}]"#,
    )
    .unwrap();

    let output = cli(dir.path())
        .args(["ingest", "--dir", "Takeout", "--output", "out.json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stats = stdout_json(&output);
    assert_eq!(stats["total_watch"], 1);
    assert_eq!(stats["language_breakdown"]["hinglish"], 1);

    let saved: Value = serde_json::from_str(&std::fs::read_to_string(dir.path().join("out.json")).unwrap()).unwrap();
    assert_eq!(saved["events"][0]["language_type"], "hinglish");
    assert_eq!(saved["micro_topics_extracted"], false);

    cli(dir.path()).args(["ingest", "--dir", "nowhere"]).assert().failure();
}
