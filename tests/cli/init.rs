use anyhow::{Context, Result};
use serde_json::Value;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;

    assert!(output.status.success());
    assert_eq!(stdout(&output), "✓ Created .stringscanrc.json\n");

    let content = test.read_file(".stringscanrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["logDir"], "stringscan_logs");
    assert_eq!(parsed["maxLogFiles"], 10);
    assert_eq!(parsed["maxLogSizeMb"], 10);
    assert_eq!(parsed["maxLogAgeDays"], 10);
    assert!(
        content.contains("  "),
        "Config should use 2-space indentation"
    );

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_file(".stringscanrc.json", "{}")?;

    let output = test.command().arg("init").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(stderr(&output), "Error: .stringscanrc.json already exists\n");

    Ok(())
}

#[test]
fn test_invalid_config_is_reported() -> Result<()> {
    let test = CliTest::with_file(".stringscanrc.json", r#"{ "maxLogFiles": 0 }"#)?;
    test.write_file("app.js", "data-mc-translate")?;

    let output = test.command().args(["scan", "."]).output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("maxLogFiles"), "{}", stderr(&output));

    Ok(())
}
