use anyhow::Result;
use insta::assert_snapshot;
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_scan_finds_marked_files() -> Result<()> {
    let test = CliTest::with_file("a.js", r#"<div data-mc-translate="x"></div>"#)?;
    test.write_file("b.html", "<Message id=1>")?;
    test.write_file("c.txt", r#"data-mc-translate <Message id=2>"#)?;

    let output = test.scan_command().arg("--list").output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_snapshot!(stdout(&output), @r"
    ✓ 2 files found with translation content
      Checked 2 files
      - a.js
      - b.html
    ");

    Ok(())
}

#[test]
fn test_scan_skips_node_modules() -> Result<()> {
    let test = CliTest::with_file("node_modules/d.js", "data-mc-translate")?;

    let output = test.scan_command().arg("--list").output()?;

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "✓ 0 files found with translation content\n  Checked 0 files, skipped 1 folder\n"
    );

    Ok(())
}

#[test]
fn test_scan_excludes_test_files() -> Result<()> {
    let test = CliTest::with_file("e_spec.js", "data-mc-translate")?;

    let output = test.scan_command().output()?;

    assert!(output.status.success());
    assert!(stdout(&output).starts_with("✓ 0 files found with translation content\n"));

    Ok(())
}

#[test]
fn test_scan_verbose_reports_skipped_folders() -> Result<()> {
    let test = CliTest::with_file("src/build/out.js", "data-mc-translate")?;
    test.write_file("src/public/index.html", "<Message id=1>")?;

    let output = test.scan_command().arg("--verbose").output()?;

    assert!(output.status.success());
    let err = stderr(&output);
    assert!(err.contains("note: Skipping folder: ./src/build"), "{}", err);
    assert!(err.contains("note: Skipping folder: ./src/public"), "{}", err);

    Ok(())
}

#[test]
fn test_scan_json_output() -> Result<()> {
    let test = CliTest::with_file("views/home.html", "<Message id=\"home\" />")?;
    test.write_file("views/about.html", "<p>About</p>")?;
    test.write_file("build/bundle.js", "data-mc-translate")?;

    let output = test.scan_command().args(["--format", "json"]).output()?;

    assert!(output.status.success());
    let parsed: Value = serde_json::from_str(&stdout(&output))?;
    assert_eq!(parsed["root"], ".");
    assert_eq!(parsed["files"], serde_json::json!(["home.html"]));
    assert_eq!(parsed["filesChecked"], 2);
    assert_eq!(parsed["skippedDirs"], 1);

    Ok(())
}

#[test]
fn test_scan_check_fails_when_markers_remain() -> Result<()> {
    let test = CliTest::with_file("app.js", "data-mc-translate")?;

    let output = test.scan_command().arg("--check").output()?;

    assert_eq!(output.status.code(), Some(1));

    Ok(())
}

#[test]
fn test_scan_check_passes_when_clean() -> Result<()> {
    let test = CliTest::with_file("app.js", "console.log('done')")?;

    let output = test.scan_command().arg("--check").output()?;

    assert_eq!(output.status.code(), Some(0));

    Ok(())
}

#[test]
fn test_scan_missing_directory() -> Result<()> {
    let test = CliTest::new()?;

    let output = test
        .command()
        .args(["scan", "does-not-exist", "--no-log"])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(stdout(&output), "");
    assert!(
        stderr(&output).starts_with("✘ error: error reading directory: does-not-exist: "),
        "stderr: {}",
        stderr(&output)
    );

    Ok(())
}

#[cfg(unix)]
#[test]
fn test_scan_unreadable_file() -> Result<()> {
    let test = CliTest::with_file("a.js", "data-mc-translate")?;
    std::os::unix::fs::symlink(test.root().join("gone.html"), test.root().join("z.html"))?;

    let output = test.scan_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(
        stderr(&output).contains("error reading file ./z.html"),
        "stderr: {}",
        stderr(&output)
    );

    Ok(())
}

#[test]
fn test_scan_is_repeatable() -> Result<()> {
    let test = CliTest::with_file("src/one.js", "data-mc-translate")?;
    test.write_file("src/two.html", "<Message id=2>")?;
    test.write_file("lib/three.js", "data-mc-translate")?;

    let first = test.scan_command().arg("--list").output()?;
    let second = test.scan_command().arg("--list").output()?;

    assert_eq!(stdout(&first), stdout(&second));
    assert!(stdout(&first).contains("  - three.js\n  - one.js\n  - two.html\n"));

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("--help").output()?;

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("scan"));
    assert!(out.contains("init"));
    assert!(out.contains("--no-log"));

    Ok(())
}
