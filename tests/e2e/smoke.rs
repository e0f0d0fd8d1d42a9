use predicates::prelude::*;

use super::*;

#[test]
fn version_is_printed() {
    Command::cargo_bin("adacheck")
        .expect("Failed to find adacheck binary")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("adacheck"));
}

#[test]
fn help_lists_commands() {
    let ctx = TestContext::new();
    let result = ctx.run_adacheck(&["--help"]);

    assert_success(&result);
    assert_output_contains(&result, "quick-scan");
    assert_output_contains(&result, "analyze");
    assert_output_contains(&result, "report");
}

#[test]
fn init_runs_without_error() {
    let ctx = TestContext::new();
    let result = ctx.run_adacheck(&["init", "--yes"]);

    assert_success(&result);
    ctx.assert_file_exists("adacheck.toml");
    ctx.assert_file_contains("adacheck.toml", "base_url = \"http://localhost:5000\"");
}

#[test]
fn init_honours_base_url_override() {
    let ctx = TestContext::new();
    let result = ctx.run_adacheck(&["init", "--yes", "--base-url", "https://audit.example"]);

    assert_success(&result);
    ctx.assert_file_contains("adacheck.toml", "https://audit.example");
}

#[test]
fn init_refuses_to_overwrite() {
    let ctx = TestContext::new();
    ctx.write_file("adacheck.toml", "[service]\nbase_url = \"http://kept\"\n");

    let result = ctx.run_adacheck(&["init", "--yes"]);

    assert_failure(&result);
    ctx.assert_file_contains("adacheck.toml", "http://kept");
}
