use super::*;

#[test]
fn blank_url_is_rejected() {
    let ctx = TestContext::new();
    let result = ctx.run_adacheck(&["--quiet", "quick-scan", "   "]);

    assert_failure(&result);
    assert_stderr_contains(&result, "Please enter a website URL");
}

#[test]
fn unreachable_service_is_a_network_error() {
    let ctx = TestContext::new();
    let result = ctx.run_adacheck(&[
        "--quiet",
        "--base-url",
        "http://127.0.0.1:1",
        "analyze",
        "https://example.com",
    ]);

    assert_failure(&result);
    assert_stderr_contains(&result, "Network error");
    ctx.assert_file_contains("ada-results.html", "Analysis failed");
    ctx.assert_file_contains("ada-results.html", "errorArea");
}

#[test]
fn rejected_url_shows_server_message() {
    let ctx = TestContext::new();
    let service = StubService::start(vec![Route::status(
        "/api/compliance/analyze",
        400,
        serde_json::json!({ "error": "Invalid URL" }),
    )]);

    let result = ctx.run_adacheck(&[
        "--quiet",
        "--base-url",
        &service.base_url(),
        "analyze",
        "not-a-url",
    ]);

    assert_failure(&result);
    assert_stderr_contains(&result, "Invalid URL");
    ctx.assert_file_contains("ada-results.html", "Invalid URL");
    assert!(!ctx.read_file("ada-results.html").contains("scoreOverview"));
}

#[test]
fn report_without_analysis_writes_nothing() {
    let ctx = TestContext::new();
    let result = ctx.run_adacheck(&["report", "--from", "missing.json"]);

    assert_failure(&result);
    assert_stderr_contains(&result, "No analysis available");
    assert!(ctx.reports().is_empty());
}

#[test]
fn invalid_config_is_reported() {
    let ctx = TestContext::new();
    ctx.write_file("adacheck.toml", "[progress]\ntick_ms = 0\n");

    let result = ctx.run_adacheck(&["quick-scan", "https://example.com"]);

    assert_failure(&result);
    assert_stderr_contains(&result, "tick_ms");
}
