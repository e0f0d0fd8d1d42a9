use serde_json::json;

use super::*;

fn analysis() -> serde_json::Value {
    json!({
        "url": "https://bistro.example",
        "timestamp": "2026-10-16 12:00:00",
        "grade": "C",
        "score": 72,
        "status": "Needs Improvement",
        "critical_issues": 2,
        "risk_level": "Medium",
        "page_info": {
            "title": "Bistro",
            "lang_attribute": "en",
            "total_images": 12,
            "total_links": 30,
            "total_headings": 8,
            "total_forms": 1,
            "has_skip_links": false,
            "viewport_meta": true
        },
        "issues": [
            {
                "type": "critical",
                "title": "Missing Alt Text",
                "wcag_guideline": "WCAG 2.1 1.1.1",
                "description": "4 images have no alt attribute",
                "impact": "Screen readers cannot describe the menu photos",
                "fix_instructions": {
                    "immediate": "Describe each image",
                    "code_example": "<img src=\"soup.jpg\" alt=\"Tomato soup\">",
                    "estimated_time": "1 hour"
                },
                "count": 4,
                "examples": ["<img src=\"soup.jpg\">"]
            }
        ],
        "summary": {
            "legal_risk_assessment": "Medium",
            "total_issues": 1,
            "estimated_fix_time": "1 hour",
            "priority_actions": ["Add alt text"],
            "next_steps": ["Re-scan after fixes"]
        }
    })
}

fn risk() -> serde_json::Value {
    json!({
        "url": "https://bistro.example",
        "overall_risk": "medium",
        "risk_factors": {
            "accessibility_score": 72,
            "critical_issues": 2,
            "business_type_risk": "high"
        },
        "recommendations": ["Restaurants are frequent lawsuit targets", null]
    })
}

#[test]
fn quick_scan_writes_results_page() {
    let ctx = TestContext::new();
    let service = StubService::start(vec![Route::ok(
        "/api/compliance/quick-scan",
        json!({
            "url": "https://bistro.example",
            "risk_level": "High",
            "missing_alt_text": 5,
            "total_images": 20,
            "potential_contrast_issues": 3,
            "recommendation": "Run a full analysis"
        }),
    )]);

    let result = ctx.run_adacheck(&[
        "--base-url",
        &service.base_url(),
        "quick-scan",
        "https://bistro.example",
    ]);

    assert_success(&result);
    assert_output_contains(&result, "5 of 20");
    ctx.assert_file_contains("ada-results.html", "risk-high tone-red");
    ctx.assert_file_contains("ada-results.html", "5 of 20");
}

#[test]
fn analyze_exports_report_and_snapshot() {
    let ctx = TestContext::new();
    let service = StubService::start(vec![
        Route::ok("/api/compliance/analyze", analysis()),
        Route::ok("/api/compliance/business-risk", risk()),
    ]);

    let result = ctx.run_adacheck(&[
        "--quiet",
        "--base-url",
        &service.base_url(),
        "analyze",
        "https://bistro.example",
        "--business-type",
        "restaurant",
        "--report",
        "--save-json",
        "last.json",
    ]);

    assert_success(&result);

    ctx.assert_file_contains("ada-results.html", "grade-c tone-yellow");
    ctx.assert_file_contains("ada-results.html", "Risk Factors");
    ctx.assert_file_contains("ada-results.html", "&lt;img src=");

    let reports = ctx.reports();
    assert_eq!(reports.len(), 1);
    ctx.assert_file_contains(&reports[0], "Missing Alt Text");
    ctx.assert_file_contains(&reports[0], "Restaurants are frequent lawsuit targets");

    ctx.assert_file_exists("last.json");
}

#[test]
fn failed_risk_assessment_still_shows_analysis() {
    let ctx = TestContext::new();
    let service = StubService::start(vec![
        Route::ok("/api/compliance/analyze", analysis()),
        Route::status("/api/compliance/business-risk", 500, json!({})),
    ]);

    let result = ctx.run_adacheck(&[
        "--quiet",
        "--base-url",
        &service.base_url(),
        "analyze",
        "https://bistro.example",
    ]);

    assert_success(&result);
    ctx.assert_file_contains("ada-results.html", "Missing Alt Text");
    assert!(!ctx.read_file("ada-results.html").contains("Risk Factors"));
}

#[test]
fn report_from_saved_snapshot() {
    let ctx = TestContext::new();
    let snapshot = json!({ "analysis": analysis(), "risk": risk() });
    ctx.write_file("saved/last.json", &snapshot.to_string());

    let result = ctx.run_adacheck(&["report", "--from", "saved/last.json"]);

    assert_success(&result);
    assert_output_contains(&result, "Report saved to");

    let reports = ctx.reports();
    assert_eq!(reports.len(), 1);
    ctx.assert_file_contains(&reports[0], "grade-c tone-yellow");
    ctx.assert_file_contains(&reports[0], ">72<");
    ctx.assert_file_contains(&reports[0], "Report generated by ADA Compliance Checker");
}
