//! E2E tests driving the taxmate binary

use std::io::Write;
use std::process::{Command, Output, Stdio};

fn taxmate(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_taxmate"))
        .args(args)
        .output()
        .expect("Failed to execute command")
}

fn taxmate_with_stdin(args: &[&str], input: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_taxmate"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn command");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(input.as_bytes())
        .expect("Failed to write stdin");
    child.wait_with_output().expect("Failed to wait for command")
}

/// Test that tax is computed with slab breakdown and cess
#[test]
fn tax_in_twenty_percent_slab() {
    let output = taxmate(&["tax", "800000"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert!(stdout.contains("TAX ON ₹8,00,000"));
    assert!(stdout.contains("@ 20%"));
    assert!(stdout.contains("Slab tax: ₹72,500"));
    assert!(stdout.contains("Cess @ 4%: ₹2,900"));
    assert!(stdout.contains("TAX PAYABLE: ₹75,400"));
}

#[test]
fn tax_json() {
    let output = taxmate(&["tax", "1000000", "--json"]);
    assert!(output.status.success(), "Command failed: {:?}", output);

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["total_tax"], "117000.00");
    assert_eq!(json["marginal_rate_pct"], "20");
}

#[test]
fn tax_rejects_negative_income() {
    let output = taxmate(&["tax", "-5"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stderr.contains("income must not be negative"));
}

#[test]
fn suggest_per_tier() {
    let low = taxmate(&["suggest", "300000"]);
    let high = taxmate(&["suggest", "1200000"]);
    assert!(low.status.success() && high.status.success());

    let low = String::from_utf8_lossy(&low.stdout);
    let high = String::from_utf8_lossy(&high.stdout);
    assert!(low.contains("starter tier"));
    assert!(low.contains("Consider investing in PPF or ELSS"));
    assert!(high.contains("comprehensive tier"));
    assert!(high.contains("medical insurance premiums"));
}

#[test]
fn ask_income_question() {
    let output = taxmate(&["ask", "my", "income", "is", "800000"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert_eq!(
        stdout.trim(),
        "Based on your income of ₹8,00,000, your estimated tax liability is ₹75,400."
    );
}

#[test]
fn ask_json_reports_classification() {
    let output = taxmate(&["ask", "What documents do I need?", "--json"]);
    assert!(output.status.success(), "Command failed: {:?}", output);

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["reply"]["kind"], "faq");
    assert_eq!(json["reply"]["keyword"], "documents");
    assert!(json["answer"].as_str().unwrap().starts_with("For tax filing"));
}

#[test]
fn ask_blank_question_fails() {
    let output = taxmate(&["ask", "   "]);
    assert!(!output.status.success());
}

/// Test a chat session: greeting, blank lines ignored, replies in order
#[test]
fn chat_session_transcript() {
    let input = "What documents do I need?\n\n   \nI want a tax calculation 2024\nxyzzy\nquit\n";
    let output = taxmate_with_stdin(&["chat", "--transcript"], input);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert!(stdout.contains("assistant: Hi! I'm your tax assistant."));
    assert!(stdout.contains("assistant: Sure! Please provide your total income"));
    assert!(stdout.contains("assistant: I'm sorry, I don't have specific information"));

    let transcript_start = stdout.find('[').expect("transcript");
    let transcript: serde_json::Value =
        serde_json::from_str(&stdout[transcript_start..]).unwrap();
    let messages = transcript.as_array().unwrap();
    // greeting + three exchanges; the blank lines add nothing
    assert_eq!(messages.len(), 7);
    assert_eq!(messages[1]["role"], "user");
    assert_eq!(messages[1]["content"], "What documents do I need?");
    assert_eq!(messages[2]["role"], "assistant");
}

#[test]
fn report_from_result_file() {
    let output = taxmate(&["report", "--file", "tests/data/result.json"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert!(stdout.contains("YOUR TAX REPORT"));
    assert!(stdout.contains("₹12,00,000"));
    assert!(stdout.contains("₹1,17,000"));
    assert!(stdout.contains("Section 80C"));
    assert!(stdout.contains("75.0%"));
    assert!(stdout.contains("SUGGESTION: Maximize your tax savings"));
}

#[test]
fn report_from_stdin() {
    let json = std::fs::read_to_string("tests/data/result.json").unwrap();
    let output = taxmate_with_stdin(&["report", "--file", "-", "--json"], &json);
    assert!(output.status.success(), "Command failed: {:?}", output);

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["suggestion_tier"], "comprehensive");
    assert_eq!(report["deductions"].as_array().unwrap().len(), 2);
}

#[test]
fn report_from_income_and_deductions() {
    let output = taxmate(&[
        "report",
        "--income",
        "1500000",
        "--deductions",
        "tests/data/deductions.csv",
        "--json",
    ]);
    assert!(output.status.success(), "Command failed: {:?}", output);

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    // 15,00,000 - 3,75,000 = 11,25,000 taxable
    // (1,12,500 + 30% of 1,25,000) * 1.04 = 1,56,000
    assert_eq!(report["totalDeductions"], "375000");
    assert_eq!(report["taxableIncome"], "1125000");
    assert_eq!(report["tax"].as_str().unwrap().parse::<f64>().unwrap(), 156000.0);
}

#[test]
fn report_empty_stdin_fails() {
    let output = taxmate_with_stdin(&["report", "--file", "-"], "");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("No input received"));
}

#[test]
fn topics_in_precedence_order() {
    let output = taxmate(&["topics", "--json"]);
    assert!(output.status.success(), "Command failed: {:?}", output);

    let topics: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let keywords: Vec<_> = topics
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["keyword"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(
        keywords,
        ["save tax", "documents", "tax bracket", "hra", "section 80c", "tax calculation"]
    );
}

#[test]
fn schema_outputs() {
    let output = taxmate(&["schema"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success(), "Command failed: {:?}", output);
    assert!(stdout.contains("taxableIncome"));

    let output = taxmate(&["schema", "csv-header"]);
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "name,value");
}
