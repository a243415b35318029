//! End-to-end tests for the post-processing pipeline.
//!
//! These exercise the full transform chain against realistic provider
//! output, using Python fixtures from testdata/.

use std::fs;
use std::path::PathBuf;

use serde_json::json;

use docsmith::{extract_text, is_valid_python, process, ResponseValue, SYNTAX_ERROR_MARKER};

fn testdata_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("testdata")
}

fn fixture(name: &str) -> String {
    let path = testdata_path().join(name);
    fs::read_to_string(&path).unwrap_or_else(|_| panic!("fixture {} should exist", path.display()))
}

/// A realistic documented rendition of valid_function.py, as the model
/// returns it: fenced, and with a hallucinated syntax-error marker.
fn generated_for_valid_fixture() -> String {
    concat!(
        "```python\n",
        "def interest(principal, rate, years):\n",
        "    # TODO: Fix syntax error\n",
        "    \"\"\"Calculate compound interest earned over a period.\n",
        "\n",
        "    Args:\n",
        "    principal (float): Starting amount.\n",
        "    rate (float): Interest rate per year.\n",
        "    years (int): Number of years.\n",
        "\n",
        "    Returns:\n",
        "    float: Interest earned.\n",
        "    \"\"\"\n",
        "    total = principal\n",
        "    for _ in range(years):\n",
        "        total = total * (1 + rate)\n",
        "    return total - principal\n",
        "```",
    )
    .to_string()
}

#[test]
fn test_fixtures_parse_as_expected() {
    assert!(is_valid_python(&fixture("valid_function.py")));
    assert!(!is_valid_python(&fixture("broken_function.py")));
}

#[test]
fn test_valid_input_full_pipeline() {
    let original = fixture("valid_function.py");
    let response = ResponseValue::from(json!(generated_for_valid_fixture()));

    let output = process(&response, &original);

    assert!(!output.contains("```"), "fences should be stripped");
    assert!(
        !output.contains(SYNTAX_ERROR_MARKER),
        "marker is a hallucination for valid input"
    );
    assert!(output.contains("        Args:"));
    assert!(output.contains("            principal (float): Starting amount."));
    assert!(output.contains("        Returns:"));
    assert!(output.starts_with("def interest(principal, rate, years):"));
    assert!(output.ends_with("return total - principal"));
    assert!(is_valid_python(&output), "pipeline output should stay valid");
}

#[test]
fn test_invalid_input_keeps_marker() {
    let original = fixture("broken_function.py");
    let generated = concat!(
        "def interest(principal, rate, years:\n",
        "    # TODO: Fix syntax error\n",
        "    \"\"\"Calculate compound interest earned over a period.\"\"\"\n",
        "    total = principal\n",
        "    return total - principal\n",
    );
    let response = ResponseValue::from(json!(generated));

    let output = process(&response, &original);

    assert!(output.contains(SYNTAX_ERROR_MARKER));
}

#[test]
fn test_parts_sequence_response_shape() {
    let original = fixture("valid_function.py");
    let generated = generated_for_valid_fixture();
    let (head, tail) = generated.split_at(generated.len() / 2);
    let response = ResponseValue::from(json!([{ "text": head }, { "text": tail }]));

    assert_eq!(extract_text(&response), generated);

    let output = process(&response, &original);
    assert!(output.starts_with("def interest"));
    assert!(!output.contains("```"));
}

#[test]
fn test_nested_content_response_shape() {
    let original = fixture("valid_function.py");
    let response = ResponseValue::from(json!({
        "content": { "content": generated_for_valid_fixture() }
    }));

    let output = process(&response, &original);
    assert!(output.starts_with("def interest"));
}

#[test]
fn test_dropped_body_is_restored_from_original() {
    let original = fixture("valid_function.py");
    // The model returned only the signature and docstring.
    let generated = concat!(
        "def interest(principal, rate, years):\n",
        "    \"\"\"Calculate compound interest earned over a period.\"\"\"",
    );
    let response = ResponseValue::from(json!(generated));

    let output = process(&response, &original);

    assert!(output.starts_with("def interest(principal, rate, years):"));
    assert!(output.contains("\"\"\"Calculate compound interest earned over a period.\"\"\""));
    assert!(output.ends_with("return total - principal"));
}
