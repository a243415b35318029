//! Sentinel marker cleanup and best-effort body recovery.
//!
//! The prompt instructs the model to flag unfixable syntax errors with a
//! fixed inline comment. When the original input was valid, any such marker
//! in the output is a hallucination and is stripped. A narrow safety net
//! then restores a function body the model occasionally drops.

use once_cell::sync::Lazy;
use regex::Regex;

use super::syntax::is_valid_python;

/// Inline comment the model is told to add after a definition whose syntax
/// it could not fix.
pub const SYNTAX_ERROR_MARKER: &str = "# TODO: Fix syntax error";

static DOCSTRING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?s)""".*?""""#).expect("docstring pattern is valid"));
static SIGNATURE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"def \w+\([^)]*\):").expect("signature pattern is valid"));

/// Clean raw generated output against the original input.
///
/// Marker lines are removed only when the original input is syntactically
/// valid; for invalid input they are the requested behavior and stay. The
/// result is trimmed and handed to [`restore_missing_body`].
pub fn clean_output(generated: &str, original: &str) -> String {
    let keep_markers = !is_valid_python(original);
    let kept: Vec<&str> = generated
        .lines()
        .filter(|line| keep_markers || !line.contains(SYNTAX_ERROR_MARKER))
        .collect();
    let cleaned = kept.join("\n").trim().to_string();
    restore_missing_body(&cleaned, original)
}

/// Best-effort recovery for outputs where the model kept the signature and
/// docstring but dropped the function body.
///
/// Applies only when the cleaned text holds exactly one `def ` and no
/// `return`. The signature and docstring are located in the cleaned text,
/// the body is everything after the matching signature in the original
/// input, and the three are reassembled. Any pattern that fails to match
/// makes this a no-op.
fn restore_missing_body(cleaned: &str, original: &str) -> String {
    if cleaned.matches("def ").count() != 1 || cleaned.contains("return") {
        return cleaned.to_string();
    }
    let Some(docstring) = DOCSTRING_RE.find(cleaned) else {
        return cleaned.to_string();
    };
    let Some(signature) = SIGNATURE_RE.find(cleaned) else {
        return cleaned.to_string();
    };
    let Some(body) = original_body(original) else {
        return cleaned.to_string();
    };
    format!(
        "{}\n    {}\n    {}",
        signature.as_str(),
        docstring.as_str(),
        body
    )
}

/// The function body as written in the original input: everything after the
/// first signature match, trimmed.
fn original_body(original: &str) -> Option<String> {
    let signature = SIGNATURE_RE.find(original)?;
    let body = original[signature.end()..].trim();
    if body.is_empty() {
        None
    } else {
        Some(body.to_string())
    }
}
