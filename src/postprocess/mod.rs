//! Post-processing pipeline for raw generated output.
//!
//! Ordered pure transforms applied to the provider response before it is
//! returned to the caller: extract plain text from whatever shape came
//! back, strip markdown code fences, remove hallucinated syntax-error
//! markers (restoring a dropped function body when possible), and normalize
//! docstring indentation. Everything here is synchronous, stateless, and
//! infallible.

mod cleanup;
mod extract;
mod indent;
mod syntax;

pub use cleanup::{clean_output, SYNTAX_ERROR_MARKER};
pub use extract::{extract_text, ResponseValue};
pub use indent::fix_docstring_indentation;
pub use syntax::is_valid_python;

/// Run the full pipeline over a provider response.
pub fn process(response: &ResponseValue, original_code: &str) -> String {
    let raw = extract_text(response);
    let unfenced = strip_code_fences(raw.trim());
    let cleaned = clean_output(unfenced, original_code);
    fix_docstring_indentation(&cleaned).trim().to_string()
}

/// Strip a leading markdown code fence (with any language tag) and a
/// trailing bare fence.
fn strip_code_fences(text: &str) -> &str {
    let mut out = text;
    if out.starts_with("```") {
        out = match out.find('\n') {
            Some(pos) => &out[pos + 1..],
            None => "",
        };
    }
    out = out.trim_end();
    out.strip_suffix("```").unwrap_or(out)
}
