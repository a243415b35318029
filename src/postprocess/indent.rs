//! Docstring indentation normalization.
//!
//! Generated docstrings frequently come back with section headers and
//! descriptions at the wrong depth. Google style wants `Args:`-style
//! headers 4 spaces inside the docstring and their descriptions 8 spaces
//! inside. This is a single forward pass over lines with no backtracking.

const DOC_DELIMITER: &str = "\"\"\"";

/// Section keywords that belong at base+4 inside a docstring.
const SECTION_KEYWORDS: [&str; 4] = ["Args:", "Returns:", "Yields:", "Raises:"];

/// Re-indent docstring sections to Google style.
///
/// On entering a triple-quoted block the opening line's leading-space width
/// becomes the base indentation. Inside the block, section keyword lines are
/// re-indented to base+4 and other non-empty, non-closing lines to base+8
/// unless already deeper. One-line docstrings open no block; any line
/// containing the delimiter while inside closes it.
pub fn fix_docstring_indentation(code: &str) -> String {
    let mut fixed: Vec<String> = Vec::new();
    let mut in_docstring = false;
    let mut base_indent = 0usize;

    for line in code.split('\n') {
        if !in_docstring {
            if line.contains(DOC_DELIMITER) && !opens_and_closes(line) {
                in_docstring = true;
                base_indent = indent_width(line);
            }
            fixed.push(line.to_string());
            continue;
        }

        let stripped = line.trim_start();
        if stripped.starts_with(DOC_DELIMITER) {
            fixed.push(line.to_string());
            in_docstring = false;
            continue;
        }

        if SECTION_KEYWORDS.iter().any(|kw| stripped.starts_with(kw)) {
            fixed.push(format!("{}{}", " ".repeat(base_indent + 4), stripped));
        } else if !stripped.is_empty() {
            if indent_width(line) <= base_indent + 4 {
                fixed.push(format!("{}{}", " ".repeat(base_indent + 8), stripped));
            } else {
                fixed.push(line.to_string());
            }
        } else {
            fixed.push(line.to_string());
        }

        if line.contains(DOC_DELIMITER) {
            in_docstring = false;
        }
    }

    fixed.join("\n")
}

/// Whether a line both opens and closes a docstring (one-line docstring).
fn opens_and_closes(line: &str) -> bool {
    match line.find(DOC_DELIMITER) {
        Some(pos) => line[pos + DOC_DELIMITER.len()..].contains(DOC_DELIMITER),
        None => false,
    }
}

fn indent_width(line: &str) -> usize {
    line.len() - line.trim_start().len()
}
