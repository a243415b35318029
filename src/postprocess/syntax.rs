//! Python syntax validation via tree-sitter.

use tree_sitter::{Language, Parser};

/// Check whether the text parses cleanly as Python.
///
/// Returns `false` when the parse tree contains any error or missing node,
/// or when parsing fails outright. The empty string is valid. Side-effect
/// free; a fresh parser is constructed per call.
pub fn is_valid_python(source: &str) -> bool {
    let language: Language = tree_sitter_python::LANGUAGE.into();
    let mut parser = Parser::new();
    if parser.set_language(&language).is_err() {
        return false;
    }
    match parser.parse(source, None) {
        Some(tree) => !tree.root_node().has_error(),
        None => false,
    }
}
