//! Transforms applied by the interface template.

/// Import clause for a deduplicated import list.
///
/// Empty without imports, a single `import "x"` clause for one import and
/// a parenthesized, tab-indented block otherwise.
pub fn format_imports(imports: &[String]) -> String {
    match imports {
        [] => String::new(),
        [single] => format!("import {single}"),
        many => {
            let body: Vec<String> = many.iter().map(|import| format!("\t{import}")).collect();
            format!("import (\n{}\n)", body.join("\n"))
        }
    }
}

/// A doc comment followed by the newline and tab that put the method
/// signature on the next interface body line.
pub fn format_comment(comment: &str) -> String {
    if comment.is_empty() {
        String::new()
    } else {
        format!("{comment}\n\t")
    }
}

/// Wraps results made of more than one space-separated token in parentheses.
pub fn format_results(results: &str) -> String {
    if results.split(' ').count() > 1 {
        format!("({results})")
    } else {
        results.to_string()
    }
}
