//! The interface template.

use std::fmt;

use geng_core::interface_name;
use geng_go::MethodSignature;
use indexmap::IndexMap;

use super::helpers::{format_comment, format_imports, format_results};
use crate::builder::CodeBuilder;

/// Data bound to a template for one artifact.
#[derive(Debug, Clone, Copy)]
pub struct InterfaceDefinition<'a> {
    pub package_name: &'a str,
    /// Deduplicated rendered imports, first-seen order.
    pub all_imports: &'a [String],
    /// Receiver type name -> methods.
    pub structs: &'a IndexMap<String, Vec<MethodSignature>>,
}

/// Turns an [`InterfaceDefinition`] into source text.
pub trait InterfaceTemplate {
    fn render(&self, def: &InterfaceDefinition<'_>, out: &mut dyn fmt::Write) -> fmt::Result;
}

/// Default template: one `<Receiver>Interface` per receiver group.
///
/// ```text
/// package demo
///
/// import "fmt"
///
/// type BarInterface interface {
///     // Doit performs work.
///     Doit(x int) error
/// }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct GoInterfaceTemplate;

impl GoInterfaceTemplate {
    fn method_line(method: &MethodSignature) -> String {
        let mut line = format!(
            "{}{}({})",
            format_comment(&method.comment()),
            method.name,
            method.params
        );
        if !method.results.is_empty() {
            line.push(' ');
            line.push_str(&format_results(&method.results));
        }
        line
    }
}

impl InterfaceTemplate for GoInterfaceTemplate {
    fn render(&self, def: &InterfaceDefinition<'_>, out: &mut dyn fmt::Write) -> fmt::Result {
        let imports = format_imports(def.all_imports);

        let code = CodeBuilder::new()
            .line(&format!("package {}", def.package_name))
            .when(!imports.is_empty(), |b| b.blank().line(&imports))
            .each(def.structs, |b, (receiver, methods)| {
                let header = format!("type {} interface {{", interface_name(receiver));
                b.blank().block_with_close(&header, "}", |b| {
                    b.each(methods, |b, method| b.line(&Self::method_line(method)))
                })
            })
            .build();

        out.write_str(&code)
    }
}
