//! Declaration extraction from a parsed Go syntax tree.

use geng_core::is_exported;
use tree_sitter::Node;

use crate::{
    ImportDecl, MethodSignature, Result, ShapeRole, SourceContext, SourceUnit,
    shape::{receiver_type_name, simple_type_name, text, unsupported},
};

/// Extract the package name, imports and exported pointer-receiver
/// methods of a syntax tree that parsed without errors.
pub(crate) fn extract_unit(ctx: &SourceContext, root: Node, code: &str) -> Result<SourceUnit> {
    let package = package_name(root, code).ok_or_else(|| ctx.parse_error(0..0, 1, 1))?;
    let mut unit = SourceUnit::new(ctx.path(), package);

    let mut cursor = root.walk();
    for node in root.named_children(&mut cursor) {
        match node.kind() {
            "import_declaration" => collect_imports(node, code, &mut unit.imports),
            "method_declaration" => {
                if let Some((receiver, method)) = extract_method(ctx, node, code)? {
                    unit.push_method(receiver, method);
                }
            }
            // Free functions and every other declaration are ignored
            _ => {}
        }
    }

    Ok(unit)
}

fn package_name<'a>(root: Node, code: &'a str) -> Option<&'a str> {
    let mut cursor = root.walk();
    let clause = root
        .named_children(&mut cursor)
        .find(|n| n.kind() == "package_clause")?;

    let mut cursor = clause.walk();
    clause
        .named_children(&mut cursor)
        .find(|n| n.kind() == "package_identifier")
        .map(|n| text(n, code))
}

/// Collect the specs of an `import` declaration, single or grouped.
fn collect_imports(node: Node, code: &str, imports: &mut Vec<ImportDecl>) {
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        match child.kind() {
            "import_spec" => imports.extend(import_spec(child, code)),
            "import_spec_list" => {
                let mut list_cursor = child.walk();
                for spec in child.named_children(&mut list_cursor) {
                    if spec.kind() == "import_spec" {
                        imports.extend(import_spec(spec, code));
                    }
                }
            }
            _ => {}
        }
    }
}

fn import_spec(spec: Node, code: &str) -> Option<ImportDecl> {
    let path = text(spec.child_by_field_name("path")?, code);
    Some(match spec.child_by_field_name("name") {
        Some(alias) => ImportDecl::aliased(text(alias, code), path),
        None => ImportDecl::new(path),
    })
}

/// Returns `None` for unexported methods. The receiver shape is only
/// checked for exported ones.
fn extract_method(
    ctx: &SourceContext,
    node: Node,
    code: &str,
) -> Result<Option<(String, MethodSignature)>> {
    let Some(name) = node.child_by_field_name("name").map(|n| text(n, code)) else {
        return Ok(None);
    };
    if !is_exported(name) {
        return Ok(None);
    }

    let receiver = node
        .child_by_field_name("receiver")
        .ok_or_else(|| unsupported(ctx, ShapeRole::Receiver, node, code))?;
    let receiver = receiver_type_name(ctx, receiver, code)?;

    let params = match node.child_by_field_name("parameters") {
        Some(list) => render_fields(ctx, ShapeRole::Parameter, list, code)?,
        None => String::new(),
    };

    let results = match node.child_by_field_name("result") {
        None => String::new(),
        Some(list) if list.kind() == "parameter_list" => {
            render_fields(ctx, ShapeRole::Result, list, code)?
        }
        Some(ty) => simple_type_name(ctx, ShapeRole::Result, ty, code)?.to_string(),
    };

    let method = MethodSignature {
        name: name.to_string(),
        params,
        results,
        doc: doc_comment(node, code),
    };
    Ok(Some((receiver.to_string(), method)))
}

/// Render a parameter or result list as comma-joined `name type` pairs.
///
/// Unnamed entries render as their bare type; `a, b int` renders one pair
/// per name.
fn render_fields(ctx: &SourceContext, role: ShapeRole, list: Node, code: &str) -> Result<String> {
    let mut fields = Vec::new();

    let mut cursor = list.walk();
    for decl in list.named_children(&mut cursor) {
        match decl.kind() {
            "comment" => continue,
            "parameter_declaration" => {
                let ty = decl
                    .child_by_field_name("type")
                    .ok_or_else(|| unsupported(ctx, role, decl, code))?;
                let ty = simple_type_name(ctx, role, ty, code)?;

                let mut name_cursor = decl.walk();
                let names: Vec<&str> = decl
                    .children_by_field_name("name", &mut name_cursor)
                    .map(|n| text(n, code))
                    .collect();

                if names.is_empty() {
                    fields.push(ty.to_string());
                } else {
                    fields.extend(names.into_iter().map(|name| format!("{name} {ty}")));
                }
            }
            // variadic_parameter_declaration and anything else
            _ => return Err(unsupported(ctx, role, decl, code)),
        }
    }

    Ok(fields.join(", "))
}

/// Collect the comment group that ends on the line directly above `node`.
///
/// Lines are kept verbatim (`// ...` or `/* ... */`). A comment trailing
/// code on its own line does not belong to the group.
fn doc_comment(node: Node, code: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut next_row = node.start_position().row;
    let mut current = node.prev_named_sibling();

    while let Some(sibling) = current {
        if sibling.kind() != "comment" {
            break;
        }

        let end_row = sibling.end_position().row;
        let adjacent = end_row + 1 == next_row || (!lines.is_empty() && end_row == next_row);
        if !adjacent {
            break;
        }

        let start_row = sibling.start_position().row;
        let previous = sibling.prev_named_sibling();
        if previous.is_some_and(|p| p.kind() != "comment" && p.end_position().row == start_row) {
            break;
        }

        lines.push(text(sibling, code).trim_end_matches('\r').to_string());
        next_row = start_row;
        current = previous;
    }

    lines.reverse();
    lines
}
