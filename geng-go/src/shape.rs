//! Shape checks for receiver, parameter and result types.
//!
//! Only simple named types are supported in signatures, and receivers
//! must be a pointer to one. Every other shape (qualified, generic,
//! slice, map, pointer parameter, variadic, ...) yields a shape error.

use tree_sitter::Node;

use crate::{Result, ShapeRole, SourceContext};

pub(crate) fn text<'a>(node: Node, code: &'a str) -> &'a str {
    &code[node.byte_range()]
}

pub(crate) fn unsupported(
    ctx: &SourceContext,
    role: ShapeRole,
    node: Node,
    code: &str,
) -> Box<crate::Error> {
    ctx.shape_error(
        role,
        text(node, code),
        node.byte_range(),
        node.start_position().row + 1,
    )
}

/// Name of a simple named type such as `int` or `Bar`.
pub(crate) fn simple_type_name<'a>(
    ctx: &SourceContext,
    role: ShapeRole,
    node: Node,
    code: &'a str,
) -> Result<&'a str> {
    if node.kind() == "type_identifier" {
        Ok(text(node, code))
    } else {
        Err(unsupported(ctx, role, node, code))
    }
}

/// Name of the type bound by a receiver list such as `(b *Bar)`.
pub(crate) fn receiver_type_name<'a>(
    ctx: &SourceContext,
    receiver: Node,
    code: &'a str,
) -> Result<&'a str> {
    let mut cursor = receiver.walk();
    let decl = receiver
        .named_children(&mut cursor)
        .find(|n| n.kind() != "comment")
        .ok_or_else(|| unsupported(ctx, ShapeRole::Receiver, receiver, code))?;

    if decl.kind() != "parameter_declaration" {
        return Err(unsupported(ctx, ShapeRole::Receiver, decl, code));
    }

    let ty = decl
        .child_by_field_name("type")
        .ok_or_else(|| unsupported(ctx, ShapeRole::Receiver, decl, code))?;
    if ty.kind() != "pointer_type" {
        return Err(unsupported(ctx, ShapeRole::Receiver, ty, code));
    }

    let mut cursor = ty.walk();
    let target = ty
        .named_children(&mut cursor)
        .next()
        .ok_or_else(|| unsupported(ctx, ShapeRole::Receiver, ty, code))?;
    if target.kind() == "type_identifier" {
        Ok(text(target, code))
    } else {
        Err(unsupported(ctx, ShapeRole::Receiver, ty, code))
    }
}
