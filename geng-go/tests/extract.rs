//! Extraction tests against small Go sources.

use geng_go::{Error, GoParser, ShapeRole, SourceUnit};

fn extract(code: &str) -> geng_go::Result<SourceUnit> {
    GoParser::new()
        .expect("Go grammar should load")
        .parse_source("demo/a.go", code)
}

fn method_names(unit: &SourceUnit, receiver: &str) -> Vec<String> {
    unit.groups[receiver]
        .iter()
        .map(|m| m.name.clone())
        .collect()
}

fn shape_role(err: &Error) -> Option<ShapeRole> {
    match err {
        Error::Shape { role, .. } => Some(*role),
        _ => None,
    }
}

fn shape_found(err: &Error) -> Option<&str> {
    match err {
        Error::Shape { found, .. } => Some(found.as_str()),
        _ => None,
    }
}

#[test]
fn test_exported_pointer_methods_only() {
    let unit = extract(
        r#"package demo

type Bar struct{}

func (b *Bar) Doit(x int) error { return nil }

func (b *Bar) hidden() {}

func (b Bar) lower() {}

func Free(x int) int { return x }

func (b *Bar) Foo() (string, error) { return "", nil }
"#,
    )
    .unwrap();

    assert_eq!(unit.package, "demo");
    assert_eq!(unit.groups.len(), 1);
    assert_eq!(method_names(&unit, "Bar"), ["Doit", "Foo"]);
}

#[test]
fn test_signature_rendering() {
    let unit = extract(
        r#"package demo

func (b *Bar) Doit(x int) error { return nil }

func (b *Bar) Foo() (string, error) { return "", nil }

func (b *Bar) Named(a, c int) (n int, err error) { return 0, nil }

func (b *Bar) Unnamed(int, string) {}

func (*Bar) Anonymous() bool { return true }
"#,
    )
    .unwrap();

    let bar = &unit.groups["Bar"];
    assert_eq!(bar.len(), 5);

    assert_eq!(bar[0].params, "x int");
    assert_eq!(bar[0].results, "error");

    assert_eq!(bar[1].params, "");
    assert_eq!(bar[1].results, "string, error");

    assert_eq!(bar[2].params, "a int, c int");
    assert_eq!(bar[2].results, "n int, err error");

    assert_eq!(bar[3].params, "int, string");
    assert_eq!(bar[3].results, "");

    assert_eq!(bar[4].name, "Anonymous");
    assert_eq!(bar[4].results, "bool");
}

#[test]
fn test_groups_by_receiver_in_declaration_order() {
    let unit = extract(
        r#"package demo

func (s *Store) Put(k string) {}

func (b *Bar) Doit() {}

func (s *Store) Get(k string) string { return "" }
"#,
    )
    .unwrap();

    let receivers: Vec<&str> = unit.groups.keys().map(String::as_str).collect();
    assert_eq!(receivers, ["Store", "Bar"]);
    assert_eq!(method_names(&unit, "Store"), ["Put", "Get"]);
    assert_eq!(unit.method_count(), 3);
}

#[test]
fn test_imports_in_source_order() {
    let unit = extract(
        r#"package demo

import "errors"

import (
	"fmt"
	f "fmt"
	_ "embed"
	. "strings"
	"fmt"
)
"#,
    )
    .unwrap();

    let imports: Vec<String> = unit.imports.iter().map(|i| i.rendered()).collect();
    assert_eq!(
        imports,
        [
            "\"errors\"",
            "\"fmt\"",
            "f \"fmt\"",
            "_ \"embed\"",
            ". \"strings\"",
            "\"fmt\"",
        ]
    );
}

#[test]
fn test_doc_comments() {
    let unit = extract(
        r#"package demo

// Detached comment.

// First line.
// Second line.
func (b *Bar) A() {}

var x = 1 // trailing
func (b *Bar) B() {}

/* Block doc. */
func (b *Bar) C() {}

// Doit performs work.
func (b *Bar) Doit(x int) error { return nil }
"#,
    )
    .unwrap();

    let bar = &unit.groups["Bar"];
    assert_eq!(bar[0].doc, ["// First line.", "// Second line."]);
    assert!(bar[1].doc.is_empty());
    assert_eq!(bar[2].doc, ["/* Block doc. */"]);
    assert_eq!(bar[3].doc, ["// Doit performs work."]);
    assert_eq!(bar[0].comment(), "// First line.\n\t// Second line.");
}

#[test]
fn test_value_receiver_is_fatal() {
    let err = extract(
        r#"package demo

func (b Bar) Doit() {}
"#,
    )
    .unwrap_err();

    assert_eq!(shape_role(&err), Some(ShapeRole::Receiver));
    assert_eq!(shape_found(&err), Some("Bar"));
}

#[test]
fn test_generic_receiver_is_fatal() {
    let err = extract(
        r#"package demo

func (b *Box[T]) Get() T { var t T; return t }
"#,
    )
    .unwrap_err();

    assert_eq!(shape_role(&err), Some(ShapeRole::Receiver));
    assert_eq!(shape_found(&err), Some("*Box[T]"));
}

#[test]
fn test_unexported_value_receiver_is_skipped() {
    let unit = extract(
        r#"package demo

func (b Bar) lower() {}
"#,
    )
    .unwrap();

    assert!(unit.groups.is_empty());
}

#[test]
fn test_qualified_parameter_is_fatal() {
    let err = extract(
        r#"package demo

import "context"

func (b *Bar) Run(ctx context.Context) error { return nil }
"#,
    )
    .unwrap_err();

    assert_eq!(shape_role(&err), Some(ShapeRole::Parameter));
    assert!(err.to_string().contains("context.Context"));
}

#[test]
fn test_variadic_parameter_is_fatal() {
    let err = extract(
        r#"package demo

func (b *Bar) Log(args ...int) {}
"#,
    )
    .unwrap_err();

    assert_eq!(shape_role(&err), Some(ShapeRole::Parameter));
}

#[test]
fn test_compound_result_is_fatal() {
    let err = extract(
        r#"package demo

func (b *Bar) List() []string { return nil }
"#,
    )
    .unwrap_err();

    assert_eq!(shape_role(&err), Some(ShapeRole::Result));
    assert_eq!(shape_found(&err), Some("[]string"));
}

#[test]
fn test_pointer_result_in_list_is_fatal() {
    let err = extract(
        r#"package demo

func (b *Bar) Clone() (*Bar, error) { return nil, nil }
"#,
    )
    .unwrap_err();

    assert_eq!(shape_role(&err), Some(ShapeRole::Result));
}
