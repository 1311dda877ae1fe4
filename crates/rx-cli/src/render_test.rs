use super::*;
use rx_algebra::{AliasSet, Attribute, AttributeKind, Function, Header, Literal, Relation};

fn users() -> Relation {
    Relation::base(
        "users",
        Header::coerce(&[("id", AttributeKind::Integer), ("name", AttributeKind::String)]),
    )
}

fn text(sexp: &Sexp) -> String {
    SexpPrinter::new(false).print(sexp).unwrap()
}

fn pretty(sexp: &Sexp) -> String {
    SexpPrinter::new(true).print(sexp).unwrap()
}

#[test]
fn test_atoms() {
    assert_eq!(text(&Sexp::symbol("foo")), "foo");
    assert_eq!(text(&Sexp::from("a \"b\"\n")), r#""a \"b\"\n""#);
    assert_eq!(text(&Sexp::Integer(-3)), "-3");
    assert_eq!(text(&Sexp::Unsigned(7)), "7");
    assert_eq!(text(&Sexp::Float(1.0)), "1.0");
    assert_eq!(text(&Sexp::Float(2.5)), "2.5");
    assert_eq!(text(&Sexp::Boolean(true)), "true");
    assert_eq!(text(&Sexp::Null), "nil");
    assert_eq!(text(&Sexp::Kind(AttributeKind::DateTime)), "DateTime");
}

#[test]
fn test_empty_list() {
    assert_eq!(text(&Sexp::List(Vec::new())), "()");
    assert_eq!(pretty(&Sexp::List(Vec::new())), "()");
}

#[test]
fn test_compact_tree() {
    let tree = users().restrict(Function::equals(Attribute::integer("id"), 1));
    let sexp = rx_sexp::visit(&tree).unwrap();
    assert_eq!(
        text(&sexp),
        r#"(restrict (base "users" ((id Integer) (name String))) (eq (attr id) 1))"#
    );
}

#[test]
fn test_pretty_tree() {
    let tree = users().restrict(Function::equals(Attribute::integer("id"), 1));
    let sexp = rx_sexp::visit(&tree).unwrap();
    assert_eq!(
        pretty(&sexp),
        "(restrict\n  (base \"users\"\n    ((id Integer) (name String)))\n  (eq (attr id) 1))"
    );
}

#[test]
fn test_pretty_keeps_shallow_lists_flat() {
    let sexp = Sexp::list([
        Sexp::symbol("eq"),
        Sexp::list([Sexp::symbol("attr"), Sexp::symbol("id")]),
    ]);
    assert_eq!(pretty(&sexp), "(eq (attr id))");
}

#[test]
fn test_pretty_list_headed_by_list() {
    let pair = |name: &str| Sexp::list([Sexp::symbol(name), Sexp::Kind(AttributeKind::Integer)]);
    let sexp = Sexp::list([
        Sexp::list([pair("a"), pair("b")]),
        Sexp::list([pair("c")]),
    ]);
    assert_eq!(pretty(&sexp), "(((a Integer) (b Integer))\n ((c Integer)))");
}

#[test]
fn test_opaque_as_json() {
    let sexp = Sexp::Opaque(rx_algebra::Node::Aliases(AliasSet::new([("a", "b")])));
    assert_eq!(text(&sexp), r#"#{"aliases":[["a","b"]]}"#);
}

#[test]
fn test_json_output() {
    let sexp = Sexp::list([
        Sexp::symbol("materialized"),
        Sexp::from(&Literal::from("x")),
        Sexp::Kind(AttributeKind::Float),
        Sexp::Null,
    ]);
    assert_eq!(
        to_json(&sexp, false).unwrap(),
        r#"[":materialized","x","Float",null]"#
    );
    assert!(to_json(&sexp, true).unwrap().contains('\n'));
}

#[test]
fn test_plain_symbols_print_bare() {
    assert_eq!(text(&Sexp::symbol("unary_minus")), "unary_minus");
    assert_eq!(text(&Sexp::symbol("no-match?")), "no-match?");
}

#[test]
fn test_ambiguous_symbols_are_quoted() {
    assert_eq!(text(&Sexp::symbol("first name")), "|first name|");
    assert_eq!(text(&Sexp::symbol("f(x)")), "|f(x)|");
    assert_eq!(text(&Sexp::symbol("a|b\\c")), r"|a\|b\\c|");
    assert_eq!(text(&Sexp::symbol("")), "||");
    assert_eq!(text(&Sexp::symbol("nil")), "|nil|");
    assert_eq!(text(&Sexp::symbol("42")), "|42|");
    assert_eq!(text(&Sexp::symbol("#tag")), "|#tag|");
}

#[test]
fn test_quoted_attribute_in_tree() {
    let tree = Relation::base(
        "t",
        Header::coerce(&[("first name", AttributeKind::String)]),
    );
    let sexp = rx_sexp::visit(&tree).unwrap();
    assert_eq!(text(&sexp), r#"(base "t" ((|first name| String)))"#);
}
