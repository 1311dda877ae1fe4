//! End-to-end generator behaviour over trees built with rx-algebra

use rx_algebra::{
    AliasSet, Attribute, AttributeKind, BinaryOp, Function, Header, Literal, Node, Relation,
    UnaryOp,
};
use rx_sexp::{visit, Sexp};

fn sym(name: &str) -> Sexp {
    Sexp::symbol(name)
}

fn list(items: Vec<Sexp>) -> Sexp {
    Sexp::List(items)
}

fn attr(name: &str) -> Sexp {
    list(vec![sym("attr"), sym(name)])
}

fn header() -> Header {
    Header::coerce(&[("foo", AttributeKind::Integer)])
}

fn foo() -> Attribute {
    Attribute::integer("foo")
}

fn base_relation() -> Relation {
    Relation::base("name", header())
}

fn other_relation() -> Relation {
    Relation::base("other", Header::coerce(&[("bar", AttributeKind::Integer)]))
}

fn sorted_base_relation() -> Relation {
    base_relation().sort_by(vec![foo().asc()])
}

fn base_sexp(name: &str, attribute: &str) -> Sexp {
    list(vec![
        sym("base"),
        Sexp::from(name),
        list(vec![list(vec![
            sym(attribute),
            Sexp::Kind(AttributeKind::Integer),
        ])]),
    ])
}

fn order_sexp() -> Sexp {
    list(vec![
        sym("order"),
        base_sexp("name", "foo"),
        list(vec![list(vec![sym("asc"), attr("foo")])]),
    ])
}

#[test]
fn base_relation_with_integer_attribute() {
    assert_eq!(visit(&base_relation()).unwrap(), base_sexp("name", "foo"));
}

#[test]
fn restriction_by_equality() {
    let relation = base_relation().restrict(Function::equals(foo(), "bar"));
    assert_eq!(
        visit(&relation).unwrap(),
        list(vec![
            sym("restrict"),
            base_sexp("name", "foo"),
            list(vec![sym("eq"), attr("foo"), Sexp::from("bar")]),
        ])
    );
}

#[test]
fn order_ascending() {
    assert_eq!(visit(&sorted_base_relation()).unwrap(), order_sexp());
}

#[test]
fn offset_of_sorted_relation() {
    let relation = sorted_base_relation().skip(2);
    assert_eq!(
        visit(&relation).unwrap(),
        list(vec![sym("offset"), order_sexp(), Sexp::Unsigned(2)])
    );
}

#[test]
fn limit_of_sorted_relation() {
    let relation = sorted_base_relation().take(2);
    assert_eq!(
        visit(&relation).unwrap(),
        list(vec![sym("limit"), order_sexp(), Sexp::Unsigned(2)])
    );
}

#[test]
fn extension_with_multiplication() {
    let relation = base_relation().extend([("bar", Function::multiply(foo(), 2))]);
    assert_eq!(
        visit(&relation).unwrap(),
        list(vec![
            sym("extend"),
            base_sexp("name", "foo"),
            list(vec![list(vec![
                sym("bar"),
                list(vec![sym("mul"), attr("foo"), Sexp::Integer(2)]),
            ])]),
        ])
    );
}

#[test]
fn extension_with_plain_attribute() {
    let relation = base_relation().extend([("bar", foo())]);
    assert_eq!(
        visit(&relation).unwrap(),
        list(vec![
            sym("extend"),
            base_sexp("name", "foo"),
            list(vec![list(vec![sym("bar"), attr("foo")])]),
        ])
    );
}

#[test]
fn materialized_relation() {
    let relation = Relation::materialized(header(), vec![vec![Literal::from(1)]]).unwrap();
    assert_eq!(
        visit(&relation).unwrap(),
        list(vec![
            sym("materialized"),
            list(vec![list(vec![
                sym("foo"),
                Sexp::Kind(AttributeKind::Integer),
            ])]),
            list(vec![list(vec![Sexp::Integer(1)])]),
        ])
    );
}

#[test]
fn product_of_two_bases() {
    let relation = base_relation().product(other_relation());
    assert_eq!(
        visit(&relation).unwrap(),
        list(vec![
            sym("product"),
            base_sexp("name", "foo"),
            base_sexp("other", "bar"),
        ])
    );
}

#[test]
fn self_join() {
    let relation = base_relation().join(base_relation());
    assert_eq!(
        visit(&relation).unwrap(),
        list(vec![
            sym("join"),
            base_sexp("name", "foo"),
            base_sexp("name", "foo"),
        ])
    );
}

#[test]
fn join_keeps_left_and_right_in_place() {
    let relation = base_relation().join(other_relation());
    assert_eq!(
        visit(&relation).unwrap(),
        list(vec![
            sym("join"),
            base_sexp("name", "foo"),
            base_sexp("other", "bar"),
        ])
    );

    let swapped = other_relation().join(base_relation());
    assert_eq!(
        visit(&swapped).unwrap(),
        list(vec![
            sym("join"),
            base_sexp("other", "bar"),
            base_sexp("name", "foo"),
        ])
    );
}

#[test]
fn projection_visits_header_attributes() {
    let relation = base_relation().project(header().project(&["foo"]).unwrap());
    assert_eq!(
        visit(&relation).unwrap(),
        list(vec![
            sym("project"),
            base_sexp("name", "foo"),
            list(vec![attr("foo")]),
        ])
    );
}

#[test]
fn set_operations_use_operation_tags() {
    let cases = [
        (base_relation().union(other_relation()), "union"),
        (base_relation().intersect(other_relation()), "intersect"),
        (base_relation().difference(other_relation()), "difference"),
        (base_relation().delete(other_relation()), "delete"),
        (base_relation().insert(other_relation()), "insert"),
        (base_relation().summarize(other_relation()), "summarize"),
    ];
    for (relation, tag) in cases {
        assert_eq!(
            visit(&relation).unwrap(),
            list(vec![
                sym(tag),
                base_sexp("name", "foo"),
                base_sexp("other", "bar"),
            ]),
            "tag {tag}"
        );
    }
}

#[test]
fn two_operand_relations_follow_operand_order() {
    let cases = [
        (other_relation().union(base_relation()), "union"),
        (other_relation().intersect(base_relation()), "intersect"),
        (other_relation().difference(base_relation()), "difference"),
        (other_relation().delete(base_relation()), "delete"),
        (other_relation().insert(base_relation()), "insert"),
        (other_relation().summarize(base_relation()), "summarize"),
        (other_relation().product(base_relation()), "product"),
    ];
    for (relation, tag) in cases {
        assert_eq!(
            visit(&relation).unwrap(),
            list(vec![
                sym(tag),
                base_sexp("other", "bar"),
                base_sexp("name", "foo"),
            ]),
            "tag {tag}"
        );
    }
}

#[test]
fn reverse_of_descending_order() {
    let relation = base_relation().sort_by(vec![foo().desc()]).reverse();
    assert_eq!(
        visit(&relation).unwrap(),
        list(vec![
            sym("reverse"),
            list(vec![
                sym("order"),
                base_sexp("name", "foo"),
                list(vec![list(vec![sym("desc"), attr("foo")])]),
            ]),
        ])
    );
}

#[test]
fn rename_passes_alias_set_through() {
    let aliases = AliasSet::new([("foo", "bar")]);
    let relation = base_relation().rename(aliases.clone());
    assert_eq!(
        visit(&relation).unwrap(),
        list(vec![
            sym("rename"),
            base_sexp("name", "foo"),
            Sexp::Opaque(Node::Aliases(aliases)),
        ])
    );
}

#[test]
fn every_binary_operator_tag() {
    let tags = [
        (BinaryOp::And, "and"),
        (BinaryOp::Or, "or"),
        (BinaryOp::Equality, "eq"),
        (BinaryOp::Inequality, "neq"),
        (BinaryOp::GreaterThan, "gt"),
        (BinaryOp::GreaterThanOrEqualTo, "gte"),
        (BinaryOp::LessThan, "lt"),
        (BinaryOp::LessThanOrEqualTo, "lte"),
        (BinaryOp::Inclusion, "in"),
        (BinaryOp::Exclusion, "ex"),
        (BinaryOp::Match, "match"),
        (BinaryOp::NoMatch, "no_match"),
        (BinaryOp::Addition, "add"),
        (BinaryOp::Subtraction, "sub"),
        (BinaryOp::Multiplication, "mul"),
        (BinaryOp::Division, "div"),
        (BinaryOp::Modulo, "mod"),
        (BinaryOp::Exponentiation, "exp"),
    ];
    assert_eq!(tags.len(), BinaryOp::ALL.len());

    for (op, tag) in tags {
        let function = Function::binary(op, foo(), 3);
        assert_eq!(
            visit(&function).unwrap(),
            list(vec![sym(tag), attr("foo"), Sexp::Integer(3)]),
            "operator {op:?}"
        );
    }
}

#[test]
fn every_unary_operator_tag() {
    let tags = [
        (UnaryOp::Not, "not"),
        (UnaryOp::Length, "length"),
        (UnaryOp::Absolute, "abs"),
        (UnaryOp::SquareRoot, "sqr"),
        (UnaryOp::UnaryMinus, "unary_minus"),
        (UnaryOp::UnaryPlus, "unary_plus"),
    ];
    assert_eq!(tags.len(), UnaryOp::ALL.len());

    for (op, tag) in tags {
        let function = Function::unary(op, foo());
        assert_eq!(
            visit(&function).unwrap(),
            list(vec![sym(tag), attr("foo")]),
            "operator {op:?}"
        );
    }
}

#[test]
fn inclusion_keeps_literal_array_verbatim() {
    let function = Function::binary(BinaryOp::Inclusion, foo(), Literal::from(vec![1, 2, 3]));
    assert_eq!(
        visit(&function).unwrap(),
        list(vec![
            sym("in"),
            attr("foo"),
            list(vec![Sexp::Integer(1), Sexp::Integer(2), Sexp::Integer(3)]),
        ])
    );
}

#[test]
fn every_attribute_kind_uses_attr_rule() {
    for kind in AttributeKind::ALL {
        let attribute = Attribute::new("x", kind);
        assert_eq!(visit(&attribute).unwrap(), attr("x"), "kind {kind}");
    }
}

#[test]
fn header_order_is_preserved() {
    let header = Header::coerce(&[
        ("zeta", AttributeKind::String),
        ("alpha", AttributeKind::Integer),
        ("mid", AttributeKind::Float),
    ]);
    let relation = Relation::base("t", header.clone());

    assert_eq!(
        visit(&relation).unwrap(),
        list(vec![
            sym("base"),
            Sexp::from("t"),
            list(vec![
                list(vec![sym("zeta"), Sexp::Kind(AttributeKind::String)]),
                list(vec![sym("alpha"), Sexp::Kind(AttributeKind::Integer)]),
                list(vec![sym("mid"), Sexp::Kind(AttributeKind::Float)]),
            ]),
        ])
    );
    assert_eq!(
        visit(&header).unwrap(),
        list(vec![attr("zeta"), attr("alpha"), attr("mid")])
    );
}

#[test]
fn tuple_and_row_order_is_preserved() {
    let header = Header::coerce(&[("a", AttributeKind::Integer), ("b", AttributeKind::String)]);
    let relation = Relation::materialized(
        header,
        vec![
            vec![Literal::from(2), Literal::from("y")],
            vec![Literal::from(1), Literal::Null],
        ],
    )
    .unwrap();

    let sexp = visit(&relation).unwrap();
    let rows = &sexp.as_list().unwrap()[2];
    assert_eq!(
        rows,
        &list(vec![
            list(vec![Sexp::Integer(2), Sexp::from("y")]),
            list(vec![Sexp::Integer(1), Sexp::Null]),
        ])
    );
}

#[test]
fn extension_and_direction_order_is_preserved() {
    let bar = Attribute::string("bar");
    let relation = base_relation()
        .extend([("z", foo()), ("a", bar.clone())])
        .sort_by(vec![bar.desc(), foo().asc()]);

    assert_eq!(
        visit(&relation).unwrap(),
        list(vec![
            sym("order"),
            list(vec![
                sym("extend"),
                base_sexp("name", "foo"),
                list(vec![
                    list(vec![sym("z"), attr("foo")]),
                    list(vec![sym("a"), attr("bar")]),
                ]),
            ]),
            list(vec![
                list(vec![sym("desc"), attr("bar")]),
                list(vec![sym("asc"), attr("foo")]),
            ]),
        ])
    );
}

#[test]
fn visiting_twice_yields_equal_output() {
    let relation = sorted_base_relation()
        .restrict(Function::equals(foo(), 1).and(Function::Tautology))
        .take(10);
    assert_eq!(visit(&relation).unwrap(), visit(&relation).unwrap());
}

#[test]
fn output_outlives_input_tree() {
    let sexp = {
        let relation = base_relation();
        visit(&relation).unwrap()
    };
    assert_eq!(sexp, base_sexp("name", "foo"));
}

#[test]
fn canonical_registry_is_shared_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|n| {
            std::thread::spawn(move || {
                let relation = sorted_base_relation().take(n);
                visit(&relation).unwrap()
            })
        })
        .collect();

    for (n, handle) in handles.into_iter().enumerate() {
        assert_eq!(
            handle.join().unwrap(),
            list(vec![sym("limit"), order_sexp(), Sexp::Unsigned(n as u64)])
        );
    }
}

#[test]
fn nan_literal_visits_deterministically() {
    let function = Function::equals(foo(), f64::NAN);
    assert_eq!(visit(&function).unwrap(), visit(&function).unwrap());
}
