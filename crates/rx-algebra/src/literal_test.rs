use super::*;

#[test]
fn integers_beyond_i64_stay_exact() {
    let literal: Literal = serde_json::from_str("18446744073709551615").unwrap();
    assert_eq!(literal, Literal::Unsigned(u64::MAX));
    assert_eq!(serde_json::to_string(&literal).unwrap(), "18446744073709551615");
}

#[test]
fn integers_within_i64_load_as_integer() {
    let literal: Literal = serde_json::from_str("9223372036854775807").unwrap();
    assert_eq!(literal, Literal::Integer(i64::MAX));
    let literal: Literal = serde_json::from_str("-3").unwrap();
    assert_eq!(literal, Literal::Integer(-3));
    let literal: Literal = serde_json::from_str("2.5").unwrap();
    assert_eq!(literal, Literal::Float(2.5));
}

#[test]
fn from_u64_prefers_signed() {
    assert_eq!(Literal::from(7u64), Literal::Integer(7));
    assert_eq!(Literal::from(u64::MAX), Literal::Unsigned(u64::MAX));
}

#[test]
fn arrays_keep_large_integers() {
    let literal: Literal = serde_json::from_str("[1, 18446744073709551615]").unwrap();
    assert_eq!(
        literal,
        Literal::Array(vec![Literal::Integer(1), Literal::Unsigned(u64::MAX)])
    );
}
