//! Tests for seedless summation

use gleaner::*;
use pretty_assertions::assert_eq;

// ═══════════════════════════════════════════════════════════════════════
// Typed Collections
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_sum_array() {
    assert_eq!(sum([1, 2, 3, 4]), Ok(10));
    assert_eq!([1, 2, 3, 4].total(), Ok(10));
}

#[test]
fn test_sum_char_range_matches_manual_fold() {
    let expected = ('a'..='m').fold(String::new(), |mut acc, c| {
        acc.push(c);
        acc
    });
    assert_eq!(('a'..='m').total(), Ok(expected));
}

#[test]
fn test_sum_empty_is_error_not_zero() {
    let empty: [u64; 0] = [];
    assert_eq!(sum(empty), Err(SumError::EmptyCollection));
    assert_eq!(Vec::<String>::new().total(), Err(SumError::EmptyCollection));
    #[allow(clippy::reversed_empty_ranges)]
    let backwards = 5..1;
    assert_eq!(backwards.total(), Err(SumError::EmptyCollection));
}

#[test]
fn test_sum_signed_overflow() {
    assert_eq!([i32::MAX, 1].total(), Err(SumError::IntegerOverflow));
    assert_eq!([i32::MIN, -1].total(), Err(SumError::IntegerOverflow));
}

#[test]
fn test_sum_strings() {
    let words = vec!["glean".to_string(), "er".to_string()];
    assert_eq!(words.total(), Ok("gleaner".to_string()));
}

#[test]
fn test_sum_borrowed_strs() {
    let text = "a b c";
    assert_eq!(text.split(' ').total(), Ok("abc".to_string()));
}

#[test]
fn test_sum_vowel_iterator() {
    assert_eq!(extract_vowels("banana").total(), Ok("aaa".to_string()));
}

// ═══════════════════════════════════════════════════════════════════════
// Dynamic Values
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_sum_values_ints() {
    let items = vec![Value::Int(1), Value::Int(2), Value::Int(3)];
    assert_eq!(items.total(), Ok(Value::Int(6)));
}

#[test]
fn test_sum_values_chars_to_string() {
    let items: Vec<Value> = "xyz".chars().map(Value::from).collect();
    assert_eq!(items.total(), Ok(Value::string("xyz")));
}

#[test]
fn test_sum_values_single_char_stays_char() {
    assert_eq!(vec![Value::Char('q')].total(), Ok(Value::Char('q')));
}

#[test]
fn test_sum_values_mismatch_reports_types() {
    let items = vec![Value::from("a"), Value::Int(1)];
    assert_eq!(
        items.total(),
        Err(SumError::InvalidOperands {
            op: "+".to_string(),
            left_type: "String".to_string(),
            right_type: "i64".to_string(),
        })
    );
}

#[test]
fn test_sum_values_int_and_float_promotes() {
    let items = vec![Value::Int(1), Value::Float(2.5), Value::Int(3)];
    assert_eq!(items.total(), Ok(Value::Float(6.5)));
}

#[test]
fn test_sum_nested_arrays() {
    let items = vec![
        Value::array(vec![Value::Int(1)]),
        Value::array(vec![]),
        Value::array(vec![Value::Int(2)]),
    ];
    assert_eq!(
        items.total(),
        Ok(Value::array(vec![Value::Int(1), Value::Int(2)]))
    );
}

#[test]
fn test_sum_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|n| std::thread::spawn(move || (1..=n + 1).total()))
        .collect();
    let totals: Vec<_> = handles
        .into_iter()
        .map(|h| h.join().unwrap())
        .collect();
    assert_eq!(totals, vec![Ok(1), Ok(3), Ok(6), Ok(10)]);
}
