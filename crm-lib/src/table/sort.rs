//! Stable single-key sorting of rows.

use std::cmp::Ordering;

use chrono::NaiveTime;
use rust_decimal::Decimal;

use super::state::Direction;
use super::state::SortState;
use crate::model::Record;
use crate::model::Value;

/// Sort `rows` in place by one field. The sort is stable.
///
/// Null and missing values go last in both directions. The direction only
/// reverses the comparison of present values, so ties keep input order.
pub fn sort_rows(rows: &mut [&Record], sort: &SortState) {
    rows.sort_by(|a, b| compare_rows(a, b, &sort.field, sort.direction));
}

fn compare_rows(a: &Record, b: &Record, field: &str, direction: Direction) -> Ordering {
    let val_a = a.get(field).filter(|v| !v.is_null());
    let val_b = b.get(field).filter(|v| !v.is_null());

    match (val_a, val_b) {
        (Some(a), Some(b)) => {
            let result = compare_values(a, b);
            match direction {
                Direction::Asc => result,
                Direction::Desc => result.reverse(),
            }
        }
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Natural ordering between two values.
///
/// Numbers compare exactly across variants, strings lexically, dates and
/// times chronologically (a bare date counts as midnight UTC). Values
/// of unrelated kinds order by a fixed kind rank so the result is always a
/// total order.
pub fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Null, Value::Null) => Ordering::Equal,
        (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
        (Value::String(a), Value::String(b)) => a.cmp(b),
        (Value::Guid(a), Value::Guid(b)) => a.cmp(b),
        (Value::Date(a), Value::Date(b)) => a.cmp(b),
        (Value::DateTime(a), Value::DateTime(b)) => a.cmp(b),
        (Value::Date(a), Value::DateTime(b)) => a.and_time(NaiveTime::MIN).and_utc().cmp(b),
        (Value::DateTime(a), Value::Date(b)) => a.cmp(&b.and_time(NaiveTime::MIN).and_utc()),
        (Value::List(a), Value::List(b)) => {
            for (x, y) in a.iter().zip(b.iter()) {
                let ord = compare_values(x, y);
                if ord != Ordering::Equal {
                    return ord;
                }
            }
            a.len().cmp(&b.len())
        }
        (a, b) if a.is_numeric() && b.is_numeric() => compare_numbers(a, b),
        (a, b) => kind_rank(a).cmp(&kind_rank(b)),
    }
}

/// Exact position of a numeric value on one shared scale.
///
/// Integers and decimals map exactly; floats map to the decimal holding
/// their binary value. Floats outside the decimal range sit below or above
/// every decimal, NaN above everything.
#[derive(Debug, Clone, Copy)]
enum NumberKey {
    Below(f64),
    Exact(Decimal),
    Above(f64),
    NaN,
}

impl NumberKey {
    fn of(value: &Value) -> Self {
        match value {
            Value::Int(n) => NumberKey::Exact(Decimal::from(*n)),
            Value::Long(n) => NumberKey::Exact(Decimal::from(*n)),
            Value::Decimal(d) => NumberKey::Exact(*d),
            Value::Float(f) => match Decimal::from_f64_retain(*f) {
                Some(d) => NumberKey::Exact(d),
                None if f.is_nan() => NumberKey::NaN,
                None if *f < 0.0 => NumberKey::Below(*f),
                None => NumberKey::Above(*f),
            },
            _ => NumberKey::NaN,
        }
    }

    fn rank(self) -> u8 {
        match self {
            NumberKey::Below(_) => 0,
            NumberKey::Exact(_) => 1,
            NumberKey::Above(_) => 2,
            NumberKey::NaN => 3,
        }
    }

    fn compare(self, other: Self) -> Ordering {
        match (self, other) {
            (NumberKey::Exact(a), NumberKey::Exact(b)) => a.cmp(&b),
            (NumberKey::Below(a), NumberKey::Below(b))
            | (NumberKey::Above(a), NumberKey::Above(b)) => a.total_cmp(&b),
            (a, b) => a.rank().cmp(&b.rank()),
        }
    }
}

/// Every numeric pair is compared through [`NumberKey`], so mixed variants
/// order consistently with same-variant comparisons.
fn compare_numbers(a: &Value, b: &Value) -> Ordering {
    NumberKey::of(a).compare(NumberKey::of(b))
}

fn kind_rank(value: &Value) -> u8 {
    match value {
        Value::Bool(_) => 0,
        Value::Int(_) | Value::Long(_) | Value::Float(_) | Value::Decimal(_) => 1,
        Value::String(_) => 2,
        Value::Date(_) | Value::DateTime(_) => 3,
        Value::Guid(_) => 4,
        Value::List(_) => 5,
        Value::Record(_) => 6,
        Value::Null => 7,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers_compare_across_variants() {
        assert_eq!(compare_values(&Value::Int(2), &Value::Long(10)), Ordering::Less);
        assert_eq!(compare_values(&Value::Float(2.5), &Value::Int(2)), Ordering::Greater);
        assert_eq!(compare_values(&Value::Int(3), &Value::Float(3.0)), Ordering::Equal);
    }

    #[test]
    fn test_large_integers_against_floats() {
        let low = Value::Long(1 << 53);
        let high = Value::Long((1 << 53) + 1);
        let float = Value::Float((1u64 << 53) as f64);

        assert_eq!(compare_values(&low, &high), Ordering::Less);
        assert_eq!(compare_values(&low, &float), Ordering::Equal);
        assert_eq!(compare_values(&float, &high), Ordering::Less);
        assert_eq!(compare_values(&high, &float), Ordering::Greater);
    }

    #[test]
    fn test_special_floats() {
        let nan = Value::Float(f64::NAN);
        let huge = Value::Float(1e300);
        let tiny = Value::Float(-1e300);

        assert_eq!(compare_values(&huge, &Value::Long(i64::MAX)), Ordering::Greater);
        assert_eq!(compare_values(&tiny, &Value::Long(i64::MIN)), Ordering::Less);
        assert_eq!(compare_values(&nan, &huge), Ordering::Greater);
        assert_eq!(compare_values(&nan, &nan), Ordering::Equal);
    }

    #[test]
    fn test_mixed_kinds_use_rank() {
        assert_eq!(
            compare_values(&Value::Int(99), &Value::from("a")),
            Ordering::Less
        );
        assert_eq!(
            compare_values(&Value::from("a"), &Value::Bool(true)),
            Ordering::Greater
        );
    }

    #[test]
    fn test_nulls_last_in_both_directions() {
        let a = Record::new("row").set("n", 1);
        let b = Record::new("row").set("n", Value::Null);
        let c = Record::new("row").set("n", 2);

        let mut rows = vec![&b, &a, &c];
        sort_rows(&mut rows, &SortState::asc("n"));
        assert_eq!(rows, vec![&a, &c, &b]);

        sort_rows(&mut rows, &SortState::desc("n"));
        assert_eq!(rows, vec![&c, &a, &b]);
    }
}
