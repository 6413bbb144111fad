//! Lowering host types into the normalized [`Value`] model.
//!
//! Covers std primitives and containers out of the box. User structs
//! implement [`ToValue`] by hand with [`Value::record`] and [`Field`],
//! marking non-public fields with [`Field::private`].

use crate::value::Value;
use rust_decimal::Decimal;
use std::collections::{BTreeMap, HashMap};
use time::OffsetDateTime;

/// Conversion into the normalized comparison model.
pub trait ToValue {
    fn to_value(&self) -> Value;
}

impl ToValue for Value {
    fn to_value(&self) -> Value {
        self.clone()
    }
}

impl ToValue for bool {
    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }
}

macro_rules! impl_to_value_int {
    ($($t:ty),*) => {
        $(impl ToValue for $t {
            fn to_value(&self) -> Value {
                Value::Int(*self as i64)
            }
        })*
    };
}

macro_rules! impl_to_value_uint {
    ($($t:ty),*) => {
        $(impl ToValue for $t {
            fn to_value(&self) -> Value {
                Value::Uint(*self as u64)
            }
        })*
    };
}

impl_to_value_int!(i8, i16, i32, i64, isize);
impl_to_value_uint!(u8, u16, u32, u64, usize);

impl ToValue for f32 {
    fn to_value(&self) -> Value {
        Value::Float(f64::from(*self))
    }
}

impl ToValue for f64 {
    fn to_value(&self) -> Value {
        Value::Float(*self)
    }
}

impl ToValue for Decimal {
    fn to_value(&self) -> Value {
        Value::Decimal(*self)
    }
}

impl ToValue for OffsetDateTime {
    fn to_value(&self) -> Value {
        Value::Timestamp(*self)
    }
}

impl ToValue for str {
    fn to_value(&self) -> Value {
        Value::Text(self.to_string())
    }
}

impl ToValue for String {
    fn to_value(&self) -> Value {
        Value::Text(self.clone())
    }
}

impl ToValue for char {
    fn to_value(&self) -> Value {
        Value::Text(self.to_string())
    }
}

/// `None` lowers to the nil-pointer state, so `Some(x)` vs `None`
/// reports an asymmetric-absence difference rather than descending.
impl<T: ToValue> ToValue for Option<T> {
    fn to_value(&self) -> Value {
        Value::Pointer(self.as_ref().map(|v| Box::new(v.to_value())))
    }
}

impl<T: ToValue + ?Sized> ToValue for &T {
    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

impl<T: ToValue + ?Sized> ToValue for Box<T> {
    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

impl<T: ToValue> ToValue for [T] {
    fn to_value(&self) -> Value {
        Value::List(Some(self.iter().map(ToValue::to_value).collect()))
    }
}

impl<T: ToValue> ToValue for Vec<T> {
    fn to_value(&self) -> Value {
        self.as_slice().to_value()
    }
}

impl<T: ToValue, const N: usize> ToValue for [T; N] {
    fn to_value(&self) -> Value {
        self.as_slice().to_value()
    }
}

/// Map keys are lowered through their own `ToValue` impl and rendered
/// to text, which doubles as the `map[..]` path token.
impl<K: ToValue, V: ToValue> ToValue for BTreeMap<K, V> {
    fn to_value(&self) -> Value {
        Value::Map(Some(
            self.iter()
                .map(|(k, v)| (k.to_value().to_string(), v.to_value()))
                .collect(),
        ))
    }
}

impl<K: ToValue, V: ToValue, S> ToValue for HashMap<K, V, S> {
    fn to_value(&self) -> Value {
        Value::Map(Some(
            self.iter()
                .map(|(k, v)| (k.to_value().to_string(), v.to_value()))
                .collect(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_lowers_to_pointer() {
        assert_eq!(Some(5i64).to_value(), Value::pointer(Value::Int(5)));
        assert_eq!(None::<i64>.to_value(), Value::null());
    }

    #[test]
    fn vec_lowers_to_list() {
        assert_eq!(
            vec![1i64, 2].to_value(),
            Value::list(vec![Value::Int(1), Value::Int(2)])
        );
    }

    #[test]
    fn array_and_slice_lower_to_list() {
        let arr = [1u32, 2];
        let expected = Value::list(vec![Value::Uint(1), Value::Uint(2)]);
        assert_eq!(arr.to_value(), expected);
        assert_eq!(arr.as_slice().to_value(), expected);
    }

    #[test]
    fn hashmap_lowers_to_sorted_map() {
        let mut m = HashMap::new();
        m.insert("b", 2i64);
        m.insert("a", 1i64);
        assert_eq!(
            m.to_value(),
            Value::map(vec![
                ("a".to_string(), Value::Int(1)),
                ("b".to_string(), Value::Int(2)),
            ])
        );
    }

    #[test]
    fn non_text_map_keys_render_to_path_tokens() {
        let mut m = BTreeMap::new();
        m.insert(10i64, "x");
        let v = m.to_value();
        assert_eq!(
            v,
            Value::map(vec![("10".to_string(), Value::Text("x".to_string()))])
        );
    }

    #[test]
    fn reference_and_box_are_transparent() {
        let s = "hi".to_string();
        assert_eq!((&s).to_value(), Value::Text("hi".to_string()));
        assert_eq!(Box::new(7i64).to_value(), Value::Int(7));
    }

    #[test]
    fn uint_widths_keep_sign_distinction() {
        assert_eq!(3u8.to_value(), Value::Uint(3));
        assert_eq!(3i8.to_value(), Value::Int(3));
        assert!(!3u8.to_value().same_type(&3i8.to_value()));
    }
}
