//! deepdiff: structural difference reports for test assertions.
//!
//! Where an equality assertion only says "not equal", [`diff`] walks
//! two values in lockstep and returns a path-qualified list of every
//! place they diverge:
//!
//! ```
//! use deepdiff::{diff, Field, ToValue, Value};
//!
//! struct User {
//!     name: String,
//!     age: i64,
//! }
//!
//! impl ToValue for User {
//!     fn to_value(&self) -> Value {
//!         Value::record(
//!             "User",
//!             vec![
//!                 Field::new("Name", self.name.to_value()),
//!                 Field::new("Age", self.age.to_value()),
//!             ],
//!         )
//!     }
//! }
//!
//! let a = User { name: "Alice".to_string(), age: 30 };
//! let b = User { name: "Alice".to_string(), age: 31 };
//! assert_eq!(diff(&a, &b), vec!["Age: 30 != 31"]);
//! ```
//!
//! The walk is bounded by a recursion-depth cap and a diff-count cap
//! (see [`Options`]); an empty result means equal, a non-empty result
//! may be truncated at the cap. [`diff_values`] exposes the engine
//! over already-normalized [`Value`]s and returns a [`Report`] with
//! an explicit `truncated` flag.
//!
//! Comparison never fails: depth exhaustion, top-level type
//! mismatches, and unsupported leaf kinds are diagnostic conditions
//! routed to the `log` facade when `Options::log_errors` is set.

pub mod compare;
pub mod error;
pub mod options;

pub use compare::{diff_values, Report};
pub use error::Anomaly;
pub use options::Options;

pub use deepdiff_value::{Field, ToValue, Value};

/// Compare two values under default [`Options`].
///
/// Returns the ordered list of rendered differences; empty means the
/// values are judged equal.
pub fn diff<A, B>(a: &A, b: &B) -> Vec<String>
where
    A: ToValue + ?Sized,
    B: ToValue + ?Sized,
{
    diff_with(a, b, &Options::default())
}

/// Compare two values under explicit [`Options`].
pub fn diff_with<A, B>(a: &A, b: &B, opts: &Options) -> Vec<String>
where
    A: ToValue + ?Sized,
    B: ToValue + ?Sized,
{
    diff_values(&a.to_value(), &b.to_value(), opts).diffs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diff_accepts_mixed_adapter_types() {
        // Both sides lower through ToValue; a Vec and a slice of the
        // same elements are the same normalized value.
        let v = vec![1i64, 2, 3];
        let s: &[i64] = &[1, 2, 3];
        assert!(diff(&v, &s).is_empty());
    }

    #[test]
    fn diff_on_json_values() {
        let a = serde_json::json!({"a": 1, "b": 2});
        let b = serde_json::json!({"a": 1});
        assert_eq!(diff(&a, &b), vec!["map[b]: 2 != <does not have key>"]);
    }

    #[test]
    fn diff_with_threads_options() {
        let opts = Options {
            float_precision: 2,
            ..Options::default()
        };
        assert!(diff_with(&1.001f64, &1.002f64, &opts).is_empty());
        assert_eq!(diff(&1.001f64, &1.002f64), vec!["1.001 != 1.002"]);
    }
}
