//! The recursive comparison walk.
//!
//! A [`Comparator`] session owns the difference accumulator and the
//! path stack for exactly one top-level call. Depth strictly
//! increases on descent, path push/pop brackets every descent, and
//! the accumulator never exceeds the diff cap.

use std::collections::BTreeMap;

use deepdiff_value::Value;

use crate::error::Anomaly;
use crate::options::Options;

const NIL_POINTER: &str = "<nil pointer>";
const NIL_MAP: &str = "<nil map>";
const NIL_LIST: &str = "<nil list>";
const NO_VALUE: &str = "<no value>";
const DOES_NOT_HAVE_KEY: &str = "<does not have key>";

/// Result of one top-level comparison.
///
/// `truncated` is set when the diff cap stopped the walk before every
/// branch was examined; absence of entries for a sub-region then does
/// not imply that region is equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub diffs: Vec<String>,
    pub truncated: bool,
}

impl Report {
    /// Whether the two values were judged equal.
    pub fn is_equal(&self) -> bool {
        self.diffs.is_empty()
    }
}

/// Compare two normalized values, returning the full report.
pub fn diff_values(a: &Value, b: &Value, opts: &Options) -> Report {
    let mut session = Comparator::new(opts);
    session.compare(a, b, 0);
    Report {
        diffs: session.diffs,
        truncated: session.truncated,
    }
}

struct Comparator<'a> {
    opts: &'a Options,
    diffs: Vec<String>,
    path: Vec<String>,
    truncated: bool,
}

impl<'a> Comparator<'a> {
    fn new(opts: &'a Options) -> Comparator<'a> {
        Comparator {
            opts,
            diffs: Vec::new(),
            path: Vec::new(),
            truncated: false,
        }
    }

    fn compare(&mut self, a: &Value, b: &Value, depth: usize) {
        if depth > self.opts.max_depth {
            self.log_anomaly(&Anomaly::MaxDepthExceeded);
            return;
        }

        // The absent state carries no dynamic type, so it is exempt
        // from the identity check and falls through to the
        // nil-asymmetry rule below.
        let either_absent = unwrap(a).is_none() || unwrap(b).is_none();
        if !either_absent && !a.same_type(b) {
            self.record(&a.type_label(), &b.type_label());
            self.log_anomaly(&Anomaly::TypeMismatch);
            return;
        }

        // Unwrap pointer indirection; None is the absent state.
        let (a, b) = match (unwrap(a), unwrap(b)) {
            (Some(a), Some(b)) => (a, b),
            (Some(a), None) => {
                self.record(&a.to_string(), NIL_POINTER);
                return;
            }
            (None, Some(b)) => {
                self.record(NIL_POINTER, &b.to_string());
                return;
            }
            (None, None) => return,
        };

        // Pointers of matching kind can still point at differing
        // pointee types.
        if !a.same_type(b) {
            self.record(&a.type_label(), &b.type_label());
            self.log_anomaly(&Anomaly::TypeMismatch);
            return;
        }

        match (a, b) {
            // Leaves with domain-specific equality: compare by the
            // type's own notion of equal, never descend.
            (Value::Timestamp(x), Value::Timestamp(y)) => {
                if x != y {
                    self.record(&a.to_string(), &b.to_string());
                }
            }
            (Value::Decimal(x), Value::Decimal(y)) => {
                if x != y {
                    self.record(&a.to_string(), &b.to_string());
                }
            }

            (Value::Record { fields: af, .. }, Value::Record { fields: bf, .. }) => {
                for (fa, fb) in af.iter().zip(bf.iter()) {
                    if self.at_cap() {
                        self.truncated = true;
                        break;
                    }
                    if fa.private && !self.opts.compare_private_fields {
                        continue;
                    }
                    self.path.push(fa.name.clone());
                    self.compare(&fa.value, &fb.value, depth + 1);
                    self.path.pop();
                }
            }

            (Value::Map(x), Value::Map(y)) => match (x, y) {
                (None, None) => {}
                (None, Some(_)) => self.record(NIL_MAP, &b.to_string()),
                (Some(_), None) => self.record(&a.to_string(), NIL_MAP),
                (Some(am), Some(bm)) => self.compare_maps(am, bm, depth),
            },

            (Value::List(x), Value::List(y)) => match (x, y) {
                (None, None) => {}
                (None, Some(_)) => self.record(NIL_LIST, &b.to_string()),
                (Some(_), None) => self.record(&a.to_string(), NIL_LIST),
                (Some(ai), Some(bi)) => self.compare_lists(ai, bi, depth),
            },

            // Floats compare through fixed-point rendering at the
            // configured precision, so representation noise in the
            // lowest-order bits does not count as a difference. The
            // original values are recorded, not the rounded text.
            (Value::Float(x), Value::Float(y)) => {
                let ar = format!("{:.*}", self.opts.float_precision, x);
                let br = format!("{:.*}", self.opts.float_precision, y);
                if ar != br {
                    self.record(&x.to_string(), &y.to_string());
                }
            }

            (Value::Bool(x), Value::Bool(y)) => {
                if x != y {
                    self.record(&x.to_string(), &y.to_string());
                }
            }
            (Value::Int(x), Value::Int(y)) => {
                if x != y {
                    self.record(&x.to_string(), &y.to_string());
                }
            }
            (Value::Uint(x), Value::Uint(y)) => {
                if x != y {
                    self.record(&x.to_string(), &y.to_string());
                }
            }
            (Value::Text(x), Value::Text(y)) => {
                if x != y {
                    self.record(x, y);
                }
            }

            // Judged equal by policy, never a difference.
            (Value::Unsupported(kind), Value::Unsupported(_)) => {
                self.log_anomaly(&Anomaly::UnsupportedKind(kind.clone()));
            }

            // same_type holds and pointers are unwrapped, so the
            // pairs above are exhaustive in practice.
            _ => {}
        }
    }

    fn compare_maps(
        &mut self,
        am: &BTreeMap<String, Value>,
        bm: &BTreeMap<String, Value>,
        depth: usize,
    ) {
        for (key, aval) in am {
            if self.at_cap() {
                self.truncated = true;
                return;
            }
            self.path.push(format!("map[{}]", key));
            match bm.get(key) {
                Some(bval) => self.compare(aval, bval, depth + 1),
                None => self.record(&aval.to_string(), DOES_NOT_HAVE_KEY),
            }
            self.path.pop();
        }

        for (key, bval) in bm {
            if am.contains_key(key) {
                continue;
            }
            if self.at_cap() {
                self.truncated = true;
                return;
            }
            self.path.push(format!("map[{}]", key));
            self.record(DOES_NOT_HAVE_KEY, &bval.to_string());
            self.path.pop();
        }
    }

    fn compare_lists(&mut self, ai: &[Value], bi: &[Value], depth: usize) {
        let n = ai.len().max(bi.len());
        for i in 0..n {
            if self.at_cap() {
                self.truncated = true;
                break;
            }
            self.path.push(format!("list[{}]", i));
            match (ai.get(i), bi.get(i)) {
                (Some(x), Some(y)) => self.compare(x, y, depth + 1),
                (Some(x), None) => self.record(&x.to_string(), NO_VALUE),
                (None, Some(y)) => self.record(NO_VALUE, &y.to_string()),
                (None, None) => {}
            }
            self.path.pop();
        }
    }

    fn at_cap(&self) -> bool {
        self.diffs.len() >= self.opts.diff_cap()
    }

    fn record(&mut self, left: &str, right: &str) {
        if self.at_cap() {
            self.truncated = true;
            return;
        }
        if self.path.is_empty() {
            self.diffs.push(format!("{} != {}", left, right));
        } else {
            self.diffs
                .push(format!("{}: {} != {}", self.path.join("."), left, right));
        }
    }

    fn log_anomaly(&self, anomaly: &Anomaly) {
        if self.opts.log_errors {
            log::warn!("{}", anomaly);
        }
    }
}

fn unwrap(mut v: &Value) -> Option<&Value> {
    loop {
        match v {
            Value::Pointer(Some(inner)) => v = inner,
            Value::Pointer(None) => return None,
            other => return Some(other),
        }
    }
}
