//! Comparison options.
//!
//! An explicit configuration value threaded into every entry point;
//! there is no process-wide mutable state. Defaults: precision 10,
//! caps 10/10, private fields and error logging off. `Deserialize`
//! with `serde(default)` lets an embedding application read partial
//! overrides from config files.

use serde::{Deserialize, Serialize};

/// Knobs for one comparison session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Fractional digits used to render and compare float leaves.
    pub float_precision: usize,
    /// Hard cap on emitted difference records per top-level call.
    pub max_diffs: usize,
    /// Hard cap on structural descent depth.
    pub max_depth: usize,
    /// Whether private record fields are visited.
    pub compare_private_fields: bool,
    /// Whether internal anomalies are written to the log facade.
    pub log_errors: bool,
}

impl Default for Options {
    fn default() -> Options {
        Options {
            float_precision: 10,
            max_diffs: 10,
            max_depth: 10,
            compare_private_fields: false,
            log_errors: false,
        }
    }
}

impl Options {
    /// Effective diff cap; a configured zero is clamped to one so a
    /// session can always report at least the first mismatch.
    pub(crate) fn diff_cap(&self) -> usize {
        self.max_diffs.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values() {
        let opts = Options::default();
        assert_eq!(opts.float_precision, 10);
        assert_eq!(opts.max_diffs, 10);
        assert_eq!(opts.max_depth, 10);
        assert!(!opts.compare_private_fields);
        assert!(!opts.log_errors);
    }

    #[test]
    fn partial_config_deserializes_over_defaults() {
        let opts: Options = serde_json::from_str(r#"{"max_diffs": 3}"#).unwrap();
        assert_eq!(opts.max_diffs, 3);
        assert_eq!(opts.max_depth, 10);
    }

    #[test]
    fn zero_diff_cap_is_clamped() {
        let opts = Options {
            max_diffs: 0,
            ..Options::default()
        };
        assert_eq!(opts.diff_cap(), 1);
    }
}
