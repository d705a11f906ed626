use crate::error::TransformError;
use crate::transforms::lag::Lag;
use crate::transforms::{Transform, DEFAULT_LAG};
use std::collections::HashMap;
use tracing::{debug, trace};

/// Prefix of the exported symbol names.
const SYMBOL_PREFIX: &str = "_stocks_";

/// A transform registered under a stable name for dynamic lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryPoint {
    pub transform: Transform,
    /// Stable name (e.g. "pdiffs").
    pub name: &'static str,
    /// Exported symbol (e.g. "_stocks_pdiffs").
    pub symbol: String,
    /// Number of arguments, including the series itself.
    pub arity: usize,
    /// Lag used when the caller omits one.
    pub default_lag: usize,
}

impl EntryPoint {
    fn new(transform: Transform) -> Self {
        let name = transform.name();
        EntryPoint {
            transform,
            name,
            symbol: format!("{}{}", SYMBOL_PREFIX, name),
            arity: if transform.takes_lag() { 2 } else { 1 },
            default_lag: DEFAULT_LAG,
        }
    }

    /// Resolves the effective lag for a call against a series of `len` values.
    fn resolve_lag(&self, lag: Option<i64>, len: usize) -> Result<usize, TransformError> {
        if !self.transform.takes_lag() {
            return match lag {
                None | Some(1) => Ok(DEFAULT_LAG),
                Some(_) => Err(TransformError::ArityMismatch {
                    name: self.name,
                    arity: self.arity,
                }),
            };
        }

        match lag {
            Some(value) => Lag::from_signed(value, len).map(Lag::get),
            None => Ok(self.default_lag),
        }
    }
}

/// Registry of the lagged transforms, addressable by name or symbol.
#[derive(Debug, Clone)]
pub struct TransformRegistry {
    entries: Vec<EntryPoint>,
    index: HashMap<String, usize>,
}

impl TransformRegistry {
    /// Creates a registry populated with the four built-in transforms.
    pub fn new() -> Self {
        let entries: Vec<EntryPoint> = [
            Transform::Diffs,
            Transform::PChanges,
            Transform::PDiffs,
            Transform::Ratios,
        ]
        .into_iter()
        .map(EntryPoint::new)
        .collect();

        let mut index = HashMap::with_capacity(entries.len() * 2);
        for (position, entry) in entries.iter().enumerate() {
            index.insert(entry.name.to_string(), position);
            index.insert(entry.symbol.clone(), position);
        }

        TransformRegistry { entries, index }
    }

    /// All entry points in registration order.
    pub fn entries(&self) -> &[EntryPoint] {
        &self.entries
    }

    /// Looks up an entry point by stable name or exported symbol.
    pub fn lookup(&self, name: &str) -> Option<&EntryPoint> {
        self.index.get(name).map(|&position| &self.entries[position])
    }

    /// Calls the transform registered under `name`.
    ///
    /// `lag` mirrors a host-side integer: `None` selects the default lag and
    /// non-positive values are rejected.
    pub fn call(
        &self,
        name: &str,
        x: &[f64],
        lag: Option<i64>,
    ) -> Result<Vec<f64>, TransformError> {
        let entry = self
            .lookup(name)
            .ok_or_else(|| TransformError::UnknownTransform(name.to_string()))?;
        let lag = entry.resolve_lag(lag, x.len())?;

        debug!(
            transform = entry.name,
            lag,
            len = x.len(),
            "TransformRegistry: dispatching call"
        );

        let result = entry.transform.apply(x, lag)?;

        trace!(
            transform = entry.name,
            output_len = result.len(),
            "TransformRegistry: call completed"
        );

        Ok(result)
    }
}

impl Default for TransformRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registers_four_entry_points_in_order() {
        let registry = TransformRegistry::new();
        let names: Vec<&str> = registry.entries().iter().map(|e| e.name).collect();
        assert_eq!(names, vec!["diffs", "pchanges", "pdiffs", "ratios"]);
    }

    #[test]
    fn symbols_and_arity_match_registration_table() {
        let registry = TransformRegistry::new();
        let ratios = registry.lookup("ratios").unwrap();
        assert_eq!(ratios.symbol, "_stocks_ratios");
        assert_eq!(ratios.arity, 1);

        let diffs = registry.lookup("_stocks_diffs").unwrap();
        assert_eq!(diffs.transform, Transform::Diffs);
        assert_eq!(diffs.arity, 2);
    }

    #[test]
    fn call_uses_default_lag() {
        let registry = TransformRegistry::new();
        let result = registry.call("diffs", &[1.0, 2.0, 4.0, 8.0], None).unwrap();
        assert_eq!(result, vec![1.0, 2.0, 4.0]);
    }

    #[test]
    fn call_by_symbol_with_explicit_lag() {
        let registry = TransformRegistry::new();
        let result = registry
            .call("_stocks_pchanges", &[10.0, 5.0, 20.0], Some(2))
            .unwrap();
        assert_eq!(result, vec![100.0]);
    }

    #[test]
    fn call_rejects_non_positive_lag() {
        let registry = TransformRegistry::new();
        assert_eq!(
            registry.call("pdiffs", &[1.0, 2.0], Some(0)),
            Err(TransformError::InvalidArgument { lag: 0, len: 2 })
        );
        assert_eq!(
            registry.call("pdiffs", &[1.0, 2.0], Some(-1)),
            Err(TransformError::InvalidArgument { lag: -1, len: 2 })
        );
    }

    #[test]
    fn ratios_rejects_explicit_lag() {
        let registry = TransformRegistry::new();
        assert!(registry.call("ratios", &[1.0, 2.0, 4.0], Some(1)).is_ok());
        assert_eq!(
            registry.call("ratios", &[1.0, 2.0, 4.0], Some(2)),
            Err(TransformError::ArityMismatch {
                name: "ratios",
                arity: 1
            })
        );
    }

    #[test]
    fn unknown_name_fails() {
        let registry = TransformRegistry::new();
        assert_eq!(
            registry.call("log_returns", &[1.0, 2.0], None),
            Err(TransformError::UnknownTransform("log_returns".to_string()))
        );
    }
}
