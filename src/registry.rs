//! Process-lifetime registries and the safe-execution wrapper.
//!
//! Both registries are plain owned structs: the caller constructs one
//! and passes it where needed, so there is no hidden global state and
//! tests cannot couple through statics. Entries accumulate for the
//! life of the value; there is no eviction. Single-threaded use is
//! assumed throughout — wrap a registry in a mutex before sharing it
//! across threads.

use std::collections::HashMap;

use crate::error::MathError;

/// A callable stored in the function registry.
pub type RegisteredFn = Box<dyn Fn(&[f64]) -> Result<f64, MathError>>;

struct FunctionEntry {
    func: RegisteredFn,
    description: String,
}

/// Name → function registry with descriptions.
///
/// # Examples
/// ```
/// use mathkit::registry::FunctionRegistry;
///
/// let mut registry = FunctionRegistry::new();
/// registry.register("sum", "adds all arguments", |args| {
///     Ok(args.iter().sum())
/// });
/// assert_eq!(registry.execute("sum", &[1.0, 2.0, 3.0]).unwrap(), 6.0);
/// assert!(registry.execute("missing", &[]).is_err());
/// ```
#[derive(Default)]
pub struct FunctionRegistry {
    entries: HashMap<String, FunctionEntry>,
}

impl FunctionRegistry {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Stores a callable under `name`, replacing any previous entry.
    pub fn register<F>(&mut self, name: &str, description: &str, func: F)
    where
        F: Fn(&[f64]) -> Result<f64, MathError> + 'static,
    {
        self.entries.insert(
            name.to_string(),
            FunctionEntry {
                func: Box::new(func),
                description: description.to_string(),
            },
        );
    }

    /// Looks up `name` and invokes it with `args`.
    ///
    /// # Errors
    /// - [`MathError::NotFound`] if nothing is registered under `name`.
    /// - [`MathError::Execution`] wrapping the inner error, with the
    ///   registry name attached for context, if the function fails.
    pub fn execute(&self, name: &str, args: &[f64]) -> Result<f64, MathError> {
        let entry = self
            .entries
            .get(name)
            .ok_or_else(|| MathError::NotFound(name.to_string()))?;
        (entry.func)(args).map_err(|source| MathError::Execution {
            name: name.to_string(),
            source: Box::new(source),
        })
    }

    /// Description stored for `name`, if registered.
    pub fn description(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(|e| e.description.as_str())
    }

    /// Registered names, in arbitrary order.
    pub fn names(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ============================================================================
// Dataset registry
// ============================================================================

/// A field value in a dataset record.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Number(f64),
    Text(String),
}

/// One record: field name → value.
pub type Record = HashMap<String, Value>;

/// Aggregation applied to a numeric field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregateOp {
    Sum,
    Mean,
    Max,
    Min,
}

/// Name → growing list of records.
///
/// # Examples
/// ```
/// use mathkit::registry::{AggregateOp, DatasetRegistry, Value};
///
/// let mut datasets = DatasetRegistry::new();
/// datasets.create("runs");
/// for duration in [1.0, 2.0, 3.0] {
///     let mut record = std::collections::HashMap::new();
///     record.insert("duration".to_string(), Value::Number(duration));
///     datasets.append("runs", record).unwrap();
/// }
/// let total = datasets.aggregate("runs", "duration", AggregateOp::Sum).unwrap();
/// assert_eq!(total, 6.0);
/// ```
#[derive(Default)]
pub struct DatasetRegistry {
    datasets: HashMap<String, Vec<Record>>,
}

impl DatasetRegistry {
    pub fn new() -> Self {
        Self {
            datasets: HashMap::new(),
        }
    }

    /// Creates an empty dataset under `name`. Creating an existing
    /// name is a no-op; existing records are kept.
    pub fn create(&mut self, name: &str) {
        self.datasets.entry(name.to_string()).or_default();
    }

    /// Appends a record to the named dataset.
    ///
    /// # Errors
    /// Returns [`MathError::NotFound`] if the dataset does not exist.
    pub fn append(&mut self, name: &str, record: Record) -> Result<(), MathError> {
        let records = self
            .datasets
            .get_mut(name)
            .ok_or_else(|| MathError::NotFound(name.to_string()))?;
        records.push(record);
        Ok(())
    }

    /// Number of records in the named dataset, if it exists.
    pub fn len_of(&self, name: &str) -> Option<usize> {
        self.datasets.get(name).map(Vec::len)
    }

    /// Aggregates the numeric values of `field` across the dataset.
    ///
    /// Records missing the field, or holding a non-numeric value in
    /// it, are skipped.
    ///
    /// # Errors
    /// - [`MathError::NotFound`] if the dataset does not exist.
    /// - [`MathError::NoNumericValues`] if no record has a numeric
    ///   value for `field`.
    pub fn aggregate(&self, name: &str, field: &str, op: AggregateOp) -> Result<f64, MathError> {
        let records = self
            .datasets
            .get(name)
            .ok_or_else(|| MathError::NotFound(name.to_string()))?;

        let values: Vec<f64> = records
            .iter()
            .filter_map(|record| match record.get(field) {
                Some(Value::Number(x)) => Some(*x),
                _ => None,
            })
            .collect();
        if values.is_empty() {
            return Err(MathError::NoNumericValues(field.to_string()));
        }

        let result = match op {
            AggregateOp::Sum => values.iter().sum(),
            AggregateOp::Mean => values.iter().sum::<f64>() / values.len() as f64,
            AggregateOp::Max => values.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            AggregateOp::Min => values.iter().copied().fold(f64::INFINITY, f64::min),
        };
        Ok(result)
    }
}

// ============================================================================
// Custom error messages
// ============================================================================

/// Code → custom error message store.
///
/// Lets an application define its own error vocabulary once and raise
/// [`MathError::UserDefined`] values by code afterwards. Raising an
/// undefined code still produces an error, with a generic message, so
/// a typo in a code never turns into a silent success.
///
/// # Examples
/// ```
/// use mathkit::registry::ErrorMessages;
///
/// let mut messages = ErrorMessages::new();
/// messages.define("E_NEG_BUDGET", "budget cannot be negative");
/// let err = messages.raise("E_NEG_BUDGET", Some("got -5"));
/// assert_eq!(err.to_string(), "E_NEG_BUDGET: budget cannot be negative | got -5");
/// ```
#[derive(Debug, Default, Clone)]
pub struct ErrorMessages {
    messages: HashMap<String, String>,
}

impl ErrorMessages {
    pub fn new() -> Self {
        Self {
            messages: HashMap::new(),
        }
    }

    /// Stores (or replaces) the message for `code`.
    pub fn define(&mut self, code: &str, message: &str) {
        self.messages.insert(code.to_string(), message.to_string());
    }

    /// Message currently stored for `code`, if any.
    pub fn message(&self, code: &str) -> Option<&str> {
        self.messages.get(code).map(String::as_str)
    }

    /// Builds the [`MathError::UserDefined`] for `code`, appending
    /// `detail` after a `" | "` separator when given. Unknown codes
    /// yield an "unknown error code" message.
    pub fn raise(&self, code: &str, detail: Option<&str>) -> MathError {
        let mut message = match self.messages.get(code) {
            Some(stored) => stored.clone(),
            None => "unknown error code".to_string(),
        };
        if let Some(detail) = detail {
            message.push_str(" | ");
            message.push_str(detail);
        }
        MathError::UserDefined {
            code: code.to_string(),
            message,
        }
    }
}

// ============================================================================
// Safe execution
// ============================================================================

/// Tagged success/failure record produced by [`safe_run`].
///
/// Exactly one of `result` and `error` is populated.
#[derive(Debug, Clone, PartialEq)]
pub struct RunOutcome<T> {
    pub success: bool,
    pub result: Option<T>,
    pub error: Option<String>,
}

/// Runs a fallible operation, folding the outcome into a record
/// instead of propagating the error.
///
/// This is the one place in the crate where an error is absorbed
/// rather than returned; callers who prefer `Result` simply call the
/// operation directly.
///
/// # Examples
/// ```
/// use mathkit::registry::safe_run;
/// use mathkit::arithmetic::divide;
///
/// let ok = safe_run(|| divide(10.0, 2.0));
/// assert!(ok.success);
/// assert_eq!(ok.result, Some(5.0));
///
/// let failed = safe_run(|| divide(10.0, 0.0));
/// assert!(!failed.success);
/// assert!(failed.error.unwrap().contains("division by zero"));
/// ```
pub fn safe_run<T, F>(operation: F) -> RunOutcome<T>
where
    F: FnOnce() -> Result<T, MathError>,
{
    match operation() {
        Ok(value) => RunOutcome {
            success: true,
            result: Some(value),
            error: None,
        },
        Err(e) => RunOutcome {
            success: false,
            result: None,
            error: Some(e.to_string()),
        },
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pairs: &[(&str, Value)]) -> Record {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_register_and_execute() {
        let mut registry = FunctionRegistry::new();
        registry.register("sum", "adds all arguments", |args| Ok(args.iter().sum()));
        assert_eq!(registry.execute("sum", &[1.0, 2.0, 3.0]).unwrap(), 6.0);
        assert_eq!(registry.description("sum"), Some("adds all arguments"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_execute_missing() {
        let registry = FunctionRegistry::new();
        assert_eq!(
            registry.execute("missing", &[]),
            Err(MathError::NotFound("missing".into()))
        );
    }

    #[test]
    fn test_execute_wraps_inner_error() {
        let mut registry = FunctionRegistry::new();
        registry.register("fails", "always fails", |_| Err(MathError::DivisionByZero));
        match registry.execute("fails", &[]) {
            Err(MathError::Execution { name, source }) => {
                assert_eq!(name, "fails");
                assert_eq!(*source, MathError::DivisionByZero);
            }
            other => panic!("expected Execution error, got {other:?}"),
        }
    }

    #[test]
    fn test_register_replaces() {
        let mut registry = FunctionRegistry::new();
        registry.register("f", "v1", |_| Ok(1.0));
        registry.register("f", "v2", |_| Ok(2.0));
        assert_eq!(registry.execute("f", &[]).unwrap(), 2.0);
        assert_eq!(registry.description("f"), Some("v2"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_dataset_lifecycle() {
        let mut datasets = DatasetRegistry::new();
        datasets.create("runs");
        assert_eq!(datasets.len_of("runs"), Some(0));

        for x in [1.0, 2.0, 3.0, 4.0] {
            datasets
                .append("runs", record(&[("duration", Value::Number(x))]))
                .unwrap();
        }
        assert_eq!(datasets.len_of("runs"), Some(4));

        assert_eq!(
            datasets.aggregate("runs", "duration", AggregateOp::Sum).unwrap(),
            10.0
        );
        assert_eq!(
            datasets.aggregate("runs", "duration", AggregateOp::Mean).unwrap(),
            2.5
        );
        assert_eq!(
            datasets.aggregate("runs", "duration", AggregateOp::Max).unwrap(),
            4.0
        );
        assert_eq!(
            datasets.aggregate("runs", "duration", AggregateOp::Min).unwrap(),
            1.0
        );
    }

    #[test]
    fn test_dataset_not_found() {
        let mut datasets = DatasetRegistry::new();
        assert_eq!(
            datasets.append("nope", Record::new()),
            Err(MathError::NotFound("nope".into()))
        );
        assert_eq!(
            datasets.aggregate("nope", "x", AggregateOp::Sum),
            Err(MathError::NotFound("nope".into()))
        );
    }

    #[test]
    fn test_aggregate_skips_non_numeric() {
        let mut datasets = DatasetRegistry::new();
        datasets.create("mixed");
        datasets
            .append("mixed", record(&[("x", Value::Number(1.0))]))
            .unwrap();
        datasets
            .append("mixed", record(&[("x", Value::Text("n/a".into()))]))
            .unwrap();
        datasets
            .append("mixed", record(&[("y", Value::Number(9.0))]))
            .unwrap();

        assert_eq!(
            datasets.aggregate("mixed", "x", AggregateOp::Sum).unwrap(),
            1.0
        );
        // field present only as text → no numeric values
        assert_eq!(
            datasets.aggregate("mixed", "label", AggregateOp::Sum),
            Err(MathError::NoNumericValues("label".into()))
        );
    }

    #[test]
    fn test_create_existing_keeps_records() {
        let mut datasets = DatasetRegistry::new();
        datasets.create("d");
        datasets
            .append("d", record(&[("x", Value::Number(1.0))]))
            .unwrap();
        datasets.create("d");
        assert_eq!(datasets.len_of("d"), Some(1));
    }

    #[test]
    fn test_error_messages_define_and_raise() {
        let mut messages = ErrorMessages::new();
        messages.define("E_NEG_BUDGET", "budget cannot be negative");
        assert_eq!(
            messages.message("E_NEG_BUDGET"),
            Some("budget cannot be negative")
        );

        let err = messages.raise("E_NEG_BUDGET", None);
        assert_eq!(
            err,
            MathError::UserDefined {
                code: "E_NEG_BUDGET".into(),
                message: "budget cannot be negative".into(),
            }
        );

        let with_detail = messages.raise("E_NEG_BUDGET", Some("got -5"));
        assert_eq!(
            with_detail.to_string(),
            "E_NEG_BUDGET: budget cannot be negative | got -5"
        );
    }

    #[test]
    fn test_error_messages_unknown_code_still_errors() {
        let messages = ErrorMessages::new();
        let err = messages.raise("E_MISSING", None);
        assert!(matches!(
            &err,
            MathError::UserDefined { code, message }
                if code == "E_MISSING" && message == "unknown error code"
        ));
    }

    #[test]
    fn test_error_messages_redefine_replaces() {
        let mut messages = ErrorMessages::new();
        messages.define("E", "first");
        messages.define("E", "second");
        assert_eq!(messages.message("E"), Some("second"));
    }

    #[test]
    fn test_safe_run_success_and_failure() {
        let ok = safe_run(|| crate::arithmetic::divide(10.0, 2.0));
        assert!(ok.success);
        assert_eq!(ok.result, Some(5.0));
        assert_eq!(ok.error, None);

        let failed = safe_run(|| crate::arithmetic::divide(10.0, 0.0));
        assert!(!failed.success);
        assert_eq!(failed.result, None);
        assert!(failed.error.unwrap().contains("division by zero"));
    }
}
