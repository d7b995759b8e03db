use std::collections::{BTreeMap, HashSet};
use std::hash::Hash;

// Field name to human-readable message, serialized under the "error" key on
// validation failure. Ordered so responses are deterministic.
pub type ValidationErrors = BTreeMap<String, String>;

// Accumulator of per-field validation failures. The first failure recorded
// for a field wins; later checks on the same field are ignored.
#[derive(Debug, Default)]
pub struct Validator {
    errors: ValidationErrors,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_error(&mut self, field: &str, message: &str) {
        self.errors
            .entry(field.to_string())
            .or_insert_with(|| message.to_string());
    }

    pub fn check(&mut self, ok: bool, field: &str, message: &str) {
        if !ok {
            self.add_error(field, message);
        }
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn into_errors(self) -> ValidationErrors {
        self.errors
    }
}

// True iff no two elements of the slice are equal.
pub fn unique<T: Eq + Hash>(values: &[T]) -> bool {
    let mut seen = HashSet::with_capacity(values.len());
    values.iter().all(|value| seen.insert(value))
}
