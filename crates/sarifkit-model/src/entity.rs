use serde::Serialize;
use serde_json::Value as JsonValue;
use thiserror::Error;

/// Error returned by [`SarifEntity::get`] when the requested property is not
/// a currently-present key on the entity's record.
///
/// The display string is part of the observable contract; callers match on
/// it verbatim.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Property '{name}' does not exist.")]
pub struct PropertyNotFound {
    name: String,
}

impl PropertyNotFound {
    pub(crate) fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }

    /// The property name that was looked up.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Shared behavior of all five SARIF entities: each wraps a single backing
/// record and exposes it whole or field-by-field.
pub trait SarifEntity {
    /// The backing SARIF record type.
    type Record: Serialize;

    /// Read-only view of the backing record.
    ///
    /// Callers must not mutate through this view; mutation goes through the
    /// entity's own methods so the invariants (dedup, occurrence counting,
    /// rule replacement) hold.
    fn properties(&self) -> &Self::Record;

    /// The JSON object whose keys [`get`](SarifEntity::get) consults.
    ///
    /// Defaults to the full record. `Tool` narrows this to its nested
    /// `driver` component, because the tool's public-facing fields live one
    /// level down.
    fn lookup_value(&self) -> JsonValue {
        // Records are plain data with string keys; serialization cannot fail.
        serde_json::to_value(self.properties()).unwrap_or(JsonValue::Null)
    }

    /// Look up a top-level property of the record by its serialized name
    /// (e.g. `"ruleId"`, `"$schema"`).
    ///
    /// Only currently-present keys resolve: an optional field that was never
    /// set is absent, not null.
    fn get(&self, name: &str) -> Result<JsonValue, PropertyNotFound> {
        match self.lookup_value() {
            JsonValue::Object(mut map) => {
                map.remove(name).ok_or_else(|| PropertyNotFound::new(name))
            }
            _ => Err(PropertyNotFound::new(name)),
        }
    }
}
