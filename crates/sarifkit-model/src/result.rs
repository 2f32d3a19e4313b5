use crate::entity::SarifEntity;
use sarifkit_types::{Level, Location, Message, Result as ResultRecord};

/// A single finding produced by an analysis tool.
///
/// Within a run, results are identified by `message.text`; see
/// [`Run::add_result`](crate::Run::add_result) for the merge semantics.
#[derive(Clone, Debug)]
pub struct Result {
    record: ResultRecord,
}

impl Result {
    /// Plain text normalizes to `{ "text": ... }`.
    pub fn new(message: impl Into<Message>) -> Self {
        Self::from_record(ResultRecord::new(message))
    }

    /// Wrap an existing result record, e.g. one decoded from a document.
    /// Carries `locations` and `occurrenceCount` through, so feeding the
    /// wrapped result back into a run merges with correct arithmetic.
    pub fn from_record(record: ResultRecord) -> Self {
        Self { record }
    }

    /// The id of the rule this result is relevant to, if any.
    pub fn rule_id(mut self, rule_id: impl Into<String>) -> Self {
        self.record.rule_id = Some(rule_id.into());
        self
    }

    /// The severity level of the result.
    pub fn level(mut self, level: Level) -> Self {
        self.record.level = Some(level);
        self
    }

    /// Replace the result message. Plain text normalizes to `{ "text": ... }`.
    pub fn message(mut self, message: impl Into<Message>) -> Self {
        self.record.message = message.into();
        self
    }

    /// Record one more occurrence site.
    ///
    /// Appends the location and bumps `occurrenceCount` by exactly one (the
    /// first call sets it to 1). Batch addition is repeated calls.
    pub fn add_location(mut self, location: Location) -> Self {
        self.record
            .locations
            .get_or_insert_with(Vec::new)
            .push(location);
        self.record.occurrence_count = Some(self.record.occurrence_count.unwrap_or(0) + 1);
        self
    }
}

impl SarifEntity for Result {
    type Record = ResultRecord;

    fn properties(&self) -> &ResultRecord {
        &self.record
    }
}
