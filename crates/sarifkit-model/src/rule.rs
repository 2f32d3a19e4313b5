use crate::entity::SarifEntity;
use sarifkit_types::{Message, ReportingDescriptor};

/// Metadata that describes a class of finding reported by a tool.
///
/// The record always contains `id`; every other field appears only once
/// set. `id` is the identity key for [`Tool::add_rule`](crate::Tool::add_rule)
/// replacement and is immutable after construction.
#[derive(Clone, Debug)]
pub struct Rule {
    record: ReportingDescriptor,
}

impl Rule {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            record: ReportingDescriptor::new(id),
        }
    }

    /// A rule identifier that is understandable to an end user.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.record.name = Some(name.into());
        self
    }

    /// A concise, single-sentence description of the rule. Plain text
    /// normalizes to `{ "text": ... }`.
    pub fn short_description(mut self, description: impl Into<Message>) -> Self {
        self.record.short_description = Some(description.into());
        self
    }

    /// A description detailed enough to resolve any problem the rule
    /// indicates. Plain text normalizes to `{ "text": ... }`.
    pub fn full_description(mut self, description: impl Into<Message>) -> Self {
        self.record.full_description = Some(description.into());
        self
    }

    /// The URI of the rule's primary documentation.
    pub fn help_uri(mut self, uri: impl Into<String>) -> Self {
        self.record.help_uri = Some(uri.into());
        self
    }
}

impl SarifEntity for Rule {
    type Record = ReportingDescriptor;

    fn properties(&self) -> &ReportingDescriptor {
        &self.record
    }
}
