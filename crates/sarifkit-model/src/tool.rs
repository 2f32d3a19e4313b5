use crate::entity::SarifEntity;
use crate::rule::Rule;
use sarifkit_types::{Tool as ToolRecord, ToolComponent};
use serde_json::Value as JsonValue;

/// The analysis tool (or tool pipeline) that produced a run.
///
/// The tool's public-facing fields live on its nested `driver` component;
/// property lookup via [`SarifEntity::get`] consults the driver, not the
/// outer record.
#[derive(Clone, Debug)]
pub struct Tool {
    record: ToolRecord,
}

impl Tool {
    pub fn new(name: impl Into<String>) -> Self {
        Self::from_driver(ToolComponent::new(name))
    }

    /// Wrap an existing driver component, e.g. one decoded from a document.
    pub fn from_driver(driver: ToolComponent) -> Self {
        Self {
            record: ToolRecord { driver },
        }
    }

    /// The name of the tool component.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.record.driver.name = name.into();
        self
    }

    /// The organization or company that produced the tool component.
    pub fn organization(mut self, organization: impl Into<String>) -> Self {
        self.record.driver.organization = Some(organization.into());
        self
    }

    /// The tool component version, in whatever format the component
    /// natively provides.
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.record.driver.version = Some(version.into());
        self
    }

    /// The absolute URI at which information about this version of the tool
    /// component can be found.
    pub fn information_uri(mut self, uri: impl Into<String>) -> Self {
        self.record.driver.information_uri = Some(uri.into());
        self
    }

    /// Add a rule to the driver's reporting catalog.
    ///
    /// Rules are keyed by `id`: any existing entry with the incoming id is
    /// removed first, then the incoming record is appended. Last write wins,
    /// and the surviving rule sits at the end of the sequence rather than in
    /// the replaced entry's slot.
    pub fn add_rule(mut self, rule: &Rule) -> Self {
        let incoming = rule.properties();
        let rules = self.record.driver.rules.get_or_insert_with(Vec::new);
        rules.retain(|existing| existing.id != incoming.id);
        rules.push(incoming.clone());
        self
    }
}

impl SarifEntity for Tool {
    type Record = ToolRecord;

    fn properties(&self) -> &ToolRecord {
        &self.record
    }

    fn lookup_value(&self) -> JsonValue {
        serde_json::to_value(&self.record.driver).unwrap_or(JsonValue::Null)
    }
}
