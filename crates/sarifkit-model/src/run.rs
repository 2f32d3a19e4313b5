use crate::entity::SarifEntity;
use crate::result::Result;
use crate::tool::Tool;
use sarifkit_types::Run as RunRecord;

/// One execution of one analysis tool plus the findings it produced.
///
/// The tool record is snapshotted at construction: mutating the original
/// [`Tool`] afterwards does not change the run.
#[derive(Clone, Debug)]
pub struct Run {
    record: RunRecord,
}

impl Run {
    pub fn new(tool: &Tool) -> Self {
        Self {
            record: RunRecord {
                tool: tool.properties().clone(),
                results: None,
            },
        }
    }

    /// Replace the stored tool snapshot.
    pub fn tool(mut self, tool: &Tool) -> Self {
        self.record.tool = tool.properties().clone();
        self
    }

    /// Add a result, deduplicating by `message.text`.
    ///
    /// Existing results are scanned in insertion order. The first entry with
    /// the same message text absorbs the incoming result: its locations are
    /// extended with the incoming ones (initialized to empty first if
    /// unset), and `occurrenceCount` becomes the sum of both sides, each
    /// defaulting to 1 when absent — an un-located result still counts as
    /// one occurrence. Without a match, the incoming record is appended.
    ///
    /// Identity is message text alone. On a merge the matched entry keeps
    /// its own `ruleId` and `level`; differing values on the incoming result
    /// are discarded silently.
    pub fn add_result(mut self, result: &Result) -> Self {
        let incoming = result.properties();
        if let Some(results) = self.record.results.as_mut() {
            if let Some(matched) = results
                .iter_mut()
                .find(|existing| existing.message.text == incoming.message.text)
            {
                let locations = matched.locations.get_or_insert_with(Vec::new);
                if let Some(extra) = &incoming.locations {
                    locations.extend(extra.iter().cloned());
                }
                matched.occurrence_count = Some(
                    matched.occurrence_count.unwrap_or(1) + incoming.occurrence_count.unwrap_or(1),
                );
                return self;
            }
        }
        self.record
            .results
            .get_or_insert_with(Vec::new)
            .push(incoming.clone());
        self
    }
}

impl SarifEntity for Run {
    type Record = RunRecord;

    fn properties(&self) -> &RunRecord {
        &self.record
    }
}
