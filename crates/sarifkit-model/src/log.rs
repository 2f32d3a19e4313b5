use crate::entity::SarifEntity;
use crate::result::Result as SarifResult;
use crate::run::Run;
use crate::tool::Tool;
use anyhow::Context;
use camino::Utf8Path;
use sarifkit_types::{Log as LogRecord, Result as ResultRecord, ToolComponent};
use serde_json::Value as JsonValue;
use std::fs;

/// Top-level SARIF 2.1.0 document.
///
/// `$schema` and `version` are fixed constants set at construction; there is
/// no mutator for either.
#[derive(Clone, Debug, Default)]
pub struct Log {
    record: LogRecord,
}

impl Log {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a run. Runs are never deduplicated; multiple runs with
    /// identical tools are legal and common.
    pub fn add_run(mut self, run: &Run) -> Self {
        self.record.runs.push(run.properties().clone());
        self
    }

    /// Reconstruct a log from a serialized SARIF document.
    ///
    /// This is a normalizing load, not a structural round-trip:
    /// - the canonical `$schema`/`version` are used regardless of what the
    ///   source document says;
    /// - driver and result fields the object model does not know are
    ///   dropped;
    /// - every result is fed back through [`Run::add_result`], so source
    ///   entries sharing a message text are re-merged on load;
    /// - a `runs` or `results` value that is not an array is treated as
    ///   absent, and entries missing a decodable `tool.driver` or `message`
    ///   are skipped rather than failing the load.
    pub fn from_json(input: &str) -> anyhow::Result<Self> {
        let document: JsonValue =
            serde_json::from_str(input).context("parse sarif document")?;
        let mut log = Log::new();

        let Some(runs) = document.get("runs").and_then(JsonValue::as_array) else {
            return Ok(log);
        };

        for entry in runs {
            let Some(driver) = entry.pointer("/tool/driver") else {
                continue;
            };
            let Ok(driver) = serde_json::from_value::<ToolComponent>(driver.clone()) else {
                continue;
            };
            let mut run = Run::new(&Tool::from_driver(driver));

            if let Some(results) = entry.get("results").and_then(JsonValue::as_array) {
                for item in results {
                    let Ok(record) = serde_json::from_value::<ResultRecord>(item.clone()) else {
                        continue;
                    };
                    run = run.add_result(&SarifResult::from_record(record));
                }
            }

            log = log.add_run(&run);
        }

        Ok(log)
    }

    /// Read and reconstruct a log from a file. See [`Log::from_json`].
    pub fn from_file(path: &Utf8Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path).with_context(|| format!("read {path}"))?;
        Self::from_json(&text).with_context(|| format!("load sarif log from {path}"))
    }
}

impl SarifEntity for Log {
    type Record = LogRecord;

    fn properties(&self) -> &LogRecord {
        &self.record
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::Rule;
    use sarifkit_types::{ArtifactLocation, Location, PhysicalLocation};
    use serde_json::json;
    use std::io::Write;

    fn location_at(uri: &str) -> Location {
        Location {
            physical_location: Some(PhysicalLocation {
                artifact_location: Some(ArtifactLocation {
                    uri: Some(uri.to_string()),
                }),
                region: None,
            }),
            message: None,
        }
    }

    #[test]
    fn empty_log_serializes_to_the_canonical_document() {
        let log = Log::new();
        assert_eq!(
            serde_json::to_value(log.properties()).unwrap(),
            json!({
                "$schema": "http://json.schemastore.org/sarif-2.1.0.json",
                "version": "2.1.0",
                "runs": []
            })
        );
    }

    #[test]
    fn runs_are_appended_without_dedup() {
        let tool = Tool::new("scanner");
        let log = Log::new()
            .add_run(&Run::new(&tool))
            .add_run(&Run::new(&tool));
        assert_eq!(
            serde_json::to_value(log.properties()).unwrap(),
            json!({
                "$schema": "http://json.schemastore.org/sarif-2.1.0.json",
                "version": "2.1.0",
                "runs": [
                    { "tool": { "driver": { "name": "scanner" } } },
                    { "tool": { "driver": { "name": "scanner" } } }
                ]
            })
        );
    }

    #[test]
    fn get_resolves_the_fixed_constants() {
        let log = Log::new();
        assert_eq!(log.get("version").unwrap(), json!("2.1.0"));
        assert_eq!(
            log.get("$schema").unwrap(),
            json!("http://json.schemastore.org/sarif-2.1.0.json")
        );
        assert_eq!(
            log.get("does-not-exist").unwrap_err().to_string(),
            "Property 'does-not-exist' does not exist."
        );
    }

    #[test]
    fn built_log_merges_duplicate_messages_before_serializing() {
        let run = Run::new(&Tool::new("x"))
            .add_result(&SarifResult::new("msg1"))
            .add_result(&SarifResult::new("msg2"))
            .add_result(&SarifResult::new("msg1").add_location(location_at("a.rs")));
        let log = Log::new().add_run(&run);

        let value = serde_json::to_value(log.properties()).unwrap();
        let results = value["runs"][0]["results"].as_array().unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0]["occurrenceCount"], json!(2));
        assert_eq!(results[0]["locations"].as_array().unwrap().len(), 1);
        assert_eq!(results[1]["message"]["text"], json!("msg2"));
        assert!(results[1].get("occurrenceCount").is_none());
    }

    #[test]
    fn load_normalizes_schema_and_version() {
        let log = Log::from_json(
            r#"{ "$schema": "https://elsewhere.example/schema.json", "version": "0.0.9" }"#,
        )
        .unwrap();
        assert_eq!(
            serde_json::to_value(log.properties()).unwrap(),
            json!({
                "$schema": "http://json.schemastore.org/sarif-2.1.0.json",
                "version": "2.1.0",
                "runs": []
            })
        );
    }

    #[test]
    fn load_treats_non_array_runs_as_absent() {
        let log = Log::from_json(r#"{ "runs": "not-an-array" }"#).unwrap();
        assert!(log.properties().runs.is_empty());
    }

    #[test]
    fn load_leaves_results_absent_for_missing_or_empty_arrays() {
        let log = Log::from_json(
            r#"{
                "runs": [
                    { "tool": { "driver": { "name": "a" } } },
                    { "tool": { "driver": { "name": "b" } }, "results": [] }
                ]
            }"#,
        )
        .unwrap();
        let runs = &log.properties().runs;
        assert_eq!(runs.len(), 2);
        // Neither run recorded a result, so neither has a results sequence.
        assert_eq!(runs[0].results, None);
        assert_eq!(runs[1].results, None);
    }

    #[test]
    fn load_remerges_duplicate_message_entries() {
        let log = Log::from_json(
            r#"{
                "runs": [{
                    "tool": { "driver": { "name": "scanner" } },
                    "results": [
                        { "message": { "text": "dup" }, "occurrenceCount": 2,
                          "locations": [{ "physicalLocation": { "artifactLocation": { "uri": "a.rs" } } }] },
                        { "message": { "text": "only" } },
                        { "message": { "text": "dup" } }
                    ]
                }]
            }"#,
        )
        .unwrap();
        let results = log.properties().runs[0].results.as_ref().unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].message.text, "dup");
        // Pre-accumulated count of 2 plus one un-located occurrence.
        assert_eq!(results[0].occurrence_count, Some(3));
        assert_eq!(results[0].locations.as_ref().unwrap().len(), 1);
        assert_eq!(results[1].message.text, "only");
    }

    #[test]
    fn load_keeps_driver_rules_and_drops_unknown_fields() {
        let log = Log::from_json(
            r#"{
                "runs": [{
                    "tool": { "driver": {
                        "name": "scanner",
                        "version": "1.0.0",
                        "rules": [{ "id": "R1", "helpUri": "https://example.com" }],
                        "semanticVersion": "1.0.0-beta"
                    } },
                    "results": [
                        { "message": { "text": "m" }, "suppressions": [] }
                    ]
                }]
            }"#,
        )
        .unwrap();
        let run = &log.properties().runs[0];
        assert_eq!(run.tool.driver.name, "scanner");
        assert_eq!(run.tool.driver.version.as_deref(), Some("1.0.0"));
        let rules = run.tool.driver.rules.as_ref().unwrap();
        assert_eq!(rules[0].id, "R1");
        // Unknown driver/result fields do not survive the load.
        let value = serde_json::to_value(run).unwrap();
        assert!(value["tool"]["driver"].get("semanticVersion").is_none());
        assert!(value["results"][0].get("suppressions").is_none());
    }

    #[test]
    fn load_skips_undecodable_entries() {
        let log = Log::from_json(
            r#"{
                "runs": [
                    { "noTool": true },
                    { "tool": { "driver": { "name": "ok" } },
                      "results": [ { "message": {} }, { "message": { "text": "kept" } } ] }
                ]
            }"#,
        )
        .unwrap();
        let runs = &log.properties().runs;
        assert_eq!(runs.len(), 1);
        let results = runs[0].results.as_ref().unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].message.text, "kept");
    }

    #[test]
    fn load_rejects_unparseable_documents() {
        assert!(Log::from_json("{ not json").is_err());
    }

    #[test]
    fn from_file_round_trips_a_built_log() {
        let run = Run::new(
            &Tool::new("scanner")
                .version("1.0.0")
                .add_rule(&Rule::new("R1").short_description("concise")),
        )
        .add_result(&SarifResult::new("m").rule_id("R1"));
        let log = Log::new().add_run(&run);
        let serialized = serde_json::to_string_pretty(log.properties()).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.sarif");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(serialized.as_bytes()).unwrap();

        let reloaded =
            Log::from_file(Utf8Path::new(path.to_str().unwrap())).unwrap();
        assert_eq!(reloaded.properties(), log.properties());
    }

    #[test]
    fn from_file_reports_missing_files() {
        let err = Log::from_file(Utf8Path::new("/definitely/not/here.sarif")).unwrap_err();
        assert!(err.to_string().contains("read"));
    }
}
