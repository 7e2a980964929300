use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Version stamp written into every cached record. Bumped whenever the
/// cached shape changes; a mismatch invalidates the entry on read.
pub const RECORD_SCHEMA: u32 = 1;

/// One row from the upstream catalog page. Only the fields the pipeline
/// consumes are kept; everything else in the catalog payload is ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepoSummary {
    pub full_name: String,
    pub description: Option<String>,
    pub html_url: String,
}

impl RepoSummary {
    /// Cheap searchable text for the query filter.
    pub fn haystack(&self) -> String {
        format!(
            "{} {}",
            self.full_name,
            self.description.as_deref().unwrap_or("")
        )
    }
}

/// A repository plus its fetched README, the unit of caching.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepoRecord {
    pub schema: u32,
    pub full_name: String,
    pub description: Option<String>,
    pub html_url: String,
    pub readme: String,
    pub cached_at: DateTime<Utc>,
}

impl RepoRecord {
    pub fn new(summary: &RepoSummary, readme: String) -> Self {
        Self {
            schema: RECORD_SCHEMA,
            full_name: summary.full_name.clone(),
            description: summary.description.clone(),
            html_url: summary.html_url.clone(),
            readme,
            cached_at: Utc::now(),
        }
    }

    /// Serialize to the cached wire form.
    pub fn to_cache_value(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse and validate a cached payload. Rejects both malformed JSON and
    /// records written under a different schema version.
    pub fn from_cache_value(raw: &str) -> Result<Self> {
        let record: RepoRecord = serde_json::from_str(raw)?;
        if record.schema != RECORD_SCHEMA {
            anyhow::bail!(
                "cached record has schema {} (expected {})",
                record.schema,
                RECORD_SCHEMA
            );
        }
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_summary() -> RepoSummary {
        RepoSummary {
            full_name: "octocat/hello-world".to_string(),
            description: Some("My first repo".to_string()),
            html_url: "https://github.com/octocat/hello-world".to_string(),
        }
    }

    #[test]
    fn test_record_round_trips_through_cache_value() {
        let record = RepoRecord::new(&sample_summary(), "# Hello".to_string());
        let raw = record.to_cache_value().unwrap();
        let back = RepoRecord::from_cache_value(&raw).unwrap();
        assert_eq!(back.full_name, "octocat/hello-world");
        assert_eq!(back.readme, "# Hello");
        assert_eq!(back.schema, RECORD_SCHEMA);
    }

    #[test]
    fn test_record_rejects_schema_mismatch() {
        let mut record = RepoRecord::new(&sample_summary(), String::new());
        record.schema = RECORD_SCHEMA + 1;
        let raw = serde_json::to_string(&record).unwrap();
        assert!(RepoRecord::from_cache_value(&raw).is_err());
    }

    #[test]
    fn test_record_rejects_malformed_payload() {
        assert!(RepoRecord::from_cache_value("not json").is_err());
        assert!(RepoRecord::from_cache_value("{\"full_name\":\"x\"}").is_err());
    }

    #[test]
    fn test_haystack_tolerates_missing_description() {
        let summary = RepoSummary {
            full_name: "octocat/spoon-knife".to_string(),
            description: None,
            html_url: "https://github.com/octocat/spoon-knife".to_string(),
        };
        assert!(summary.haystack().contains("spoon-knife"));
    }
}
