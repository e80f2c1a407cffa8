use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The `applied_jobs` field as it appears in fixtures: either a single job
/// id or a sequence of job ids. Normalized to a sequence at ingestion; the
/// dual shape never survives past the seeder.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AppliedJobs {
    One(String),
    Many(Vec<String>),
}

impl AppliedJobs {
    /// Normalized form: always a sequence.
    pub fn into_vec(self) -> Vec<String> {
        match self {
            AppliedJobs::One(id) => vec![id],
            AppliedJobs::Many(ids) => ids,
        }
    }

    pub fn contains(&self, job_id: &str) -> bool {
        match self {
            AppliedJobs::One(id) => id == job_id,
            AppliedJobs::Many(ids) => ids.iter().any(|id| id == job_id),
        }
    }
}

/// A candidate as it appears in the fixture file: a passthrough JSON object
/// carrying an `applied_jobs` field in either shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateDoc {
    pub applied_jobs: AppliedJobs,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CandidateDoc {
    /// Rewrites the document with `applied_jobs` normalized to a sequence,
    /// returning the id list alongside the stored form.
    pub fn normalize(self) -> (Vec<String>, Value) {
        let applied = self.applied_jobs.into_vec();
        let mut doc = self.extra;
        doc.insert(
            "applied_jobs".to_string(),
            Value::Array(applied.iter().cloned().map(Value::String).collect()),
        );
        (applied, Value::Object(doc))
    }
}
