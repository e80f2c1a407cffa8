use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A job opening as it appears in the fixture file: a passthrough JSON
/// object constrained only to carry a string `id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobDoc {
    pub id: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn job_doc_requires_id() {
        assert!(serde_json::from_value::<JobDoc>(json!({"title": "No id"})).is_err());
    }

    #[test]
    fn job_doc_roundtrips_passthrough_fields() {
        let job: JobDoc =
            serde_json::from_value(json!({"id": "J1", "title": "Backend Engineer"}))
                .expect("job parses");
        assert_eq!(job.id, "J1");

        let doc = serde_json::to_value(&job).expect("job serializes");
        assert_eq!(doc, json!({"id": "J1", "title": "Backend Engineer"}));
    }
}
