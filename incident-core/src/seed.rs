use std::collections::BTreeSet;
use std::path::Path;

use chrono::{DateTime, Utc};

use crate::error::ConfigError;
use crate::form::FormField;
use crate::model::{Incident, Severity};
use crate::view::MAX_SEED_ID;

fn reported_at(raw: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(raw)
        .map(|ts| ts.with_timezone(&Utc))
        .unwrap_or_default()
}

/// Built-in incidents the dashboard starts with when no seed file is set.
pub fn mock_incidents() -> Vec<Incident> {
    vec![
        Incident {
            id: 1,
            title: "Biased Recommendation Algorithm".into(),
            description: "Algorithm consistently favored certain demographics in loan approval recommendations.".into(),
            severity: Severity::Medium,
            reported_at: reported_at("2025-03-15T10:00:00Z"),
        },
        Incident {
            id: 2,
            title: "LLM Hallucination in Critical Info".into(),
            description: "A large language model provided incorrect safety procedure information in a medical context.".into(),
            severity: Severity::High,
            reported_at: reported_at("2025-04-01T14:30:00Z"),
        },
        Incident {
            id: 3,
            title: "Minor Data Leak via Chatbot".into(),
            description: "Chatbot inadvertently exposed non-sensitive user metadata in a support conversation.".into(),
            severity: Severity::Low,
            reported_at: reported_at("2025-03-20T09:15:00Z"),
        },
    ]
}

/// Reads a JSON array of incidents. Ids must be unique and in
/// `1..=MAX_SEED_ID`; titles and descriptions must not be blank.
pub fn load_seed(path: &Path) -> Result<Vec<Incident>, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let incidents: Vec<Incident> =
        serde_json::from_str(&raw).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })?;

    let mut seen = BTreeSet::new();
    for incident in &incidents {
        if incident.id == 0 || incident.id > MAX_SEED_ID {
            return Err(ConfigError::InvalidId {
                path: path.to_path_buf(),
                id: incident.id,
                max: MAX_SEED_ID,
            });
        }
        for (field, text) in [
            (FormField::Title, &incident.title),
            (FormField::Description, &incident.description),
        ] {
            if text.trim().is_empty() {
                return Err(ConfigError::EmptyField {
                    path: path.to_path_buf(),
                    id: incident.id,
                    field,
                });
            }
        }
        if !seen.insert(incident.id) {
            return Err(ConfigError::DuplicateId {
                path: path.to_path_buf(),
                id: incident.id,
            });
        }
    }
    Ok(incidents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn mock_ids_are_unique_and_texts_non_empty() {
        let incidents = mock_incidents();
        let ids: BTreeSet<u64> = incidents.iter().map(|i| i.id).collect();
        assert_eq!(ids.len(), incidents.len());
        assert!(incidents
            .iter()
            .all(|i| !i.title.trim().is_empty() && !i.description.trim().is_empty()));
    }

    #[test]
    fn loads_json_seed() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(
            file,
            r#"[{{"id":1,"title":"t","description":"d","severity":"Low","reported_at":"2024-01-01T00:00:00Z"}}]"#
        )
        .expect("write seed");

        let incidents = load_seed(file.path()).expect("load seed");
        assert_eq!(incidents.len(), 1);
        assert_eq!(incidents[0].severity, Severity::Low);
    }

    #[test]
    fn rejects_duplicate_ids() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(
            file,
            r#"[
                {{"id":4,"title":"a","description":"d","severity":"Low","reported_at":"2024-01-01T00:00:00Z"}},
                {{"id":4,"title":"b","description":"d","severity":"High","reported_at":"2024-01-02T00:00:00Z"}}
            ]"#
        )
        .expect("write seed");

        let err = load_seed(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateId { id: 4, .. }));
    }

    #[test]
    fn mock_timestamps_are_pinned() {
        let stamps: Vec<String> = mock_incidents()
            .iter()
            .map(|i| i.reported_at.to_rfc3339())
            .collect();
        assert_eq!(
            stamps,
            vec![
                "2025-03-15T10:00:00+00:00",
                "2025-04-01T14:30:00+00:00",
                "2025-03-20T09:15:00+00:00",
            ]
        );
    }

    fn seed_file(body: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(body.as_bytes()).expect("write seed");
        file
    }

    #[test]
    fn rejects_zero_id() {
        let file = seed_file(
            r#"[{"id":0,"title":"t","description":"d","severity":"Low","reported_at":"2024-01-01T00:00:00Z"}]"#,
        );
        let err = load_seed(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidId { id: 0, .. }));
    }

    #[test]
    fn rejects_id_without_headroom() {
        let file = seed_file(
            r#"[{"id":18446744073709551615,"title":"t","description":"d","severity":"Low","reported_at":"2024-01-01T00:00:00Z"}]"#,
        );
        let err = load_seed(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidId { id: u64::MAX, .. }));
    }

    #[test]
    fn largest_allowed_id_still_adds() {
        let body = format!(
            r#"[{{"id":{MAX_SEED_ID},"title":"t","description":"d","severity":"Low","reported_at":"2024-01-01T00:00:00Z"}}]"#
        );
        let file = seed_file(&body);
        let incidents = load_seed(file.path()).expect("load seed");

        let mut dashboard = crate::Dashboard::new(incidents);
        let added = dashboard.add_incident(crate::NewIncident {
            title: "t".into(),
            description: "d".into(),
            severity: Severity::Medium,
            reported_at: DateTime::<Utc>::UNIX_EPOCH,
        });
        assert_eq!(added.id, MAX_SEED_ID + 1);
    }

    #[test]
    fn rejects_blank_title_and_description() {
        let file = seed_file(
            r#"[{"id":1,"title":"","description":"d","severity":"Low","reported_at":"2024-01-01T00:00:00Z"}]"#,
        );
        let err = load_seed(file.path()).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::EmptyField { id: 1, field: FormField::Title, .. }
        ));

        let file = seed_file(
            r#"[{"id":2,"title":"t","description":"  \n","severity":"Low","reported_at":"2024-01-01T00:00:00Z"}]"#,
        );
        let err = load_seed(file.path()).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::EmptyField { id: 2, field: FormField::Description, .. }
        ));
    }

    #[test]
    fn rejects_bad_timestamp() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(
            file,
            r#"[{{"id":1,"title":"t","description":"d","severity":"Low","reported_at":"yesterday"}}]"#
        )
        .expect("write seed");

        assert!(matches!(
            load_seed(file.path()),
            Err(ConfigError::Json { .. })
        ));
    }
}
