use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ParseError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    Low,
    #[default]
    Medium,
    High,
}

impl Severity {
    /// Display order used by the filter select and the form radios.
    pub const ALL: [Severity; 3] = [Severity::Low, Severity::Medium, Severity::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Low" => Ok(Severity::Low),
            "Medium" => Ok(Severity::Medium),
            "High" => Ok(Severity::High),
            other => Err(ParseError::UnknownSeverity(other.to_string())),
        }
    }
}

/// A reported AI safety incident as held by the dashboard.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Incident {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub severity: Severity,
    pub reported_at: DateTime<Utc>,
}

/// An incident emitted by the form, before the dashboard assigns its id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewIncident {
    pub title: String,
    pub description: String,
    pub severity: Severity,
    pub reported_at: DateTime<Utc>,
}

impl NewIncident {
    pub fn with_id(self, id: u64) -> Incident {
        Incident {
            id,
            title: self.title,
            description: self.description,
            severity: self.severity,
            reported_at: self.reported_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_parses_exact_names_only() {
        assert_eq!("High".parse::<Severity>(), Ok(Severity::High));
        assert_eq!(
            "high".parse::<Severity>(),
            Err(ParseError::UnknownSeverity("high".into()))
        );
    }

    #[test]
    fn incident_json_uses_iso_timestamps() {
        let raw = r#"{
            "id": 7,
            "title": "Jailbreak",
            "description": "Prompt bypassed the refusal policy",
            "severity": "High",
            "reported_at": "2024-02-01T00:00:00Z"
        }"#;
        let incident: Incident = serde_json::from_str(raw).expect("incident json");
        assert_eq!(incident.severity, Severity::High);
        assert_eq!(incident.reported_at.to_rfc3339(), "2024-02-01T00:00:00+00:00");

        let back = serde_json::to_value(&incident).expect("to json");
        assert_eq!(back["severity"], "High");
        assert_eq!(back["reported_at"], "2024-02-01T00:00:00Z");
    }

    #[test]
    fn with_id_keeps_every_field() {
        let new = NewIncident {
            title: " padded ".into(),
            description: "d".into(),
            severity: Severity::Low,
            reported_at: DateTime::<Utc>::UNIX_EPOCH,
        };
        let incident = new.clone().with_id(3);
        assert_eq!(incident.id, 3);
        assert_eq!(incident.title, new.title);
        assert_eq!(incident.reported_at, new.reported_at);
    }
}
