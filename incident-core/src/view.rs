use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;
use crate::model::{Incident, Severity};

pub const EMPTY_VIEW_MESSAGE: &str = "No incidents found matching the current filters.";

/// Severity restriction applied to the list view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SeverityFilter {
    #[default]
    All,
    Only(Severity),
}

impl SeverityFilter {
    /// Options in the order the filter select lists them.
    pub const OPTIONS: [SeverityFilter; 4] = [
        SeverityFilter::All,
        SeverityFilter::Only(Severity::Low),
        SeverityFilter::Only(Severity::Medium),
        SeverityFilter::Only(Severity::High),
    ];

    pub fn matches(&self, incident: &Incident) -> bool {
        match self {
            SeverityFilter::All => true,
            SeverityFilter::Only(severity) => incident.severity == *severity,
        }
    }

    /// The `value` attribute of the select option.
    pub fn as_str(&self) -> &'static str {
        match self {
            SeverityFilter::All => "All",
            SeverityFilter::Only(severity) => severity.as_str(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SeverityFilter::All => "All Severities",
            SeverityFilter::Only(severity) => severity.as_str(),
        }
    }
}

impl fmt::Display for SeverityFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SeverityFilter {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "All" {
            return Ok(SeverityFilter::All);
        }
        s.parse::<Severity>()
            .map(SeverityFilter::Only)
            .map_err(|_| ParseError::UnknownFilter(s.to_string()))
    }
}

impl TryFrom<String> for SeverityFilter {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SeverityFilter> for String {
    fn from(value: SeverityFilter) -> Self {
        value.as_str().to_string()
    }
}

/// Chronological ordering of the filtered list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Newest,
    Oldest,
}

impl SortOrder {
    pub const OPTIONS: [SortOrder; 2] = [SortOrder::Newest, SortOrder::Oldest];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Newest => "newest",
            SortOrder::Oldest => "oldest",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::Newest => "Newest First",
            SortOrder::Oldest => "Oldest First",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "newest" => Ok(SortOrder::Newest),
            "oldest" => Ok(SortOrder::Oldest),
            other => Err(ParseError::UnknownSortOrder(other.to_string())),
        }
    }
}

pub fn filter_incidents(incidents: &[Incident], filter: SeverityFilter) -> Vec<Incident> {
    incidents
        .iter()
        .filter(|i| filter.matches(i))
        .cloned()
        .collect()
}

/// Orders by `reported_at`. Ties keep no particular order.
pub fn sort_incidents(mut incidents: Vec<Incident>, order: SortOrder) -> Vec<Incident> {
    match order {
        SortOrder::Newest => incidents.sort_by(|a, b| b.reported_at.cmp(&a.reported_at)),
        SortOrder::Oldest => incidents.sort_by(|a, b| a.reported_at.cmp(&b.reported_at)),
    }
    incidents
}

/// Largest id a seed may carry. Leaves headroom so id assignment cannot
/// overflow.
pub const MAX_SEED_ID: u64 = i64::MAX as u64;

/// One past the largest id in use, or 1 for an empty list.
pub fn next_incident_id(incidents: &[Incident]) -> u64 {
    incidents.iter().map(|i| i.id).max().map_or(1, |max| max + 1)
}
