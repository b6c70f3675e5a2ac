use chrono::{DateTime, FixedOffset, Utc};

/// Per-item expand/collapse flag. Starts collapsed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IncidentItemState {
    expanded: bool,
}

impl IncidentItemState {
    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn shows_description(&self) -> bool {
        self.expanded
    }

    pub fn toggle_label(&self) -> &'static str {
        if self.expanded {
            "Hide Details"
        } else {
            "View Details"
        }
    }
}

/// Style class for a severity badge. Unknown values get no class.
pub fn severity_class(severity: &str) -> &'static str {
    match severity {
        "Low" => "severity-low",
        "Medium" => "severity-medium",
        "High" => "severity-high",
        _ => "",
    }
}

/// en-US medium date with a 12 hour clock, e.g. `Jan 5, 2024, 03:07 PM`,
/// shown in the viewer's offset.
pub fn format_reported_at(reported_at: DateTime<Utc>, offset: FixedOffset) -> String {
    reported_at
        .with_timezone(&offset)
        .format("%b %-d, %Y, %I:%M %p")
        .to_string()
}
