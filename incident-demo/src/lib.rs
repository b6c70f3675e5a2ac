//! Headless shell around the incident dashboard view-models.
//!
//! Prints the derived list view, or replays a short scripted session
//! (filter, report, clear filter) against the configured seed.

use std::fmt::Write as _;

use chrono::{FixedOffset, Offset, Utc};
use incident_core::config::DashboardConfig;
use incident_core::item::format_reported_at;
use incident_core::view::EMPTY_VIEW_MESSAGE;
use incident_core::{
    ConfigError, Dashboard, Incident, IncidentForm, Severity, SeverityFilter, SortOrder,
    ValidationError,
};
use serde::Serialize;
use thiserror::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error)]
pub enum DemoError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("scripted report was rejected: {0}")]
    Rejected(#[from] ValidationError),
    #[error("failed to encode view: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to write output: {0}")]
    Fmt(#[from] std::fmt::Error),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    View,
    Scripted,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Options {
    pub mode: Mode,
    pub json: bool,
}

/// Snapshot of what the list view shows.
#[derive(Clone, Debug, Serialize)]
pub struct ViewSnapshot {
    pub step: String,
    pub filter: SeverityFilter,
    pub sort: SortOrder,
    pub form_visible: bool,
    pub incidents: Vec<Incident>,
}

impl ViewSnapshot {
    pub fn capture(step: &str, dashboard: &Dashboard) -> Self {
        Self {
            step: step.to_string(),
            filter: dashboard.filter(),
            sort: dashboard.sort_order(),
            form_visible: dashboard.is_form_visible(),
            incidents: dashboard.visible(),
        }
    }
}

/// Respects RUST_LOG; defaults to info for the dashboard crates.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("incident_demo=info,incident_core=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}

pub fn run(options: &Options) -> Result<String, DemoError> {
    let config = DashboardConfig::from_env()?;
    run_with_config(&config, options)
}

pub fn run_with_config(config: &DashboardConfig, options: &Options) -> Result<String, DemoError> {
    let mut dashboard = config.build_dashboard()?;
    info!(incidents = dashboard.incidents().len(), "dashboard seeded");

    let snapshots = match options.mode {
        Mode::View => vec![ViewSnapshot::capture("initial", &dashboard)],
        Mode::Scripted => run_script(&mut dashboard)?,
    };

    if options.json {
        let mut out = serde_json::to_string_pretty(&snapshots)?;
        out.push('\n');
        Ok(out)
    } else {
        render_snapshots(&snapshots, Utc.fix())
    }
}

/// Filter to High, report a Medium incident, then clear the filter.
pub fn run_script(dashboard: &mut Dashboard) -> Result<Vec<ViewSnapshot>, DemoError> {
    let mut snapshots = Vec::new();

    dashboard.set_filter(SeverityFilter::Only(Severity::High));
    dashboard.set_sort_order(SortOrder::Newest);
    snapshots.push(ViewSnapshot::capture("filter High, newest first", dashboard));

    dashboard.toggle_form();
    let mut form = IncidentForm::new();
    form.set_title("Unsafe tool invocation");
    form.set_description("Agent ran a shell command outside its allow-list.");
    form.set_severity(Severity::Medium);
    form.submit(Utc::now(), |new| {
        dashboard.add_incident(new);
    })?;
    snapshots.push(ViewSnapshot::capture("reported Medium incident", dashboard));

    dashboard.set_filter(SeverityFilter::All);
    snapshots.push(ViewSnapshot::capture("filter All", dashboard));

    Ok(snapshots)
}

pub fn render_snapshots(snapshots: &[ViewSnapshot], offset: FixedOffset) -> Result<String, DemoError> {
    let mut out = String::new();
    for snapshot in snapshots {
        writeln!(
            out,
            "== {} (filter={}, sort={}, form={})",
            snapshot.step,
            snapshot.filter.label(),
            snapshot.sort.label(),
            if snapshot.form_visible { "open" } else { "closed" }
        )?;
        if snapshot.incidents.is_empty() {
            writeln!(out, "{EMPTY_VIEW_MESSAGE}")?;
        }
        for incident in &snapshot.incidents {
            writeln!(out, "{}", render_line(incident, offset))?;
        }
    }
    Ok(out)
}

pub fn render_line(incident: &Incident, offset: FixedOffset) -> String {
    format!(
        "#{} [{}] {} ({})",
        incident.id,
        incident.severity,
        incident.title,
        format_reported_at(incident.reported_at, offset)
    )
}
