//! View-models for the AI safety incident dashboard.
//!
//! Everything here is synchronous and target independent so the same code
//! drives the Leptos front end and the headless shell.

pub mod config;
pub mod dashboard;
pub mod error;
pub mod form;
pub mod item;
pub mod model;
pub mod seed;
pub mod view;

pub use dashboard::Dashboard;
pub use error::{ConfigError, ParseError, ValidationError};
pub use form::{FormErrors, FormField, IncidentForm};
pub use item::IncidentItemState;
pub use model::{Incident, NewIncident, Severity};
pub use view::{SeverityFilter, SortOrder};
