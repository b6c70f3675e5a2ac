use tracing::{debug, info};

use crate::model::{Incident, NewIncident};
use crate::view::{self, SeverityFilter, SortOrder};

/// Owns the session's incident list and the list view settings.
///
/// The list keeps insertion order; filtering and sorting only shape the
/// derived view returned by [`Dashboard::visible`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Dashboard {
    incidents: Vec<Incident>,
    filter: SeverityFilter,
    sort: SortOrder,
    form_visible: bool,
    revision: u64,
}

impl Dashboard {
    pub fn new(seed: Vec<Incident>) -> Self {
        Self {
            incidents: seed,
            ..Self::default()
        }
    }

    pub fn with_view(seed: Vec<Incident>, filter: SeverityFilter, sort: SortOrder) -> Self {
        Self {
            incidents: seed,
            filter,
            sort,
            ..Self::default()
        }
    }

    pub fn incidents(&self) -> &[Incident] {
        &self.incidents
    }

    pub fn filter(&self) -> SeverityFilter {
        self.filter
    }

    pub fn set_filter(&mut self, filter: SeverityFilter) {
        debug!(filter = %filter, "severity filter changed");
        self.filter = filter;
        self.bump();
    }

    pub fn sort_order(&self) -> SortOrder {
        self.sort
    }

    pub fn set_sort_order(&mut self, sort: SortOrder) {
        debug!(sort = %sort, "sort order changed");
        self.sort = sort;
        self.bump();
    }

    pub fn is_form_visible(&self) -> bool {
        self.form_visible
    }

    pub fn toggle_form(&mut self) {
        self.form_visible = !self.form_visible;
        self.bump();
    }

    pub fn toggle_form_label(&self) -> &'static str {
        if self.form_visible {
            "Hide Form"
        } else {
            "Report New Incident"
        }
    }

    /// Assigns the next id, appends the incident and closes the form.
    pub fn add_incident(&mut self, new: NewIncident) -> &Incident {
        let id = view::next_incident_id(&self.incidents);
        info!(id, severity = %new.severity, "incident added");
        self.incidents.push(new.with_id(id));
        self.form_visible = false;
        self.bump();
        &self.incidents[self.incidents.len() - 1]
    }

    /// The filtered, sorted list the item renderer walks.
    pub fn visible(&self) -> Vec<Incident> {
        view::sort_incidents(view::filter_incidents(&self.incidents, self.filter), self.sort)
    }

    /// Increments on every state change. Hosts without reactive signals
    /// compare it to decide whether to redraw.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}
