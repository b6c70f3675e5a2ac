use crate::clock;
use incident_core::item::{format_reported_at, severity_class};
use incident_core::{Incident, IncidentItemState};
use leptos::*;

#[component]
pub fn IncidentItem(incident: Incident) -> impl IntoView {
    let state = create_rw_signal(IncidentItemState::default());
    let badge = format!(
        "incident-severity {}",
        severity_class(incident.severity.as_str())
    );
    let date = format_reported_at(incident.reported_at, clock::local_offset());
    let description = incident.description;

    view! {
      <div class="incident-item">
        <div class="incident-header">
          <h3 class="incident-title">{incident.title}</h3>
          <div class="incident-meta">
            <span class=badge>{incident.severity.as_str()}</span>
            <span class="incident-date">{date}</span>
          </div>
        </div>
        <div class="incident-actions">
          <button class="view-details-btn" on:click=move |_| state.update(IncidentItemState::toggle)>
            {move || state.with(IncidentItemState::toggle_label)}
          </button>
        </div>
        <Show
          when=move || state.with(IncidentItemState::shows_description)
          fallback=|| ()
        >
          <div class="incident-description">
            <p>{description.clone()}</p>
          </div>
        </Show>
      </div>
    }
}
