use crate::form::IncidentForm;
use crate::item::IncidentItem;
use incident_core::config::DashboardConfig;
use incident_core::view::EMPTY_VIEW_MESSAGE;
use incident_core::{Dashboard, NewIncident, SeverityFilter, SortOrder};
use leptos::*;

#[component]
pub fn App() -> impl IntoView {
    let dashboard = create_rw_signal(
        DashboardConfig::default()
            .build_dashboard()
            .unwrap_or_default(),
    );
    let visible = create_memo(move |_| dashboard.with(Dashboard::visible));

    let add_incident = Callback::new(move |new: NewIncident| {
        dashboard.update(|d| {
            d.add_incident(new);
        });
    });

    view! {
      <div class="incident-dashboard">
        <header class="dashboard-header">
          <h1>"AI Safety Incident Dashboard"</h1>
          <button class="toggle-form-btn" on:click=move |_| dashboard.update(Dashboard::toggle_form)>
            {move || dashboard.with(Dashboard::toggle_form_label)}
          </button>
        </header>

        <Show
          when=move || dashboard.with(Dashboard::is_form_visible)
          fallback=|| ()
        >
          <IncidentForm on_submit=add_incident/>
        </Show>

        <div class="dashboard-controls">
          <div class="filter-control">
            <label for="sev-filter">"Filter by Severity:"</label>
            <select
              id="sev-filter"
              on:change=move |ev| {
                if let Ok(filter) = event_target_value(&ev).parse::<SeverityFilter>() {
                  dashboard.update(|d| d.set_filter(filter));
                }
              }
            >
              {SeverityFilter::OPTIONS
                .into_iter()
                .map(|option| view! {
                  <option
                    value=option.as_str()
                    selected=move || dashboard.with(|d| d.filter() == option)
                  >
                    {option.label()}
                  </option>
                })
                .collect_view()}
            </select>
          </div>

          <div class="sort-control">
            <label for="date-sort">"Sort by Date:"</label>
            <select
              id="date-sort"
              on:change=move |ev| {
                if let Ok(order) = event_target_value(&ev).parse::<SortOrder>() {
                  dashboard.update(|d| d.set_sort_order(order));
                }
              }
            >
              {SortOrder::OPTIONS
                .into_iter()
                .map(|option| view! {
                  <option
                    value=option.as_str()
                    selected=move || dashboard.with(|d| d.sort_order() == option)
                  >
                    {option.label()}
                  </option>
                })
                .collect_view()}
            </select>
          </div>
        </div>

        <div class="incidents-list">
          <Show
            when=move || visible.with(|list| !list.is_empty())
            fallback=|| view! { <p class="no-incidents">{EMPTY_VIEW_MESSAGE}</p> }
          >
            <For
              each=move || visible.get()
              key=|i| i.id
              children=move |incident| view! { <IncidentItem incident=incident/> }
            />
          </Show>
        </div>
      </div>
    }
}
