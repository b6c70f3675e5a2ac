use crate::clock;
use incident_core::form::{FormField, IncidentForm as FormState};
use incident_core::{NewIncident, Severity};
use leptos::*;
use tracing::debug;

fn error_message(form: RwSignal<FormState>, field: FormField) -> impl IntoView {
    move || {
        form.with(|f| {
            f.error(field)
                .map(|msg| view! { <span class="error-message">{msg.to_string()}</span> })
        })
    }
}

#[component]
pub fn IncidentForm(#[prop(into)] on_submit: Callback<NewIncident>) -> impl IntoView {
    let form = create_rw_signal(FormState::new());

    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let reported_at = clock::now();
        let mut accepted = None;
        form.update(|f| {
            if let Err(err) = f.submit(reported_at, |new| accepted = Some(new)) {
                debug!(%err, "report kept open for corrections");
            }
        });
        // Adding closes the form, so emit only after the form update is done.
        if let Some(new) = accepted {
            on_submit.call(new);
        }
    };

    view! {
      <div class="incident-form-container">
        <h2>"Report New Incident"</h2>
        <form class="incident-form" on:submit=submit>
          <div class="form-group">
            <label for="title">"Title:"</label>
            <input
              type="text"
              id="title"
              class=move || form.with(|f| f.field_class(FormField::Title))
              prop:value=move || form.with(|f| f.title().to_string())
              on:input=move |ev| form.update(|f| f.set_title(event_target_value(&ev)))
            />
            {error_message(form, FormField::Title)}
          </div>

          <div class="form-group">
            <label for="description">"Description:"</label>
            <textarea
              id="description"
              rows=4
              class=move || form.with(|f| f.field_class(FormField::Description))
              prop:value=move || form.with(|f| f.description().to_string())
              on:input=move |ev| form.update(|f| f.set_description(event_target_value(&ev)))
            />
            {error_message(form, FormField::Description)}
          </div>

          <div class="form-group">
            <label>"Severity:"</label>
            <div class="radio-group">
              {Severity::ALL
                .into_iter()
                .map(|severity| view! {
                  <label class="radio-label">
                    <input
                      type="radio"
                      name="severity"
                      value=severity.as_str()
                      prop:checked=move || form.with(|f| f.severity() == severity)
                      on:change=move |_| form.update(|f| f.set_severity(severity))
                    />
                    {severity.as_str()}
                  </label>
                })
                .collect_view()}
            </div>
          </div>

          <button type="submit" class="submit-btn">"Submit Incident"</button>
        </form>
      </div>
    }
}
