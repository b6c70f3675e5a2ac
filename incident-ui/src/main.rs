mod app;
mod clock;
mod form;
mod item;

use leptos::*;

fn main() {
    mount_to_body(|| view! { <app::App/> });
}
