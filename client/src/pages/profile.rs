//! Profile settings page.

use leptos::prelude::*;

use crate::components::profile::ProfileLayout;

#[component]
pub fn ProfilePage() -> impl IntoView {
    view! { <ProfileLayout/> }
}
