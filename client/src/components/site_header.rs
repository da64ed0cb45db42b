//! Dashboard header with the brand link and the profile navigation link.

use leptos::prelude::*;

use crate::components::icons::UserIcon;
use crate::components::ui::{Button, ButtonVariant};
use crate::routes::AppRoute;

/// Top header of the dashboard.
///
/// Both links are plain anchors; the router picks them up on the client and
/// the server resolves them on a full page load.
#[component]
pub fn SiteHeader() -> impl IntoView {
    view! {
        <header class="bg-gray-900 border-b border-gray-800">
            <div class="max-w-7xl mx-auto px-4 py-4">
                <div class="flex items-center justify-between">
                    <a
                        href=AppRoute::Home.path()
                        class="text-xl font-bold text-white hover:text-gray-300 transition-colors"
                    >
                        "암호화폐 순위 보드"
                    </a>
                    <nav>
                        <a href=AppRoute::Profile.path()>
                            <Button
                                variant=ButtonVariant::Ghost
                                class="text-white hover:text-gray-300 hover:bg-gray-800"
                            >
                                <UserIcon class="w-4 h-4 mr-2"/>
                                "프로필"
                            </Button>
                        </a>
                    </nav>
                </div>
            </div>
        </header>
    }
}

#[cfg(test)]
#[path = "site_header_test.rs"]
mod site_header_test;
