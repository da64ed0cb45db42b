//! Dashboard landing page.

use leptos::prelude::*;

use crate::components::ranking_board::RankingBoard;
use crate::components::site_header::SiteHeader;

/// Home page — site header with the profile link, then the ranking board.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div>
            <SiteHeader/>
            <RankingBoard/>
        </div>
    }
}
