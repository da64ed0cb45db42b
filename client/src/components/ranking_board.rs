//! Ranking board region of the dashboard.

use leptos::prelude::*;

/// Container the coin ranking table renders into. Ranking data is not
/// loaded here, so the region shows its empty state.
#[component]
pub fn RankingBoard() -> impl IntoView {
    view! {
        <main id="ranking-board" class="max-w-7xl mx-auto px-4 py-8">
            <h2 class="text-2xl font-bold">"암호화폐 순위"</h2>
            <p class="text-muted-foreground mt-2">"표시할 순위 데이터가 없습니다"</p>
        </main>
    }
}
