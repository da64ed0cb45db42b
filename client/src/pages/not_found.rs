//! Fallback for paths no route matches.

use leptos::prelude::*;

use crate::routes::AppRoute;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="container mx-auto px-4 py-8 max-w-4xl">
            <h1 class="text-3xl font-bold">"페이지를 찾을 수 없습니다"</h1>
            <a href=AppRoute::Home.path() class="text-muted-foreground mt-2">
                "홈으로 돌아가기"
            </a>
        </div>
    }
}
