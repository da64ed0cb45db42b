//! Two-column profile settings layout.

use leptos::prelude::*;

use super::{BioSection, LogoutSection, PasswordSection, ProfileImageSection};

/// Page heading followed by a responsive grid: image and bio in the first
/// column, password and logout in the second.
#[component]
pub fn ProfileLayout() -> impl IntoView {
    view! {
        <div class="container mx-auto px-4 py-8 max-w-4xl">
            <div class="mb-8">
                <h1 class="text-3xl font-bold">"프로필 설정"</h1>
                <p class="text-muted-foreground mt-2">"사용자 정보를 관리하고 설정을 변경할 수 있습니다"</p>
            </div>

            <div class="grid gap-6 md:grid-cols-2">
                <div class="space-y-6">
                    <ProfileImageSection/>
                    <BioSection/>
                </div>

                <div class="space-y-6">
                    <PasswordSection/>
                    <LogoutSection/>
                </div>
            </div>
        </div>
    }
}
