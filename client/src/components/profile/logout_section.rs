//! Logout card. The button does not end the session yet.

use leptos::prelude::*;

use crate::components::ui::{Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle};

#[component]
pub fn LogoutSection() -> impl IntoView {
    view! {
        <Card id="logout-section">
            <CardHeader>
                <CardTitle>"로그아웃"</CardTitle>
                <CardDescription>"계정에서 로그아웃합니다"</CardDescription>
            </CardHeader>
            <CardContent>
                <Button variant=ButtonVariant::Destructive class="w-full">
                    "로그아웃"
                </Button>
            </CardContent>
        </Card>
    }
}
