//! Avatar card with the "change image" placeholder action.

use leptos::prelude::*;

use crate::components::ui::{
    Avatar, AvatarFallback, AvatarImage, Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle,
};

/// Profile image card. No image is uploaded yet, so the fallback shows.
#[component]
pub fn ProfileImageSection() -> impl IntoView {
    view! {
        <Card id="profile-image-section">
            <CardHeader>
                <CardTitle>"프로필 이미지"</CardTitle>
            </CardHeader>
            <CardContent class="flex flex-col items-center space-y-4">
                <Avatar class="h-32 w-32">
                    <AvatarImage src="" alt="프로필 이미지"/>
                    <AvatarFallback class="text-2xl">"사용자"</AvatarFallback>
                </Avatar>
                <Button variant=ButtonVariant::Outline class="w-full">
                    "이미지 변경"
                </Button>
            </CardContent>
        </Card>
    }
}
