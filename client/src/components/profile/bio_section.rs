//! Bio card: an uncontrolled text area and a save placeholder.

use leptos::prelude::*;

use crate::components::ui::{Button, Card, CardContent, CardHeader, CardTitle, Label, Textarea};

#[component]
pub fn BioSection() -> impl IntoView {
    view! {
        <Card id="bio-section">
            <CardHeader>
                <CardTitle>"소개"</CardTitle>
            </CardHeader>
            <CardContent class="space-y-4">
                <div class="space-y-2">
                    <Label html_for="bio">"자기소개"</Label>
                    <Textarea
                        id="bio"
                        placeholder="자기소개를 입력하세요"
                        default_value="안녕하세요"
                        class="min-h-[120px] resize-none"
                    />
                </div>
                <Button class="w-full">"저장"</Button>
            </CardContent>
        </Card>
    }
}
