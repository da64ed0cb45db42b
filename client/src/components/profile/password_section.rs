//! Password change card.
//!
//! Three independent password inputs. Nothing compares them: a mismatch
//! between the new and confirm fields is not reported.

use leptos::prelude::*;

use crate::components::ui::{Button, Card, CardContent, CardHeader, CardTitle, Input, InputKind, Label};

#[component]
pub fn PasswordSection() -> impl IntoView {
    view! {
        <Card id="password-section">
            <CardHeader>
                <CardTitle>"비밀번호 변경"</CardTitle>
            </CardHeader>
            <CardContent class="space-y-4">
                <PasswordField id="current-password" label="현재 비밀번호" placeholder="현재 비밀번호를 입력하세요"/>
                <PasswordField id="new-password" label="새 비밀번호" placeholder="새 비밀번호를 입력하세요"/>
                <PasswordField id="confirm-password" label="비밀번호 확인" placeholder="비밀번호를 다시 입력하세요"/>
                <Button class="w-full">"비밀번호 변경"</Button>
            </CardContent>
        </Card>
    }
}

/// Labeled password input.
#[component]
fn PasswordField(id: &'static str, label: &'static str, placeholder: &'static str) -> impl IntoView {
    view! {
        <div class="space-y-2">
            <Label html_for=id>{label}</Label>
            <Input id=id kind=InputKind::Password placeholder=placeholder/>
        </div>
    }
}
