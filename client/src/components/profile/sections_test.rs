use leptos::prelude::*;

use super::*;
use crate::test_support::{has_classes, occurrences, render_html, tag_before, tag_with_id};

// =============================================================
// ProfileImageSection
// =============================================================

#[test]
fn profile_image_section_renders_title_fallback_and_action() {
    let html = render_html(|| view! { <ProfileImageSection/> });
    assert!(tag_with_id(&html, "profile-image-section").is_some());
    assert!(tag_before(&html, "h3", "프로필 이미지").is_some());
    assert!(html.contains("사용자"));
    assert!(html.contains("이미지 변경"));
}

#[test]
fn profile_image_section_blank_source_shows_fallback_only() {
    let html = render_html(|| view! { <ProfileImageSection/> });
    assert_eq!(occurrences(&html, "<img"), 0);
    assert!(has_classes(tag_before(&html, "span", "사용자").unwrap(), &["text-2xl"]));
}

#[test]
fn profile_image_section_avatar_and_button_styling() {
    let html = render_html(|| view! { <ProfileImageSection/> });
    let content = tag_before(&html, "div", "<span").unwrap();
    assert!(has_classes(content, &["flex", "flex-col", "items-center", "space-y-4"]));
    let button = tag_before(&html, "button", "이미지 변경").unwrap();
    assert!(has_classes(button, &["w-full", "border", "bg-background"]));
}

// =============================================================
// BioSection
// =============================================================

#[test]
fn bio_section_renders_korean_copy() {
    let html = render_html(|| view! { <BioSection/> });
    assert!(tag_before(&html, "h3", "소개").is_some());
    assert!(tag_before(&html, "label", "자기소개").unwrap().contains("for=\"bio\""));
    assert!(has_classes(tag_before(&html, "button", "저장").unwrap(), &["w-full"]));
}

#[test]
fn bio_section_textarea_attributes() {
    let html = render_html(|| view! { <BioSection/> });
    let textarea = tag_with_id(&html, "bio").unwrap();
    assert!(textarea.starts_with("<textarea"));
    assert!(textarea.contains("placeholder=\"자기소개를 입력하세요\""));
    assert!(has_classes(textarea, &["min-h-[120px]", "resize-none"]));
}

#[test]
fn bio_section_textarea_is_uncontrolled_with_default_content() {
    let html = render_html(|| view! { <BioSection/> });
    let textarea = tag_with_id(&html, "bio").unwrap();
    assert!(!textarea.contains("value="));

    let after_open = html.find(textarea).unwrap() + textarea.len();
    let close = html.find("</textarea>").unwrap();
    assert!(html[after_open..close].contains("안녕하세요"));
}

#[test]
fn bio_section_field_spacing() {
    let html = render_html(|| view! { <BioSection/> });
    assert!(has_classes(tag_before(&html, "div", "<label").unwrap(), &["space-y-2"]));
    assert_eq!(occurrences(&html, "space-y-4"), 1);
}

// =============================================================
// PasswordSection
// =============================================================

const PASSWORD_FIELDS: [(&str, &str, &str); 3] = [
    ("current-password", "현재 비밀번호", "현재 비밀번호를 입력하세요"),
    ("new-password", "새 비밀번호", "새 비밀번호를 입력하세요"),
    ("confirm-password", "비밀번호 확인", "비밀번호를 다시 입력하세요"),
];

#[test]
fn password_section_renders_three_password_inputs() {
    let html = render_html(|| view! { <PasswordSection/> });
    assert_eq!(occurrences(&html, "<input"), 3);
    assert_eq!(occurrences(&html, "type=\"password\""), 3);

    for (id, _, placeholder) in PASSWORD_FIELDS {
        let input = tag_with_id(&html, id).unwrap();
        assert!(input.contains("type=\"password\""), "{id} must be a password input");
        assert!(input.contains(&format!("placeholder=\"{placeholder}\"")));
        assert!(!input.contains("value="), "{id} must stay uncontrolled");
    }
}

#[test]
fn password_section_labels_bind_to_inputs() {
    let html = render_html(|| view! { <PasswordSection/> });
    for (id, label, _) in PASSWORD_FIELDS {
        let tag = tag_before(&html, "label", &format!("{label}<")).unwrap();
        assert!(tag.contains(&format!("for=\"{id}\"")), "label {label} must point at {id}");
    }
}

#[test]
fn password_section_title_and_submit_share_caption() {
    let html = render_html(|| view! { <PasswordSection/> });
    assert_eq!(occurrences(&html, "비밀번호 변경"), 2);
    assert!(tag_before(&html, "h3", "비밀번호 변경").is_some());
    let button = &html[html.rfind("<button").unwrap()..];
    assert!(button.contains("비밀번호 변경"));
    assert!(has_classes(button, &["w-full", "bg-primary"]));
}

#[test]
fn password_section_fields_are_spaced() {
    let html = render_html(|| view! { <PasswordSection/> });
    assert_eq!(occurrences(&html, "class=\"space-y-2\""), 3);
}

// =============================================================
// LogoutSection
// =============================================================

#[test]
fn logout_section_renders_title_description_and_button() {
    let html = render_html(|| view! { <LogoutSection/> });
    assert!(tag_before(&html, "h3", "로그아웃").is_some());
    assert!(has_classes(tag_before(&html, "p", "계정에서 로그아웃합니다").unwrap(), &["text-muted-foreground"]));
    assert_eq!(occurrences(&html, "<button"), 1);
}

#[test]
fn logout_section_button_is_destructive_and_full_width() {
    let html = render_html(|| view! { <LogoutSection/> });
    let button = &html[html.find("<button").unwrap()..];
    let button = &button[..=button.find('>').unwrap()];
    assert!(has_classes(button, &["bg-destructive", "w-full"]));
}

// =============================================================
// Shared
// =============================================================

#[test]
fn section_buttons_are_inert() {
    let html = render_html(|| {
        view! {
            <ProfileImageSection/>
            <BioSection/>
            <PasswordSection/>
            <LogoutSection/>
        }
    });
    assert_eq!(occurrences(&html, "<button"), 4);
    assert_eq!(occurrences(&html, "type=\"button\""), 4);
    assert_eq!(occurrences(&html, "<form"), 0);
}
