use crate::helpers::{ch, key, terminal};
use crossterm::event::KeyCode;
use studentdesk::contexts::Theme;
use studentdesk::icons::{IconService, IconTheme};
use studentdesk::services::{Profile, ProfileField};
use studentdesk::ui::core::{Action, Component};
use studentdesk::ui::pages::{NotificationPreferences, PreferenceFlag, SettingsFocus, SettingsPage};
use studentdesk::ui::styles::Palette;

fn profile() -> Profile {
    Profile {
        name: "Student Name".to_string(),
        email: "student@email.com".to_string(),
        university: "University Name".to_string(),
    }
}

fn page() -> SettingsPage {
    SettingsPage::new(profile(), IconService::new(IconTheme::Ascii))
}

#[test]
fn test_preferences_default_to_on() {
    let prefs = NotificationPreferences::default();
    assert!(prefs.email && prefs.push && prefs.reminders);
}

#[test]
fn test_toggle_push_only_flips_push() {
    let mut prefs = NotificationPreferences::default();
    assert!(!prefs.toggle(PreferenceFlag::Push));
    assert_eq!(
        prefs,
        NotificationPreferences {
            email: true,
            push: false,
            reminders: true,
        }
    );
}

#[test]
fn test_each_flag_toggles_independently() {
    for flag in PreferenceFlag::ALL {
        let mut prefs = NotificationPreferences::default();
        prefs.toggle(flag);
        for other in PreferenceFlag::ALL {
            assert_eq!(prefs.get(other), other != flag);
        }
        prefs.toggle(flag);
        assert_eq!(prefs, NotificationPreferences::default());
    }
}

#[test]
fn test_push_toggle_through_keys() {
    let mut page = page();
    assert_eq!(page.focus(), SettingsFocus::UpdateProfile);

    page.handle_key_events(key(KeyCode::Down)); // Dark mode
    page.handle_key_events(key(KeyCode::Down)); // Email notifications
    page.handle_key_events(key(KeyCode::Down)); // Push notifications
    assert_eq!(page.focus(), SettingsFocus::Preference(PreferenceFlag::Push));

    assert!(matches!(page.handle_key_events(ch(' ')), Action::None));
    assert!(page.preferences.email);
    assert!(!page.preferences.push);
    assert!(page.preferences.reminders);
}

#[test]
fn test_editing_a_field_changes_only_that_field() {
    let mut page = page();
    page.set_focus(SettingsFocus::Field(ProfileField::Email));
    assert!(page.captures_text_input());

    for _ in 0.."student@email.com".len() {
        page.handle_key_events(key(KeyCode::Backspace));
    }
    for c in "ada@uni.edu".chars() {
        page.handle_key_events(ch(c));
    }

    assert_eq!(page.profile.email, "ada@uni.edu");
    assert_eq!(page.profile.name, "Student Name");
    assert_eq!(page.profile.university, "University Name");
}

#[test]
fn test_plain_letters_are_text_inside_fields() {
    let mut page = page();
    page.set_focus(SettingsFocus::Field(ProfileField::Name));
    // 'S' would snapshot outside a field
    page.handle_key_events(ch('S'));
    assert_eq!(page.profile.name, "Student NameS");
}

#[test]
fn test_escape_leaves_field_for_update_button() {
    let mut page = page();
    page.set_focus(SettingsFocus::Field(ProfileField::University));
    page.handle_key_events(key(KeyCode::Esc));
    assert_eq!(page.focus(), SettingsFocus::UpdateProfile);
    assert!(!page.captures_text_input());
}

#[test]
fn test_update_profile_submits_staged_record() {
    let mut page = page();
    page.edit_field(ProfileField::Name, "Ada Lovelace");

    match page.handle_key_events(key(KeyCode::Enter)) {
        Action::SubmitProfile(submitted) => {
            assert_eq!(submitted.name, "Ada Lovelace");
            assert_eq!(submitted.email, "student@email.com");
        }
        other => panic!("expected SubmitProfile, got {:?}", other),
    }

    // Enter inside a field submits as well
    page.set_focus(SettingsFocus::Field(ProfileField::Email));
    assert!(matches!(page.handle_key_events(key(KeyCode::Enter)), Action::SubmitProfile(_)));
}

#[test]
fn test_dark_mode_and_delete_account_emit_actions() {
    let mut page = page();
    page.set_focus(SettingsFocus::DarkMode);
    assert!(matches!(page.handle_key_events(ch(' ')), Action::ToggleTheme));
    assert!(matches!(page.handle_key_events(key(KeyCode::Enter)), Action::ToggleTheme));

    page.set_focus(SettingsFocus::DeleteAccount);
    assert!(matches!(page.handle_key_events(key(KeyCode::Enter)), Action::DeleteAccount));
}

#[test]
fn test_focus_wraps_around() {
    let mut page = page();
    page.set_focus(SettingsFocus::DeleteAccount);
    page.handle_key_events(key(KeyCode::Tab));
    assert_eq!(page.focus(), SettingsFocus::Field(ProfileField::Name));
    page.handle_key_events(key(KeyCode::BackTab));
    assert_eq!(page.focus(), SettingsFocus::DeleteAccount);
}

#[test]
fn test_snapshot_json() {
    let mut page = page();
    page.preferences.toggle(PreferenceFlag::Reminders);
    page.theme = Theme::Dark;

    let json: serde_json::Value = serde_json::from_str(&page.snapshot_json().unwrap()).unwrap();
    assert_eq!(json["profile"]["name"], "Student Name");
    assert_eq!(json["preferences"]["reminders"], false);
    assert_eq!(json["preferences"]["email"], true);
    assert_eq!(json["theme"], "dark");
}

#[test]
fn test_render_sections() {
    let mut page = page();
    let mut terminal = terminal(90, 45);
    terminal
        .draw(|f| {
            let area = f.area();
            page.render(f, area, &Palette::light())
        })
        .unwrap();
    let text = crate::helpers::buffer_text(&terminal);

    assert!(text.contains("Profile Settings"));
    assert!(text.contains("Full Name"));
    assert!(text.contains("Dark Mode"));
    assert!(text.contains("Push Notifications"));
    assert!(text.contains("Danger Zone"));
    assert!(text.contains("Delete Account"));
    // Light theme shows the sun glyph in the appearance title
    assert!(text.contains(" O Appearance"));
}

#[test]
fn test_small_screen_keeps_focused_section_visible() {
    let mut page = page();
    page.set_focus(SettingsFocus::DeleteAccount);
    let mut terminal = terminal(80, 14);
    terminal
        .draw(|f| {
            let area = f.area();
            page.render(f, area, &Palette::dark())
        })
        .unwrap();
    let text = crate::helpers::buffer_text(&terminal);
    assert!(text.contains("Danger Zone"));
    assert!(!text.contains("Full Name"));
}
