//! Settings page.
//!
//! Four sections: the profile form, appearance, notification preferences and
//! the danger zone. Profile edits are staged here until "Update Profile" hands
//! them to the profile service; the notification flags never leave this page.

use crate::constants::{DANGER_ZONE_WARNING, SETTINGS_SUBTITLE, SETTINGS_TITLE};
use crate::contexts::Theme;
use crate::icons::{Icon, IconService, IconSize};
use crate::services::profile::{Profile, ProfileField};
use crate::ui::components::button::{Button, ButtonVariant};
use crate::ui::components::card::Card;
use crate::ui::components::dialogs::common::create_input_paragraph;
use crate::ui::components::text_input::{handle_edit_key, with_cursor};
use crate::ui::components::toggle::Toggle;
use crate::ui::core::{actions::Action, Component};
use crate::ui::layout::LayoutManager;
use crate::ui::styles::Palette;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};
use serde::{Deserialize, Serialize};

/// Independent notification switches, all on by default
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationPreferences {
    pub email: bool,
    pub push: bool,
    pub reminders: bool,
}

impl Default for NotificationPreferences {
    fn default() -> Self {
        Self {
            email: true,
            push: true,
            reminders: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferenceFlag {
    Email,
    Push,
    Reminders,
}

impl PreferenceFlag {
    pub const ALL: [PreferenceFlag; 3] = [PreferenceFlag::Email, PreferenceFlag::Push, PreferenceFlag::Reminders];

    pub fn label(self) -> &'static str {
        match self {
            PreferenceFlag::Email => "Email Notifications",
            PreferenceFlag::Push => "Push Notifications",
            PreferenceFlag::Reminders => "Task Reminders",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            PreferenceFlag::Email => "Receive task updates via email",
            PreferenceFlag::Push => "Get desktop notifications",
            PreferenceFlag::Reminders => "Remind me before deadlines",
        }
    }
}

impl NotificationPreferences {
    pub fn get(&self, flag: PreferenceFlag) -> bool {
        match flag {
            PreferenceFlag::Email => self.email,
            PreferenceFlag::Push => self.push,
            PreferenceFlag::Reminders => self.reminders,
        }
    }

    /// Flip one flag, returning its new value
    pub fn toggle(&mut self, flag: PreferenceFlag) -> bool {
        let slot = match flag {
            PreferenceFlag::Email => &mut self.email,
            PreferenceFlag::Push => &mut self.push,
            PreferenceFlag::Reminders => &mut self.reminders,
        };
        *slot = !*slot;
        *slot
    }
}

/// Focusable elements, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsFocus {
    Field(ProfileField),
    UpdateProfile,
    DarkMode,
    Preference(PreferenceFlag),
    DeleteAccount,
}

pub const FOCUS_ORDER: [SettingsFocus; 9] = [
    SettingsFocus::Field(ProfileField::Name),
    SettingsFocus::Field(ProfileField::Email),
    SettingsFocus::Field(ProfileField::University),
    SettingsFocus::UpdateProfile,
    SettingsFocus::DarkMode,
    SettingsFocus::Preference(PreferenceFlag::Email),
    SettingsFocus::Preference(PreferenceFlag::Push),
    SettingsFocus::Preference(PreferenceFlag::Reminders),
    SettingsFocus::DeleteAccount,
];

impl SettingsFocus {
    /// Index of the section (card) holding this element
    fn section(self) -> usize {
        match self {
            SettingsFocus::Field(_) | SettingsFocus::UpdateProfile => 0,
            SettingsFocus::DarkMode => 1,
            SettingsFocus::Preference(_) => 2,
            SettingsFocus::DeleteAccount => 3,
        }
    }
}

const INITIAL_FOCUS: usize = 3;

/// Rows used by each card, borders included
const SECTION_HEIGHTS: [u16; 4] = [13, 4, 8, 6];
const HEADER_HEIGHT: u16 = 3;

#[derive(Serialize)]
struct SettingsSnapshot<'a> {
    profile: &'a Profile,
    preferences: &'a NotificationPreferences,
    theme: Theme,
}

pub struct SettingsPage {
    pub profile: Profile,
    pub preferences: NotificationPreferences,
    pub theme: Theme,
    pub icons: IconService,
    pub saving: bool,
    focus_index: usize,
    cursor_position: usize,
}

impl SettingsPage {
    /// Focus starts on the "Update Profile" button so page shortcuts work on arrival
    pub fn new(profile: Profile, icons: IconService) -> Self {
        Self {
            profile,
            preferences: NotificationPreferences::default(),
            theme: Theme::default(),
            icons,
            saving: false,
            focus_index: INITIAL_FOCUS,
            cursor_position: 0,
        }
    }

    pub fn focus(&self) -> SettingsFocus {
        FOCUS_ORDER[self.focus_index]
    }

    pub fn set_focus(&mut self, focus: SettingsFocus) {
        if let Some(index) = FOCUS_ORDER.iter().position(|f| *f == focus) {
            self.focus_index = index;
            self.reset_cursor();
        }
    }

    fn move_focus(&mut self, forward: bool) {
        let len = FOCUS_ORDER.len();
        self.focus_index = if forward {
            (self.focus_index + 1) % len
        } else {
            (self.focus_index + len - 1) % len
        };
        self.reset_cursor();
    }

    fn reset_cursor(&mut self) {
        if let SettingsFocus::Field(field) = self.focus() {
            self.cursor_position = self.profile.field(field).chars().count();
        }
    }

    /// Replace one staged field, leaving the rest of the profile untouched
    pub fn edit_field(&mut self, field: ProfileField, value: impl Into<String>) {
        self.profile.set_field(field, value);
        if self.focus() == SettingsFocus::Field(field) {
            self.reset_cursor();
        }
    }

    /// Staged profile, ready for submission
    pub fn submit(&self) -> Action {
        Action::SubmitProfile(self.profile.clone())
    }

    /// JSON dump of the page state, written to the logs on demand
    pub fn snapshot_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&SettingsSnapshot {
            profile: &self.profile,
            preferences: &self.preferences,
            theme: self.theme,
        })
    }

    fn activate(&mut self) -> Action {
        match self.focus() {
            SettingsFocus::Field(_) | SettingsFocus::UpdateProfile => self.submit(),
            SettingsFocus::DarkMode => Action::ToggleTheme,
            SettingsFocus::Preference(flag) => {
                let value = self.preferences.toggle(flag);
                log::info!("Settings: {} set to {}", flag.label(), value);
                Action::None
            }
            SettingsFocus::DeleteAccount => Action::DeleteAccount,
        }
    }

    /// First section to draw so the focused one fits in `available` rows
    fn first_visible_section(&self, available: u16) -> usize {
        let focused = self.focus().section();
        let mut first = 0;
        while first < focused && SECTION_HEIGHTS[first..=focused].iter().sum::<u16>() > available {
            first += 1;
        }
        first
    }

    fn render_profile(&self, f: &mut Frame, area: Rect, palette: &Palette) {
        let focused_section = self.focus().section() == 0;
        let card = Card::new()
            .title(vec![
                self.icons.render(Icon::User, IconSize::Medium, palette.heading()),
                Span::raw("Profile Settings "),
            ])
            .highlighted(focused_section);
        let inner = card.render(f, area, palette);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(inner);

        for (row, field) in rows.iter().zip(ProfileField::ALL) {
            let focused = self.focus() == SettingsFocus::Field(field);
            let value = self.profile.field(field);
            let display = if focused {
                with_cursor(value, self.cursor_position)
            } else {
                value.to_string()
            };
            f.render_widget(create_input_paragraph(display, field.label(), focused, palette), *row);
        }

        let (label, variant) = if self.saving {
            ("Saving...", ButtonVariant::Secondary)
        } else {
            ("Update Profile", ButtonVariant::Primary)
        };
        let button = Button::new(label, variant).focused(self.focus() == SettingsFocus::UpdateProfile);
        f.render_widget(Paragraph::new(button.line(palette)), rows[4]);
    }

    fn render_appearance(&self, f: &mut Frame, area: Rect, palette: &Palette) {
        let focused = self.focus() == SettingsFocus::DarkMode;
        let icon = self.icons.theme_icon(self.theme.is_dark());
        let card = Card::new()
            .title(vec![
                self.icons.render(icon, IconSize::Medium, palette.heading()),
                Span::raw("Appearance "),
            ])
            .highlighted(focused);
        let inner = card.render(f, area, palette);

        render_switch_row(
            f,
            inner,
            "Dark Mode",
            "Switch between light and dark theme",
            Toggle::new(self.theme.is_dark()).focused(focused),
            palette,
        );
    }

    fn render_notifications(&self, f: &mut Frame, area: Rect, palette: &Palette) {
        let card = Card::new()
            .title(vec![
                self.icons.render(Icon::Notification, IconSize::Medium, palette.heading()),
                Span::raw("Notifications "),
            ])
            .highlighted(self.focus().section() == 2);
        let inner = card.render(f, area, palette);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Length(2), Constraint::Length(2)])
            .split(inner);

        for (row, flag) in rows.iter().zip(PreferenceFlag::ALL) {
            let focused = self.focus() == SettingsFocus::Preference(flag);
            let toggle = Toggle::new(self.preferences.get(flag)).focused(focused);
            render_switch_row(f, *row, flag.label(), flag.description(), toggle, palette);
        }
    }

    fn render_danger_zone(&self, f: &mut Frame, area: Rect, palette: &Palette) {
        let card = Card::new()
            .title(vec![Span::raw(" Danger Zone ")])
            .danger(true);
        let inner = card.render(f, area, palette);

        let button =
            Button::new("Delete Account", ButtonVariant::Danger).focused(self.focus() == SettingsFocus::DeleteAccount);
        let text = vec![
            Line::from(Span::styled(DANGER_ZONE_WARNING, palette.muted_text())),
            Line::from(""),
            button.line(palette),
        ];
        f.render_widget(Paragraph::new(text).wrap(Wrap { trim: true }), inner);
    }
}

/// Label and description on the left, switch on the right
fn render_switch_row(f: &mut Frame, area: Rect, label: &str, description: &str, toggle: Toggle, palette: &Palette) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(8)])
        .split(area);

    let text = vec![
        Line::from(Span::styled(label.to_string(), Style::default().fg(palette.text))),
        Line::from(Span::styled(description.to_string(), palette.muted_text())),
    ];
    f.render_widget(Paragraph::new(text), columns[0]);
    f.render_widget(Paragraph::new(Line::from(toggle.span(palette))), columns[1]);
}

impl Component for SettingsPage {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Down | KeyCode::Tab => {
                self.move_focus(true);
                return Action::None;
            }
            KeyCode::Up | KeyCode::BackTab => {
                self.move_focus(false);
                return Action::None;
            }
            KeyCode::Enter => return self.activate(),
            _ => {}
        }

        if let SettingsFocus::Field(field) = self.focus() {
            if key.code == KeyCode::Esc {
                self.set_focus(SettingsFocus::UpdateProfile);
            } else {
                handle_edit_key(self.profile.field_mut(field), &mut self.cursor_position, key);
            }
            return Action::None;
        }

        match key.code {
            KeyCode::Char(' ') => self.activate(),
            KeyCode::Char('j') => {
                self.move_focus(true);
                Action::None
            }
            KeyCode::Char('k') => {
                self.move_focus(false);
                Action::None
            }
            KeyCode::Char('S') => {
                match self.snapshot_json() {
                    Ok(json) => log::info!("Settings snapshot: {}", json),
                    Err(e) => log::error!("Failed to serialize settings snapshot: {}", e),
                }
                Action::None
            }
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, palette: &Palette) {
        let area = LayoutManager::content_column(rect);
        let header_area = Rect::new(area.x, area.y, area.width, HEADER_HEIGHT.min(area.height));
        let header = vec![
            Line::from(Span::styled(SETTINGS_TITLE, palette.heading())),
            Line::from(Span::styled(SETTINGS_SUBTITLE, palette.muted_text())),
        ];
        f.render_widget(Paragraph::new(header), header_area);

        let mut y = area.y + header_area.height;
        let bottom = area.y + area.height;
        let first = self.first_visible_section(bottom.saturating_sub(y));

        for section in first..SECTION_HEIGHTS.len() {
            let height = SECTION_HEIGHTS[section];
            if y + height > bottom {
                break;
            }
            let section_area = Rect::new(area.x, y, area.width, height);
            match section {
                0 => self.render_profile(f, section_area, palette),
                1 => self.render_appearance(f, section_area, palette),
                2 => self.render_notifications(f, section_area, palette),
                _ => self.render_danger_zone(f, section_area, palette),
            }
            y += height;
        }
    }

    fn captures_text_input(&self) -> bool {
        matches!(self.focus(), SettingsFocus::Field(_))
    }
}
