//! Modal dialog component.
//!
//! Hosts every overlay the application shows: task creation and editing,
//! delete confirmation, success/error messages, help and logs. Only one dialog
//! is visible at a time and it receives all key events while open.

use crate::ui::components::dialogs::{scroll_behavior, system_dialogs, task_dialogs};
use crate::ui::components::text_input::handle_edit_key;
use crate::ui::core::{
    actions::{Action, DialogType},
    Component,
};
use crate::ui::styles::Palette;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{layout::Rect, widgets::ScrollbarState, Frame};

pub struct DialogComponent {
    pub dialog_type: Option<DialogType>,
    pub input_buffer: String,
    pub cursor_position: usize,
    pub logs: Vec<String>,
    // Scrolling support for long content dialogs
    pub scroll_offset: usize,
    pub scrollbar_state: ScrollbarState,
}

impl Default for DialogComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl DialogComponent {
    pub fn new() -> Self {
        Self {
            dialog_type: None,
            input_buffer: String::new(),
            cursor_position: 0,
            logs: Vec::new(),
            scroll_offset: 0,
            scrollbar_state: ScrollbarState::new(0),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.dialog_type.is_some()
    }

    /// Snapshot shown by the logs dialog
    pub fn set_logs(&mut self, logs: Vec<String>) {
        self.logs = logs;
    }

    pub fn clear_dialog(&mut self) {
        self.dialog_type = None;
        self.input_buffer.clear();
        self.cursor_position = 0;
        self.scroll_offset = 0;
        self.scrollbar_state = ScrollbarState::new(0);
    }

    fn handle_submit(&mut self) -> Action {
        let action = match &self.dialog_type {
            Some(DialogType::TaskCreation) => {
                let input = self.input_buffer.trim().to_string();
                if input.is_empty() {
                    return Action::None;
                }
                Action::CreateTask { input }
            }
            Some(DialogType::TaskEdit { task_id, .. }) => {
                let input = self.input_buffer.trim().to_string();
                if input.is_empty() {
                    return Action::None;
                }
                Action::EditTask { id: *task_id, input }
            }
            Some(DialogType::DeleteConfirmation { item_type, item_id, .. }) => match item_type.as_str() {
                "task" => Action::DeleteTask(*item_id),
                other => {
                    log::warn!("Delete confirmation for unknown item type '{}'", other);
                    Action::None
                }
            },
            _ => Action::HideDialog,
        };

        self.clear_dialog();
        action
    }

    fn handle_scroll_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => scroll_behavior::scroll_up(&mut self.scroll_offset, &mut self.scrollbar_state),
            KeyCode::Down | KeyCode::Char('j') => {
                scroll_behavior::scroll_down(&mut self.scroll_offset, &mut self.scrollbar_state)
            }
            KeyCode::PageUp => scroll_behavior::page_up(&mut self.scroll_offset, &mut self.scrollbar_state),
            KeyCode::PageDown => scroll_behavior::page_down(&mut self.scroll_offset, &mut self.scrollbar_state),
            KeyCode::Home => scroll_behavior::scroll_to_top(&mut self.scroll_offset, &mut self.scrollbar_state),
            _ => {}
        }
        Action::None
    }
}

impl Component for DialogComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match &self.dialog_type {
            None => Action::None,
            Some(DialogType::Help) => match key.code {
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => Action::HideDialog,
                _ => self.handle_scroll_key(key),
            },
            Some(DialogType::Logs) => match key.code {
                KeyCode::Esc | KeyCode::Char('G') | KeyCode::Char('q') => Action::HideDialog,
                _ => self.handle_scroll_key(key),
            },
            Some(DialogType::Info(_)) | Some(DialogType::Error(_)) => match key.code {
                KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => Action::HideDialog,
                _ => Action::None,
            },
            Some(DialogType::DeleteConfirmation { .. }) => match key.code {
                KeyCode::Enter | KeyCode::Char('y') => self.handle_submit(),
                KeyCode::Esc | KeyCode::Char('n') => Action::HideDialog,
                _ => Action::None,
            },
            Some(DialogType::TaskCreation) | Some(DialogType::TaskEdit { .. }) => match key.code {
                KeyCode::Esc => Action::HideDialog,
                KeyCode::Enter => self.handle_submit(),
                _ => {
                    handle_edit_key(&mut self.input_buffer, &mut self.cursor_position, key);
                    Action::None
                }
            },
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ShowDialog(dialog_type) => {
                self.clear_dialog();
                // Pre-populate input for edit dialogs
                if let DialogType::TaskEdit { input, .. } = &dialog_type {
                    self.input_buffer = input.clone();
                    self.cursor_position = input.chars().count();
                }
                self.dialog_type = Some(dialog_type);
                Action::None
            }
            Action::HideDialog => {
                self.clear_dialog();
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, palette: &Palette) {
        let Some(dialog_type) = self.dialog_type.clone() else {
            return;
        };

        match dialog_type {
            DialogType::TaskCreation => task_dialogs::render_task_input_dialog(
                f,
                rect,
                "New Task",
                &self.input_buffer,
                self.cursor_position,
                palette,
            ),
            DialogType::TaskEdit { .. } => task_dialogs::render_task_input_dialog(
                f,
                rect,
                "Edit Task",
                &self.input_buffer,
                self.cursor_position,
                palette,
            ),
            DialogType::DeleteConfirmation { item_type, label, .. } => {
                task_dialogs::render_delete_confirmation_dialog(f, rect, &item_type, &label, palette)
            }
            DialogType::Info(message) => {
                system_dialogs::render_message_dialog(f, rect, "Success", &message, palette.success, palette)
            }
            DialogType::Error(message) => {
                system_dialogs::render_message_dialog(f, rect, "Error", &message, palette.danger, palette)
            }
            DialogType::Help => system_dialogs::render_help_dialog(
                f,
                rect,
                &mut self.scroll_offset,
                &mut self.scrollbar_state,
                palette,
            ),
            DialogType::Logs => system_dialogs::render_logs_dialog(
                f,
                rect,
                &self.logs,
                &mut self.scroll_offset,
                &mut self.scrollbar_state,
                palette,
            ),
        }
    }
}
