use crate::helpers::{ch, key};
use crossterm::event::KeyCode;
use studentdesk::ui::components::DialogComponent;
use studentdesk::ui::core::{Action, Component, DialogType};
use uuid::Uuid;

fn open(dialog_type: DialogType) -> DialogComponent {
    let mut dialog = DialogComponent::new();
    assert!(matches!(dialog.update(Action::ShowDialog(dialog_type)), Action::None));
    assert!(dialog.is_visible());
    dialog
}

#[test]
fn test_unrelated_actions_pass_through() {
    let mut dialog = DialogComponent::new();
    assert!(matches!(dialog.update(Action::ToggleTheme), Action::ToggleTheme));
    assert!(!dialog.is_visible());
}

#[test]
fn test_task_creation_submits_trimmed_title() {
    let mut dialog = open(DialogType::TaskCreation);
    for c in "  Essay  ".chars() {
        dialog.handle_key_events(ch(c));
    }

    match dialog.handle_key_events(key(KeyCode::Enter)) {
        Action::CreateTask { input } => assert_eq!(input, "Essay"),
        other => panic!("expected CreateTask, got {:?}", other),
    }
    assert!(!dialog.is_visible());
}

#[test]
fn test_empty_title_keeps_dialog_open() {
    let mut dialog = open(DialogType::TaskCreation);
    dialog.handle_key_events(ch(' '));
    assert!(matches!(dialog.handle_key_events(key(KeyCode::Enter)), Action::None));
    assert!(dialog.is_visible());
}

#[test]
fn test_task_edit_is_prefilled() {
    let id = Uuid::new_v4();
    let mut dialog = open(DialogType::TaskEdit {
        task_id: id,
        input: "Draft".to_string(),
    });
    assert_eq!(dialog.input_buffer, "Draft");

    dialog.handle_key_events(ch('s'));
    match dialog.handle_key_events(key(KeyCode::Enter)) {
        Action::EditTask { id: edited, input } => {
            assert_eq!(edited, id);
            assert_eq!(input, "Drafts");
        }
        other => panic!("expected EditTask, got {:?}", other),
    }
}

#[test]
fn test_delete_confirmation() {
    let id = Uuid::new_v4();
    let confirm = || {
        open(DialogType::DeleteConfirmation {
            item_type: "task".to_string(),
            item_id: id,
            label: "Essay".to_string(),
        })
    };

    let mut dialog = confirm();
    assert!(matches!(dialog.handle_key_events(ch('n')), Action::HideDialog));

    let mut dialog = confirm();
    assert!(matches!(dialog.handle_key_events(ch('y')), Action::DeleteTask(deleted) if deleted == id));
    assert!(!dialog.is_visible());
}

#[test]
fn test_message_dialogs_dismiss() {
    let mut dialog = open(DialogType::Error("boom".to_string()));
    assert!(matches!(dialog.handle_key_events(ch('x')), Action::None));
    assert!(matches!(dialog.handle_key_events(key(KeyCode::Esc)), Action::HideDialog));

    dialog.update(Action::HideDialog);
    assert!(!dialog.is_visible());
}

#[test]
fn test_help_scrolls_and_closes() {
    let mut dialog = open(DialogType::Help);
    dialog.handle_key_events(key(KeyCode::Down));
    dialog.handle_key_events(ch('j'));
    assert_eq!(dialog.scroll_offset, 2);
    dialog.handle_key_events(key(KeyCode::Home));
    assert_eq!(dialog.scroll_offset, 0);
    assert!(matches!(dialog.handle_key_events(ch('?')), Action::HideDialog));
}
