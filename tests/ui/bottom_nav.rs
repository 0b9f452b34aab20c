use crate::helpers::{buffer_text, columns_of, terminal};
use ratatui::layout::Rect;
use studentdesk::icons::{IconService, IconTheme};
use studentdesk::router::NAV_ITEMS;
use studentdesk::ui::components::BottomNav;
use studentdesk::ui::styles::Palette;

fn active_paths(current_path: &str) -> Vec<&'static str> {
    BottomNav::items(current_path)
        .into_iter()
        .filter(|(_, active)| *active)
        .map(|(item, _)| item.path)
        .collect()
}

#[test]
fn test_only_tasks_is_active_on_tasks() {
    assert_eq!(active_paths("/tasks"), vec!["/tasks"]);
}

#[test]
fn test_exactly_one_active_for_every_nav_path() {
    for item in NAV_ITEMS.iter() {
        assert_eq!(active_paths(item.path), vec![item.path]);
    }
}

#[test]
fn test_no_prefix_or_unknown_matches() {
    assert!(active_paths("/").is_empty());
    assert!(active_paths("/tasks/42").is_empty());
    assert!(active_paths("/task").is_empty());
    assert!(active_paths("").is_empty());
}

#[test]
fn test_render_marks_active_item() {
    let nav = BottomNav::new(IconService::new(IconTheme::Ascii));
    let palette = Palette::light();
    let mut terminal = terminal(80, 3);
    terminal
        .draw(|f| nav.render(f, Rect::new(0, 0, 80, 3), "/tasks", &palette))
        .unwrap();

    let text = buffer_text(&terminal);
    for item in NAV_ITEMS.iter() {
        assert!(text.contains(item.label), "missing label {}", item.label);
    }

    // The underline sits under the second of four equal cells
    let underline = columns_of(&terminal, "━");
    assert_eq!(underline.len(), 3);
    assert!(underline.iter().all(|x| (20..40).contains(x)));
}

#[test]
fn test_render_without_active_item() {
    let nav = BottomNav::new(IconService::new(IconTheme::Ascii));
    let mut terminal = terminal(80, 3);
    terminal
        .draw(|f| nav.render(f, Rect::new(0, 0, 80, 3), "/grades", &Palette::dark()))
        .unwrap();
    assert!(columns_of(&terminal, "━").is_empty());
}
