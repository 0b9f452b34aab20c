use super::common::{create_dialog_block, create_instructions_paragraph, shortcuts};
use crate::constants::DIALOG_TITLE_DEBUG_LOGS;
use crate::ui::layout::LayoutManager;
use crate::ui::styles::Palette;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Style},
    widgets::{Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap},
    Frame,
};

const HELP_TEXT: &str = r"
NAVIGATION
----------
1-4         Dashboard / Tasks / Notifications / Settings
←/→         Previous / next page
b           Go back
T           Toggle light/dark theme
I           Cycle icon theme (unicode, emoji, ascii)

DASHBOARD
---------
t           Open tasks
n           Open notifications

TASKS
-----
a           Add task
e           Edit selected task
Space       Toggle completion
p           Cycle priority
d           Delete task (with confirmation)
j/k ↑/↓     Move selection

In the task dialog:
#course     Course (use _ for spaces)
@date       Due date: today, tomorrow or YYYY-MM-DD
!priority   high, medium or low

NOTIFICATIONS
-------------
Enter       Mark as read
m           Mark all as read
d           Dismiss
j/k ↑/↓     Move selection

SETTINGS
--------
↑/↓ Tab     Move between fields and controls
Enter/Space Activate button or toggle
Type        Edit the focused profile field
Esc         Leave the focused field
S           Write a profile snapshot to the logs

GENERAL
-------
?           Toggle help
G           Show logs
q / Ctrl+C  Quit
";

/// Success or error message box
pub fn render_message_dialog(f: &mut Frame, area: Rect, title: &str, message: &str, color: Color, palette: &Palette) {
    let dialog_area = LayoutManager::centered_rect_lines(60, 8, area);
    f.render_widget(Clear, dialog_area);

    let block = create_dialog_block(format!(" {} ", title), color, palette);
    let inner_area = block.inner(dialog_area);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner_area);

    let message_paragraph = Paragraph::new(message.to_string())
        .style(Style::default().fg(color))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    let instructions = create_instructions_paragraph(&[shortcuts::ENTER_DISMISS], palette);

    f.render_widget(block, dialog_area);
    f.render_widget(message_paragraph, chunks[0]);
    f.render_widget(instructions, chunks[1]);
}

pub fn render_help_dialog(
    f: &mut Frame,
    area: Rect,
    scroll_offset: &mut usize,
    scrollbar_state: &mut ScrollbarState,
    palette: &Palette,
) {
    let lines: Vec<String> = HELP_TEXT.lines().map(str::to_string).collect();
    render_scrollable_dialog(f, area, " studentdesk - Help ", &lines, scroll_offset, scrollbar_state, palette);
}

pub fn render_logs_dialog(
    f: &mut Frame,
    area: Rect,
    logs: &[String],
    scroll_offset: &mut usize,
    scrollbar_state: &mut ScrollbarState,
    palette: &Palette,
) {
    let lines = if logs.is_empty() {
        vec!["No log entries yet".to_string()]
    } else {
        logs.to_vec()
    };
    render_scrollable_dialog(f, area, DIALOG_TITLE_DEBUG_LOGS, &lines, scroll_offset, scrollbar_state, palette);
}

fn render_scrollable_dialog(
    f: &mut Frame,
    area: Rect,
    title: &str,
    lines: &[String],
    scroll_offset: &mut usize,
    scrollbar_state: &mut ScrollbarState,
    palette: &Palette,
) {
    let (width, height) = LayoutManager::help_panel_dimensions(area.width, area.height);
    let dialog_area = LayoutManager::centered_rect(width, height, area);
    f.render_widget(Clear, dialog_area);

    let block = create_dialog_block(title.to_string(), palette.primary, palette);
    let inner_area = block.inner(dialog_area);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner_area);

    let visible_height = chunks[0].height as usize;
    let max_scroll = lines.len().saturating_sub(visible_height);
    *scroll_offset = (*scroll_offset).min(max_scroll);
    *scrollbar_state = scrollbar_state
        .content_length(max_scroll + 1)
        .viewport_content_length(visible_height)
        .position(*scroll_offset);

    let visible = lines
        .iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .cloned()
        .collect::<Vec<_>>()
        .join("\n");

    let content = Paragraph::new(visible).style(Style::default().fg(palette.text));
    let instructions = create_instructions_paragraph(&[shortcuts::SCROLL, shortcuts::SEPARATOR, shortcuts::ESC_CANCEL], palette);

    f.render_widget(block, dialog_area);
    f.render_widget(content, chunks[0]);
    f.render_widget(instructions, chunks[1]);

    if max_scroll > 0 {
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"))
            .track_symbol(Some("│"))
            .thumb_symbol("▐");
        f.render_stateful_widget(
            scrollbar,
            dialog_area.inner(Margin {
                vertical: 1,
                horizontal: 0,
            }),
            scrollbar_state,
        );
    }
}
