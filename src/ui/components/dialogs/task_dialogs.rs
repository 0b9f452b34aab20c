use super::common::{create_dialog_block, create_input_paragraph, create_instructions_paragraph, shortcuts};
use crate::ui::components::text_input::with_cursor;
use crate::ui::layout::LayoutManager;
use crate::ui::styles::Palette;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    widgets::{Clear, Paragraph, Wrap},
    Frame,
};

const QUICK_ADD_HINT: &str = "#course  @today|tomorrow|YYYY-MM-DD  !high|medium|low";

/// Shared body of the task creation and edit dialogs
pub fn render_task_input_dialog(
    f: &mut Frame,
    area: Rect,
    title: &str,
    input_buffer: &str,
    cursor_position: usize,
    palette: &Palette,
) {
    let dialog_area = LayoutManager::centered_rect_lines(60, 9, area);
    f.render_widget(Clear, dialog_area);

    let block = create_dialog_block(format!(" {} ", title), palette.primary, palette);
    let inner_area = block.inner(dialog_area);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Title input (borders + content)
            Constraint::Length(1), // Quick-add markers
            Constraint::Length(1), // Instructions
        ])
        .split(inner_area);

    let input = create_input_paragraph(with_cursor(input_buffer, cursor_position), "Title", true, palette);
    let markers = Paragraph::new(QUICK_ADD_HINT)
        .style(palette.muted_text())
        .alignment(Alignment::Center);
    let instructions = create_instructions_paragraph(
        &[shortcuts::ENTER_SAVE, shortcuts::SEPARATOR, shortcuts::ESC_CANCEL],
        palette,
    );

    f.render_widget(block, dialog_area);
    f.render_widget(input, chunks[0]);
    f.render_widget(markers, chunks[1]);
    f.render_widget(instructions, chunks[2]);
}

pub fn render_delete_confirmation_dialog(f: &mut Frame, area: Rect, item_type: &str, label: &str, palette: &Palette) {
    let dialog_area = LayoutManager::centered_rect_lines(50, 7, area);
    f.render_widget(Clear, dialog_area);

    let block = create_dialog_block(" Confirm Delete ".to_string(), palette.danger, palette);
    let inner_area = block.inner(dialog_area);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(2), Constraint::Length(1)])
        .split(inner_area);

    let message = Paragraph::new(format!("Delete this {}?\n\"{}\"", item_type, label))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    let instructions = create_instructions_paragraph(
        &[shortcuts::ENTER_CONFIRM, shortcuts::SEPARATOR, shortcuts::ESC_CANCEL],
        palette,
    );

    f.render_widget(block, dialog_area);
    f.render_widget(message, chunks[0]);
    f.render_widget(instructions, chunks[1]);
}
