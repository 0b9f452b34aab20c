use crate::ui::styles::Palette;
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

/// Creates a styled main dialog block
pub fn create_dialog_block<'a>(title: String, theme_color: Color, palette: &Palette) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(title)
        .title_style(Style::default().fg(theme_color).add_modifier(Modifier::BOLD))
        .border_style(Style::default().fg(theme_color))
        .style(Style::default().fg(palette.text).bg(palette.surface))
}

/// Creates an input field block with a visual cursor
pub fn create_input_paragraph<'a>(
    display: String,
    field_title: &str,
    focused: bool,
    palette: &Palette,
) -> Paragraph<'a> {
    let border_color = if focused { palette.accent } else { palette.border };
    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(format!(" {} ", field_title))
        .title_style(Style::default().fg(if focused { palette.accent } else { palette.muted }))
        .border_style(Style::default().fg(border_color));

    Paragraph::new(display)
        .block(input_block)
        .style(Style::default().fg(palette.text))
}

/// Instruction shortcut definition: (key, color, description)
pub type InstructionShortcut = (&'static str, Color, &'static str);

/// Creates a paragraph with color-coded instruction shortcuts
pub fn create_instructions_paragraph<'a>(instructions: &[InstructionShortcut], palette: &Palette) -> Paragraph<'a> {
    let mut instruction_text = Vec::new();
    for (key, color, desc) in instructions {
        instruction_text.push(Span::styled(
            *key,
            Style::default().fg(*color).add_modifier(Modifier::BOLD),
        ));
        instruction_text.push(Span::styled(*desc, Style::default().fg(palette.muted)));
    }

    Paragraph::new(Line::from(instruction_text)).alignment(Alignment::Center)
}

/// Common instruction shortcuts used across dialogs
pub mod shortcuts {
    use super::*;

    pub const SEPARATOR: InstructionShortcut = (" • ", Color::Gray, "");
    pub const ESC_CANCEL: InstructionShortcut = ("Esc", Color::Red, " Cancel");
    pub const ENTER_SAVE: InstructionShortcut = ("Enter", Color::Green, " Save");
    pub const ENTER_CONFIRM: InstructionShortcut = ("Enter/y", Color::Red, " Delete");
    pub const ENTER_DISMISS: InstructionShortcut = ("Enter/Esc", Color::Cyan, " Dismiss");
    pub const SCROLL: InstructionShortcut = ("↑↓/jk", Color::Cyan, " Scroll");
}
