//! Bottom navigation bar.
//!
//! One entry per [`NavItem`]; an entry is active only when its path equals the
//! current path exactly. There is no prefix matching, so "/tasks/42" leaves
//! every entry inactive.

use crate::icons::{IconService, IconSize};
use crate::router::{NavItem, NAV_ITEMS};
use crate::ui::styles::Palette;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub struct BottomNav {
    pub icons: IconService,
}

impl BottomNav {
    pub fn new(icons: IconService) -> Self {
        Self { icons }
    }

    pub fn is_active(item: &NavItem, current_path: &str) -> bool {
        item.path == current_path
    }

    /// Every navigation item paired with its active flag
    pub fn items(current_path: &str) -> Vec<(&'static NavItem, bool)> {
        NAV_ITEMS
            .iter()
            .map(|item| (item, Self::is_active(item, current_path)))
            .collect()
    }

    pub fn render(&self, f: &mut Frame, area: Rect, current_path: &str, palette: &Palette) {
        let bar = Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(palette.border))
            .style(Style::default().bg(palette.surface));
        let inner = bar.inner(area);
        f.render_widget(bar, area);

        let items = Self::items(current_path);
        let constraints = vec![Constraint::Ratio(1, items.len() as u32); items.len()];
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(constraints)
            .split(inner);

        for ((index, (item, active)), cell) in items.into_iter().enumerate().zip(cells.iter()) {
            let style = if active {
                Style::default().fg(palette.primary).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(palette.muted)
            };

            let mut lines = vec![Line::from(vec![
                self.icons.render(item.icon, IconSize::Small, style),
                Span::styled(item.label, style),
            ])];
            if inner.height > 1 {
                let hint = if active { "━━━".to_string() } else { format!("{}", index + 1) };
                lines.push(Line::from(Span::styled(hint, style)));
            }

            f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), *cell);
        }
    }
}
