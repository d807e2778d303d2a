//! Status Bar View Component
//!
//! Renders the bottom status bar with the last status message and key help.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::view_models::StatusBarViewModel;

use super::status_level_to_color;

pub struct StatusBarView<'a> {
    model: &'a StatusBarViewModel,
}

impl<'a> StatusBarView<'a> {
    pub fn new(model: &'a StatusBarViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for StatusBarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(inner);

        let status_line = match &self.model.status {
            Some(badge) => Line::from(Span::styled(
                badge.label.clone(),
                Style::default().fg(status_level_to_color(badge.level)),
            )),
            None => Line::default(),
        };
        Paragraph::new(status_line).render(chunks[0], buf);

        let mut spans = Vec::new();
        for hint in &self.model.key_hints {
            spans.push(Span::styled(
                format!("[{}]", hint.key),
                Style::default().fg(Color::Yellow),
            ));
            spans.push(Span::raw(format!("{} ", hint.action)));
        }
        Paragraph::new(Line::from(spans)).render(chunks[1], buf);
    }
}
