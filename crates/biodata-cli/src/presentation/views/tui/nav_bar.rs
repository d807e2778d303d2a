use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Tabs, Widget},
};

use crate::presentation::view_models::NavViewModel;

/// Navigation bar; the highlighted tab is the active view
pub struct NavBarView<'a> {
    model: &'a NavViewModel,
}

impl<'a> NavBarView<'a> {
    pub fn new(model: &'a NavViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for NavBarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let titles: Vec<Line> = self
            .model
            .items
            .iter()
            .map(|item| Line::from(item.label.clone()))
            .collect();
        let selected = self
            .model
            .items
            .iter()
            .position(|item| item.active)
            .unwrap_or(0);

        Tabs::new(titles)
            .select(selected)
            .block(Block::default().title(" biodata ").borders(Borders::ALL))
            .style(Style::default().fg(Color::White))
            .highlight_style(
                Style::default()
                    .fg(Color::Blue)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            )
            .render(area, buf);
    }
}
