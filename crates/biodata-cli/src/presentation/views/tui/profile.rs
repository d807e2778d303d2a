use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::presentation::view_models::ProfileViewModel;

/// Profile card. The terminal cannot show the image, so the URL stands in.
pub struct ProfileView<'a> {
    model: &'a ProfileViewModel,
}

impl<'a> ProfileView<'a> {
    pub fn new(model: &'a ProfileViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for ProfileView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let picture = match &self.model.picture_url {
            Some(url) => Span::raw(url.clone()),
            None => Span::styled("(no picture)", Style::default().add_modifier(Modifier::DIM)),
        };

        let mut lines = vec![
            Line::from(vec![
                Span::styled("Picture  ", Style::default().add_modifier(Modifier::BOLD)),
                picture,
            ]),
            Line::default(),
            Line::from(Span::styled(
                self.model.name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
        ];
        if !self.model.about.is_empty() {
            lines.push(Line::from(self.model.about.clone()));
        }

        Paragraph::new(lines)
            .block(
                Block::default()
                    .title(format!(" {} ", self.model.title))
                    .borders(Borders::ALL),
            )
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}
