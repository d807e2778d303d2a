use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::view_models::{EditFormViewModel, FormFieldViewModel};

/// Edit form: one line per input, its error (if any) right beneath it
pub struct EditFormView<'a> {
    model: &'a EditFormViewModel,
}

impl<'a> EditFormView<'a> {
    pub fn new(model: &'a EditFormViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for EditFormView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let label_width = self
            .model
            .fields
            .iter()
            .map(|field| label_text(field).chars().count())
            .max()
            .unwrap_or(0);

        let mut lines = Vec::new();
        for field in &self.model.fields {
            lines.push(input_line(field, label_width));
            if let Some(error) = &field.error {
                lines.push(Line::from(Span::styled(
                    format!("    {}", error),
                    Style::default().fg(Color::Red),
                )));
            }
        }
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            format!("[ {} ]", self.model.submit_label),
            Style::default()
                .fg(Color::White)
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )));

        Paragraph::new(lines)
            .block(
                Block::default()
                    .title(format!(" {} ", self.model.title))
                    .borders(Borders::ALL),
            )
            .render(area, buf);
    }
}

fn label_text(field: &FormFieldViewModel) -> String {
    if field.required {
        format!("{} *", field.label)
    } else {
        field.label.clone()
    }
}

fn input_line(field: &FormFieldViewModel, label_width: usize) -> Line<'static> {
    let marker = if field.focused { "> " } else { "  " };
    let label = format!("{}{:<width$}  ", marker, label_text(field), width = label_width);

    let label_style = if field.focused {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let value = match (&field.placeholder, field.value.is_empty()) {
        (Some(placeholder), true) => Span::styled(
            placeholder.clone(),
            Style::default().add_modifier(Modifier::DIM),
        ),
        _ => Span::raw(field.value.clone()),
    };

    let mut spans = vec![Span::styled(label, label_style), value];
    if field.focused {
        spans.push(Span::styled("_", Style::default().fg(Color::Yellow)));
    }
    Line::from(spans)
}
