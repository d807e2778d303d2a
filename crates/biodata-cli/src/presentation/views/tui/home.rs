use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table, Widget},
};

use crate::presentation::view_models::HomeViewModel;

pub struct HomeView<'a> {
    model: &'a HomeViewModel,
}

impl<'a> HomeView<'a> {
    pub fn new(model: &'a HomeViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for HomeView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rows: Vec<Row> = self
            .model
            .rows
            .iter()
            .map(|row| {
                Row::new(vec![
                    Cell::from(row.label.clone())
                        .style(Style::default().add_modifier(Modifier::BOLD)),
                    Cell::from(row.value.clone()),
                ])
            })
            .collect();

        Table::new(rows, [Constraint::Length(8), Constraint::Min(10)])
            .block(
                Block::default()
                    .title(format!(" {} ", self.model.title))
                    .borders(Borders::ALL),
            )
            .column_spacing(2)
            .render(area, buf);
    }
}
