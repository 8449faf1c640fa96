use ratatui::{
    prelude::*,
    widgets::{Block, Padding, Paragraph},
};

use crate::view::Summary;

pub fn render(frame: &mut Frame, area: Rect, summary: &Summary) {
    let block = Block::default()
        .padding(Padding::vertical(1))
        .bg(Color::Cyan);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let slots = summary.slots();
    if slots.is_empty() {
        return;
    }

    let chunks = Layout::horizontal(vec![Constraint::Fill(1); slots.len()]).split(inner);
    for (slot, chunk) in slots.iter().zip(chunks.iter()) {
        let line = Line::from(vec![
            Span::raw(slot.label()),
            Span::styled(slot.text(), Style::default().bold()),
        ]);
        let widget = Paragraph::new(line)
            .alignment(Alignment::Center)
            .fg(Color::Black);
        frame.render_widget(widget, *chunk);
    }
}
