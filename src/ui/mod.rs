mod form;
mod summary;

use ratatui::{
    prelude::*,
    widgets::{Block, Paragraph},
};

use crate::app::App;

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    if area.is_empty() {
        return;
    }
    frame.render_widget(Block::default().bg(Color::Reset), area);

    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .split(area);

    summary::render(frame, chunks[0], &app.view().summary);
    form::render(frame, chunks[1], app);
    render_controls(frame, chunks[2]);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("j/k move  ·  space select  ·  s submit  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::grader::ERROR_MESSAGE;
    use crate::models::Question;

    fn draw(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn renders_summary_and_submit_for_empty_quiz() {
        let app = App::with_questions(Vec::new());
        let screen = draw(&app, 80, 12);

        assert!(screen.contains("Questions answered: 0"));
        assert!(screen.contains("Correct answers: 0"));
        assert!(screen.contains("[ Submit ]"));
    }

    #[test]
    fn renders_feedback_after_submit() {
        let mut app = App::with_questions(vec![
            Question::new("Pick two", ["one", "two"], 1, "Two it is"),
            Question::new("Pick one", ["one", "two"], 0, "One it is"),
        ]);
        app.select(0, 1);
        app.select(1, 1);
        app.submit();

        let screen = draw(&app, 80, 24);

        assert!(screen.contains("Two it is"));
        assert!(screen.contains(ERROR_MESSAGE));
        assert!(screen.contains("Questions answered: 2"));
        assert!(screen.contains("Correct answers: 1"));
    }

    #[test]
    fn zero_sized_area_draws_nothing() {
        let app = App::with_questions(Vec::new());
        let mut terminal = Terminal::new(TestBackend::new(0, 0)).unwrap();
        terminal.draw(|frame| render(frame, &app)).unwrap();
        assert!(terminal.backend().buffer().content.is_empty());
    }
}
