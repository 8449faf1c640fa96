use ratatui::{
    prelude::*,
    widgets::{Block, Padding, Paragraph, Wrap},
};

use crate::app::{App, Focus};
use crate::view::{Feedback, Marker, QuestionView};

/// Lines kept visible below the focused control when scrolling.
const SCROLL_MARGIN: usize = 2;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let focus = app.focus();
    let mut lines: Vec<Line> = Vec::new();
    let mut focus_line = 0;

    for question in app.view().form.questions() {
        render_question(&mut lines, &mut focus_line, question, focus);
    }

    if focus == Focus::Submit {
        focus_line = lines.len();
    }
    lines.push(submit_line(app.view().form.submit_label(), focus == Focus::Submit));

    let block = Block::default().padding(Padding::horizontal(2));
    let inner = block.inner(area);
    let (top, bottom) = focus_rows(&lines, focus_line, inner.width);
    let scroll = scroll_offset(top, bottom, inner.height as usize);

    let widget = wrapped(lines).block(block).scroll((scroll, 0));
    frame.render_widget(widget, area);
}

fn wrapped<'a>(lines: Vec<Line<'a>>) -> Paragraph<'a> {
    Paragraph::new(lines).wrap(Wrap { trim: false })
}

/// Rendered rows before the focused line, and rows up to the end of the
/// margin below it, once every line is wrapped to `width`.
fn focus_rows(lines: &[Line], focus_line: usize, width: u16) -> (usize, usize) {
    let focus_line = focus_line.min(lines.len());
    let margin_end = (focus_line + SCROLL_MARGIN + 1).min(lines.len());

    let top = wrapped(lines[..focus_line].to_vec()).line_count(width);
    let bottom = top + wrapped(lines[focus_line..margin_end].to_vec()).line_count(width);
    (top, bottom)
}

fn render_question<'a>(
    lines: &mut Vec<Line<'a>>,
    focus_line: &mut usize,
    question: &'a QuestionView,
    focus: Focus,
) {
    lines.push(Line::from(Span::styled(
        format!("{}. {}", question.index() + 1, question.prompt()),
        Style::default().fg(Color::White).bold(),
    )));

    for (position, control) in question.options().iter().enumerate() {
        let is_focused = focus
            == Focus::Option {
                question: question.index(),
                option: position,
            };
        if is_focused {
            *focus_line = lines.len();
        }

        let style = if is_focused {
            Style::default().fg(Color::Cyan).bold()
        } else {
            Style::default().fg(Color::Gray)
        };
        let pointer = if is_focused { ">" } else { " " };
        let radio = if control.is_selected() { "(•)" } else { "( )" };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} {} ", pointer, radio), style),
            Span::styled(control.value(), style),
        ]));
    }

    if let Some(feedback) = &question.feedback {
        lines.push(feedback_line(feedback));
    }
    lines.push(Line::from(""));
}

fn feedback_line(feedback: &Feedback) -> Line<'_> {
    let color = match feedback.marker {
        Marker::Positive => Color::Green,
        Marker::Negative => Color::Red,
    };
    Line::from(Span::styled(
        format!("   {}", feedback.message),
        Style::default().fg(color).bold(),
    ))
}

fn submit_line(label: &str, is_focused: bool) -> Line<'_> {
    let style = if is_focused {
        Style::default().fg(Color::Black).bg(Color::Cyan).bold()
    } else {
        Style::default().fg(Color::Cyan)
    };
    Line::from(Span::styled(format!("[ {} ]", label), style))
}

/// Offset that keeps rows `top..bottom` on screen, preferring `top` when
/// they do not all fit. Saturates at the largest offset a paragraph takes.
fn scroll_offset(top: usize, bottom: usize, height: usize) -> u16 {
    let offset = bottom.saturating_sub(height).min(top);
    u16::try_from(offset).unwrap_or(u16::MAX)
}
