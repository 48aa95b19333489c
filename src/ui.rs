pub mod gallows;

use itertools::Itertools;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::round::Round;
use crate::{App, AppState};

const HORIZONTAL_MARGIN: u16 = 5;
const VERTICAL_MARGIN: u16 = 1;

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // styles
        let bold_style = Style::default().add_modifier(Modifier::BOLD);

        let green_bold_style = Style::default().patch(bold_style).fg(Color::Green);
        let red_bold_style = Style::default().patch(bold_style).fg(Color::Red);

        let dim_bold_style = Style::default()
            .patch(bold_style)
            .add_modifier(Modifier::DIM);

        let italic_style = Style::default().add_modifier(Modifier::ITALIC);

        match (&self.state, self.session.active_round()) {
            (AppState::SessionOver, _) | (_, None) => {
                render_session_over(self, area, buf);
            }
            (AppState::Guessing, Some(round)) => {
                let chunks = round_layout(area);

                render_gallows(round, chunks[0], buf, dim_bold_style);
                render_reveal(round, chunks[1], buf, green_bold_style, dim_bold_style);
                render_letter_tracker(round, chunks[2], buf);

                let status = Paragraph::new(Line::from(vec![
                    Span::styled(
                        format!("{} misses left", round.incorrect_moves_remaining()),
                        bold_style,
                    ),
                    Span::raw("   "),
                    Span::styled(score_line(self), dim_bold_style),
                ]))
                .alignment(Alignment::Center);
                status.render(chunks[3], buf);

                let help = Paragraph::new(Span::styled(
                    "type a letter to guess / (esc) quit",
                    italic_style,
                ))
                .alignment(Alignment::Center);
                help.render(chunks[4], buf);
            }
            (AppState::RoundOver { won }, Some(round)) => {
                let chunks = round_layout(area);

                render_gallows(round, chunks[0], buf, dim_bold_style);
                render_reveal(round, chunks[1], buf, green_bold_style, dim_bold_style);

                let verdict = if *won {
                    Span::styled("Win!", green_bold_style)
                } else {
                    Span::styled("Lose!", red_bold_style)
                };
                let outcome = Paragraph::new(Line::from(vec![
                    verdict,
                    Span::raw("  "),
                    Span::styled(format!("the word was \"{}\"", round.word()), bold_style),
                ]))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true });
                outcome.render(chunks[2], buf);

                let status = Paragraph::new(Span::styled(score_line(self), dim_bold_style))
                    .alignment(Alignment::Center);
                status.render(chunks[3], buf);

                let help = Paragraph::new(Span::styled(
                    "(enter) next word / (esc) quit",
                    italic_style,
                ))
                .alignment(Alignment::Center);
                help.render(chunks[4], buf);
            }
        }
    }
}

fn round_layout(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(HORIZONTAL_MARGIN)
        .vertical_margin(VERTICAL_MARGIN)
        .constraints(
            [
                Constraint::Length(gallows::FRAME_HEIGHT + 1), // drawing
                Constraint::Length(2),                         // reveal pattern
                Constraint::Length(2),                         // letter tracker
                Constraint::Length(2),                         // misses + score
                Constraint::Min(1),                            // help
            ]
            .as_ref(),
        )
        .split(area)
}

fn render_gallows(round: &Round, area: Rect, buf: &mut Buffer, style: Style) {
    let allowed = round.incorrect_moves_allowed();
    let used = allowed - round.incorrect_moves_remaining();
    let drawing = Paragraph::new(gallows::frame(used, allowed))
        .style(style)
        .alignment(Alignment::Center);
    drawing.render(area, buf);
}

fn render_reveal(
    round: &Round,
    area: Rect,
    buf: &mut Buffer,
    revealed_style: Style,
    masked_style: Style,
) {
    let mut spans: Vec<Span> = Vec::new();
    for (idx, c) in round.formatted_word().chars().enumerate() {
        if idx > 0 {
            spans.push(Span::raw(" "));
        }
        if c == crate::round::PLACEHOLDER {
            spans.push(Span::styled("_", masked_style));
        } else {
            spans.push(Span::styled(c.to_string(), revealed_style));
        }
    }

    // centering the spaced word gives a nice zen feeling; fall back to
    // left-aligned wrapping only when the terminal is genuinely narrow
    let spaced_width = round.formatted_word().chars().join(" ").width() as u16;
    let alignment = if spaced_width <= area.width {
        Alignment::Center
    } else {
        Alignment::Left
    };

    let widget = Paragraph::new(Line::from(spans))
        .alignment(alignment)
        .wrap(Wrap { trim: true });
    widget.render(area, buf);
}

/// The a-z tracker standing in for on-screen letter buttons: guessed letters
/// are colored by whether they hit, the rest stay neutral.
fn render_letter_tracker(round: &Round, area: Rect, buf: &mut Buffer) {
    let mut spans: Vec<Span> = Vec::new();
    for (idx, c) in ('a'..='z').enumerate() {
        if idx > 0 {
            spans.push(Span::raw(" "));
        }
        let span = if !round.has_guessed(c) {
            Span::styled(c.to_string(), Style::default().add_modifier(Modifier::DIM))
        } else if round.word().contains(c) {
            Span::styled(
                c.to_string(),
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(
                c.to_string(),
                Style::default().fg(Color::Red).add_modifier(Modifier::CROSSED_OUT),
            )
        };
        spans.push(span);
    }

    let tracker = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    tracker.render(area, buf);
}

fn render_session_over(app: &App, area: Rect, buf: &mut Buffer) {
    let bold_style = Style::default().add_modifier(Modifier::BOLD);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(HORIZONTAL_MARGIN)
        .constraints(
            [
                Constraint::Percentage(40),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(1),
            ]
            .as_ref(),
        )
        .split(area);

    let title = Paragraph::new(Span::styled("No more words!", bold_style))
        .alignment(Alignment::Center);
    title.render(chunks[1], buf);

    let score = Paragraph::new(Span::styled(score_line(app), bold_style))
        .alignment(Alignment::Center);
    score.render(chunks[2], buf);

    let help = Paragraph::new(Span::styled(
        "(r)etry the same words / (esc)ape",
        Style::default().add_modifier(Modifier::ITALIC),
    ))
    .alignment(Alignment::Center);
    help.render(chunks[4], buf);
}

fn score_line(app: &App) -> String {
    format!(
        "Wins: {}, Losses: {}",
        app.session.total_wins(),
        app.session.total_losses()
    )
}
