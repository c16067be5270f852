use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::app::{App, View};

const CURRENT: Color = Color::Rgb(255, 220, 80);
const REACHABLE: Color = Color::Rgb(200, 200, 215);
const UNREACHABLE: Color = Color::Rgb(70, 70, 90);

fn leave_hint(view: View) -> &'static str {
    match view {
        View::Title => " Q quit ",
        View::Clues => " Esc back ",
        View::Game => " Esc title ",
    }
}

/// View bar: the mounted view in bold, views one key away in plain text,
/// everything else dimmed.
pub fn render_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let current = app.view();
    let titles: Vec<Line> = View::all()
        .iter()
        .map(|&v| {
            let style = if v == current {
                Style::default().fg(CURRENT).add_modifier(Modifier::BOLD)
            } else if current.can_reach(v) {
                Style::default().fg(REACHABLE)
            } else {
                Style::default().fg(UNREACHABLE)
            };
            Line::from(Span::styled(v.title(), style))
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Rgb(60, 150, 200)))
        .border_type(BorderType::Rounded)
        .title(Line::from(Span::styled(
            " ⊗ Cloud Chamber Trainer ",
            Style::default().fg(Color::Rgb(200, 120, 255)).add_modifier(Modifier::BOLD),
        )))
        .title(
            Line::from(Span::styled(leave_hint(current), Style::default().fg(Color::Rgb(80, 200, 255))))
                .alignment(Alignment::Right),
        );

    let tabs = Tabs::new(titles)
        .block(block)
        .select(current.index())
        .highlight_style(Style::default().fg(CURRENT).add_modifier(Modifier::BOLD))
        .divider(Span::styled(" │ ", Style::default().fg(Color::Rgb(60, 60, 80))));

    frame.render_widget(tabs, area);
}
