pub mod tabs;

use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::app::App;

/// A blocking message box drawn over the active view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Popup {
    pub title: String,
    pub body: String,
}

impl Popup {
    pub fn new(title: &str, body: &str) -> Self {
        Self {
            title: title.to_string(),
            body: body.to_string(),
        }
    }
}

pub fn render(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // View bar
            Constraint::Min(0),   // Content
        ])
        .split(frame.area());

    tabs::render_tabs(frame, app, chunks[0]);
    app.screen.as_screen_mut().render(frame, chunks[1]);

    // Popup overlay (renders on top of everything)
    if let Some(popup) = &app.popup {
        let area = frame.area();
        render_popup(frame, area, popup);
    }
}

fn render_popup(frame: &mut Frame, area: Rect, popup: &Popup) {
    let widest = popup.body.lines().map(|l| l.chars().count()).max().unwrap_or(0) as u16;
    let overlay_w = (widest + 6).max(36).min(area.width.saturating_sub(4));
    let overlay_h = (popup.body.lines().count() as u16 + 6).min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(overlay_w)) / 2;
    let y = area.y + (area.height.saturating_sub(overlay_h)) / 2;
    let overlay_area = Rect::new(x, y, overlay_w, overlay_h);

    // Clear background
    frame.render_widget(Clear, overlay_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(Color::Rgb(255, 220, 80)))
        .title(format!(" {} ", popup.title))
        .title_style(Style::default().fg(Color::Rgb(255, 220, 80)).add_modifier(Modifier::BOLD))
        .style(Style::default().bg(Color::Rgb(15, 15, 25)));
    let inner = block.inner(overlay_area);
    frame.render_widget(block, overlay_area);

    let mut lines: Vec<Line> = vec![Line::default()];
    lines.extend(popup.body.lines().map(|l| {
        if l.trim().is_empty() {
            Line::default()
        } else {
            Line::from(Span::styled(format!(" {}", l), Style::default().fg(Color::Rgb(200, 200, 215))))
        }
    }));
    lines.push(Line::default());
    lines.push(Line::from(vec![
        Span::styled(" Enter", Style::default().fg(Color::Rgb(80, 200, 255)).add_modifier(Modifier::BOLD)),
        Span::styled(" / ", Style::default().fg(Color::Rgb(100, 100, 130))),
        Span::styled("Esc", Style::default().fg(Color::Rgb(80, 200, 255)).add_modifier(Modifier::BOLD)),
        Span::styled(" close", Style::default().fg(Color::Rgb(100, 100, 130))),
    ]));

    let p = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .style(Style::default().bg(Color::Rgb(15, 15, 25)));
    frame.render_widget(p, inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::View;
    use crate::chamber::World;
    use crate::screens::testing::{buffer_rows, contains};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn draw(app: &mut App) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(130, 44)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        buffer_rows(terminal.backend().buffer())
    }

    #[test]
    fn test_view_bar_lists_all_views() {
        let rows = draw(&mut App::new(World::default()));
        for view in View::all() {
            assert!(contains(&rows, view.title().trim()));
        }
        assert!(contains(&rows, "Cloud Chamber"));
    }

    #[test]
    fn test_help_popup_overlays_game() {
        let mut app = App::new(World::default());
        app.show(View::Game);
        app.on_key(KeyEvent::new(KeyCode::Char('h'), KeyModifiers::NONE));
        let rows = draw(&mut app);
        assert!(contains(&rows, "How to read the clues"));
        assert!(contains(&rows, "Curve LEFT ⇒ positive charge"));
        assert!(contains(&rows, "Esc close"));
    }

    #[test]
    fn test_popup_blank_lines_drawn_once() {
        let mut app = App::new(World::default());
        app.popup = Some(Popup::new("Note", "first\n\nsecond"));
        let rows = draw(&mut app);
        let first = rows.iter().position(|r| r.contains(" first")).unwrap();
        let second = rows.iter().position(|r| r.contains(" second")).unwrap();
        assert_eq!(second - first, 2);
        assert!(contains(&rows, "Esc close"));
    }

    #[test]
    fn test_popup_fits_tiny_terminal() {
        let mut app = App::new(World::default());
        app.popup = Some(Popup::new("Choose one", "Please select an answer."));
        let mut terminal = Terminal::new(TestBackend::new(20, 6)).unwrap();
        terminal.draw(|frame| render(frame, &mut app)).unwrap();
    }
}
