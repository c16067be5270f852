use crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::{key_hints, Action, Screen, DIM, HIGHLIGHT, KEY_COLOR, TEXT};
use crate::app::View;

const BANNER_TEXT: &str = "C L O U D   C H A M B E R   T R A I N E R";

struct MenuTile {
    key: &'static str,
    icon: &'static str,
    name: &'static str,
    desc: &'static str,
    color: Color,
    border_color: Color,
}

const MENU: [MenuTile; 3] = [
    MenuTile { key: "P", icon: "▶", name: "Play", desc: "Name the particle\nfrom its track", color: Color::Rgb(80, 220, 80), border_color: Color::Rgb(40, 120, 40) },
    MenuTile { key: "C", icon: "?", name: "Read the clues", desc: "How curvature and\nwidth give it away", color: Color::Rgb(100, 180, 255), border_color: Color::Rgb(50, 90, 140) },
    MenuTile { key: "Q", icon: "✕", name: "Quit", desc: "Leave the\nchamber", color: Color::Rgb(220, 80, 80), border_color: Color::Rgb(120, 40, 40) },
];

fn menu_action(index: usize) -> Action {
    match index {
        0 => Action::Show(View::Game),
        1 => Action::Show(View::Clues),
        _ => Action::Quit,
    }
}

pub struct TitleScreen {
    selected: usize,
}

impl TitleScreen {
    pub fn new() -> Self {
        Self { selected: 0 }
    }

    #[cfg(test)]
    pub fn selected(&self) -> usize {
        self.selected
    }
}

fn banner_lines() -> Vec<Line<'static>> {
    let width = BANNER_TEXT.chars().count() + 6;
    let frame_style = Style::default().fg(Color::Rgb(60, 150, 200));
    let title_style = Style::default().fg(Color::Rgb(200, 120, 255)).add_modifier(Modifier::BOLD);
    vec![
        Line::from(Span::styled(format!("╔{}╗", "═".repeat(width)), frame_style)),
        Line::from(vec![
            Span::styled("║   ", frame_style),
            Span::styled(BANNER_TEXT, title_style),
            Span::styled("   ║", frame_style),
        ]),
        Line::from(Span::styled(format!("╚{}╝", "═".repeat(width)), frame_style)),
    ]
}

fn render_tile(frame: &mut Frame, area: Rect, tile: &MenuTile, selected: bool) {
    let border_color = if selected { HIGHLIGHT } else { tile.border_color };
    let border_type = if selected { BorderType::Double } else { BorderType::Rounded };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height == 0 || inner.width == 0 {
        return;
    }

    let name_color = if selected { Color::Rgb(255, 255, 255) } else { tile.color };
    let mut lines = vec![Line::from(vec![
        Span::styled(format!("[{}] ", tile.key), Style::default().fg(HIGHLIGHT).add_modifier(Modifier::BOLD)),
        Span::styled(format!("{} ", tile.icon), Style::default().fg(tile.color)),
        Span::styled(tile.name, Style::default().fg(name_color).add_modifier(Modifier::BOLD)),
    ])];
    for desc_line in tile.desc.split('\n') {
        lines.push(Line::from(Span::styled(
            desc_line,
            Style::default().fg(if selected { Color::Rgb(180, 180, 200) } else { DIM }),
        )));
    }
    if selected {
        lines.push(Line::from(Span::styled(
            "▶ Enter",
            Style::default().fg(HIGHLIGHT).add_modifier(Modifier::BOLD),
        )));
    }
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}

impl Screen for TitleScreen {
    fn handle_input(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Left => {
                self.selected = (self.selected + MENU.len() - 1) % MENU.len();
                Action::None
            }
            KeyCode::Right | KeyCode::Tab => {
                self.selected = (self.selected + 1) % MENU.len();
                Action::None
            }
            KeyCode::Enter => menu_action(self.selected),
            KeyCode::Char('p') | KeyCode::Char('P') | KeyCode::Char('1') => menu_action(0),
            KeyCode::Char('c') | KeyCode::Char('C') | KeyCode::Char('2') => menu_action(1),
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Char('3') => menu_action(2),
            _ => Action::None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(3), // Banner
                Constraint::Length(2), // Subtitle
                Constraint::Length(7), // Menu tiles
                Constraint::Length(2), // Field note
                Constraint::Min(0),
                Constraint::Length(1), // Key legend
            ])
            .split(area);

        frame.render_widget(Paragraph::new(banner_lines()).alignment(Alignment::Center), chunks[1]);
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "Learn to read tracks like a detector physicist.",
                Style::default().fg(TEXT),
            )))
            .alignment(Alignment::Center),
            chunks[2],
        );

        let row = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(24),
                Constraint::Length(24),
                Constraint::Length(24),
                Constraint::Min(0),
            ])
            .split(chunks[3]);
        for (i, tile) in MENU.iter().enumerate() {
            render_tile(frame, row[i + 1], tile, i == self.selected);
        }

        let note = Line::from(vec![
            Span::styled("B field is into the page (", Style::default().fg(DIM).add_modifier(Modifier::ITALIC)),
            Span::styled("⊗", Style::default().fg(KEY_COLOR).add_modifier(Modifier::BOLD)),
            Span::styled("). Initial motion upward (↑).", Style::default().fg(DIM).add_modifier(Modifier::ITALIC)),
        ]);
        frame.render_widget(Paragraph::new(note).alignment(Alignment::Center), chunks[4]);

        frame.render_widget(
            Paragraph::new(key_hints(&[("←→", "Choose"), ("Enter", "Open"), ("P", "Play"), ("C", "Clues"), ("Q", "Quit")])),
            chunks[6],
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screens::testing::{contains, render_text};
    use crossterm::event::KeyModifiers;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_shortcuts() {
        let mut title = TitleScreen::new();
        assert_eq!(title.handle_input(press(KeyCode::Char('p'))), Action::Show(View::Game));
        assert_eq!(title.handle_input(press(KeyCode::Char('c'))), Action::Show(View::Clues));
        assert_eq!(title.handle_input(press(KeyCode::Char('q'))), Action::Quit);
        assert_eq!(title.handle_input(press(KeyCode::Char('x'))), Action::None);
        assert_eq!(title.handle_input(press(KeyCode::Esc)), Action::None);
    }

    #[test]
    fn test_arrow_selection_wraps() {
        let mut title = TitleScreen::new();
        title.handle_input(press(KeyCode::Left));
        assert_eq!(title.selected(), 2);
        assert_eq!(title.handle_input(press(KeyCode::Enter)), Action::Quit);
        title.handle_input(press(KeyCode::Right));
        title.handle_input(press(KeyCode::Right));
        assert_eq!(title.selected(), 1);
        assert_eq!(title.handle_input(press(KeyCode::Enter)), Action::Show(View::Clues));
    }

    #[test]
    fn test_renders_menu() {
        let rows = render_text(&mut TitleScreen::new(), 100, 24);
        assert!(contains(&rows, "Play"));
        assert!(contains(&rows, "Read the clues"));
        assert!(contains(&rows, "Quit"));
        assert!(contains(&rows, "Learn to read tracks like a detector physicist."));
    }
}
