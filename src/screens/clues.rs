use crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::{key_hints, render_chamber, Action, Screen, HELP, HIGHLIGHT, KEY_COLOR, TEXT};
use crate::app::View;
use crate::chamber::{catalog, Scenario, World};
use crate::quiz::{choose_index, Picker};

/// Reference page: the rules of thumb plus random worked examples.
pub struct CluesScreen {
    world: World,
    scenarios: Vec<Scenario>,
    picker: Box<dyn Picker>,
    example: Option<usize>,
}

impl CluesScreen {
    pub fn new(world: World, picker: Box<dyn Picker>) -> Self {
        Self {
            world,
            scenarios: catalog(),
            picker,
            example: None,
        }
    }

    pub fn show_example(&mut self) {
        let Some(index) = choose_index(self.picker.as_mut(), self.scenarios.len()) else { return };
        self.example = Some(index);
        log::debug!("clues example: {}", self.scenarios[index].answer);
    }

    pub fn example(&self) -> Option<&Scenario> {
        self.example.map(|i| &self.scenarios[i])
    }

    /// Caption under the canvas, empty until an example is shown.
    pub fn caption(&self) -> String {
        self.example()
            .map(|s| format!("Clues: {}", s.tags.clues()))
            .unwrap_or_default()
    }
}

impl Screen for CluesScreen {
    fn handle_input(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('e') | KeyCode::Char('E') | KeyCode::Enter => {
                self.show_example();
                Action::None
            }
            KeyCode::Char('b') | KeyCode::Char('B') | KeyCode::Esc => Action::Show(View::Title),
            _ => Action::None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Header
                Constraint::Min(8),    // Canvas + help
                Constraint::Length(1), // Caption
                Constraint::Length(1), // Key legend
            ])
            .split(area);

        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                " How to read the clues",
                Style::default().fg(HIGHLIGHT).add_modifier(Modifier::BOLD),
            ))),
            rows[0],
        );

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(20), Constraint::Length(46)])
            .split(rows[1]);

        render_chamber(frame, body[0], self.world, self.example());

        let help_block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Rgb(60, 60, 80)))
            .title(" Clues ")
            .title_style(Style::default().fg(KEY_COLOR).add_modifier(Modifier::BOLD));
        let mut lines: Vec<Line> = HELP
            .lines()
            .map(|l| Line::from(Span::styled(l, Style::default().fg(TEXT))))
            .collect();
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("[E] ", Style::default().fg(HIGHLIGHT).add_modifier(Modifier::BOLD)),
            Span::styled("Show example", Style::default().fg(KEY_COLOR).add_modifier(Modifier::BOLD)),
        ]));
        frame.render_widget(
            Paragraph::new(lines).block(help_block).wrap(Wrap { trim: false }),
            body[1],
        );

        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                self.caption(),
                Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
            )))
            .alignment(Alignment::Center),
            rows[2],
        );

        frame.render_widget(
            Paragraph::new(key_hints(&[("E", "Show example"), ("B/Esc", "Back")])),
            rows[3],
        );
    }
}
