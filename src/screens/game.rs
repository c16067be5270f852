use crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::{key_hints, render_chamber, Action, Screen, DIM, HELP, HIGHLIGHT, KEY_COLOR, TEXT};
use crate::app::View;
use crate::chamber::{Particle, World};
use crate::quiz::{Picker, QuizSession, SubmitOutcome};
use crate::ui::Popup;

/// The quiz view: one sketch, seven radio choices, a running score.
pub struct GameScreen {
    world: World,
    session: QuizSession,
    cursor: usize,
    choice: Option<Particle>,
}

impl GameScreen {
    pub fn new(world: World, picker: Box<dyn Picker>) -> Self {
        Self {
            world,
            session: QuizSession::new(picker),
            cursor: 0,
            choice: None,
        }
    }

    #[cfg(test)]
    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    #[cfg(test)]
    pub fn choice(&self) -> Option<Particle> {
        self.choice
    }

    /// Start the next round and clear the radio selection.
    pub fn next_round(&mut self) {
        self.session.next();
        self.choice = None;
        self.cursor = 0;
    }

    fn select(&mut self, index: usize) {
        if let Some(&particle) = Particle::all().get(index) {
            self.cursor = index;
            self.choice = Some(particle);
        }
    }

    fn submit(&mut self) -> Action {
        match self.session.submit(self.choice) {
            SubmitOutcome::NoSelection => Action::Popup(Popup::new("Choose one", "Please select an answer.")),
            SubmitOutcome::AlreadyAnswered | SubmitOutcome::Scored { .. } => Action::None,
        }
    }

    fn choice_lines(&self) -> Vec<Line<'static>> {
        Particle::all()
            .iter()
            .map(|particle| {
                let i = particle.index();
                let marked = self.choice == Some(*particle);
                let under_cursor = i == self.cursor;
                let radio = if marked { "(•) " } else { "( ) " };
                let label_style = if under_cursor {
                    Style::default().fg(HIGHLIGHT).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(TEXT)
                };
                Line::from(vec![
                    Span::styled(if under_cursor { "▶" } else { " " }, Style::default().fg(HIGHLIGHT)),
                    Span::styled(format!("{} ", i + 1), Style::default().fg(KEY_COLOR)),
                    Span::styled(radio, Style::default().fg(if marked { HIGHLIGHT } else { DIM })),
                    Span::styled(particle.label(), label_style),
                ])
            })
            .collect()
    }
}

impl Screen for GameScreen {
    fn handle_input(&mut self, key: KeyEvent) -> Action {
        let count = Particle::all().len();
        match key.code {
            KeyCode::Up => {
                self.cursor = (self.cursor + count - 1) % count;
                Action::None
            }
            KeyCode::Down => {
                self.cursor = (self.cursor + 1) % count;
                Action::None
            }
            KeyCode::Char(' ') => {
                self.select(self.cursor);
                Action::None
            }
            KeyCode::Char(c @ '1'..='7') => {
                self.select(c as usize - '1' as usize);
                Action::None
            }
            KeyCode::Enter | KeyCode::Char('s') | KeyCode::Char('S') => self.submit(),
            KeyCode::Char('n') | KeyCode::Char('N') => {
                self.next_round();
                Action::None
            }
            KeyCode::Char('h') | KeyCode::Char('H') => {
                Action::Popup(Popup::new("How to read the clues", HELP))
            }
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => Action::Show(View::Title),
            _ => Action::None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(10), Constraint::Length(1)])
            .split(area);
        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(20), Constraint::Length(48)])
            .split(rows[0]);

        render_chamber(frame, body[0], self.world, Some(self.session.current()));

        let side_block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Rgb(60, 60, 80)))
            .title(" What is this most likely? ")
            .title_style(Style::default().fg(HIGHLIGHT).add_modifier(Modifier::BOLD));
        let side = side_block.inner(body[1]);
        frame.render_widget(side_block, body[1]);

        let panel = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(Particle::all().len() as u16),
                Constraint::Length(3), // Actions
                Constraint::Min(3),    // Feedback
                Constraint::Length(1), // Score
            ])
            .split(side);

        frame.render_widget(Paragraph::new(self.choice_lines()), panel[0]);

        let button = |key: &'static str, name: &'static str| {
            vec![
                Span::styled(format!("[{}]", key), Style::default().fg(HIGHLIGHT).add_modifier(Modifier::BOLD)),
                Span::styled(format!(" {}  ", name), Style::default().fg(KEY_COLOR)),
            ]
        };
        let row = |pair: [(&'static str, &'static str); 2]| {
            Line::from(pair.iter().flat_map(|&(k, n)| button(k, n)).collect::<Vec<Span>>())
        };
        frame.render_widget(
            Paragraph::new(vec![
                Line::from(""),
                row([("S", "Submit"), ("N", "Next")]),
                row([("H", "Help"), ("Q", "Quit to Title")]),
            ]),
            panel[1],
        );

        let feedback_block = Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(Color::Rgb(60, 60, 80)));
        frame.render_widget(
            Paragraph::new(self.session.feedback().to_string())
                .style(Style::default().fg(TEXT))
                .block(feedback_block)
                .wrap(Wrap { trim: false }),
            panel[2],
        );

        let score = Line::from(vec![
            Span::styled(
                format!("Score: {}/{}", self.session.score(), self.session.rounds()),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                if self.session.is_answered() { "   (N for next)" } else { "" },
                Style::default().fg(DIM),
            ),
        ]);
        frame.render_widget(Paragraph::new(score), panel[3]);

        frame.render_widget(
            Paragraph::new(key_hints(&[
                ("↑↓", "Move"),
                ("Space/1-7", "Select"),
                ("Enter/S", "Submit"),
                ("N", "Next"),
                ("H", "Help"),
                ("Esc", "Title"),
            ])),
            rows[1],
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chamber::catalog;
    use crate::screens::testing::{contains, render_text};
    use crossterm::event::KeyModifiers;

    struct Fixed(usize);

    impl Picker for Fixed {
        fn pick(&mut self, _len: usize) -> usize {
            self.0
        }
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn forced(particle: Particle) -> GameScreen {
        let idx = catalog().iter().position(|s| s.answer == particle).unwrap();
        GameScreen::new(World::default(), Box::new(Fixed(idx)))
    }

    #[test]
    fn test_submit_without_choice_pops_up() {
        let mut game = forced(Particle::Proton);
        let action = game.handle_input(press(KeyCode::Enter));
        assert_eq!(action, Action::Popup(Popup::new("Choose one", "Please select an answer.")));
        assert_eq!(game.session().rounds(), 0);
    }

    #[test]
    fn test_digit_selects_and_submits() {
        let mut game = forced(Particle::Proton);
        game.handle_input(press(KeyCode::Char('6')));
        assert_eq!(game.choice(), Some(Particle::Proton));
        assert_eq!(game.handle_input(press(KeyCode::Char('s'))), Action::None);
        assert_eq!((game.session().score(), game.session().rounds()), (1, 1));
        assert!(game.session().is_answered());
    }

    #[test]
    fn test_cursor_and_space() {
        let mut game = forced(Particle::Electron);
        game.handle_input(press(KeyCode::Up));
        game.handle_input(press(KeyCode::Char(' ')));
        assert_eq!(game.choice(), Some(Particle::Neutron));
        game.handle_input(press(KeyCode::Down));
        game.handle_input(press(KeyCode::Char(' ')));
        assert_eq!(game.choice(), Some(Particle::Electron));
    }

    #[test]
    fn test_next_clears_choice() {
        let mut game = forced(Particle::MuonPlus);
        game.handle_input(press(KeyCode::Char('4')));
        game.handle_input(press(KeyCode::Enter));
        game.handle_input(press(KeyCode::Char('n')));
        assert_eq!(game.choice(), None);
        assert!(!game.session().is_answered());
        assert_eq!(game.session().rounds(), 1);
    }

    #[test]
    fn test_help_and_quit() {
        let mut game = forced(Particle::Neutron);
        assert!(matches!(game.handle_input(press(KeyCode::Char('h'))), Action::Popup(_)));
        assert_eq!(game.handle_input(press(KeyCode::Esc)), Action::Show(View::Title));
    }

    #[test]
    fn test_renders_choices_and_score() {
        let mut game = forced(Particle::Positron);
        let rows = render_text(&mut game, 130, 40);
        for particle in Particle::all() {
            assert!(contains(&rows, particle.label()), "missing {}", particle);
        }
        assert!(contains(&rows, "Score: 0/0"));
        assert!(contains(&rows, "Pick the particle"));
        assert!(contains(&rows, "[S] Submit  [N] Next"));
        assert!(contains(&rows, "[Q] Quit to Title"));
    }

    #[test]
    fn test_renders_feedback_after_submit() {
        let mut game = forced(Particle::MuonPlus);
        game.handle_input(press(KeyCode::Char('6')));
        game.handle_input(press(KeyCode::Enter));
        let rows = render_text(&mut game, 130, 40);
        assert!(contains(&rows, "Score: 0/1"));
        assert!(contains(&rows, "✗ Not quite."));
    }
}
