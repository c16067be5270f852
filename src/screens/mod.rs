pub mod clues;
pub mod game;
pub mod title;

use crossterm::event::KeyEvent;
use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::app::View;
use crate::chamber::{Scenario, World};
use crate::sketch::Sketch;
use crate::ui::Popup;

pub const HELP: &str = "\
Goal: Look at the cloud-chamber sketch and choose the particle.

Magnetic field: into the page (⊗). Initial motion is upward (↑).
• Curve LEFT ⇒ positive charge (e.g., e⁺, μ⁺, p).
• Curve RIGHT ⇒ negative charge (e.g., e⁻, μ⁻).
• Tight curve/spiral ⇒ low momentum. Gentle arc ⇒ high momentum.
• Track thickness (ionization):
    thin   ≈ light/fast (electrons/muons)
    thick  ≈ slow/heavy (proton)

• No incoming primary but a displaced 'V' pair (two opposite-curving arms)
  ⇒ neutral converting/decaying:
    - photon conversion: e⁺e⁻ pair, faint and opposite curvature

Tips: Don't overthink momentum — relative tight vs gentle is enough!";

/// What a screen asks the shell to do after handling a key.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    None,
    Show(View),
    Popup(Popup),
    Quit,
}

pub trait Screen {
    fn handle_input(&mut self, key: KeyEvent) -> Action;
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

pub(crate) const KEY_COLOR: Color = Color::Rgb(80, 200, 255);
pub(crate) const HIGHLIGHT: Color = Color::Rgb(255, 220, 80);
pub(crate) const DIM: Color = Color::Rgb(120, 120, 140);
pub(crate) const TEXT: Color = Color::Rgb(200, 200, 215);

/// One-line key legend: "Key Action | Key Action ...".
pub(crate) fn key_hints(hints: &[(&'static str, &'static str)]) -> Line<'static> {
    let mut spans = vec![Span::raw(" ")];
    for (i, (key, action)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("| ", Style::default().fg(Color::Rgb(60, 60, 60))));
        }
        spans.push(Span::styled(
            format!("{} ", key),
            Style::default().fg(KEY_COLOR).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(format!("{} ", action), Style::default().fg(Color::DarkGray)));
    }
    Line::from(spans)
}

/// Framed chamber view: background decoration plus an optional scenario.
pub(crate) fn render_chamber(
    frame: &mut Frame,
    area: Rect,
    world: World,
    scenario: Option<&Scenario>,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Rgb(60, 150, 200)))
        .title(" Chamber ")
        .title_style(Style::default().fg(Color::Rgb(130, 220, 255)).add_modifier(Modifier::BOLD));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let (w, h) = (inner.width as usize, inner.height as usize);
    if w == 0 || h == 0 {
        return;
    }
    let mut sketch = Sketch::new(world, w, h);
    sketch.background();
    if let Some(scenario) = scenario {
        sketch.scenario(scenario);
    }
    frame.render_widget(Paragraph::new(sketch.into_lines()), inner);
}

#[cfg(test)]
pub(crate) mod testing {
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    use super::Screen;

    /// Render a screen into an off-screen buffer and return it as text rows.
    pub fn render_text(screen: &mut dyn Screen, width: u16, height: u16) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                screen.render(frame, area);
            })
            .unwrap();
        buffer_rows(terminal.backend().buffer())
    }

    pub fn buffer_rows(buffer: &ratatui::buffer::Buffer) -> Vec<String> {
        let width = buffer.area.width.max(1) as usize;
        buffer
            .content
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect())
            .collect()
    }

    pub fn contains(rows: &[String], needle: &str) -> bool {
        rows.iter().any(|row| row.contains(needle))
    }
}
