mod app;
mod chamber;
mod event;
mod quiz;
mod screens;
mod sketch;
mod ui;

use std::io;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use app::App;
use chamber::world::{WORLD_MARGIN, WORLD_MAX, WORLD_MIN};
use chamber::World;
use event::Event;

type Term = Terminal<CrosstermBackend<io::Stdout>>;

fn main() -> io::Result<()> {
    // Quiet unless RUST_LOG asks; stderr shares the terminal with the UI.
    env_logger::init();
    log::info!("cloud chamber trainer starting");

    // Validate the viewport before touching the terminal
    let world = World::new(WORLD_MIN, WORLD_MAX, WORLD_MIN, WORLD_MAX, WORLD_MARGIN)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = terminal.clear().and_then(|_| run(&mut terminal, world));

    // Restore terminal, even if the loop failed
    let restored = restore(&mut terminal);
    if let Err(e) = &result {
        log::error!("main loop failed: {}", e);
    }
    log::info!("cloud chamber trainer exiting");
    result.and(restored)
}

fn run(terminal: &mut Term, world: World) -> io::Result<()> {
    let mut app = App::new(world);
    while !app.should_quit {
        terminal.draw(|frame| ui::render(frame, &mut app))?;
        match event::next()? {
            Event::Key(key) => app.on_key(key),
            Event::Resize => {}
        }
    }
    Ok(())
}

fn restore(terminal: &mut Term) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()
}
