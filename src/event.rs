use std::io;

use crossterm::event::{self, KeyEvent, KeyEventKind};

pub enum Event {
    Key(KeyEvent),
    Resize,
}

/// Block until the next key press or resize. Everything runs on the calling
/// thread; other terminal events are dropped.
pub fn next() -> io::Result<Event> {
    loop {
        match event::read()? {
            event::Event::Key(key) if key.kind == KeyEventKind::Press => return Ok(Event::Key(key)),
            event::Event::Resize(_, _) => return Ok(Event::Resize),
            _ => {}
        }
    }
}
