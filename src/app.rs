use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::chamber::World;
use crate::quiz::RngPicker;
use crate::screens::clues::CluesScreen;
use crate::screens::game::GameScreen;
use crate::screens::title::TitleScreen;
use crate::screens::{Action, Screen};
use crate::ui::Popup;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Title,
    Clues,
    Game,
}

impl View {
    pub fn all() -> &'static [View] {
        &[View::Title, View::Clues, View::Game]
    }

    pub fn title(&self) -> &'static str {
        match self {
            View::Title => " Title ",
            View::Clues => " Clues ",
            View::Game => " Game ",
        }
    }

    /// Title links to both other views; they only lead back to Title.
    pub fn can_reach(&self, other: View) -> bool {
        match self {
            View::Title => other != View::Title,
            View::Clues | View::Game => other == View::Title,
        }
    }

    pub fn index(&self) -> usize {
        match self {
            View::Title => 0,
            View::Clues => 1,
            View::Game => 2,
        }
    }
}

/// The one mounted view. Switching builds a fresh screen and drops the old
/// one with all of its state.
pub enum ActiveScreen {
    Title(TitleScreen),
    Clues(CluesScreen),
    Game(GameScreen),
}

impl ActiveScreen {
    fn mount(view: View, world: World) -> Self {
        match view {
            View::Title => ActiveScreen::Title(TitleScreen::new()),
            View::Clues => ActiveScreen::Clues(CluesScreen::new(world, Box::new(RngPicker::from_entropy()))),
            View::Game => ActiveScreen::Game(GameScreen::new(world, Box::new(RngPicker::from_entropy()))),
        }
    }

    pub fn view(&self) -> View {
        match self {
            ActiveScreen::Title(_) => View::Title,
            ActiveScreen::Clues(_) => View::Clues,
            ActiveScreen::Game(_) => View::Game,
        }
    }

    pub fn as_screen_mut(&mut self) -> &mut dyn Screen {
        match self {
            ActiveScreen::Title(s) => s,
            ActiveScreen::Clues(s) => s,
            ActiveScreen::Game(s) => s,
        }
    }
}

pub struct App {
    pub should_quit: bool,
    pub world: World,
    pub screen: ActiveScreen,
    pub popup: Option<Popup>,
}

impl App {
    pub fn new(world: World) -> Self {
        Self {
            should_quit: false,
            world,
            screen: ActiveScreen::mount(View::Title, world),
            popup: None,
        }
    }

    pub fn view(&self) -> View {
        self.screen.view()
    }

    pub fn show(&mut self, view: View) {
        log::info!("view {:?} -> {:?}", self.view(), view);
        self.popup = None;
        self.screen = ActiveScreen::mount(view, self.world);
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        // Ctrl+C always quits
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        // An open popup swallows input until dismissed
        if self.popup.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                self.popup = None;
            }
            return;
        }

        let action = self.screen.as_screen_mut().handle_input(key);
        self.apply(action);
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Show(view) => self.show(view),
            Action::Popup(popup) => self.popup = Some(popup),
            Action::Quit => {
                log::info!("quit requested");
                self.should_quit = true;
            }
        }
    }
}
