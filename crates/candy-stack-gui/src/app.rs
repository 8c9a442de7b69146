//! Dispenser application state and message handling

use candy_stack_core::{ButtonPanel, Command, Dispenser, DispenserConfig, SceneLayout};
use iced::keyboard::{self, key, Key, Modifiers};
use iced::widget::canvas::Cache;
use iced::{Element, Subscription, Task};
use tracing::debug;

use crate::scene;

/// Messages for the dispenser window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Run a dispenser command (button click or shortcut)
    Command(Command),
    /// Close the window
    Exit,
}

/// Top-level application state
pub struct DispenserApp {
    dispenser: Dispenser,
    layout: SceneLayout,
    buttons: ButtonPanel,
    /// Scene geometry, cleared whenever the dispenser changes
    scene_cache: Cache,
}

impl DispenserApp {
    pub fn new(config: &DispenserConfig) -> Self {
        Self::with_dispenser(config, Dispenser::new(&config.spring))
    }

    /// Build around an existing dispenser (e.g. one with a seeded factory)
    pub fn with_dispenser(config: &DispenserConfig, dispenser: Dispenser) -> Self {
        Self {
            dispenser,
            layout: SceneLayout::new(config),
            buttons: ButtonPanel::default(),
            scene_cache: Cache::new(),
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Command(command) => {
                self.dispenser.execute(command);
                self.scene_cache.clear();
                Task::none()
            }
            Message::Exit => {
                debug!("exit requested");
                iced::exit()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        scene::scene(self)
    }

    /// Keyboard shortcuts for every command
    pub fn subscription(&self) -> Subscription<Message> {
        keyboard::listen().filter_map(|event| {
            let keyboard::Event::KeyPressed { key, modifiers, .. } = event else {
                return None;
            };
            shortcut(&key, modifiers)
        })
    }

    pub fn dispenser(&self) -> &Dispenser {
        &self.dispenser
    }

    pub fn layout(&self) -> &SceneLayout {
        &self.layout
    }

    pub fn buttons(&self) -> &ButtonPanel {
        &self.buttons
    }

    pub(crate) fn scene_cache(&self) -> &Cache {
        &self.scene_cache
    }
}

/// Map a key press to a message.
///
/// P/Space push, O/Backspace pop, T top, E is-empty, L length, R reset,
/// Escape quits. Presses with Ctrl/Cmd held are left alone.
pub fn shortcut(key: &Key, modifiers: Modifiers) -> Option<Message> {
    if modifiers.command() {
        return None;
    }

    let command = match key {
        Key::Named(key::Named::Escape) => return Some(Message::Exit),
        Key::Named(key::Named::Space) => Command::Push,
        Key::Named(key::Named::Backspace) => Command::Pop,
        Key::Character(c) => match c.to_ascii_lowercase().as_str() {
            "p" => Command::Push,
            "o" => Command::Pop,
            "t" => Command::Top,
            "e" => Command::IsEmpty,
            "l" => Command::Len,
            "r" => Command::Reset,
            _ => return None,
        },
        _ => return None,
    };
    Some(Message::Command(command))
}
