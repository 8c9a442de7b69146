//! User commands and their button labels

use std::fmt;

/// Something the user can ask the dispenser to do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Pop,
    Push,
    Top,
    IsEmpty,
    Len,
    /// Empty the dispenser and relax the spring (keyboard only)
    Reset,
}

impl Command {
    /// Commands that get a button, in panel order
    pub const BUTTONS: [Command; 5] = [
        Command::Pop,
        Command::Push,
        Command::Top,
        Command::IsEmpty,
        Command::Len,
    ];

    /// Text shown on the command's button
    pub fn label(self) -> &'static str {
        match self {
            Command::Pop => "Pop",
            Command::Push => "Push",
            Command::Top => "Top",
            Command::IsEmpty => "Is Empty",
            Command::Len => "Len",
            Command::Reset => "Reset",
        }
    }

    /// Look a command up by its button label
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Pop" => Some(Command::Pop),
            "Push" => Some(Command::Push),
            "Top" => Some(Command::Top),
            "Is Empty" => Some(Command::IsEmpty),
            "Len" => Some(Command::Len),
            "Reset" => Some(Command::Reset),
            _ => None,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
