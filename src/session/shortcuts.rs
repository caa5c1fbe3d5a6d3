use std::num::IntErrorKind;

use cosmic::iced::keyboard::{Key, Modifiers, key::Named};

use crate::error::ViewerError;
use crate::session::messages::{ButtonId, Command};

pub fn handle_key_event(key: &Key, modifiers: Modifiers) -> Option<Command> {
    // Leave chorded shortcuts to the platform
    if modifiers.control() || modifiers.alt() || modifiers.logo() {
        return None;
    }

    match key {
        Key::Named(Named::ArrowRight) => Some(Command::Next),
        Key::Named(Named::ArrowLeft) => Some(Command::Prev),
        Key::Named(Named::Escape) => Some(Command::Quit),
        Key::Character(c) if c.as_str() == "n" => Some(Command::Next),
        Key::Character(c) if c.as_str() == "p" => Some(Command::Prev),
        // Re-run the processor on the current image
        Key::Character(c) if c.as_str() == "r" => Some(Command::Reprocess),
        Key::Character(c) if c.as_str() == "q" => Some(Command::Quit),
        // Jump by number goes through the text box
        Key::Character(c) if c.as_str() == "g" => Some(Command::FocusJump),
        _ => None,
    }
}

/// Parse 1-based jump text into a 0-based target index.
///
/// Integers beyond the i64 range saturate so they still clamp to the
/// first or last image.
pub fn parse_jump(text: &str) -> Result<i64, ViewerError> {
    let number = match text.trim().parse::<i64>() {
        Ok(n) => n,
        Err(err) => match err.kind() {
            IntErrorKind::PosOverflow => i64::MAX,
            IntErrorKind::NegOverflow => i64::MIN,
            _ => return Err(ViewerError::InvalidNavigationInput(text.to_string())),
        },
    };
    Ok(number.saturating_sub(1))
}

/// Route a text box submission.
///
/// Non-integer text never reaches the state machine; it only restores the
/// text box.
pub fn handle_jump_submit(text: &str) -> Command {
    match parse_jump(text) {
        Ok(target) => Command::Goto(target),
        Err(err) => {
            log::warn!("Ignoring jump: {}", err);
            Command::RestoreJumpText
        }
    }
}

pub fn handle_button(button: ButtonId, textbox_value: &str) -> Command {
    match button {
        ButtonId::Go => handle_jump_submit(textbox_value),
        ButtonId::Reprocess => Command::Reprocess,
    }
}
