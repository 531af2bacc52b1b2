// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the demo window.
//!
//! Keyboard shortcuts, global pointer release and focus loss are routed as
//! [`Message`]s; a periodic tick drives the simulated player and the
//! deadline timer.

use super::{Message, Shortcut};
use iced::keyboard::{self, key::Named};
use iced::{event, mouse, time, window, Event, Subscription};
use std::time::Duration;

/// Interval between player/timer polls.
pub const TICK_INTERVAL: Duration = Duration::from_millis(50);

pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| match event {
        Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => {
            shortcut_for(&key).map(Message::Shortcut)
        }
        // Releases outside the track still end the gesture.
        Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
            Some(Message::PointerReleased)
        }
        Event::Window(window::Event::Unfocused) => Some(Message::FocusLost),
        _ => None,
    })
}

pub fn create_window_subscription() -> Subscription<Message> {
    window::open_events().map(Message::WindowOpened)
}

pub fn create_tick_subscription() -> Subscription<Message> {
    time::every(TICK_INTERVAL).map(Message::Tick)
}

fn shortcut_for(key: &keyboard::Key) -> Option<Shortcut> {
    match key {
        keyboard::Key::Named(Named::Space) => Some(Shortcut::TogglePlayback),
        keyboard::Key::Named(Named::ArrowLeft) => Some(Shortcut::SeekBackward),
        keyboard::Key::Named(Named::ArrowRight) => Some(Shortcut::SeekForward),
        keyboard::Key::Named(Named::F11) => Some(Shortcut::ToggleFullscreen),
        keyboard::Key::Named(Named::Escape) => Some(Shortcut::ExitFullscreen),
        keyboard::Key::Character(c) if c.as_str() == "c" => Some(Shortcut::ToggleChrome),
        keyboard::Key::Character(c) if c.as_str() == "e" => Some(Shortcut::SimulateFailure),
        _ => None,
    }
}
