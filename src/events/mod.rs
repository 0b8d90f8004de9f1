//! Event handling for Coindeck.
//!
//! Terminal input is polled by [`EventHandler`] and translated into store
//! [`Action`](crate::state::Action)s using the configured key bindings.

mod handler;
mod input;

pub use handler::EventHandler;
pub use input::{InputEvent, Key, Modifiers};

use crate::config::UiConfig;
use std::time::Duration;

/// Configuration for the event handler.
#[derive(Debug, Clone)]
pub struct EventConfig {
    /// How long a single poll waits for terminal input.
    pub poll_timeout: Duration,
    /// Whether mouse events are turned into actions.
    pub mouse_capture: bool,
}

impl Default for EventConfig {
    fn default() -> Self {
        Self {
            poll_timeout: Duration::from_millis(100),
            mouse_capture: true,
        }
    }
}

impl EventConfig {
    /// Poll no longer than one UI tick so ticks are not delayed by input waits.
    pub fn from_ui(ui: &UiConfig) -> Self {
        Self {
            poll_timeout: Duration::from_millis(ui.tick_rate_ms.clamp(10, 100)),
            mouse_capture: ui.mouse_support,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_poll_timeout_bounded_by_tick() {
        let ui = UiConfig {
            tick_rate_ms: 50,
            mouse_support: false,
            ..Default::default()
        };
        let config = EventConfig::from_ui(&ui);
        assert_eq!(config.poll_timeout, Duration::from_millis(50));
        assert!(!config.mouse_capture);

        let slow = EventConfig::from_ui(&UiConfig {
            tick_rate_ms: 1000,
            ..Default::default()
        });
        assert_eq!(slow.poll_timeout, Duration::from_millis(100));
    }
}
