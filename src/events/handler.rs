//! Event handler for processing input events.

use super::{EventConfig, InputEvent, Key};
use crate::config::KeyBindings;
use crate::error::Result;
use crate::state::{Action, InputMode, Store, View};
use crossterm::event::{
    self, Event as CrosstermEvent, KeyEvent, KeyEventKind, MouseEvent, MouseEventKind,
};

/// Handles input events and produces actions.
pub struct EventHandler {
    /// Key bindings.
    keybindings: KeyBindings,
    config: EventConfig,
    /// Store reference for state-aware handling.
    store_snapshot: Option<StoreSnapshot>,
}

/// Snapshot of relevant store state for event handling.
#[derive(Debug, Clone)]
struct StoreSnapshot {
    input_mode: InputMode,
    current_view: View,
    show_help: bool,
    /// Coin under the table cursor.
    selected_coin_id: Option<String>,
    /// Coin shown on the detail page.
    open_coin_id: Option<String>,
}

impl EventHandler {
    pub fn new(keybindings: KeyBindings, config: EventConfig) -> Self {
        Self {
            keybindings,
            config,
            store_snapshot: None,
        }
    }

    /// Update the store snapshot for state-aware event handling.
    pub fn update_store_snapshot(&mut self, store: &Store) {
        self.store_snapshot = Some(StoreSnapshot {
            input_mode: store.app.input_mode,
            current_view: store.app.current_view,
            show_help: store.app.show_help,
            selected_coin_id: store.markets.selected_coin().map(|c| c.id.clone()),
            open_coin_id: store.coin.coin_id.clone(),
        });
    }

    /// Get the next action from user input.
    pub async fn next(&mut self) -> Result<Option<Action>> {
        if event::poll(self.config.poll_timeout)? {
            match event::read()? {
                CrosstermEvent::Key(key) => return Ok(self.handle_key(key)),
                CrosstermEvent::Mouse(mouse) if self.config.mouse_capture => {
                    return Ok(self.handle_mouse(mouse));
                }
                // Resize redraws on the next frame
                _ => {}
            }
        }
        Ok(None)
    }

    /// Handle a key event and return an optional action.
    fn handle_key(&self, key: KeyEvent) -> Option<Action> {
        // Only process key press events
        if key.kind != KeyEventKind::Press {
            return None;
        }

        let snapshot = self.store_snapshot.as_ref()?;
        let input = InputEvent::from(key);

        if input.matches("Ctrl+c") {
            return Some(Action::Quit);
        }

        match snapshot.input_mode {
            InputMode::Normal => self.handle_normal_mode(input, snapshot),
            InputMode::Search => self.handle_search_mode(input),
        }
    }

    /// Handle a mouse event and return an optional action.
    fn handle_mouse(&self, mouse: MouseEvent) -> Option<Action> {
        match mouse.kind {
            MouseEventKind::ScrollUp => Some(Action::ScrollUp),
            MouseEventKind::ScrollDown => Some(Action::ScrollDown),
            _ => None,
        }
    }

    fn handle_normal_mode(&self, input: InputEvent, snapshot: &StoreSnapshot) -> Option<Action> {
        let keys = &self.keybindings;

        if snapshot.show_help {
            return (input.matches(&keys.help) || input.matches(&keys.back))
                .then_some(Action::ToggleHelp);
        }

        // Global shortcuts
        if input.matches(&keys.quit) {
            return Some(Action::Quit);
        }
        if input.matches(&keys.help) {
            return Some(Action::ToggleHelp);
        }
        if input.matches(&keys.refresh) {
            return Some(Action::RefreshAll);
        }
        if input.matches(&keys.back) {
            return Some(Action::Back);
        }

        // View switching
        if input.matches(&keys.dashboard) {
            return Some(Action::SetView(View::Dashboard));
        }
        if input.matches(&keys.news) {
            return Some(Action::SetView(View::News));
        }

        // Navigation
        if input.matches(&keys.up) || input.key == Key::Up {
            return Some(Action::ScrollUp);
        }
        if input.matches(&keys.down) || input.key == Key::Down {
            return Some(Action::ScrollDown);
        }
        match input.key {
            Key::PageUp => return Some(Action::PageUp),
            Key::PageDown => return Some(Action::PageDown),
            Key::Home => return Some(Action::GoToTop),
            Key::End => return Some(Action::GoToBottom),
            _ => {}
        }

        // View-specific actions
        match snapshot.current_view {
            View::Dashboard => self.handle_dashboard_view(input, snapshot),
            View::CoinDetail => self.handle_coin_view(input, snapshot),
            View::News => None,
        }
    }

    fn handle_dashboard_view(&self, input: InputEvent, snapshot: &StoreSnapshot) -> Option<Action> {
        let keys = &self.keybindings;

        if input.matches(&keys.search) {
            return Some(Action::SetInputMode(InputMode::Search));
        }
        if input.matches(&keys.next_page) || input.key == Key::Right {
            return Some(Action::NextPage);
        }
        if input.matches(&keys.prev_page) || input.key == Key::Left {
            return Some(Action::PrevPage);
        }
        if input.matches(&keys.rows_per_page) {
            return Some(Action::CycleRowsPerPage);
        }

        let selected = snapshot.selected_coin_id.clone()?;
        if input.matches(&keys.select) {
            return Some(Action::OpenCoin(selected));
        }
        if input.matches(&keys.star) {
            return Some(Action::ToggleStar(selected));
        }

        None
    }

    fn handle_coin_view(&self, input: InputEvent, snapshot: &StoreSnapshot) -> Option<Action> {
        let keys = &self.keybindings;

        if input.matches(&keys.time_frame) {
            return Some(Action::CycleTimeFrame);
        }
        if input.matches(&keys.star) {
            return snapshot.open_coin_id.clone().map(Action::ToggleStar);
        }

        None
    }

    fn handle_search_mode(&self, input: InputEvent) -> Option<Action> {
        match input.key {
            // Cancel search and clear
            Key::Escape => Some(Action::ClearSearch),
            // Keep the filter, leave editing
            Key::Enter => Some(Action::SetInputMode(InputMode::Normal)),
            Key::Backspace => Some(Action::SearchBackspace),
            Key::Up => Some(Action::ScrollUp),
            Key::Down => Some(Action::ScrollDown),
            _ => input.text().map(Action::SearchInput),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UiConfig;
    use crate::state::CoinMarket;
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers};
    use tokio::sync::mpsc;

    fn coin(id: &str) -> CoinMarket {
        CoinMarket {
            id: id.to_string(),
            symbol: id.to_string(),
            name: id.to_string(),
            image: None,
            current_price: None,
            price_change_percentage_24h: None,
            total_volume: None,
            market_cap: None,
            market_cap_rank: None,
        }
    }

    fn setup(build: impl FnOnce(&mut Store)) -> EventHandler {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut store = Store::new(tx, &UiConfig::default());
        store.reduce(Action::MarketsLoaded(0, 5, vec![coin("bitcoin"), coin("ethereum")]));
        build(&mut store);

        let mut handler = EventHandler::new(KeyBindings::default(), EventConfig::default());
        handler.update_store_snapshot(&store);
        handler
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_no_snapshot_no_action() {
        let handler = EventHandler::new(KeyBindings::default(), EventConfig::default());
        assert!(handler.handle_key(key(KeyCode::Char('q'))).is_none());
    }

    #[test]
    fn test_star_selected_coin() {
        let handler = setup(|store| store.reduce(Action::ScrollDown));
        let action = handler.handle_key(key(KeyCode::Char('s')));
        assert!(matches!(action, Some(Action::ToggleStar(id)) if id == "ethereum"));
    }

    #[test]
    fn test_enter_opens_selected_coin() {
        let handler = setup(|_| {});
        let action = handler.handle_key(key(KeyCode::Enter));
        assert!(matches!(action, Some(Action::OpenCoin(id)) if id == "bitcoin"));
    }

    #[test]
    fn test_paging_keys() {
        let handler = setup(|_| {});
        assert!(matches!(handler.handle_key(key(KeyCode::Char('n'))), Some(Action::NextPage)));
        assert!(matches!(handler.handle_key(key(KeyCode::Left)), Some(Action::PrevPage)));
        let plus = KeyEvent::new(KeyCode::Char('+'), KeyModifiers::SHIFT);
        assert!(matches!(handler.handle_key(plus), Some(Action::CycleRowsPerPage)));
    }

    #[test]
    fn test_search_mode_captures_text() {
        let handler = setup(|store| store.reduce(Action::SetInputMode(InputMode::Search)));
        // 'q' is text while searching, not quit
        assert!(matches!(
            handler.handle_key(key(KeyCode::Char('q'))),
            Some(Action::SearchInput('q'))
        ));
        assert!(matches!(handler.handle_key(key(KeyCode::Esc)), Some(Action::ClearSearch)));
        assert!(matches!(
            handler.handle_key(key(KeyCode::Backspace)),
            Some(Action::SearchBackspace)
        ));
    }

    #[test]
    fn test_ctrl_c_quits_in_any_mode() {
        let handler = setup(|store| store.reduce(Action::SetInputMode(InputMode::Search)));
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(matches!(handler.handle_key(ctrl_c), Some(Action::Quit)));
    }

    #[test]
    fn test_coin_view_keys() {
        let handler = setup(|store| store.reduce(Action::OpenCoin("solana".to_string())));
        assert!(matches!(
            handler.handle_key(key(KeyCode::Char('t'))),
            Some(Action::CycleTimeFrame)
        ));
        assert!(matches!(
            handler.handle_key(key(KeyCode::Char('s'))),
            Some(Action::ToggleStar(id)) if id == "solana"
        ));
        assert!(matches!(handler.handle_key(key(KeyCode::Esc)), Some(Action::Back)));
    }

    #[test]
    fn test_help_overlay_swallows_keys() {
        let handler = setup(|store| store.reduce(Action::ToggleHelp));
        assert!(handler.handle_key(key(KeyCode::Char('s'))).is_none());
        let question = KeyEvent::new(KeyCode::Char('?'), KeyModifiers::SHIFT);
        assert!(matches!(handler.handle_key(question), Some(Action::ToggleHelp)));
    }

    #[test]
    fn test_release_events_ignored() {
        let handler = setup(|_| {});
        let release = KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert!(handler.handle_key(release).is_none());
    }
}
