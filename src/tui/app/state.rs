use crate::agents::{apply_action, Action, ComputerAgent};
use crate::cards::Color;
use crate::game::{ComputerMove, Game, GameConfig, GameError, Phase};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Scene {
    Menu,
    Table,
}

/// High-level input actions for the TUI controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum InputAction {
    MenuNext,
    MenuPrev,
    MenuInc,
    MenuDec,
    MenuApply,
    MenuCancel,
    ToggleMenu,
    ToggleHelp,
    ToggleHistory,
    HistoryUp,
    HistoryDown,
    NewGame,
    SelectNext,
    SelectPrev,
    SelectCard(usize),
    PlaySelected,
    Draw,
    ChooseColor(Color),
}

#[derive(Debug)]
#[non_exhaustive]
pub struct AppState {
    pub scene: Scene,
    pub game: Game,
    /// Cursor into the player's hand.
    pub selected: usize,
    pub computer: ComputerAgent,
    // Menu config being edited
    pub menu_index: usize,
    pub cfg_hand_size: usize,
    /// 0 means a fresh random seed per game.
    pub cfg_seed: u64,
    pub cfg_computer_delay_ms: u64,
    help_open: bool,
    history_open: bool,
    history_offset: usize,
    last_computer_move: Option<ComputerMove>,
    action_error: Option<String>,
    action_error_at: Option<Instant>,
}

impl AppState {
    pub const HISTORY_PAGE_SIZE: usize = 20;
    pub const DEFAULT_COMPUTER_DELAY_MS: u64 = 1000;
    const ACTION_ERROR_TTL: Duration = Duration::from_secs(3);

    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        let cfg_hand_size = config.hand_size;
        let cfg_seed = config.seed.unwrap_or(0);
        let game = Game::new(config)?;
        Ok(Self {
            scene: Scene::Menu,
            game,
            selected: 0,
            computer: ComputerAgent::new(Self::DEFAULT_COMPUTER_DELAY_MS),
            menu_index: 0,
            cfg_hand_size,
            cfg_seed,
            cfg_computer_delay_ms: Self::DEFAULT_COMPUTER_DELAY_MS,
            help_open: false,
            history_open: false,
            history_offset: 0,
            last_computer_move: None,
            action_error: None,
            action_error_at: None,
        })
    }

    pub fn help_open(&self) -> bool {
        self.help_open
    }

    pub fn history_open(&self) -> bool {
        self.history_open
    }

    pub fn history_offset(&self) -> usize {
        self.history_offset
    }

    pub fn action_error(&self) -> Option<&str> {
        self.action_error.as_deref()
    }

    pub fn last_computer_move(&self) -> Option<&ComputerMove> {
        self.last_computer_move.as_ref()
    }

    pub(crate) fn close_help(&mut self) {
        self.help_open = false;
    }

    pub(crate) fn close_history(&mut self) {
        self.history_open = false;
    }

    pub(crate) fn set_action_error(&mut self, err: &GameError) {
        self.action_error = Some(err.to_string());
        self.action_error_at = Some(Instant::now());
    }

    fn clear_action_error(&mut self) {
        self.action_error = None;
        self.action_error_at = None;
    }

    /// Whether the player may move right now (cards or draw).
    pub fn can_move(&self) -> bool {
        self.scene == Scene::Table && self.game.phase() == Phase::AwaitingPlayerMove
    }

    pub fn choosing_color(&self) -> bool {
        self.scene == Scene::Table && self.game.is_pending_wild_choice()
    }

    fn clamp_selection(&mut self) {
        let len = self.game.player_hand().len();
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }

    fn act(&mut self, action: Action) -> bool {
        match apply_action(&mut self.game, action) {
            Ok(()) => {
                self.clear_action_error();
                self.clamp_selection();
                true
            }
            Err(err) => {
                self.set_action_error(&err);
                false
            }
        }
    }

    pub fn handle_input(&mut self, action: InputAction) -> bool {
        match action {
            InputAction::ToggleMenu => {
                self.toggle_menu();
                false
            }
            InputAction::ToggleHelp => {
                if self.scene == Scene::Table {
                    self.history_open = false;
                    self.help_open = !self.help_open;
                }
                false
            }
            InputAction::ToggleHistory => {
                if self.scene == Scene::Table {
                    self.help_open = false;
                    if !self.history_open {
                        self.history_offset = 0;
                    }
                    self.history_open = !self.history_open;
                }
                false
            }
            InputAction::HistoryUp => {
                if self.scene == Scene::Table && self.history_open {
                    let max_offset =
                        self.game.history_len().saturating_sub(Self::HISTORY_PAGE_SIZE);
                    self.history_offset = (self.history_offset + 1).min(max_offset);
                }
                false
            }
            InputAction::HistoryDown => {
                if self.scene == Scene::Table && self.history_open && self.history_offset > 0 {
                    self.history_offset -= 1;
                }
                false
            }
            InputAction::MenuNext => {
                if self.scene == Scene::Menu {
                    self.menu_next();
                }
                false
            }
            InputAction::MenuPrev => {
                if self.scene == Scene::Menu {
                    self.menu_prev();
                }
                false
            }
            InputAction::MenuInc => {
                if self.scene == Scene::Menu {
                    self.menu_inc();
                }
                false
            }
            InputAction::MenuDec => {
                if self.scene == Scene::Menu {
                    self.menu_dec();
                }
                false
            }
            InputAction::MenuApply => {
                if self.scene == Scene::Menu {
                    self.apply_menu();
                }
                false
            }
            InputAction::MenuCancel => {
                if self.scene == Scene::Menu {
                    self.cancel_menu();
                }
                false
            }
            InputAction::NewGame => {
                if self.scene == Scene::Table {
                    self.new_game();
                }
                false
            }
            InputAction::SelectNext => {
                let len = self.game.player_hand().len();
                if self.scene == Scene::Table && len > 0 {
                    self.selected = (self.selected + 1) % len;
                }
                false
            }
            InputAction::SelectPrev => {
                let len = self.game.player_hand().len();
                if self.scene == Scene::Table && len > 0 {
                    self.selected = (self.selected + len - 1) % len;
                }
                false
            }
            InputAction::SelectCard(idx) => {
                if self.scene == Scene::Table && idx < self.game.player_hand().len() {
                    self.selected = idx;
                }
                false
            }
            InputAction::PlaySelected => {
                if !self.can_move() {
                    return false;
                }
                self.act(Action::Play(self.selected))
            }
            InputAction::Draw => {
                if !self.can_move() {
                    return false;
                }
                self.act(Action::Draw)
            }
            InputAction::ChooseColor(color) => {
                if !self.choosing_color() {
                    return false;
                }
                self.act(Action::ChooseColor(color))
            }
        }
    }

    /// Deal a fresh game with the current configuration.
    pub fn new_game(&mut self) {
        if self.act(Action::NewGame) {
            self.reset_table();
        }
    }

    pub(crate) fn reset_table(&mut self) {
        self.selected = 0;
        self.history_offset = 0;
        self.last_computer_move = None;
        self.computer.reset();
    }

    /// Tick the computer; it moves once its delay has passed. A stalled game gets no
    /// further ticks until a new game is dealt.
    pub fn agents_on_turn(&mut self) {
        if self.scene != Scene::Table {
            return;
        }
        if let Some(at) = self.action_error_at {
            if at.elapsed() >= Self::ACTION_ERROR_TTL {
                self.clear_action_error();
            }
        }
        if self.game.is_stalled() {
            self.computer.reset();
            return;
        }
        match self.computer.on_tick(&mut self.game) {
            Ok(Some(mv)) => {
                self.last_computer_move = Some(mv);
                self.clamp_selection();
            }
            Ok(None) => {}
            Err(err) => self.set_action_error(&err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_app() -> AppState {
        let mut app = AppState::new(GameConfig::default().with_seed(5)).unwrap();
        app.cfg_computer_delay_ms = 0;
        app.apply_menu();
        app
    }

    #[test]
    fn moves_ignored_on_menu() {
        let mut app = AppState::new(GameConfig::default().with_seed(5)).unwrap();
        assert_eq!(app.scene, Scene::Menu);
        assert!(!app.handle_input(InputAction::Draw));
        assert_eq!(app.game.player_hand().len(), 7);
    }

    #[test]
    fn draw_then_computer_replies_on_tick() {
        let mut app = table_app();
        assert!(app.handle_input(InputAction::Draw));
        assert_eq!(app.game.phase(), Phase::ComputerTurn);
        assert!(!app.handle_input(InputAction::Draw), "out of turn");
        app.agents_on_turn();
        assert!(app.last_computer_move().is_some());
        assert_eq!(app.game.phase(), Phase::AwaitingPlayerMove);
    }

    #[test]
    fn stalled_computer_is_not_retried() {
        use crate::cards::parse_cards;
        use crate::deck::Deck;

        let mut app = table_app();
        // player: r1 y2 ; computer: g2 g3 ; top r5 ; nothing left to draw
        let mut order = parse_cards("r1 g2 y2 g3 r5").unwrap();
        order.reverse();
        let config = GameConfig::default().with_hand_size(2).unwrap();
        app.game = Game::from_deck(config, Deck::from_cards(order)).unwrap();
        assert!(app.handle_input(InputAction::PlaySelected));
        assert!(app.game.is_stalled());

        app.agents_on_turn();
        app.agents_on_turn();
        assert!(app.action_error().is_none());
        assert!(!app.computer.is_waiting());
        assert_eq!(app.game.phase(), Phase::ComputerTurn);
        assert_eq!(app.game.computer_hand().len(), 2);

        app.new_game();
        assert!(!app.game.is_stalled());
    }

    #[test]
    fn color_keys_need_a_pending_wild() {
        let mut app = table_app();
        assert!(!app.handle_input(InputAction::ChooseColor(Color::Green)));
        assert!(app.action_error().is_none());
    }
}
