use crate::game::{Game, GameConfig, MAX_HAND_SIZE};

use super::AppState;

#[derive(Debug, Clone, Copy)]
enum MenuItem {
    HandSize,
    Seed,
    ComputerDelayMs,
}

const MENU_ITEMS: [MenuItem; 3] = [MenuItem::HandSize, MenuItem::Seed, MenuItem::ComputerDelayMs];

impl MenuItem {
    fn display(self, app: &AppState) -> String {
        match self {
            MenuItem::HandSize => format!("Hand Size: {}", app.cfg_hand_size),
            MenuItem::Seed => {
                if app.cfg_seed == 0 {
                    "Seed: random".to_string()
                } else {
                    format!("Seed: {}", app.cfg_seed)
                }
            }
            MenuItem::ComputerDelayMs => {
                format!("Computer Delay (ms): {}", app.cfg_computer_delay_ms)
            }
        }
    }

    fn inc(self, app: &mut AppState) {
        match self {
            MenuItem::HandSize => {
                if app.cfg_hand_size < MAX_HAND_SIZE {
                    app.cfg_hand_size += 1;
                }
            }
            MenuItem::Seed => {
                app.cfg_seed = app.cfg_seed.saturating_add(1);
            }
            MenuItem::ComputerDelayMs => {
                app.cfg_computer_delay_ms = app.cfg_computer_delay_ms.saturating_add(100);
            }
        }
    }

    fn dec(self, app: &mut AppState) {
        match self {
            MenuItem::HandSize => {
                if app.cfg_hand_size > 1 {
                    app.cfg_hand_size -= 1;
                }
            }
            MenuItem::Seed => {
                app.cfg_seed = app.cfg_seed.saturating_sub(1);
            }
            MenuItem::ComputerDelayMs => {
                app.cfg_computer_delay_ms = app.cfg_computer_delay_ms.saturating_sub(100);
            }
        }
    }
}

impl AppState {
    pub fn menu_items_display(&self) -> Vec<String> {
        MENU_ITEMS.iter().map(|item| item.display(self)).collect()
    }

    pub fn toggle_menu(&mut self) {
        self.close_help();
        self.close_history();
        self.scene = match self.scene {
            super::Scene::Menu => super::Scene::Table,
            _ => {
                self.open_menu();
                super::Scene::Menu
            }
        };
    }

    // --- Menu operations ---
    pub fn open_menu(&mut self) {
        self.close_help();
        self.close_history();
        self.menu_index = 0;
        self.cfg_hand_size = self.game.config().hand_size;
        self.cfg_seed = self.game.config().seed.unwrap_or(0);
        self.cfg_computer_delay_ms = self.computer.delay().as_millis() as u64;
        self.scene = super::Scene::Menu;
    }

    /// Build the configuration from the menu fields and deal a new game with it.
    pub fn apply_menu(&mut self) {
        self.cfg_hand_size = self.cfg_hand_size.clamp(1, MAX_HAND_SIZE);
        let mut config = GameConfig { hand_size: self.cfg_hand_size, ..GameConfig::default() };
        if self.cfg_seed != 0 {
            config = config.with_seed(self.cfg_seed);
        }
        match Game::new(config) {
            Ok(game) => self.game = game,
            Err(err) => {
                self.set_action_error(&err);
                return;
            }
        }
        self.computer.set_delay_ms(self.cfg_computer_delay_ms);
        self.reset_table();
        self.scene = super::Scene::Table;
    }

    pub fn cancel_menu(&mut self) {
        self.scene = super::Scene::Table;
    }

    pub fn menu_next(&mut self) {
        self.menu_index = (self.menu_index + 1) % MENU_ITEMS.len();
    }
    pub fn menu_prev(&mut self) {
        self.menu_index = (self.menu_index + MENU_ITEMS.len() - 1) % MENU_ITEMS.len();
    }
    pub fn menu_inc(&mut self) {
        let item = MENU_ITEMS[self.menu_index % MENU_ITEMS.len()];
        item.inc(self);
    }
    pub fn menu_dec(&mut self) {
        let item = MENU_ITEMS[self.menu_index % MENU_ITEMS.len()];
        item.dec(self);
    }
}
