use crate::engine::GameEngine;
use crate::game::{ComputerMove, GameError, Phase};
use log::debug;
use std::time::{Duration, Instant};

/// Runs the computer's turn once a fixed delay has passed since the turn came
/// around, so a human can see the board before the reply lands.
#[derive(Debug, Clone)]
pub struct ComputerAgent {
    delay: Duration,
    ready_at: Option<Instant>,
}

impl ComputerAgent {
    pub fn new(delay_ms: u64) -> Self {
        Self { delay: Duration::from_millis(delay_ms), ready_at: None }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn set_delay_ms(&mut self, delay_ms: u64) {
        self.delay = Duration::from_millis(delay_ms);
    }

    /// Whether a computer move is scheduled but not yet due.
    pub fn is_waiting(&self) -> bool {
        self.ready_at.is_some()
    }

    /// Drop any scheduled move, e.g. after a new game.
    pub fn reset(&mut self) {
        self.ready_at = None;
    }

    /// Drive the computer if it is its turn and the delay has elapsed.
    pub fn on_tick(
        &mut self,
        engine: &mut dyn GameEngine,
    ) -> Result<Option<ComputerMove>, GameError> {
        self.on_tick_at(engine, Instant::now())
    }

    /// Same as [`ComputerAgent::on_tick`] with an explicit clock reading.
    pub fn on_tick_at(
        &mut self,
        engine: &mut dyn GameEngine,
        now: Instant,
    ) -> Result<Option<ComputerMove>, GameError> {
        if engine.phase() != Phase::ComputerTurn {
            self.ready_at = None;
            return Ok(None);
        }
        let delay = self.delay;
        let ready = *self.ready_at.get_or_insert_with(|| {
            debug!("computer move scheduled in {delay:?}");
            now + delay
        });
        if now < ready {
            return Ok(None);
        }
        self.ready_at = None;
        engine.computer_turn().map(Some)
    }
}

impl Default for ComputerAgent {
    fn default() -> Self {
        Self::new(1000)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Game, GameConfig};

    fn computer_to_move() -> Game {
        let mut g = Game::new(GameConfig::default().with_seed(11)).unwrap();
        g.player_draw().unwrap();
        g
    }

    #[test]
    fn waits_for_delay_then_acts() {
        let mut g = computer_to_move();
        let mut agent = ComputerAgent::new(500);
        let t0 = Instant::now();

        assert_eq!(agent.on_tick_at(&mut g, t0).unwrap(), None);
        assert!(agent.is_waiting());
        assert_eq!(g.phase(), Phase::ComputerTurn);

        assert_eq!(agent.on_tick_at(&mut g, t0 + Duration::from_millis(499)).unwrap(), None);
        assert_eq!(g.phase(), Phase::ComputerTurn);

        let mv = agent.on_tick_at(&mut g, t0 + Duration::from_millis(500)).unwrap();
        assert!(mv.is_some());
        assert!(!agent.is_waiting());
        assert_ne!(g.phase(), Phase::ComputerTurn);
    }

    #[test]
    fn zero_delay_acts_on_first_tick() {
        let mut g = computer_to_move();
        let mut agent = ComputerAgent::new(0);
        assert!(agent.on_tick(&mut g).unwrap().is_some());
    }

    #[test]
    fn idle_on_player_turn() {
        let mut g = Game::new(GameConfig::default().with_seed(11)).unwrap();
        let before = g.player_hand().to_vec();
        let mut agent = ComputerAgent::new(0);
        assert_eq!(agent.on_tick(&mut g).unwrap(), None);
        assert!(!agent.is_waiting());
        assert_eq!(g.player_hand(), before.as_slice());
        assert_eq!(g.phase(), Phase::AwaitingPlayerMove);
    }
}
