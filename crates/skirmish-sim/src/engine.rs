//! Simulation engine: the game session.
//!
//! `SimulationEngine` owns the level rosters, the bullet pools, the player
//! and the state machine. It latches input, runs all systems once per
//! tick in a fixed order, and produces `GameSnapshot`s. Completely
//! headless, so it can be driven and tested deterministically.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use skirmish_core::commands::{ButtonPress, PlayerCommand};
use skirmish_core::components::{Creep, Level, LevelDef, Player};
use skirmish_core::constants::{MAX_CREEP_BULLETS, MAX_PLAYER_BULLETS};
use skirmish_core::enums::{GameState, ShopItem, Steering};
use skirmish_core::events::GameEvent;
use skirmish_core::state::GameSnapshot;
use skirmish_core::types::{Rect, SimTime};
use skirmish_patrol::PatrolBounds;

use crate::config::SimConfig;
use crate::economy::{self, PurchaseOutcome};
use crate::input::InputLatch;
use crate::pool::BulletPool;
use crate::systems;
use crate::systems::countdown::Countdown;
use crate::systems::fire::Gun;
use crate::wave::WaveState;

/// The simulation engine. Owns every piece of session state.
pub struct SimulationEngine {
    config: SimConfig,
    levels: Vec<Level>,
    wave: WaveState,
    player: Player,
    ship: Rect,
    gun: Gun,
    player_bullets: BulletPool,
    enemy_bullets: BulletPool,
    state: GameState,
    paused: bool,
    shop_selection: ShopItem,
    countdown: Countdown,
    input: InputLatch,
    patrol_bounds: PatrolBounds,
    time: SimTime,
    rng: ChaCha8Rng,
    events: Vec<GameEvent>,
}

impl SimulationEngine {
    /// Create an engine for an already validated level set.
    ///
    /// An empty set is tolerated: there is nothing to fight and the
    /// session never leaves its first level.
    pub fn new(config: SimConfig, levels: &[LevelDef]) -> Self {
        let mut engine = Self {
            config,
            levels: levels.iter().map(Level::from_def).collect(),
            wave: WaveState::default(),
            player: Player::default(),
            ship: config.field.ship_start(),
            gun: Gun::default(),
            player_bullets: BulletPool::new(MAX_PLAYER_BULLETS),
            enemy_bullets: BulletPool::new(MAX_CREEP_BULLETS),
            state: if config.show_intro {
                GameState::Intro
            } else {
                GameState::Countdown
            },
            paused: false,
            shop_selection: ShopItem::default(),
            countdown: Countdown::default(),
            input: InputLatch::default(),
            patrol_bounds: PatrolBounds::from_field(&config.field),
            time: SimTime::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            events: Vec::new(),
        };
        engine.reset_level();
        engine
    }

    /// Engine running the built-in campaign.
    pub fn with_campaign(config: SimConfig) -> Self {
        Self::new(config, &skirmish_levels::default_campaign())
    }

    /// Latch a player command for the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.input.latch(command);
    }

    /// Latch several commands; later ones win where they conflict.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        for command in commands {
            self.queue_command(command);
        }
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> GameSnapshot {
        let (steering, button) = self.input.take();
        if let Some(button) = button {
            self.handle_button(button);
        }

        match self.state {
            GameState::Active if !self.paused => self.run_systems(steering),
            GameState::Countdown => self.step_countdown(),
            _ => {}
        }

        self.time.advance();

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(self, events)
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn wave(&self) -> &WaveState {
        &self.wave
    }

    pub fn ship(&self) -> Rect {
        self.ship
    }

    pub fn shop_selection(&self) -> ShopItem {
        self.shop_selection
    }

    pub fn countdown(&self) -> &Countdown {
        &self.countdown
    }

    pub fn player_bullets(&self) -> &BulletPool {
        &self.player_bullets
    }

    pub fn enemy_bullets(&self) -> &BulletPool {
        &self.enemy_bullets
    }

    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    /// Roster of the active level.
    pub fn creeps(&self) -> &[Creep] {
        match self.wave.level_index(self.levels.len()) {
            Some(index) => self.levels[index].creeps.as_slice(),
            None => &[],
        }
    }

    fn creeps_mut(&mut self) -> &mut [Creep] {
        match self.wave.level_index(self.levels.len()) {
            Some(index) => self.levels[index].creeps.as_mut_slice(),
            None => &mut [],
        }
    }

    // ---- Wave management ----

    /// Restart the active level: full roster at scaled health, creeps back
    /// on their spawn points, pools emptied, armor restored.
    pub fn reset_level(&mut self) {
        let multiplier = self.wave.health_multiplier;
        for creep in self.creeps_mut() {
            creep.reset(multiplier);
        }
        self.wave.creeps_remaining = self.creeps().len();
        self.player_bullets.clear();
        self.enemy_bullets.clear();
        self.player.armor = self.player.full_armor;
        debug!(
            level = self.wave.current_level,
            creeps = self.wave.creeps_remaining,
            multiplier,
            "level reset"
        );
    }

    /// Book one kill; clearing the roster advances the level.
    pub fn on_creep_killed(&mut self) {
        if self.wave.record_kill() {
            self.advance_level();
        }
    }

    /// Level cleared: raise the reward, possibly the health multiplier, and
    /// open the shop.
    pub fn advance_level(&mut self) {
        let looped = self.wave.advance(self.levels.len());
        self.shop_selection = ShopItem::default();
        info!(
            level = self.wave.current_level,
            reward = self.wave.kill_reward,
            multiplier = self.wave.health_multiplier,
            looped,
            "level cleared"
        );
        self.events.push(GameEvent::LevelCleared {
            level: self.wave.current_level,
        });
        self.set_state(GameState::Shop);
    }

    // ---- Shop ----

    /// Confirm the shop entry under the cursor.
    pub fn purchase(&mut self, item: ShopItem) {
        match economy::purchase(&mut self.player, item) {
            PurchaseOutcome::Leave => {
                self.set_state(GameState::Countdown);
                self.reset_level();
            }
            PurchaseOutcome::Bought { cost } => {
                debug!(?item, cost, currency = self.player.currency, "upgrade purchased");
                self.events.push(GameEvent::UpgradePurchased { item, cost });
            }
            PurchaseOutcome::Denied { cost, currency } => {
                debug!(?item, cost, currency, "purchase denied");
                self.events
                    .push(GameEvent::PurchaseDenied { item, cost, currency });
            }
        }
    }

    pub fn navigate_up(&mut self) {
        self.shop_selection = self.shop_selection.prev();
    }

    pub fn navigate_down(&mut self) {
        self.shop_selection = self.shop_selection.next();
    }

    // ---- State machine ----

    fn set_state(&mut self, to: GameState) {
        let from = self.state;
        if from == to {
            return;
        }
        info!(?from, ?to, "game state changed");
        self.state = to;
        if to == GameState::Countdown {
            self.countdown = Countdown::default();
        }
        self.events.push(GameEvent::StateChanged { from, to });
    }

    fn handle_button(&mut self, button: ButtonPress) {
        match (self.state, button) {
            (GameState::Intro, _) => self.set_state(GameState::Countdown),
            (GameState::Countdown, _) => {}
            (GameState::Active, ButtonPress::Confirm) => {
                self.paused = !self.paused;
                info!(paused = self.paused, "pause toggled");
                self.events.push(GameEvent::PauseToggled {
                    paused: self.paused,
                });
            }
            (GameState::Active, _) => {}
            (GameState::Shop, ButtonPress::Confirm) => self.purchase(self.shop_selection),
            (GameState::Shop, ButtonPress::NavigateUp) => self.navigate_up(),
            (GameState::Shop, ButtonPress::NavigateDown) => self.navigate_down(),
            (GameState::GameOver, ButtonPress::Confirm) => self.restart(),
            (GameState::GameOver, _) => {}
        }
    }

    /// Back to square one after a game over.
    fn restart(&mut self) {
        self.player = Player::default();
        self.wave = WaveState::default();
        self.gun = Gun::default();
        self.paused = false;
        self.set_state(GameState::Countdown);
        self.reset_level();
    }

    fn step_countdown(&mut self) {
        if self.countdown.step() {
            self.set_state(GameState::Active);
        }
    }

    fn game_over(&mut self) {
        info!(
            level = self.wave.current_level,
            currency = self.player.currency,
            "ship destroyed"
        );
        self.events.push(GameEvent::ShipDestroyed {
            level: self.wave.current_level,
        });
        self.paused = false;
        self.set_state(GameState::GameOver);
    }

    /// Run all systems in order. Stops early when the state changes mid-tick.
    fn run_systems(&mut self, steering: Steering) {
        let field = self.config.field;
        let patrol = self.config.patrol();

        // 1. Ship steering
        systems::ship::steer(&mut self.ship, steering, &field);
        // 2. Bullets
        self.player_bullets.advance_all(field.bounds());
        self.enemy_bullets.advance_all(field.bounds());
        // 3. Creep patrols
        let bounds = self.patrol_bounds;
        systems::creeps::run(self.creeps_mut(), &bounds, &patrol);
        // 4. Player shots against creeps
        let gun_power = self.player.gun_power;
        let kills = match self.wave.level_index(self.levels.len()) {
            Some(index) => systems::collision::resolve_creep_hits(
                &mut self.levels[index].creeps,
                &mut self.player_bullets,
                gun_power,
            ),
            None => Vec::new(),
        };
        for creep in kills {
            let reward = self.wave.kill_reward;
            self.player.currency = self.player.currency.saturating_add(reward);
            self.events.push(GameEvent::CreepKilled { creep, reward });
            self.on_creep_killed();
        }
        if self.state != GameState::Active {
            return;
        }
        // 5. Enemy shots against the ship
        systems::collision::resolve_player_hits(
            &mut self.enemy_bullets,
            &self.ship,
            &mut self.player,
            &mut self.events,
        );
        if self.player.is_destroyed() {
            self.game_over();
            return;
        }
        // 6. Enemy fire
        if let Some(index) = self.wave.level_index(self.levels.len()) {
            systems::fire::enemy_fire(
                &self.levels[index].creeps,
                &mut self.enemy_bullets,
                &mut self.rng,
                &self.config,
            );
        }
        // 7. Player auto-fire
        systems::fire::player_fire(
            &mut self.gun,
            &self.ship,
            self.player.gun_kind,
            &mut self.player_bullets,
        );

        self.time.active_ticks += 1;
    }

    /// Direct player access for test setup.
    #[cfg(test)]
    pub(crate) fn player_for_test(&mut self) -> &mut Player {
        &mut self.player
    }

    /// Direct pool access for test setup.
    #[cfg(test)]
    pub(crate) fn pools_for_test(&mut self) -> (&mut BulletPool, &mut BulletPool) {
        (&mut self.player_bullets, &mut self.enemy_bullets)
    }

    /// Force a state for test setup.
    #[cfg(test)]
    pub(crate) fn set_state_for_test(&mut self, state: GameState) {
        self.state = state;
    }
}
