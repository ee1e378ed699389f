//! The headless game engine.
//!
//! Owns the ECS world, the seeded RNG, the player command queue, and
//! the tick clock. Frontends queue `PlayerCommand`s between ticks and
//! call `tick()` at the fixed rate; each tick drains the queue, runs
//! one update pass over every entity, re-evaluates the outcome, and
//! returns a `GameSnapshot`.
//!
//! Identical levels, seeds, and command streams produce identical
//! snapshot streams.

use std::collections::VecDeque;

use hecs::{Entity, World};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use tankfield_core::commands::PlayerCommand;
use tankfield_core::components::{Blast, Mobile, Shell, TankUnit};
use tankfield_core::constants::{FIELD_HEIGHT, FIELD_WIDTH};
use tankfield_core::enums::{Faction, Outcome};
use tankfield_core::events::AudioEvent;
use tankfield_core::level::{LevelError, Placement};
use tankfield_core::state::GameSnapshot;
use tankfield_core::types::{Rect, SimTime};

use crate::ai::{self, EnemyAction};
use crate::collision;
use crate::spawn;
use crate::systems::{explosion, movement, snapshot};

/// Engine configuration. The default field matches the 800x600 play
/// area the asset set was drawn for.
#[derive(Debug, Clone, Copy)]
pub struct SimConfig {
    pub seed: u64,
    pub field: Rect,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            field: Rect::new(0, 0, FIELD_WIDTH, FIELD_HEIGHT),
        }
    }
}

pub struct GameEngine {
    world: World,
    rng: ChaCha8Rng,
    time: SimTime,
    field: Rect,
    player: Option<Entity>,
    outcome: Outcome,
    command_queue: VecDeque<PlayerCommand>,
    audio_events: Vec<AudioEvent>,
}

impl GameEngine {
    /// Build an engine from level placements. Fails if the level
    /// contains more than one player tank.
    pub fn new(config: SimConfig, placements: &[Placement]) -> Result<Self, LevelError> {
        let mut world = World::new();
        let player = spawn::setup_level(&mut world, placements)?;
        log::info!(
            "simulation ready: {} entities, {} enemies, seed {}",
            world.len(),
            collision::enemy_count(&world),
            config.seed
        );
        Ok(Self {
            world,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            time: SimTime::default(),
            field: config.field,
            player,
            outcome: Outcome::Playing,
            command_queue: VecDeque::new(),
            audio_events: Vec::new(),
        })
    }

    /// Queue a player command for the next tick. Commands arriving
    /// after the game ends are dropped at the tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Advance the simulation one tick and snapshot the result. A
    /// finished game stops updating but keeps snapshotting, so the
    /// frontend can hold the final frame.
    pub fn tick(&mut self) -> GameSnapshot {
        if self.outcome.is_terminal() {
            self.command_queue.clear();
        } else {
            self.process_commands();
            self.update_entities();
            self.evaluate_outcome();
        }
        self.time.advance();

        let audio_events = std::mem::take(&mut self.audio_events);
        snapshot::build_snapshot(&self.world, self.time, self.outcome, audio_events)
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn field(&self) -> Rect {
        self.field
    }

    pub fn player(&self) -> Option<Entity> {
        self.player
    }

    /// Drain queued commands against the player tank. Turning also
    /// steps the tank once immediately, so a turn made while the tank
    /// is already moving covers the same ground a held key does.
    fn process_commands(&mut self) {
        let player = match self.player {
            Some(player) if self.world.contains(player) => player,
            _ => {
                self.command_queue.clear();
                return;
            }
        };

        while let Some(command) = self.command_queue.pop_front() {
            match command {
                PlayerCommand::Turn { facing } => {
                    movement::turn(&mut self.world, player, facing);
                    movement::tank_move(&mut self.world, player, self.field);
                }
                PlayerCommand::Stop => {
                    movement::stop(&mut self.world, player);
                }
                PlayerCommand::Shoot => {
                    movement::stop(&mut self.world, player);
                    spawn::shoot(&mut self.world, player, self.field, &mut self.audio_events);
                }
            }
        }
    }

    /// One pass over every live entity in ascending id order. Entities
    /// despawned earlier in the same pass are skipped.
    fn update_entities(&mut self) {
        let mut order: Vec<Entity> = self.world.iter().map(|entity| entity.entity()).collect();
        order.sort_by_key(|entity| entity.id());

        for entity in order {
            if !self.world.contains(entity) {
                continue;
            }

            if self.world.get::<&Blast>(entity).is_ok() {
                explosion::update(&mut self.world, entity);
                continue;
            }
            if self.world.get::<&Shell>(entity).is_ok() {
                movement::shell_move(&mut self.world, entity, self.field, &mut self.audio_events);
                continue;
            }

            let faction = self
                .world
                .get::<&TankUnit>(entity)
                .ok()
                .map(|tank| tank.faction);
            match faction {
                Some(Faction::Enemy) => self.update_enemy(entity),
                Some(Faction::Player) => {
                    if self.is_moving(entity) {
                        movement::tank_move(&mut self.world, entity, self.field);
                    }
                }
                // Walls take no turn.
                None => {}
            }
        }
    }

    /// One policy draw for one enemy tank.
    fn update_enemy(&mut self, entity: Entity) {
        let sample: f64 = self.rng.gen_range(0.0..1.0);
        match ai::decide(sample) {
            EnemyAction::Turn(facing) => {
                movement::turn(&mut self.world, entity, facing);
                movement::tank_move(&mut self.world, entity, self.field);
            }
            EnemyAction::Shoot => {
                movement::stop(&mut self.world, entity);
                spawn::shoot(&mut self.world, entity, self.field, &mut self.audio_events);
            }
            EnemyAction::Continue => {
                if self.is_moving(entity) {
                    movement::tank_move(&mut self.world, entity, self.field);
                }
            }
        }
    }

    fn is_moving(&self, entity: Entity) -> bool {
        self.world
            .get::<&Mobile>(entity)
            .map(|mobile| mobile.moving)
            .unwrap_or(false)
    }

    /// Defeat wins ties: a tick that kills the last enemy and the
    /// player both is a defeat.
    fn evaluate_outcome(&mut self) {
        let player_alive = self
            .player
            .map(|player| self.world.contains(player))
            .unwrap_or(false);

        if !player_alive {
            self.outcome = Outcome::Defeat;
            log::info!("player destroyed, game over");
        } else if collision::enemy_count(&self.world) == 0 {
            self.outcome = Outcome::Victory;
            log::info!("all enemies destroyed, victory");
        }
    }
}
