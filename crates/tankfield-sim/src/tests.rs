//! Integration tests for the simulation engine, systems, and editor.

use glam::IVec2;
use hecs::World;

use tankfield_core::commands::PlayerCommand;
use tankfield_core::components::{Blast, Body, Shell};
use tankfield_core::constants::*;
use tankfield_core::enums::{EntityKind, Facing, Faction, Outcome, SpriteKind};
use tankfield_core::events::AudioEvent;
use tankfield_core::level::{parse_level, serialize_level, LevelError, Placement};
use tankfield_core::types::Rect;

use crate::collision::{enemy_count, obstructed, overlapping};
use crate::editor::{EditorError, EditorSession};
use crate::engine::{GameEngine, SimConfig};
use crate::spawn;
use crate::systems::{explosion, movement};

fn field() -> Rect {
    Rect::new(0, 0, FIELD_WIDTH, FIELD_HEIGHT)
}

fn body_rect(world: &World, entity: hecs::Entity) -> Rect {
    world.get::<&Body>(entity).unwrap().rect
}

fn engine_from(text: &str, seed: u64) -> GameEngine {
    let placements = parse_level(text).expect("level parses");
    let config = SimConfig {
        seed,
        ..Default::default()
    };
    GameEngine::new(config, &placements).expect("engine builds")
}

// --- collision queries ---

#[test]
fn test_overlapping_includes_self_in_id_order() {
    let mut world = World::new();
    let a = spawn::spawn_wall(&mut world, IVec2::new(100, 100));
    let b = spawn::spawn_wall(&mut world, IVec2::new(120, 100));
    let far = spawn::spawn_wall(&mut world, IVec2::new(400, 400));

    let hits = overlapping(&world, body_rect(&world, a));
    assert_eq!(hits, vec![a, b]);
    assert!(!hits.contains(&far));
}

#[test]
fn test_touching_edges_are_not_overlapping() {
    let mut world = World::new();
    let a = spawn::spawn_wall(&mut world, IVec2::new(100, 100));
    // Right edge of a is the left edge of this one.
    spawn::spawn_wall(&mut world, IVec2::new(132, 100));

    let hits = overlapping(&world, body_rect(&world, a));
    assert_eq!(hits, vec![a]);
    assert!(!obstructed(&world, body_rect(&world, a), field()));
}

#[test]
fn test_obstructed_outside_field() {
    let world = World::new();
    assert!(obstructed(&world, Rect::new(-1, 0, 32, 32), field()));
    assert!(obstructed(&world, Rect::new(0, FIELD_HEIGHT - 31, 32, 32), field()));
    assert!(!obstructed(&world, Rect::new(0, 0, 32, 32), field()));
}

// --- tank movement ---

#[test]
fn test_tank_moves_when_clear() {
    let mut world = World::new();
    let tank = spawn::spawn_tank(&mut world, IVec2::new(100, 100), Faction::Player);

    movement::turn(&mut world, tank, Facing::Right);
    movement::tank_move(&mut world, tank, field());

    assert_eq!(body_rect(&world, tank).center(), IVec2::new(102, 100));
    assert!(world.get::<&tankfield_core::components::Mobile>(tank).unwrap().moving);
}

#[test]
fn test_tank_reverts_when_blocked_by_wall() {
    let mut world = World::new();
    let tank = spawn::spawn_tank(&mut world, IVec2::new(100, 100), Faction::Player);
    spawn::spawn_wall(&mut world, IVec2::new(132, 100));

    movement::turn(&mut world, tank, Facing::Right);
    movement::tank_move(&mut world, tank, field());

    // The step would overlap the wall, so the tank stays put.
    assert_eq!(body_rect(&world, tank).center(), IVec2::new(100, 100));
}

#[test]
fn test_tank_reverts_at_field_edge() {
    let mut world = World::new();
    let tank = spawn::spawn_tank(&mut world, IVec2::new(16, 100), Faction::Player);

    movement::turn(&mut world, tank, Facing::Left);
    movement::tank_move(&mut world, tank, field());

    assert_eq!(body_rect(&world, tank).center(), IVec2::new(16, 100));
}

// --- shell movement and destruction ---

#[test]
fn test_shell_flies_when_clear() {
    let mut world = World::new();
    let mut events = Vec::new();
    let shell = spawn::spawn_shell(&mut world, Faction::Player);
    world.get::<&mut Body>(shell).unwrap().rect =
        Rect::from_center(IVec2::new(100, 100), IVec2::splat(SHELL_SIZE));

    movement::shell_move(&mut world, shell, field(), &mut events);

    assert!(world.contains(shell));
    assert_eq!(body_rect(&world, shell).center(), IVec2::new(100, 92));
    assert!(events.is_empty());
}

#[test]
fn test_shell_despawns_leaving_field() {
    let mut world = World::new();
    let mut events = Vec::new();
    let shell = spawn::spawn_shell(&mut world, Faction::Player);
    world.get::<&mut Body>(shell).unwrap().rect =
        Rect::from_center(IVec2::new(100, 4), IVec2::splat(SHELL_SIZE));

    movement::shell_move(&mut world, shell, field(), &mut events);

    assert!(!world.contains(shell));
    assert!(events.is_empty());
}

#[test]
fn test_shell_destroys_opposing_tank_and_keeps_flying() {
    let mut world = World::new();
    let mut events = Vec::new();
    let enemy = spawn::spawn_tank(&mut world, IVec2::new(100, 100), Faction::Enemy);
    let shell = spawn::spawn_shell(&mut world, Faction::Player);
    world.get::<&mut Body>(shell).unwrap().rect =
        Rect::from_center(IVec2::new(100, 124), IVec2::splat(SHELL_SIZE));

    movement::shell_move(&mut world, shell, field(), &mut events);

    assert!(!world.contains(enemy));
    assert!(world.contains(shell));
    assert_eq!(
        events,
        vec![AudioEvent::Explosion {
            center: IVec2::new(100, 100)
        }]
    );
    let blasts: Vec<Rect> = world
        .query::<(&Blast, &Body)>()
        .iter()
        .map(|(_, (_, body))| body.rect)
        .collect();
    assert_eq!(blasts.len(), 1);
    assert_eq!(blasts[0].center(), IVec2::new(100, 100));
}

#[test]
fn test_shell_spares_own_faction() {
    let mut world = World::new();
    let mut events = Vec::new();
    let friendly = spawn::spawn_tank(&mut world, IVec2::new(100, 100), Faction::Player);
    let shell = spawn::spawn_shell(&mut world, Faction::Player);
    world.get::<&mut Body>(shell).unwrap().rect =
        Rect::from_center(IVec2::new(100, 124), IVec2::splat(SHELL_SIZE));

    movement::shell_move(&mut world, shell, field(), &mut events);

    assert!(world.contains(friendly));
    assert!(world.contains(shell));
    assert!(events.is_empty());
}

#[test]
fn test_shell_lodged_in_wall_keeps_advancing() {
    let mut world = World::new();
    let mut events = Vec::new();
    let wall = spawn::spawn_wall(&mut world, IVec2::new(100, 100));
    let shell = spawn::spawn_shell(&mut world, Faction::Player);
    world.get::<&mut Body>(shell).unwrap().rect =
        Rect::from_center(IVec2::new(100, 124), IVec2::splat(SHELL_SIZE));

    movement::shell_move(&mut world, shell, field(), &mut events);
    assert!(world.contains(wall));
    assert!(world.contains(shell));
    assert_eq!(body_rect(&world, shell).center(), IVec2::new(100, 116));

    // Still inside the wall next tick, still advancing.
    movement::shell_move(&mut world, shell, field(), &mut events);
    assert!(world.contains(wall));
    assert!(world.contains(shell));
    assert_eq!(body_rect(&world, shell).center(), IVec2::new(100, 108));
    assert!(events.is_empty());
}

#[test]
fn test_shells_destroy_each_other_regardless_of_faction() {
    let mut world = World::new();
    let mut events = Vec::new();
    let other = spawn::spawn_shell(&mut world, Faction::Player);
    world.get::<&mut Body>(other).unwrap().rect =
        Rect::from_center(IVec2::new(100, 96), IVec2::splat(SHELL_SIZE));
    let shell = spawn::spawn_shell(&mut world, Faction::Player);
    world.get::<&mut Body>(shell).unwrap().rect =
        Rect::from_center(IVec2::new(100, 108), IVec2::splat(SHELL_SIZE));

    movement::shell_move(&mut world, shell, field(), &mut events);

    // Shells carry no tank faction, so even a same-faction shell dies.
    assert!(!world.contains(other));
    assert!(world.contains(shell));
    assert!(events.is_empty());
}

// --- destruction and blasts ---

#[test]
fn test_destroy_tank_leaves_one_blast() {
    let mut world = World::new();
    let mut events = Vec::new();
    let tank = spawn::spawn_tank(&mut world, IVec2::new(200, 300), Faction::Enemy);

    spawn::destroy(&mut world, tank, &mut events);

    assert!(!world.contains(tank));
    let blasts: Vec<Rect> = world
        .query::<(&Blast, &Body)>()
        .iter()
        .map(|(_, (_, body))| body.rect)
        .collect();
    assert_eq!(blasts.len(), 1);
    assert_eq!(blasts[0].center(), IVec2::new(200, 300));
    assert_eq!(
        events,
        vec![AudioEvent::Explosion {
            center: IVec2::new(200, 300)
        }]
    );
}

#[test]
fn test_destroy_wall_leaves_nothing() {
    let mut world = World::new();
    let mut events = Vec::new();
    let wall = spawn::spawn_wall(&mut world, IVec2::new(100, 100));

    spawn::destroy(&mut world, wall, &mut events);

    assert!(!world.contains(wall));
    assert_eq!(world.len(), 0);
    assert!(events.is_empty());
}

#[test]
fn test_blast_expires_after_lifetime() {
    let mut world = World::new();
    let mut events = Vec::new();
    let blast = spawn::spawn_blast(&mut world, IVec2::new(50, 50), &mut events);

    for _ in 0..BLAST_TICKS - 1 {
        explosion::update(&mut world, blast);
    }
    assert!(world.contains(blast));

    explosion::update(&mut world, blast);
    assert!(!world.contains(blast));
}

// --- firing ---

#[test]
fn test_shoot_up_spawns_shell_above_turret() {
    let mut world = World::new();
    let mut events = Vec::new();
    let tank = spawn::spawn_tank(&mut world, IVec2::new(100, 100), Faction::Player);

    spawn::shoot(&mut world, tank, field(), &mut events);

    let shells: Vec<Rect> = world
        .query::<(&Shell, &Body)>()
        .iter()
        .map(|(_, (_, body))| body.rect)
        .collect();
    assert_eq!(shells.len(), 1);
    // Aligned to the tank's top-edge midpoint, then one step of flight.
    assert_eq!(shells[0], Rect::new(96, 76, SHELL_SIZE, SHELL_SIZE));
    assert_eq!(
        events,
        vec![AudioEvent::Shot {
            faction: Faction::Player
        }]
    );
}

// --- level setup ---

#[test]
fn test_setup_level_from_parsed_text() {
    let placements = parse_level("1 100 100\n2 200 100\n").unwrap();
    let mut world = World::new();

    let player = spawn::setup_level(&mut world, &placements).unwrap();

    assert!(player.is_some());
    assert_eq!(enemy_count(&world), 1);
    assert_eq!(world.len(), 2);
}

#[test]
fn test_setup_level_rejects_second_player() {
    let placements = vec![
        Placement {
            kind: EntityKind::Player,
            center: IVec2::new(100, 100),
        },
        Placement {
            kind: EntityKind::Player,
            center: IVec2::new(200, 200),
        },
    ];
    let mut world = World::new();

    let result = spawn::setup_level(&mut world, &placements);
    assert!(matches!(result, Err(LevelError::MorePlayers)));
}

// --- engine ---

#[test]
fn test_turn_command_moves_twice_in_one_tick() {
    let mut engine = engine_from("1 100 100\n2 700 500\n", 0);
    let player = engine.player().unwrap();

    engine.queue_command(PlayerCommand::Turn {
        facing: Facing::Right,
    });
    engine.tick();

    // One immediate step on the turn, one more in the update pass.
    assert_eq!(
        body_rect(engine.world(), player).center(),
        IVec2::new(104, 100)
    );

    // No new command; the tank keeps rolling.
    engine.tick();
    assert_eq!(
        body_rect(engine.world(), player).center(),
        IVec2::new(106, 100)
    );
}

#[test]
fn test_stop_command_halts_the_tank() {
    let mut engine = engine_from("1 100 100\n2 700 500\n", 0);
    let player = engine.player().unwrap();

    engine.queue_command(PlayerCommand::Turn {
        facing: Facing::Right,
    });
    engine.tick();
    engine.queue_command(PlayerCommand::Stop);
    engine.tick();
    let halted = body_rect(engine.world(), player).center();

    engine.tick();
    assert_eq!(body_rect(engine.world(), player).center(), halted);
}

#[test]
fn test_shoot_command_stops_and_fires() {
    let mut engine = engine_from("1 100 100\n2 700 500\n", 0);
    let player = engine.player().unwrap();

    engine.queue_command(PlayerCommand::Turn {
        facing: Facing::Right,
    });
    engine.tick();
    engine.queue_command(PlayerCommand::Shoot);
    let snapshot = engine.tick();

    assert!(snapshot
        .audio_events
        .contains(&AudioEvent::Shot {
            faction: Faction::Player
        }));
    assert!(snapshot
        .entities
        .iter()
        .any(|view| view.sprite == SpriteKind::Shell));

    // Firing halts the tank.
    let halted = body_rect(engine.world(), player).center();
    let snapshot = engine.tick();
    assert_eq!(body_rect(engine.world(), player).center(), halted);
    // Audio events are drained each tick, not repeated.
    assert!(!snapshot
        .audio_events
        .iter()
        .any(|event| matches!(event, AudioEvent::Shot { faction: Faction::Player })));
}

#[test]
fn test_snapshot_lists_entities_in_id_order() {
    let mut engine = engine_from("0 48 48\n1 100 100\n2 200 200\n", 0);
    let snapshot = engine.tick();

    assert!(snapshot.entities.len() >= 3);
    assert!(snapshot
        .entities
        .windows(2)
        .all(|pair| pair[0].id < pair[1].id));

    let sprites: Vec<SpriteKind> = snapshot.entities.iter().map(|view| view.sprite).collect();
    assert!(sprites.contains(&SpriteKind::Wall));
    assert!(sprites.contains(&SpriteKind::PlayerTank));
    assert!(sprites.contains(&SpriteKind::EnemyTank));
    assert_eq!(snapshot.enemy_count, 1);

    let wall = snapshot
        .entities
        .iter()
        .find(|view| view.sprite == SpriteKind::Wall)
        .unwrap();
    assert!(wall.facing.is_none());
    let player = snapshot
        .entities
        .iter()
        .find(|view| view.sprite == SpriteKind::PlayerTank)
        .unwrap();
    assert!(player.facing.is_some());
}

#[test]
fn test_victory_when_no_enemies_remain() {
    let mut engine = engine_from("1 100 100\n", 0);
    let snapshot = engine.tick();
    assert_eq!(snapshot.outcome, Outcome::Victory);
}

#[test]
fn test_defeat_when_no_player() {
    let mut engine = engine_from("2 200 100\n", 0);
    let snapshot = engine.tick();
    assert_eq!(snapshot.outcome, Outcome::Defeat);
}

#[test]
fn test_defeat_outranks_victory() {
    // Nothing on the field at all: no player loses before no enemies wins.
    let mut engine = engine_from("", 0);
    let snapshot = engine.tick();
    assert_eq!(snapshot.outcome, Outcome::Defeat);
}

#[test]
fn test_terminal_outcome_freezes_the_world() {
    let mut engine = engine_from("1 100 100\n", 0);
    engine.tick();
    assert!(engine.outcome().is_terminal());

    engine.queue_command(PlayerCommand::Turn {
        facing: Facing::Right,
    });
    let snapshot = engine.tick();

    let player = engine.player().unwrap();
    assert_eq!(
        body_rect(engine.world(), player).center(),
        IVec2::new(100, 100)
    );
    assert_eq!(snapshot.outcome, Outcome::Victory);
}

fn snapshot_stream(seed: u64, ticks: u64) -> Vec<String> {
    let mut engine = engine_from("1 100 100\n2 300 100\n2 500 300\n", seed);
    let mut frames = Vec::new();
    for tick in 0..ticks {
        if tick == 10 {
            engine.queue_command(PlayerCommand::Turn {
                facing: Facing::Right,
            });
        }
        if tick == 50 {
            engine.queue_command(PlayerCommand::Shoot);
        }
        frames.push(serde_json::to_string(&engine.tick()).unwrap());
    }
    frames
}

#[test]
fn test_same_seed_same_snapshot_stream() {
    assert_eq!(snapshot_stream(7, 240), snapshot_stream(7, 240));
}

#[test]
fn test_different_seeds_diverge() {
    assert_ne!(snapshot_stream(1, 1000), snapshot_stream(2, 1000));
}

// --- editor ---

#[test]
fn test_editor_places_and_exports() {
    let mut session = EditorSession::new(field(), &[]).unwrap();
    session.set_cursor(IVec2::new(100, 100));
    session.create().unwrap();

    assert_eq!(
        session.placements(),
        vec![Placement {
            kind: EntityKind::Wall,
            center: IVec2::new(100, 100),
        }]
    );
}

#[test]
fn test_editor_refuses_occupied_spot() {
    let mut session = EditorSession::new(field(), &[]).unwrap();
    session.set_cursor(IVec2::new(100, 100));
    session.create().unwrap();
    session.create().unwrap();
    // Overlapping but not identical placement is refused too.
    session.set_cursor(IVec2::new(110, 100));
    session.create().unwrap();

    assert_eq!(session.placements().len(), 1);
}

#[test]
fn test_editor_keeps_a_single_player() {
    let mut session = EditorSession::new(field(), &[]).unwrap();
    session.next_slot();
    assert_eq!(session.slot().kind(), Some(EntityKind::Player));

    session.set_cursor(IVec2::new(100, 100));
    session.create().unwrap();
    session.set_cursor(IVec2::new(300, 300));
    session.create().unwrap();

    let players: Vec<Placement> = session
        .placements()
        .into_iter()
        .filter(|placement| placement.kind == EntityKind::Player)
        .collect();
    assert_eq!(players.len(), 1);
    assert_eq!(players[0].center, IVec2::new(100, 100));
}

#[test]
fn test_editor_delete_slot_cannot_place() {
    let mut session = EditorSession::new(field(), &[]).unwrap();
    session.set_cursor(IVec2::new(100, 100));
    session.create().unwrap();

    session.next_slot();
    session.next_slot();
    session.next_slot();
    assert_eq!(session.slot().kind(), None);
    assert!(matches!(session.create(), Err(EditorError::UnknownAction)));

    session.delete();
    assert!(session.placements().is_empty());
}

#[test]
fn test_editor_cursor_is_not_part_of_the_level() {
    let mut session = EditorSession::new(field(), &[]).unwrap();
    session.set_cursor(IVec2::new(100, 100));
    session.next_slot();
    assert!(session.placements().is_empty());
}

#[test]
fn test_editor_cursor_stays_inside_field() {
    let mut session = EditorSession::new(field(), &[]).unwrap();
    let before = session.cursor();
    // Footprint would leave the field; the move is ignored.
    session.set_cursor(IVec2::new(0, 0));
    assert_eq!(session.cursor(), before);

    session.set_cursor(IVec2::new(16, 16));
    assert_eq!(session.cursor().center(), IVec2::new(16, 16));
}

#[test]
fn test_editor_round_trips_a_level_file() {
    let text = "0 100 100\n1 200 200\n2 300 100\n";
    let session = EditorSession::new(field(), &parse_level(text).unwrap()).unwrap();
    assert_eq!(serialize_level(&session.placements()), text);
}
