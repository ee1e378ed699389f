//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

// --- Playfield ---

/// Playfield width in pixels (matches the render surface).
pub const FIELD_WIDTH: i32 = 800;

/// Playfield height in pixels.
pub const FIELD_HEIGHT: i32 = 600;

// --- Entity speeds (pixels per tick, always axis-aligned) ---

/// Tank speed.
pub const TANK_SPEED: i32 = 2;

/// Shell (projectile) speed.
pub const SHELL_SPEED: i32 = 8;

// --- Entity sizes (pixels, square sprites) ---

/// Wall sprite edge length.
pub const WALL_SIZE: i32 = 32;

/// Tank sprite edge length (both factions).
pub const TANK_SIZE: i32 = 32;

/// Shell sprite edge length.
pub const SHELL_SIZE: i32 = 8;

/// Explosion sprite edge length.
pub const BLAST_SIZE: i32 = 32;

// --- Enemy policy ---

/// Per-tick probability band width for each of the four turn directions.
pub const ENEMY_ROTATE: f64 = 0.006;

/// Per-tick probability band width for stop-and-fire.
pub const ENEMY_SHOOT: f64 = 0.02;

// --- Explosion lifecycle ---

/// Ticks an explosion stays alive before despawning itself.
pub const BLAST_TICKS: u32 = 12;

// --- Frontend asset keys ---
// The core never loads these; the snapshot exposes them so the renderer
// and mixer can key their caches by fixed filenames.

/// Wall sprite image.
pub const STONE_IMAGE: &str = "stone.png";

/// Player tank sprite image (facing up; renderer rotates for others).
pub const PLAYER_IMAGE: &str = "player.png";

/// Enemy tank sprite image.
pub const ENEMY_IMAGE: &str = "enemy.png";

/// Shell sprite image.
pub const BULLET_IMAGE: &str = "bullet.png";

/// Explosion sprite image.
pub const BANG_IMAGE: &str = "bang.png";

/// Editor delete-tool sprite image.
pub const DELETE_IMAGE: &str = "delete.png";

/// Firing sound effect.
pub const SHOOT_SOUND: &str = "shoot.wav";

/// Explosion sound effect.
pub const BANG_SOUND: &str = "bang.wav";
