//! Simulation engine for TANKFIELD.
//!
//! Owns the hecs ECS world (the single shared registry of live
//! entities), runs the update pass at a fixed tick rate, and produces
//! `GameSnapshot`s for the frontend. Also hosts the level editor
//! session, which owns a world of its own.

pub mod ai;
pub mod collision;
pub mod editor;
pub mod engine;
pub mod spawn;
pub mod systems;

pub use editor::EditorSession;
pub use engine::GameEngine;

#[cfg(test)]
mod tests;
