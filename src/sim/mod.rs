//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per display frame, no internal timers
//! - Seeded RNG only
//! - Stable iteration order (by target ID)
//! - No rendering or platform dependencies

pub mod area;
pub mod bounds;
pub mod state;
pub mod strafe;
pub mod target;
pub mod tick;
pub mod tracking;

pub use area::MovableArea;
pub use bounds::{WallHit, clamp_to_walls, reflect_angle, reflect_vector};
pub use state::{GameEvent, GamePhase, GameState, REASON_ENDED, REASON_TIME_UP};
pub use strafe::{MovementMode, StrafeState};
pub use target::{Motion, Target, TargetKind};
pub use tick::{TickInput, tick};
pub use tracking::{AvoidSector, TrackingState};
