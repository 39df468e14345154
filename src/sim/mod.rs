//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering, storage or platform dependencies

pub mod body;
pub mod collision;
pub mod combo;
pub mod spawner;
pub mod state;
pub mod tick;
pub mod trail;

pub use body::{Body, FruitVariant, Projectile, ProjectileKind, SplashEffect, SplitFragment};
pub use collision::{SLICE_DISTANCE, SliceReport, resolve_slices, trail_hit};
pub use combo::{ComboBanner, ComboTracker};
pub use spawner::{Spawner, spawn_wave};
pub use state::{GameEvent, GameOverCause, GamePhase, GameState, Viewport};
pub use tick::{TickInput, restart, tick};
pub use trail::{TrailBuffer, TrailPoint};
