//! Deterministic simulation module
//!
//! All gameplay logic lives here:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod explosion;
pub mod state;
pub mod tick;

pub use collision::collides;
pub use explosion::{explode, outward_direction, subcell_offsets};
pub use state::{Fragment, GameEvent, GamePhase, GameState, Obstacle, ObstacleField, Player};
pub use tick::{TickInput, speed_for_score, tick};
