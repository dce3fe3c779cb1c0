//! Evolutionary search over single depot-anchored tours.
//!
//! - [`Tour`] — One vehicle's full stop sequence with its cost
//! - [`evolve`] — Seeded swap-mutation search keeping the best tour seen

mod evolution;
mod tour;

pub use evolution::{evolve, EvolutionResult};
pub use tour::Tour;
