//! Coastal flood building-loss estimation.
//!
//! `surge-core` couples a per-building depth-damage function with a
//! class-based unit-cost lookup and aggregates losses over a region of
//! buildings addressed into a 2-D flood stage field. The `stats` module
//! carries the return-period and conditional-normal utilities used to
//! build surge scenarios around the damage core, and `io` holds the
//! plain-text array helpers shared by the workspace tools.

pub mod building;
pub mod damage;
pub mod flood;
pub mod io;
pub mod region;
pub mod stats;

pub use building::Building;
pub use damage::{unit_cost_per_sqft, SQM_PER_SQFT};
pub use flood::{FloodField, FT_PER_M};
pub use region::{building_loss, total_loss, Region};
