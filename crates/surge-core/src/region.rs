//! Loss aggregation over a region of buildings.

use std::collections::HashMap;

#[cfg(feature = "threading")]
use rayon::prelude::*;

use crate::building::Building;
use crate::flood::FloodField;

/// A region of buildings keyed by an arbitrary unique identifier.
pub type Region = HashMap<String, Building>;

/// Loss for one building.
///
/// With a non-empty flood field the depth is read from the building's
/// (grid_y, grid_x) cell and converted from metres to feet; otherwise
/// `flood_elev_ft` is applied directly.
///
/// Panics if the building's grid indices fall outside the field.
pub fn building_loss(building: &Building, flood: Option<&FloodField>, flood_elev_ft: f64) -> f64 {
    match flood {
        Some(field) if !field.is_empty() => {
            building.loss(field.stage_ft(building.grid_y, building.grid_x))
        }
        _ => building.loss(flood_elev_ft),
    }
}

/// Total loss over a region; an empty region sums to 0.
///
/// Each building is independent, so the reduction is associative and runs
/// over rayon with the `threading` feature enabled. Summation order may
/// shift the result by floating-point noise only.
pub fn total_loss(region: &Region, flood: Option<&FloodField>, flood_elev_ft: f64) -> f64 {
    #[cfg(feature = "threading")]
    {
        region
            .par_iter()
            .map(|(_, b)| building_loss(b, flood, flood_elev_ft))
            .sum()
    }
    #[cfg(not(feature = "threading"))]
    {
        region
            .values()
            .map(|b| building_loss(b, flood, flood_elev_ft))
            .sum()
    }
}
