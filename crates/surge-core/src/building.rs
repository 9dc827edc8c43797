use serde::{Deserialize, Serialize};

/// One structure, or a group of identical structures sharing a lot.
/// Read-only for the lifetime of a damage computation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Building {
    /// Total floor area across all floors and all buildings on the lot,
    /// square feet.
    pub area_sqft: f64,
    /// Ground-to-roof height in feet.
    pub height_ft: f64,
    /// Ground-floor elevation above reference sea level, feet.
    pub base_elev_ft: f64,
    /// Class code driving the unit damage cost. `None` for records whose
    /// class is missing or not textual.
    pub class: Option<String>,
    /// Floors per building.
    pub n_floors: u32,
    /// Identical buildings on the lot.
    pub n_buildings: u32,
    pub lat: f64,
    pub lon: f64,
    /// Column index into a flood field.
    pub grid_x: usize,
    /// Row index into a flood field.
    pub grid_y: usize,
}

impl Building {
    /// Floor area inundated at water-surface elevation `depth_ft` (same
    /// vertical datum as `base_elev_ft`).
    ///
    /// The wetted height is discretized to whole floors with a ceiling, so
    /// a partially submerged floor counts as fully damaged. Records with
    /// zero height, zero floors, or zero buildings are unmodelable and
    /// always return 0. The result never exceeds `area_sqft`.
    pub fn inundated_area(&self, depth_ft: f64) -> f64 {
        if self.height_ft <= 0.0 || self.n_buildings == 0 || self.n_floors == 0 {
            return 0.0;
        }
        let head_ft = depth_ft - self.base_elev_ft;
        if head_ft <= 0.0 {
            0.0
        } else if head_ft > self.height_ft {
            self.area_sqft
        } else {
            let floor_height = self.height_ft / self.n_floors as f64;
            let per_floor = self.area_sqft / self.n_buildings as f64 / self.n_floors as f64;
            let floors_wet = (head_ft / floor_height).ceil();
            (floors_wet * per_floor * self.n_buildings as f64).min(self.area_sqft)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Four-floor test building: 10 000 ft² over 20 ft, base at sea level.
    fn four_floor() -> Building {
        Building {
            area_sqft: 10_000.0,
            height_ft: 20.0,
            n_floors: 4,
            n_buildings: 1,
            class: Some("A".into()),
            ..Building::default()
        }
    }

    #[test]
    fn degenerate_records_never_accrue_area() {
        for b in [
            Building { height_ft: 0.0, n_floors: 4, n_buildings: 1, area_sqft: 1000.0, ..Building::default() },
            Building { height_ft: 20.0, n_floors: 0, n_buildings: 1, area_sqft: 1000.0, ..Building::default() },
            Building { height_ft: 20.0, n_floors: 4, n_buildings: 0, area_sqft: 1000.0, ..Building::default() },
        ] {
            for depth in [-100.0, 0.0, 5.0, 1e9] {
                assert_eq!(b.inundated_area(depth), 0.0, "depth {depth}");
            }
        }
    }

    #[test]
    fn water_below_base_elevation_is_harmless() {
        let mut b = four_floor();
        b.base_elev_ft = 6.0;
        assert_eq!(b.inundated_area(6.0), 0.0);
        assert_eq!(b.inundated_area(-3.0), 0.0);
    }

    #[test]
    fn full_submersion_claims_the_whole_area() {
        let b = four_floor();
        assert_eq!(b.inundated_area(20.1), 10_000.0);
        assert_eq!(b.inundated_area(1e6), 10_000.0);
    }

    #[test]
    fn partial_floors_round_up() {
        // floor_height = 5 ft; 15 ft of water wets ceil(15/5) = 3 floors of
        // 2500 ft² each.
        let b = four_floor();
        assert_eq!(b.inundated_area(15.0), 7_500.0);
        // 11 ft wets a third floor only partially, still counted in full.
        assert_eq!(b.inundated_area(11.0), 7_500.0);
    }

    #[test]
    fn area_is_monotone_in_depth_and_bounded() {
        let mut b = four_floor();
        b.n_buildings = 3;
        let mut prev = 0.0;
        let mut depth = -5.0;
        while depth < 30.0 {
            let area = b.inundated_area(depth);
            assert!(area >= prev, "area decreased at depth {depth}");
            assert!(area <= b.area_sqft, "area exceeded total at depth {depth}");
            prev = area;
            depth += 0.25;
        }
    }
}
