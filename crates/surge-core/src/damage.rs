//! Class-based unit damage costs.
//!
//! Median structural damage values from Aerts (2013), in dollars per square
//! metre, keyed by substring tokens of the building class code.

use crate::building::Building;

/// Square metres per square foot.
pub const SQM_PER_SQFT: f64 = 0.092903;

/// First-match table of (class tokens, $/m²).
///
/// Position is load-bearing: "P7" and "P8" must be tested before the bare
/// "P" entry, which would otherwise swallow them.
const UNIT_COSTS_PER_SQM: &[(&[&str], f64)] = &[
    (&["A", "B"], 1550.0),
    (&["C", "D", "L", "N", "R", "S"], 2300.0),
    (&["E"], 650.0),
    (&["F"], 850.0),
    (&["G"], 850.0),
    (&["H"], 1450.0),
    (&["I"], 1400.0),
    (&["J"], 2750.0),
    (&["K"], 2100.0),
    (&["M"], 700.0),
    (&["O", "Y", "Z"], 1650.0),
    (&["P7"], 700.0),
    (&["P8"], 2650.0),
    (&["P"], 1850.0),
    (&["Q"], 1650.0),
    (&["W"], 3300.0),
];

/// Unit damage cost in $/ft² for a class code; 0.0 when no token matches.
pub fn unit_cost_per_sqft(class: &str) -> f64 {
    for (tokens, cost_per_sqm) in UNIT_COSTS_PER_SQM {
        if tokens.iter().any(|t| class.contains(t)) {
            return cost_per_sqm * SQM_PER_SQFT;
        }
    }
    0.0
}

impl Building {
    /// Monetary loss at water-surface elevation `depth_ft`.
    ///
    /// Unclassified buildings (no class code, or a code matching no token)
    /// contribute zero loss.
    pub fn loss(&self, depth_ft: f64) -> f64 {
        match &self.class {
            Some(class) => unit_cost_per_sqft(class) * self.inundated_area(depth_ft),
            None => 0.0,
        }
    }
}
