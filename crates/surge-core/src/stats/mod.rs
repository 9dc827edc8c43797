//! Surge-scenario statistics: return-period discretization, conditional
//! normal parameters, monotone curve sanitizing.

pub mod conditional;
pub mod monotone;
pub mod return_period;

pub use conditional::{conditional_normal_parameters, ConditionalNormal};
pub use monotone::make_non_decreasing;
pub use return_period::return_probability;
