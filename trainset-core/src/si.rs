//! Import uom si system and the units used by the train model
//! Zero values should be created using standard uom syntax ($Quantity::ZERO) after adding "use crate::imports::*"
//! Non-zero values should be created using multiplication syntax ($value * $UNIT_CONSTANT)

use uom::si;

pub use si::f64::{Length, Mass};
pub use si::length::meter;
pub use si::mass::{kilogram, megagram};
