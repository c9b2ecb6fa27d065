use crate::imports::*;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
/// Attributes shared by every locomotive and carriage.
///
/// Quantities serialize in SI base units, so part files carry kilograms and
/// meters (`empty_weight: 10000.0` for 10 t).  Hand-written input belongs in
/// [crate::train::TrainConfig], which takes tonnes.
pub struct PartCommon {
    /// Mass of the unit without passengers or freight
    pub empty_weight: si::Mass,
    /// Length between coupling faces
    pub length: si::Length,
    pub max_passenger_capacity: u32,
    /// Maximum freight mass the unit is rated for
    pub max_load_capacity: si::Mass,
    pub manufacturer: String,
    pub release_year: i32,
}

impl Init for PartCommon {
    fn init(&mut self) -> Result<(), Error> {
        for (name, value) in [
            ("empty_weight", self.empty_weight.get::<si::megagram>()),
            ("length", self.length.get::<si::meter>()),
            ("max_load_capacity", self.max_load_capacity.get::<si::megagram>()),
        ] {
            if !utils::is_non_negative(value) {
                return Err(Error::InitError(format!(
                    "{}\n`{name}` must be finite and non-negative, got {value}",
                    format_dbg!()
                )));
            }
        }
        Ok(())
    }
}

impl PartCommon {
    pub fn new(
        empty_weight: si::Mass,
        length: si::Length,
        max_passenger_capacity: u32,
        max_load_capacity: si::Mass,
        manufacturer: impl Into<String>,
        release_year: i32,
    ) -> Self {
        Self {
            empty_weight,
            length,
            max_passenger_capacity,
            max_load_capacity,
            manufacturer: manufacturer.into(),
            release_year,
        }
    }
}

impl Valid for PartCommon {
    fn valid() -> Self {
        Self::new(10.0 * uc::T, 15.0 * uc::M, 20, 10.0 * uc::T, "Test Carriage P", 1998)
    }
}
