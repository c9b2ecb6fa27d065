use super::Train;
use crate::imports::*;
use crate::rolling_stock::*;

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
/// Scalar attributes of one part, as written in a [TrainConfig] file
pub struct PartConfig {
    /// Type name, e.g. `Diesel` or `Passenger`
    #[serde(rename = "type")]
    pub part_type: String,
    pub empty_weight_tons: f64,
    pub length_meters: f64,
    #[serde(default)]
    pub max_passenger_capacity: u32,
    #[serde(default)]
    pub max_load_capacity_tons: f64,
    pub manufacturer: String,
    pub release_year: i32,
}

impl Init for PartConfig {
    fn init(&mut self) -> Result<(), Error> {
        self.make_common().init()
    }
}

impl PartConfig {
    fn make_common(&self) -> PartCommon {
        PartCommon::new(
            self.empty_weight_tons * uc::T,
            self.length_meters * uc::M,
            self.max_passenger_capacity,
            self.max_load_capacity_tons * uc::T,
            self.manufacturer.clone(),
            self.release_year,
        )
    }
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocomotiveConfig {
    pub tractive_force_tons: f64,
    #[serde(flatten)]
    pub part: PartConfig,
}

impl Init for LocomotiveConfig {
    fn init(&mut self) -> Result<(), Error> {
        if !utils::is_non_negative(self.tractive_force_tons) {
            return Err(Error::InitError(format!(
                "{}\n`tractive_force_tons` must be finite and non-negative",
                format_dbg!(self.tractive_force_tons)
            )));
        }
        self.part.init()
    }
}

impl LocomotiveConfig {
    /// Builds a fresh, disconnected locomotive
    pub fn make_locomotive(&self, serials: &mut dyn SerialSource) -> TrainResult<Locomotive> {
        Locomotive::from_type_name(
            self.part.make_common(),
            &self.part.part_type,
            self.tractive_force_tons * uc::T,
            serials,
        )
    }
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarriageConfig {
    #[serde(flatten)]
    pub part: PartConfig,
}

impl Init for CarriageConfig {
    fn init(&mut self) -> Result<(), Error> {
        self.part.init()
    }
}

impl CarriageConfig {
    /// Builds a fresh, disconnected carriage
    pub fn make_carriage(&self, serials: &mut dyn SerialSource) -> TrainResult<Carriage> {
        Carriage::from_type_name(self.part.make_common(), &self.part.part_type, serials)
    }
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
/// User-defined train composition, loaded from yaml or json.  Parts are
/// created with fresh serial numbers by [TrainConfig::make_train].
pub struct TrainConfig {
    pub number_of_passengers: u32,
    #[serde(default)]
    pub load_capacity_tons: f64,
    pub locomotives: Vec<LocomotiveConfig>,
    #[serde(default)]
    pub carriages: Vec<CarriageConfig>,
}

impl Init for TrainConfig {
    fn init(&mut self) -> Result<(), Error> {
        if self.locomotives.is_empty() {
            return Err(Error::InitError(format!(
                "{}\na train needs at least one locomotive",
                format_dbg!()
            )));
        }
        if !utils::is_non_negative(self.load_capacity_tons) {
            return Err(Error::InitError(format!(
                "{}\n`load_capacity_tons` must be finite and non-negative",
                format_dbg!(self.load_capacity_tons)
            )));
        }
        self.locomotives.init()?;
        self.carriages.init()?;
        // type names are checked here so a bad file fails on load rather than on build
        for loco in &self.locomotives {
            loco.part.part_type.parse::<LocomotiveType>()?;
        }
        for carriage in &self.carriages {
            carriage.part.part_type.parse::<CarriageType>()?;
        }
        Ok(())
    }
}
impl SerdeAPI for TrainConfig {}

impl TrainConfig {
    /// Builds every part, couples them into a new train and forms it
    pub fn make_train(&self, serials: &mut dyn SerialSource) -> TrainResult<Train> {
        let locomotives = self
            .locomotives
            .iter()
            .map(|l| l.make_locomotive(serials))
            .collect::<TrainResult<Vec<_>>>()?;
        let carriages = self
            .carriages
            .iter()
            .map(|c| c.make_carriage(serials))
            .collect::<TrainResult<Vec<_>>>()?;
        let mut train = Train::new(
            self.number_of_passengers,
            self.load_capacity_tons * uc::T,
            locomotives,
            carriages,
        )?;
        train.form_train();
        Ok(train)
    }
}

impl Valid for TrainConfig {
    /// Two locomotives and one carriage of each type, plus a second sleeper
    fn valid() -> Self {
        fn part(
            part_type: &str,
            empty_weight_tons: f64,
            length_meters: f64,
            max_passenger_capacity: u32,
            max_load_capacity_tons: f64,
            manufacturer: &str,
            release_year: i32,
        ) -> PartConfig {
            PartConfig {
                part_type: part_type.into(),
                empty_weight_tons,
                length_meters,
                max_passenger_capacity,
                max_load_capacity_tons,
                manufacturer: manufacturer.into(),
                release_year,
            }
        }
        Self {
            number_of_passengers: 50,
            load_capacity_tons: 20.0,
            locomotives: vec![
                LocomotiveConfig {
                    tractive_force_tons: 100.0,
                    part: part("Electric", 10.0, 15.0, 2, 15.0, "Test Loco El", 1997),
                },
                LocomotiveConfig {
                    tractive_force_tons: 200.0,
                    part: part("Diesel", 20.0, 25.0, 3, 25.0, "Test Loco Di", 1998),
                },
            ],
            carriages: vec![
                CarriageConfig {
                    part: part("Passenger", 10.0, 15.0, 20, 10.0, "Test Carriage P", 1998),
                },
                CarriageConfig {
                    part: part("Sleeper", 20.0, 20.0, 50, 15.0, "Test Carriage Sc", 1998),
                },
                CarriageConfig {
                    part: part("Sleeper", 20.0, 20.0, 50, 15.0, "Test Carriage Sc", 1998),
                },
                CarriageConfig {
                    part: part("DiningCar", 10.0, 15.0, 0, 0.0, "Test Carriage Sp", 1998),
                },
                CarriageConfig {
                    part: part("Freight", 5.0, 15.0, 0, 100.0, "Test Carriage Sp", 2003),
                },
            ],
        }
    }
}
