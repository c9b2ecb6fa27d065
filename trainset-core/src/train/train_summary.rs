use super::Train;
use crate::imports::*;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
/// Aggregates of a formed train in customary units, for reporting
pub struct TrainSummary {
    /// Serial numbers from head to tail
    pub formed_order: Vec<String>,
    pub number_of_passengers: u32,
    pub empty_weight_tons: f64,
    pub max_passenger_capacity: u32,
    pub max_load_capacity_tons: f64,
    pub full_length_meters: f64,
    pub tractive_force_tons: f64,
    pub max_payload_tons: f64,
    pub max_total_weight_tons: f64,
    pub is_drivable: bool,
    pub number_of_conductors: u32,
}

impl Init for TrainSummary {}
impl SerdeAPI for TrainSummary {}

impl From<&Train> for TrainSummary {
    fn from(train: &Train) -> Self {
        Self {
            formed_order: train
                .parts()
                .iter()
                .map(|p| p.serial_number().to_string())
                .collect(),
            number_of_passengers: train.number_of_passengers(),
            empty_weight_tons: train.empty_weight_total().get::<si::megagram>(),
            max_passenger_capacity: train.max_passenger_capacity_total(),
            max_load_capacity_tons: train.max_load_capacity_total().get::<si::megagram>(),
            full_length_meters: train.full_length_total().get::<si::meter>(),
            tractive_force_tons: train.tractive_force_total().get::<si::megagram>(),
            max_payload_tons: train.max_payload().get::<si::megagram>(),
            max_total_weight_tons: train.max_total_weight().get::<si::megagram>(),
            is_drivable: train.is_drivable(),
            number_of_conductors: train.number_of_conductors(),
        }
    }
}
