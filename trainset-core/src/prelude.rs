pub use crate::error::{Error, TrainResult};
pub use crate::rolling_stock::{
    make_serial_number, sort_carriages_by_class, sort_locomotives_by_tractive_force, Carriage,
    CarriageType, Locomotive, LocomotiveType, PartCommon, SequentialSerials, SerialSource,
    TrainPart, UuidSerials,
};
pub use crate::traits::{Init, SerdeAPI, Valid};
pub use crate::train::{
    conductors_for, CarriageConfig, LocomotiveConfig, PartConfig, Train, TrainConfig,
    TrainSummary, AVERAGE_PASSENGER_MASS, PASSENGERS_PER_CONDUCTOR,
};
pub use crate::{si, uc};
