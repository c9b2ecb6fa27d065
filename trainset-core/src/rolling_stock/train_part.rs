use super::*;
use crate::imports::*;

#[duplicate_item(PartType; [LocomotiveType]; [CarriageType])]
impl TryFrom<String> for PartType {
    type Error = Error;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[duplicate_item(PartType; [LocomotiveType]; [CarriageType])]
impl From<PartType> for String {
    fn from(value: PartType) -> Self {
        value.as_str().to_string()
    }
}

#[duplicate_item(PartType; [LocomotiveType]; [CarriageType])]
impl fmt::Display for PartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, From, IsVariant, TryInto)]
/// Any unit that can be coupled into a train
pub enum TrainPart {
    Locomotive(Locomotive),
    Carriage(Carriage),
}

impl Init for TrainPart {
    fn init(&mut self) -> Result<(), Error> {
        match self {
            Self::Locomotive(loco) => loco.init(),
            Self::Carriage(carriage) => carriage.init(),
        }
    }
}
impl SerdeAPI for TrainPart {}

impl TrainPart {
    pub fn common(&self) -> &PartCommon {
        match self {
            Self::Locomotive(loco) => loco.common(),
            Self::Carriage(carriage) => carriage.common(),
        }
    }

    pub fn serial_number(&self) -> &str {
        match self {
            Self::Locomotive(loco) => loco.serial_number(),
            Self::Carriage(carriage) => carriage.serial_number(),
        }
    }

    pub fn is_connected(&self) -> bool {
        match self {
            Self::Locomotive(loco) => loco.is_connected(),
            Self::Carriage(carriage) => carriage.is_connected(),
        }
    }

    /// Tractive force of a locomotive; carriages contribute none
    pub fn tractive_force(&self) -> si::Mass {
        match self {
            Self::Locomotive(loco) => loco.tractive_force(),
            Self::Carriage(_) => si::Mass::ZERO,
        }
    }

    /// `"locomotive"` or `"carriage"`
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Locomotive(_) => "locomotive",
            Self::Carriage(_) => "carriage",
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Locomotive(loco) => loco.loco_type().as_str(),
            Self::Carriage(carriage) => carriage.carriage_type().as_str(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_carriage_has_no_tractive_force() {
        let part = TrainPart::from(Carriage::valid());
        assert!(part.is_carriage());
        assert_eq!(part.tractive_force(), si::Mass::ZERO);
        assert_eq!(part.kind(), "carriage");
    }

    #[test]
    fn test_locomotive_accessors() {
        let loco = Locomotive::valid();
        let serial = loco.serial_number().to_string();
        let part = TrainPart::from(loco);
        assert!(part.is_locomotive());
        assert_eq!(part.serial_number(), serial);
        assert!(almost_eq(
            part.tractive_force().get::<si::megagram>(),
            100.0,
            None
        ));
        assert_eq!(part.type_name(), "Electric");
        let loco: Locomotive = part.try_into().unwrap();
        assert_eq!(loco.serial_number(), serial);
    }

    #[test]
    fn test_bincode_round_trip() {
        let loco = Locomotive::valid();
        assert_eq!(Locomotive::from_bincode(&loco.to_bincode().unwrap()).unwrap(), loco);

        let carriage = Carriage::valid();
        assert_eq!(
            Carriage::from_bincode(&carriage.to_bincode().unwrap()).unwrap(),
            carriage
        );

        let part = TrainPart::from(Locomotive::valid());
        assert_eq!(TrainPart::from_bincode(&part.to_bincode().unwrap()).unwrap(), part);
    }

    #[test]
    fn test_part_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let part = TrainPart::from(Carriage::valid());
        for file_name in ["part.yaml", "part.json", "part.bin"] {
            let path = dir.path().join(file_name);
            part.to_file(&path).unwrap();
            assert_eq!(TrainPart::from_file(&path, false).unwrap(), part);
        }
    }

    #[test]
    fn test_type_display() {
        assert_eq!(CarriageType::DiningCar.to_string(), "DiningCar");
        assert_eq!(LocomotiveType::Steam.to_string(), "Steam");
    }
}
