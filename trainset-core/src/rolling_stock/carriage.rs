use super::*;
use crate::imports::*;
use std::borrow::Borrow;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CarriageType {
    Passenger,
    Sleeper,
    DiningCar,
    Freight,
}

impl CarriageType {
    pub const ALL: [Self; 4] = [Self::Passenger, Self::Sleeper, Self::DiningCar, Self::Freight];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Passenger => "Passenger",
            Self::Sleeper => "Sleeper",
            Self::DiningCar => "DiningCar",
            Self::Freight => "Freight",
        }
    }

    /// Position of the carriage type in a formed train, counted from the head
    pub fn precedence(&self) -> u8 {
        match self {
            Self::Passenger => 1,
            Self::DiningCar => 2,
            Self::Sleeper => 3,
            Self::Freight => 4,
        }
    }
}

impl FromStr for CarriageType {
    type Err = Error;

    /// Parses English names and the legacy German names (`Personen`,
    /// `Schlafen`, `Speise`, `Güter`), ignoring case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "passenger" | "personen" => Ok(Self::Passenger),
            "sleeper" | "schlafen" => Ok(Self::Sleeper),
            "diningcar" | "dining" | "speise" => Ok(Self::DiningCar),
            "freight" | "güter" | "gueter" => Ok(Self::Freight),
            _ => Err(Error::UnknownType {
                kind: "carriage",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
/// Unpowered unit of a train
pub struct Carriage {
    common: PartCommon,
    #[serde(rename = "type")]
    carriage_type: CarriageType,
    serial_number: String,
    /// Whether the carriage is currently held by a train.  Never serialized, so
    /// a loaded carriage always starts disconnected.
    #[serde(skip)]
    connected: bool,
}

impl Init for Carriage {
    fn init(&mut self) -> Result<(), Error> {
        self.common.init()?;
        if self.serial_number.is_empty() {
            return Err(Error::InitError(format!(
                "{}\ncarriage has no serial number",
                format_dbg!()
            )));
        }
        Ok(())
    }
}
impl SerdeAPI for Carriage {}

impl Carriage {
    /// Creates a disconnected carriage with a random serial number
    pub fn new(common: PartCommon, carriage_type: CarriageType) -> Self {
        Self::with_serials(common, carriage_type, &mut UuidSerials)
    }

    /// Creates a disconnected carriage, drawing the unique part of its
    /// serial number from `serials`
    pub fn with_serials(
        common: PartCommon,
        carriage_type: CarriageType,
        serials: &mut dyn SerialSource,
    ) -> Self {
        let serial_number = make_serial_number(
            carriage_type.as_str(),
            &common.manufacturer,
            common.release_year,
            &serials.unique_segment(),
        );
        Self {
            common,
            carriage_type,
            serial_number,
            connected: false,
        }
    }

    /// Like [Self::with_serials], but takes the type by name and fails with
    /// [Error::UnknownType] if it is not a carriage type
    pub fn from_type_name(
        common: PartCommon,
        type_name: &str,
        serials: &mut dyn SerialSource,
    ) -> TrainResult<Self> {
        let carriage_type: CarriageType = type_name.parse()?;
        Ok(Self::with_serials(common, carriage_type, serials))
    }

    pub fn common(&self) -> &PartCommon {
        &self.common
    }

    pub fn carriage_type(&self) -> CarriageType {
        self.carriage_type
    }

    pub fn serial_number(&self) -> &str {
        &self.serial_number
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    pub(crate) fn set_connected(&mut self, connected: bool) {
        self.connected = connected;
    }
}

impl Valid for Carriage {
    fn valid() -> Self {
        Self::new(PartCommon::valid(), CarriageType::Passenger)
    }
}

/// Stable sort by [CarriageType::precedence]: passenger carriages first and
/// freight last, or the other way round if `reverse`.  Carriages of the same
/// type keep their relative order.
pub fn sort_carriages_by_class<C: Borrow<Carriage>>(carriages: &mut [C], reverse: bool) {
    carriages.sort_by(|a, b| {
        let ord = a
            .borrow()
            .carriage_type
            .precedence()
            .cmp(&b.borrow().carriage_type.precedence());
        if reverse {
            ord.reverse()
        } else {
            ord
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn carriage(carriage_type: CarriageType, serials: &mut SequentialSerials) -> Carriage {
        Carriage::with_serials(PartCommon::valid(), carriage_type, serials)
    }

    #[test]
    fn test_new_carriage_is_disconnected() {
        for carriage_type in CarriageType::ALL {
            let carriage = Carriage::new(PartCommon::valid(), carriage_type);
            assert!(!carriage.is_connected());
            assert_eq!(carriage.carriage_type(), carriage_type);
        }
    }

    #[test]
    fn test_unknown_type_fails() {
        let err = Carriage::from_type_name(
            PartCommon::valid(),
            "Observation",
            &mut SequentialSerials::new(),
        )
        .unwrap_err();
        assert!(matches!(err, Error::UnknownType { kind: "carriage", .. }));
    }

    #[test]
    fn test_legacy_freight_serial_is_transliterated() {
        let carriage = Carriage::from_type_name(
            PartCommon::new(5.0 * uc::T, 15.0 * uc::M, 0, 100.0 * uc::T, "Test Carriage Sp", 2003),
            "Güter",
            &mut SequentialSerials::new(),
        )
        .unwrap();
        assert_eq!(carriage.carriage_type(), CarriageType::Freight);
        assert_eq!(
            carriage.serial_number(),
            "FREIGHT_TEST-CARRIAGE-SP-2003_000001"
        );
    }

    #[test]
    fn test_sort_by_class() {
        let mut serials = SequentialSerials::new();
        let c1 = carriage(CarriageType::Passenger, &mut serials);
        let c2 = carriage(CarriageType::Sleeper, &mut serials);
        let c3 = carriage(CarriageType::Sleeper, &mut serials);
        let c4 = carriage(CarriageType::DiningCar, &mut serials);
        let c5 = carriage(CarriageType::Freight, &mut serials);

        let mut sorted = vec![&c1, &c2, &c3, &c4, &c5];
        sort_carriages_by_class(&mut sorted, false);
        assert_eq!(sorted, vec![&c1, &c4, &c2, &c3, &c5]);
    }

    #[test]
    fn test_sort_by_class_reverse() {
        let mut serials = SequentialSerials::new();
        let c1 = carriage(CarriageType::Passenger, &mut serials);
        let c2 = carriage(CarriageType::Sleeper, &mut serials);
        let c3 = carriage(CarriageType::Sleeper, &mut serials);
        let c4 = carriage(CarriageType::DiningCar, &mut serials);
        let c5 = carriage(CarriageType::Freight, &mut serials);

        let mut sorted = vec![&c1, &c2, &c3, &c4, &c5];
        sort_carriages_by_class(&mut sorted, true);
        // reversing the comparator keeps the two sleepers in input order
        assert_eq!(sorted, vec![&c5, &c2, &c3, &c4, &c1]);
    }

    fn carriage_type() -> impl Strategy<Value = CarriageType> {
        prop::sample::select(CarriageType::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn prop_sort_orders_by_precedence_and_is_stable(
            types in prop::collection::vec(carriage_type(), 0..24),
            reverse in any::<bool>(),
        ) {
            let mut serials = SequentialSerials::new();
            let carriages: Vec<Carriage> =
                types.iter().map(|t| carriage(*t, &mut serials)).collect();
            let mut sorted: Vec<&Carriage> = carriages.iter().collect();
            sort_carriages_by_class(&mut sorted, reverse);

            for pair in sorted.windows(2) {
                let (a, b) = (pair[0].carriage_type(), pair[1].carriage_type());
                if reverse {
                    prop_assert!(a.precedence() >= b.precedence());
                } else {
                    prop_assert!(a.precedence() <= b.precedence());
                }
                // sequential serials grow with input position
                if a == b {
                    prop_assert!(pair[0].serial_number() < pair[1].serial_number());
                }
            }
        }
    }
}
