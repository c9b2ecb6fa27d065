use super::*;
use crate::imports::*;
use std::borrow::Borrow;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum LocomotiveType {
    Diesel,
    Steam,
    Electric,
}

impl LocomotiveType {
    pub const ALL: [Self; 3] = [Self::Diesel, Self::Steam, Self::Electric];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Diesel => "Diesel",
            Self::Steam => "Steam",
            Self::Electric => "Electric",
        }
    }
}

impl FromStr for LocomotiveType {
    type Err = Error;

    /// Parses English names and the legacy German names (`Dampf`, `Elektrisch`),
    /// ignoring case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "diesel" => Ok(Self::Diesel),
            "steam" | "dampf" => Ok(Self::Steam),
            "electric" | "elektrisch" => Ok(Self::Electric),
            _ => Err(Error::UnknownType {
                kind: "locomotive",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
/// Powered unit of a train
pub struct Locomotive {
    common: PartCommon,
    #[serde(rename = "type")]
    loco_type: LocomotiveType,
    /// Tractive force as a tonne-equivalent, directly comparable with train weight
    tractive_force: si::Mass,
    serial_number: String,
    /// Whether the locomotive is currently held by a train.  Never serialized, so
    /// a loaded locomotive always starts disconnected.
    #[serde(skip)]
    connected: bool,
}

impl Init for Locomotive {
    fn init(&mut self) -> Result<(), Error> {
        self.common.init()?;
        if !utils::is_non_negative(self.tractive_force.get::<si::megagram>()) {
            return Err(Error::InitError(format!(
                "{}\n`tractive_force` must be finite and non-negative",
                format_dbg!(&self.serial_number)
            )));
        }
        if self.serial_number.is_empty() {
            return Err(Error::InitError(format!(
                "{}\nlocomotive has no serial number",
                format_dbg!()
            )));
        }
        Ok(())
    }
}
impl SerdeAPI for Locomotive {}

impl Locomotive {
    /// Creates a disconnected locomotive with a random serial number
    pub fn new(common: PartCommon, loco_type: LocomotiveType, tractive_force: si::Mass) -> Self {
        Self::with_serials(common, loco_type, tractive_force, &mut UuidSerials)
    }

    /// Creates a disconnected locomotive, drawing the unique part of its
    /// serial number from `serials`
    pub fn with_serials(
        common: PartCommon,
        loco_type: LocomotiveType,
        tractive_force: si::Mass,
        serials: &mut dyn SerialSource,
    ) -> Self {
        let serial_number = make_serial_number(
            loco_type.as_str(),
            &common.manufacturer,
            common.release_year,
            &serials.unique_segment(),
        );
        Self {
            common,
            loco_type,
            tractive_force,
            serial_number,
            connected: false,
        }
    }

    /// Like [Self::with_serials], but takes the type by name and fails with
    /// [Error::UnknownType] if it is not a locomotive type
    pub fn from_type_name(
        common: PartCommon,
        type_name: &str,
        tractive_force: si::Mass,
        serials: &mut dyn SerialSource,
    ) -> TrainResult<Self> {
        let loco_type: LocomotiveType = type_name.parse()?;
        Ok(Self::with_serials(common, loco_type, tractive_force, serials))
    }

    pub fn common(&self) -> &PartCommon {
        &self.common
    }

    pub fn loco_type(&self) -> LocomotiveType {
        self.loco_type
    }

    pub fn tractive_force(&self) -> si::Mass {
        self.tractive_force
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

impl Valid for Locomotive {
    fn valid() -> Self {
        Self::new(
            PartCommon::new(10.0 * uc::T, 15.0 * uc::M, 2, 15.0 * uc::T, "Test Loco El", 1997),
            LocomotiveType::Electric,
            100.0 * uc::T,
        )
    }
}

/// Stable sort by tractive force, weakest first, or strongest first if
/// `reverse`.  Locomotives with equal tractive force keep their relative order.
pub fn sort_locomotives_by_tractive_force<L: Borrow<Locomotive>>(
    locomotives: &mut [L],
    reverse: bool,
) {
    locomotives.sort_by(|a, b| {
        let ord = a
            .borrow()
            .tractive_force
            .get::<si::megagram>()
            .total_cmp(&b.borrow().tractive_force.get::<si::megagram>());
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

    fn loco(tractive_force: f64, serials: &mut SequentialSerials) -> Locomotive {
        Locomotive::with_serials(
            PartCommon::new(10.0 * uc::T, 15.0 * uc::M, 2, 15.0 * uc::T, "Test Loco", 1998),
            LocomotiveType::Diesel,
            tractive_force * uc::T,
            serials,
        )
    }

    #[test]
    fn test_new_locomotive_is_disconnected() {
        for loco_type in LocomotiveType::ALL {
            let loco = Locomotive::new(PartCommon::valid(), loco_type, 100.0 * uc::T);
            assert!(!loco.is_connected());
            assert_eq!(loco.loco_type(), loco_type);
        }
    }

    #[test]
    fn test_unknown_type_fails() {
        let err = Locomotive::from_type_name(
            PartCommon::valid(),
            "Nuclear",
            100.0 * uc::T,
            &mut SequentialSerials::new(),
        )
        .unwrap_err();
        assert_eq!(
            err,
            Error::UnknownType {
                kind: "locomotive",
                value: "Nuclear".into()
            }
        );
    }

    #[test]
    fn test_legacy_type_names() {
        assert_eq!("Dampf".parse::<LocomotiveType>(), Ok(LocomotiveType::Steam));
        assert_eq!(
            "elektrisch".parse::<LocomotiveType>(),
            Ok(LocomotiveType::Electric)
        );
        assert_eq!("DIESEL".parse::<LocomotiveType>(), Ok(LocomotiveType::Diesel));
    }

    #[test]
    fn test_serial_number() {
        let loco = Locomotive::with_serials(
            PartCommon::new(10.0 * uc::T, 15.0 * uc::M, 2, 15.0 * uc::T, "Test Loco El", 1997),
            LocomotiveType::Electric,
            100.0 * uc::T,
            &mut SequentialSerials::new(),
        );
        assert_eq!(loco.serial_number(), "ELECTRIC_TEST-LOCO-EL-1997_000001");
    }

    #[test]
    fn test_sort_by_tractive_force() {
        let mut serials = SequentialSerials::new();
        let l1 = loco(100.0, &mut serials);
        let l2 = loco(200.0, &mut serials);
        let l3 = loco(50.0, &mut serials);

        let mut sorted = vec![&l1, &l2, &l3];
        sort_locomotives_by_tractive_force(&mut sorted, false);
        assert_eq!(sorted, vec![&l3, &l1, &l2]);

        sort_locomotives_by_tractive_force(&mut sorted, true);
        assert_eq!(sorted, vec![&l2, &l1, &l3]);
    }

    #[test]
    fn test_sort_is_stable_for_ties() {
        let mut serials = SequentialSerials::new();
        let a = loco(100.0, &mut serials);
        let b = loco(100.0, &mut serials);
        let c = loco(300.0, &mut serials);

        let mut sorted = vec![a.clone(), b.clone(), c.clone()];
        sort_locomotives_by_tractive_force(&mut sorted, true);
        assert_eq!(sorted, vec![c, a, b]);
    }

    #[test]
    fn test_yaml_round_trip_keeps_serial() {
        let loco = Locomotive::valid();
        let yaml = loco.to_yaml().unwrap();
        let loaded = Locomotive::from_yaml(yaml, false).unwrap();
        assert_eq!(loaded, loco);
    }

    #[test]
    fn test_unknown_type_in_yaml_fails() {
        let yaml = Locomotive::valid().to_yaml().unwrap().replace("Electric", "Nuclear");
        let err = Locomotive::from_yaml(yaml, false).unwrap_err();
        assert!(err.to_string().contains("Unknown locomotive type: Nuclear"));
    }
}
