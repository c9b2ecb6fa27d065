//! Serial number generation for rolling stock
//!
//! A serial number has the form `{TYPE}_{MANUFACTURER}-{YEAR}_{UNIQUE}`,
//! e.g. `ELECTRIC_TEST-LOCO-EL-1997_3F09A2C4B71D`.  The unique segment comes
//! from a [SerialSource], which can be swapped for [SequentialSerials] when
//! reproducible serial numbers are needed.

use uuid::Uuid;

/// Number of hex digits taken from a v4 UUID for the unique segment
pub const SERIAL_SEGMENT_LEN: usize = 12;

/// Supplier of the unique trailing segment of a serial number
pub trait SerialSource {
    /// Returns a segment that has not been returned before by this source
    /// (with overwhelming probability for random sources)
    fn unique_segment(&mut self) -> String;
}

#[derive(Clone, Copy, Debug, Default)]
/// Random segments drawn from the leading digits of a v4 UUID.  The first 12
/// hex digits of a v4 UUID are all random, giving 48 bits per segment.
pub struct UuidSerials;

impl SerialSource for UuidSerials {
    fn unique_segment(&mut self) -> String {
        let mut segment = Uuid::new_v4().simple().to_string();
        segment.truncate(SERIAL_SEGMENT_LEN);
        segment
    }
}

#[derive(Clone, Debug, Default)]
/// Deterministic zero-padded counter, starting at 1
pub struct SequentialSerials {
    issued: u64,
}

impl SequentialSerials {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SerialSource for SequentialSerials {
    fn unique_segment(&mut self) -> String {
        self.issued += 1;
        format!("{:06}", self.issued)
    }
}

/// Lowercases `s` and spells out German umlauts (ä -> ae, ö -> oe, ü -> ue)
pub fn transliterate(s: &str) -> String {
    s.to_lowercase()
        .replace('ä', "ae")
        .replace('ö', "oe")
        .replace('ü', "ue")
}

/// Builds a serial number from its parts.  `type_name` and `manufacturer`
/// are transliterated and uppercased; spaces in `manufacturer` become hyphens.
pub fn make_serial_number(
    type_name: &str,
    manufacturer: &str,
    release_year: i32,
    segment: &str,
) -> String {
    let manufacturer = transliterate(manufacturer).to_uppercase().replace(' ', "-");
    format!(
        "{}_{}-{}_{}",
        transliterate(type_name).to_uppercase(),
        manufacturer,
        release_year,
        segment.to_uppercase()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_serial_number_format() {
        let serial = make_serial_number("Electric", "Test Loco El", 1997, "ab12cd");
        assert_eq!(serial, "ELECTRIC_TEST-LOCO-EL-1997_AB12CD");
    }

    #[test]
    fn test_umlauts_are_transliterated() {
        let serial = make_serial_number("Güter", "Schöne Wägen Ülm", 2003, "000001");
        assert_eq!(serial, "GUETER_SCHOENE-WAEGEN-UELM-2003_000001");
    }

    #[test]
    fn test_sequential_serials() {
        let mut serials = SequentialSerials::new();
        assert_eq!(serials.unique_segment(), "000001");
        assert_eq!(serials.unique_segment(), "000002");
    }

    #[test]
    fn test_uuid_segments_are_unique() {
        let mut serials = UuidSerials;
        let segments: HashSet<String> = (0..10_000).map(|_| serials.unique_segment()).collect();
        assert_eq!(segments.len(), 10_000);
        assert!(segments.iter().all(|s| s.len() == SERIAL_SEGMENT_LEN));
    }
}
