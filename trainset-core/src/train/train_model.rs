use super::TrainSummary;
use crate::imports::*;
use crate::rolling_stock::*;

/// Mass assumed per passenger when computing payload
pub const AVERAGE_PASSENGER_MASS: si::Mass = si::Mass {
    dimension: std::marker::PhantomData,
    units: std::marker::PhantomData,
    value: 75.0,
};

/// Passengers one conductor can look after
pub const PASSENGERS_PER_CONDUCTOR: u32 = 50;

#[derive(Debug, PartialEq)]
/// A train composed of locomotives and carriages.
///
/// The train holds its parts exclusively and marks them connected while it
/// holds them.  [Train::parts] is the formed sequence produced by
/// [Train::form_train]; it is not refreshed by the attach and detach
/// operations, so callers must form the train again after changing its
/// composition before reading any aggregate.
pub struct Train {
    number_of_passengers: u32,
    /// Declared load, kept for reference; payload is computed from the
    /// rated capacity of the parts
    load_capacity: si::Mass,
    locomotives: Vec<Locomotive>,
    carriages: Vec<Carriage>,
    parts: Vec<TrainPart>,
    formed: bool,
}

impl Drop for Train {
    fn drop(&mut self) {
        self.release_all();
    }
}

impl Train {
    /// Builds a train from at least one locomotive and any number of
    /// carriages.  Fails without connecting anything if `locomotives` is
    /// empty or if any part is already connected.
    pub fn new(
        number_of_passengers: u32,
        load_capacity: si::Mass,
        mut locomotives: Vec<Locomotive>,
        mut carriages: Vec<Carriage>,
    ) -> TrainResult<Self> {
        if locomotives.is_empty() {
            return Err(Error::NoLocomotivesLeft);
        }
        let conflicts = find_conflicts(
            &HashSet::new(),
            locomotives
                .iter()
                .map(|l| (l.serial_number(), l.is_connected()))
                .chain(
                    carriages
                        .iter()
                        .map(|c| (c.serial_number(), c.is_connected())),
                ),
        );
        if !conflicts.is_empty() {
            #[cfg(feature = "logging")]
            log::warn!("rejected new train, parts already connected: {conflicts:?}");
            return Err(Error::PartAlreadyConnected(conflicts));
        }

        locomotives.iter_mut().for_each(|l| l.set_connected(true));
        carriages.iter_mut().for_each(|c| c.set_connected(true));
        #[cfg(feature = "logging")]
        log::debug!(
            "new train with {} locomotive(s) and {} carriage(s)",
            locomotives.len(),
            carriages.len()
        );
        Ok(Self {
            number_of_passengers,
            load_capacity,
            locomotives,
            carriages,
            parts: Vec::new(),
            formed: false,
        })
    }

    pub fn number_of_passengers(&self) -> u32 {
        self.number_of_passengers
    }

    pub fn load_capacity(&self) -> si::Mass {
        self.load_capacity
    }

    pub fn locomotives(&self) -> &[Locomotive] {
        &self.locomotives
    }

    pub fn carriages(&self) -> &[Carriage] {
        &self.carriages
    }

    /// Formed sequence from the last call to [Self::form_train]
    pub fn parts(&self) -> &[TrainPart] {
        &self.parts
    }

    /// False until [Self::form_train] is called and again after any change
    /// of composition
    pub fn is_formed(&self) -> bool {
        self.formed
    }

    fn held_serials(&self) -> HashSet<&str> {
        self.locomotives
            .iter()
            .map(|l| l.serial_number())
            .chain(self.carriages.iter().map(|c| c.serial_number()))
            .collect()
    }

    /// Attaches all of `items` or none of them.  On success `items` is left
    /// empty; if any item is already connected the batch is rejected with
    /// [Error::PartAlreadyConnected] and `items` is untouched.
    pub fn add_locomotives(&mut self, items: &mut Vec<Locomotive>) -> TrainResult<()> {
        let conflicts = find_conflicts(
            &self.held_serials(),
            items.iter().map(|l| (l.serial_number(), l.is_connected())),
        );
        if !conflicts.is_empty() {
            #[cfg(feature = "logging")]
            log::warn!("rejected locomotives, already connected: {conflicts:?}");
            return Err(Error::PartAlreadyConnected(conflicts));
        }
        items.iter_mut().for_each(|l| l.set_connected(true));
        #[cfg(feature = "logging")]
        log::debug!("attached {} locomotive(s)", items.len());
        self.locomotives.append(items);
        self.formed = false;
        Ok(())
    }

    /// Same as [Self::add_locomotives] for carriages
    pub fn add_carriages(&mut self, items: &mut Vec<Carriage>) -> TrainResult<()> {
        let conflicts = find_conflicts(
            &self.held_serials(),
            items.iter().map(|c| (c.serial_number(), c.is_connected())),
        );
        if !conflicts.is_empty() {
            #[cfg(feature = "logging")]
            log::warn!("rejected carriages, already connected: {conflicts:?}");
            return Err(Error::PartAlreadyConnected(conflicts));
        }
        items.iter_mut().for_each(|c| c.set_connected(true));
        #[cfg(feature = "logging")]
        log::debug!("attached {} carriage(s)", items.len());
        self.carriages.append(items);
        self.formed = false;
        Ok(())
    }

    /// Detaches the locomotives with the given serial numbers and hands them
    /// back disconnected.  Serial numbers not on this train are ignored.
    ///
    /// Fails with [Error::NoLocomotivesLeft], removing nothing, if the train
    /// has only one locomotive or if the request would detach all of them.
    pub fn remove_locomotives<S: AsRef<str>>(
        &mut self,
        serial_numbers: &[S],
    ) -> TrainResult<Vec<Locomotive>> {
        if self.locomotives.len() <= 1 {
            return Err(Error::NoLocomotivesLeft);
        }
        let requested: HashSet<&str> = serial_numbers.iter().map(|s| s.as_ref()).collect();
        let n_matched = self
            .locomotives
            .iter()
            .filter(|l| requested.contains(l.serial_number()))
            .count();
        if n_matched >= self.locomotives.len() {
            return Err(Error::NoLocomotivesLeft);
        }
        let removed = detach(&mut self.locomotives, serial_numbers, |l| l.serial_number());
        let removed: Vec<Locomotive> = removed
            .into_iter()
            .map(|mut l| {
                l.set_connected(false);
                l
            })
            .collect();
        #[cfg(feature = "logging")]
        log::debug!("detached {} locomotive(s)", removed.len());
        if !removed.is_empty() {
            self.formed = false;
        }
        Ok(removed)
    }

    /// Detaches the carriages with the given serial numbers and hands them
    /// back disconnected.  Serial numbers not on this train are ignored.
    pub fn remove_carriages<S: AsRef<str>>(&mut self, serial_numbers: &[S]) -> Vec<Carriage> {
        let removed: Vec<Carriage> = detach(&mut self.carriages, serial_numbers, |c| {
            c.serial_number()
        })
        .into_iter()
        .map(|mut c| {
            c.set_connected(false);
            c
        })
        .collect();
        #[cfg(feature = "logging")]
        log::debug!("detached {} carriage(s)", removed.len());
        if !removed.is_empty() {
            self.formed = false;
        }
        removed
    }

    /// Arranges the train: the stronger half of the locomotives (rounded up)
    /// leads, strongest first, followed by the carriages in class order and
    /// the remaining locomotives pushing from the rear.
    pub fn form_train(&mut self) {
        let mut locomotives: Vec<&Locomotive> = self.locomotives.iter().collect();
        sort_locomotives_by_tractive_force(&mut locomotives, true);
        let mut carriages: Vec<&Carriage> = self.carriages.iter().collect();
        sort_carriages_by_class(&mut carriages, false);

        let pivot = (locomotives.len() + 1) / 2;
        let (head, tail) = locomotives.split_at(pivot);
        let parts: Vec<TrainPart> = head
            .iter()
            .map(|l| TrainPart::from((*l).clone()))
            .chain(carriages.iter().map(|c| TrainPart::from((*c).clone())))
            .chain(tail.iter().map(|l| TrainPart::from((*l).clone())))
            .collect();
        #[cfg(feature = "logging")]
        log::debug!(
            "formed train: {} leading locomotive(s), {} carriage(s), {} trailing locomotive(s)",
            head.len(),
            carriages.len(),
            tail.len()
        );
        self.parts = parts;
        self.formed = true;
    }

    /// Sum of the empty weight of every formed part
    pub fn empty_weight_total(&self) -> si::Mass {
        self.parts
            .iter()
            .fold(si::Mass::ZERO, |acc, p| acc + p.common().empty_weight)
    }

    /// Sum of passenger seats, saturating at `u32::MAX`
    pub fn max_passenger_capacity_total(&self) -> u32 {
        self.parts.iter().fold(0u32, |acc, p| {
            acc.saturating_add(p.common().max_passenger_capacity)
        })
    }

    pub fn max_load_capacity_total(&self) -> si::Mass {
        self.parts
            .iter()
            .fold(si::Mass::ZERO, |acc, p| acc + p.common().max_load_capacity)
    }

    pub fn full_length_total(&self) -> si::Length {
        self.parts
            .iter()
            .fold(si::Length::ZERO, |acc, p| acc + p.common().length)
    }

    /// Sum of locomotive tractive force, leading and trailing alike
    pub fn tractive_force_total(&self) -> si::Mass {
        self.parts
            .iter()
            .fold(si::Mass::ZERO, |acc, p| acc + p.tractive_force())
    }

    /// Passenger mass plus rated freight capacity
    pub fn max_payload(&self) -> si::Mass {
        AVERAGE_PASSENGER_MASS * self.number_of_passengers as f64
            + self.max_load_capacity_total()
    }

    pub fn max_total_weight(&self) -> si::Mass {
        self.empty_weight_total() + self.max_payload()
    }

    /// Whether the locomotives can move the fully loaded train
    pub fn is_drivable(&self) -> bool {
        self.tractive_force_total() >= self.max_total_weight()
    }

    /// One conductor per started [PASSENGERS_PER_CONDUCTOR] passengers above
    /// the first group, none for an empty train
    pub fn number_of_conductors(&self) -> u32 {
        conductors_for(self.number_of_passengers)
    }

    /// Snapshot of every aggregate of the formed train
    pub fn summary(&self) -> TrainSummary {
        #[cfg(feature = "logging")]
        if !self.formed {
            log::warn!("summarizing a train whose composition changed since it was formed");
        }
        TrainSummary::from(self)
    }

    /// Releases every part, disconnected, back to the caller
    pub fn disband(mut self) -> (Vec<Locomotive>, Vec<Carriage>) {
        self.release_all();
        self.parts.clear();
        (
            std::mem::take(&mut self.locomotives),
            std::mem::take(&mut self.carriages),
        )
    }

    fn release_all(&mut self) {
        self.locomotives
            .iter_mut()
            .for_each(|l| l.set_connected(false));
        self.carriages
            .iter_mut()
            .for_each(|c| c.set_connected(false));
    }
}

/// Conductors needed for `number_of_passengers`
pub fn conductors_for(number_of_passengers: u32) -> u32 {
    match number_of_passengers {
        0 => 0,
        n if n <= PASSENGERS_PER_CONDUCTOR => 1,
        n => n / PASSENGERS_PER_CONDUCTOR + 1,
    }
}

/// Serial numbers in `batch` that cannot be attached: parts flagged as
/// connected, parts already `held`, and repeats within the batch itself
fn find_conflicts<'a>(
    held: &HashSet<&str>,
    batch: impl IntoIterator<Item = (&'a str, bool)>,
) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut conflicts = Vec::new();
    for (serial_number, connected) in batch {
        if connected || held.contains(serial_number) || !seen.insert(serial_number) {
            conflicts.push(serial_number.to_string());
        }
    }
    conflicts
}

/// Removes the first element matching each of `serial_numbers` from `items`
fn detach<T, S: AsRef<str>>(
    items: &mut Vec<T>,
    serial_numbers: &[S],
    serial_of: impl Fn(&T) -> &str,
) -> Vec<T> {
    let mut removed = Vec::new();
    for serial_number in serial_numbers {
        if let Some(idx) = items
            .iter()
            .position(|item| serial_of(item) == serial_number.as_ref())
        {
            removed.push(items.remove(idx));
        }
    }
    removed
}
