//! Core model for composing trains out of locomotives and carriages.
//!
//! A [train::Train] owns its rolling stock exclusively.  Parts are attached
//! and detached in all-or-nothing batches, arranged into a physical order by
//! [train::Train::form_train], and summed into the aggregate quantities
//! (weights, capacities, length, drivability, staffing) that describe the
//! formed train.

#[macro_use]
pub mod utils;

pub mod error;
pub(crate) mod imports;
pub mod prelude;
pub mod rolling_stock;
pub mod si;
pub mod traits;
pub mod train;
pub mod uc;
