//! Locomotives, carriages and the attributes they share

mod carriage;
mod locomotive;
mod part_common;
mod serial_number;
mod train_part;

pub use carriage::*;
pub use locomotive::*;
pub use part_common::*;
pub use serial_number::*;
pub use train_part::*;
