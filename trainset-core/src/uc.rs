//! Unit constants, e.g. `20.0 * uc::T` for twenty tonnes

use crate::si;
use std::marker::PhantomData;

macro_rules! unit_const {
    ($($name:ident: $T:ident = $value:expr),+ $(,)?) => {
        $(
            pub const $name: si::$T = si::$T {
                dimension: PhantomData,
                units: PhantomData,
                value: $value,
            };
        )+
    };
}

unit_const!(
    KG: Mass = 1.0,
    T: Mass = 1.0e3,
    M: Length = 1.0,
);
