#![allow(unused_imports)]

pub(crate) use crate::error::{Error, TrainResult};
pub(crate) use crate::si;
pub(crate) use crate::traits::*;
pub(crate) use crate::uc;
pub(crate) use crate::utils;
pub(crate) use crate::utils::almost_eq;
pub(crate) use anyhow::{anyhow, bail, ensure, Context};
pub(crate) use derive_more::{From, IsVariant, TryInto};
pub(crate) use duplicate::duplicate_item;
pub(crate) use serde::{Deserialize, Serialize};
pub(crate) use std::cmp::Ordering;
pub(crate) use std::collections::HashSet;
pub(crate) use std::ffi::OsStr;
pub(crate) use std::fmt;
pub(crate) use std::fs::File;
pub(crate) use std::path::{Path, PathBuf};
pub(crate) use std::str::FromStr;
pub(crate) use uom::ConstZero;
