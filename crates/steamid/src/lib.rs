#![doc = include_str!("../README.md")]

mod error;
mod lookup;
mod resolver;
#[cfg(feature = "serde")]
mod serde;
mod steam_id;

pub use crate::error::*;
pub use crate::lookup::*;
pub use crate::resolver::*;
#[cfg(feature = "serde")]
pub use crate::serde::*;
pub use crate::steam_id::*;
