#![doc = include_str!("../README.md")]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

mod bimap;
mod conflict;
mod error;
mod iter;
mod ledger;
mod options;
pub mod orientation;
#[cfg(feature = "serde")]
mod serialization;
mod weak;

pub use bimap::BiMap;
pub use error::{Error, Result};
pub use iter::{Iter, Keys, Values};
pub use options::SetOptions;
pub use orientation::{Backward, Forward, Orientation};
pub use same_value::Number;
pub use weak::WeakBiMap;
