#![forbid(unsafe_code)]
#![cfg_attr(feature = "strict", deny(warnings))]

pub mod controller;
pub mod coord;
pub mod event;
pub mod force;
pub mod network;
pub mod piece;
pub mod selection;
pub mod snapshot;
pub mod test_util;
pub mod util;
