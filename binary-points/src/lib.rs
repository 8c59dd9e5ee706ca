#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]
#![doc = include_str!("../README.md")]

mod error;
mod point;

pub use crate::error::{Error, Result};
pub use crate::point::ProjectivePoint;
