#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]
#![doc = include_str!("../README.md")]

mod digest;
mod error;
mod sign;
mod verify;

pub use crate::digest::truncate as truncate_digest;
pub use crate::error::{Error, Result};
pub use crate::sign::sign;
pub use crate::verify::verify;

pub use curve_catalogue::{resolve as resolve_curve, CurveName, CurveParams, Family};
