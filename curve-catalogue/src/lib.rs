#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]
#![doc = include_str!("../README.md")]

extern crate alloc;

mod binary;
mod catalogue;
mod error;
mod name;
mod prime;

pub use crate::binary::BinaryCurveParams;
pub use crate::catalogue::{resolve, CurveParams};
pub use crate::error::{Error, Result};
pub use crate::name::{CurveName, Family};
pub use crate::prime::PrimeCurveParams;
