#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]
#![doc = include_str!("../README.md")]

extern crate alloc;

pub mod degree;

mod element;
mod error;
mod poly;
mod reduce;
mod sqr_table;

pub use crate::element::BinaryFieldElement;
pub use crate::error::{Error, Result};
