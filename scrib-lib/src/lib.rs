#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::perf,
    clippy::style,
    clippy::missing_safety_doc,
    clippy::missing_const_for_fn
)]
#![warn(missing_docs, rust_2018_idioms)]
#![allow(clippy::module_name_repetitions)]
#![doc = include_str!("../README.md")]

pub mod ast;
mod error;
#[cfg(feature = "file")]
pub mod file;
pub mod format;
pub mod import;

pub use error::{Error, ErrorKind};
