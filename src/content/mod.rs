//! Built-in secret-content pools.
//!
//! Plain constants compiled into the crate: non-empty, unique by their
//! natural key (word text, location name, spectrum pair, question id).
//! Bias against recently played entries lives in [`crate::history`], not
//! here.

mod locations;
mod questions;
mod spectra;
mod words;

pub use locations::LOCATIONS;
pub use questions::QUESTION_PAIRS;
pub use spectra::SPECTRA;
pub use words::WORDS;

/// A Spyfall-style location and the roles stationed there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub name: &'static str,
    pub roles: &'static [&'static str],
}

/// Two opposing labels spanning a Wavelength axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spectrum {
    pub left: &'static str,
    pub right: &'static str,
}

/// A main question and its near-miss decoy for the odd-one-out variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionPair {
    pub id: &'static str,
    pub main: &'static str,
    pub decoy: &'static str,
}
