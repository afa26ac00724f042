//! One round engine per game variant. Each owns its setup rules, phase
//! machine and win reveal; shared randomness and history live a level up.

pub mod impostor;
pub mod oddone;
pub mod spyfall;
pub mod wavelength;
