//! Systems: the motion rule, its drift pool, terrain drawing, randomness.

pub mod drift;
pub mod landscape;
pub mod motion;
pub mod rng;
