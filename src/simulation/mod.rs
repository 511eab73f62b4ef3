// src/simulation/mod.rs
//! Simulation system
//!
//! Time-stepped scene behaviour that feeds transforms to an external
//! renderer. Currently holds the orbit/spin model for celestial bodies.

pub mod celestial;

pub use celestial::{
    BodyTransforms, CelestialBody, OrbitConfiguration, PlacedBody, SpinConfiguration,
};
