//! Quasi-static car models for steady-state lap simulation.
//!
//! A [`CarModel`] combines a [`TyreModel`], an [`AeroModel`] and a
//! [`CarGeometry`] and derives single-track (bicycle) model quantities from
//! speed and path curvature. Force laws are supplied through the traits, so
//! linear, fitted or table-backed tyres and aero maps plug in unchanged.

pub mod components;
pub mod config;
pub mod utils;

pub use components::{
    combined_force, AeroModel, AxleLoads, AxleSlip, CarGeometry, CarModel, CouplingLaw,
    FrictionCircle, FrictionEllipse, GenericAeroModel, GenericTyreModel, LinearTyre,
    LoadTransfer, QuadraticAero, TyreModel,
};
pub use config::{CarConfig, CarSource, CarType, ConfigError, LinearCar};
pub use utils::ModelError;
