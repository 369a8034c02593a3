pub mod aerodynamics;
pub mod car;
pub mod coupling;
pub mod geometry;
pub mod tyre;

pub use aerodynamics::{AeroModel, GenericAeroModel, QuadraticAero};
pub use car::{AxleSlip, CarModel};
pub use coupling::{CouplingLaw, FrictionCircle, FrictionEllipse};
pub use geometry::{AxleLoads, CarGeometry, LoadTransfer};
pub use tyre::{combined_force, GenericTyreModel, LinearTyre, TyreModel};
