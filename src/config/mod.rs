mod car;
mod loader;

pub use car::{CarConfig, CarSource, CarType, LinearCar};
pub use loader::{ConfigError, RawCarConfig};
