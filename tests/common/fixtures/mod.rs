mod car;

// Re-export test fixtures
pub use car::*;
