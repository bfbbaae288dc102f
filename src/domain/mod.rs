// Domain layer: request/feature models and ports. No framework dependencies.

pub mod model;
pub mod ports;
