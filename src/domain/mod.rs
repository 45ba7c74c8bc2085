// Domain layer: table model, typed records and ports.

pub mod model;
pub mod ports;
