// Domain layer: comparison model and ports. No I/O here.

pub mod model;
pub mod ports;
