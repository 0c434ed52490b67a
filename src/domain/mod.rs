// Domain layer: report types and the seams (ports) the core is built against.

pub mod model;
pub mod ports;
