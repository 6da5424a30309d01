// Domain layer: sheet layout, records and ports (interfaces).

pub mod layout;
pub mod model;
pub mod ports;
