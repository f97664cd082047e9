// Domain layer: models and ports (interfaces). No dependency on the HTTP client;
// adapters plug in through the Transport port.

pub mod model;
pub mod ports;
