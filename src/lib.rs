pub mod adapters;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::http::HttpTransport;
pub use crate::core::lookup::Lookup;
pub use crate::core::registry::{Registry, DEFAULT_SERVICE};
pub use crate::domain::model::{
    AddressResult, HttpMethod, PostalCode, ServiceDescriptor, TransportOptions,
};
pub use crate::domain::ports::Transport;
pub use crate::utils::error::{CepError, Result};
