pub mod lookup;
pub mod registry;

pub use crate::domain::model::{AddressResult, PostalCode, ServiceDescriptor};
pub use crate::domain::ports::Transport;
pub use crate::utils::error::Result;
