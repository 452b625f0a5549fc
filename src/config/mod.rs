//! Configuration module

mod provider;
mod site;

pub use provider::{ProviderConfig, ProviderKind};
pub use site::SiteConfig;
