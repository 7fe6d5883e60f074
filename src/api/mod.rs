pub mod client;
#[cfg(test)]
pub mod stub;
pub mod traits;

pub use client::ApiClient;
pub use traits::CompatibilityService;
