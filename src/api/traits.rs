use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::core::error::Result;
use crate::core::result::{CompatibilityResult, ScanResult};

/// The remote service that does the actual compatibility work.
#[async_trait]
pub trait CompatibilityService: Send + Sync {
    async fn check_compatibility(&self, tech_a: &str, tech_b: &str) -> Result<CompatibilityResult>;

    async fn scan_package_json(&self, manifest: &Map<String, Value>) -> Result<ScanResult>;
}
