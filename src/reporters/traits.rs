use anyhow::Result;

use crate::core::result::{CompatibilityResult, ScanResult};

pub trait Renderer: Send + Sync {
    /// Renderer name for logging
    fn name(&self) -> &str;

    /// Whether output is machine-readable
    fn is_structured(&self) -> bool;

    /// Render a compatibility check between two technologies
    fn check(&self, tech_a: &str, tech_b: &str, result: &CompatibilityResult) -> Result<String>;

    /// Render a manifest scan
    fn scan(&self, result: &ScanResult) -> Result<String>;

    /// Render a single error message
    fn error(&self, message: &str) -> String;
}
