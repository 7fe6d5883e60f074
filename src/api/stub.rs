//! In-memory `CompatibilityService` for command tests.

use async_trait::async_trait;
use serde_json::{Map, Value};
use std::sync::Mutex;

use crate::api::traits::CompatibilityService;
use crate::core::error::{DevRadarError, Result};
use crate::core::result::{CompatibilityResult, ScanResult};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Check(String, String),
    Scan(Map<String, Value>),
}

/// Answers every request with the same canned response, or fails with
/// `error` when set, and records what it was asked.
#[derive(Default)]
pub struct StubService {
    pub response: Value,
    pub error: Option<String>,
    calls: Mutex<Vec<Call>>,
}

impl StubService {
    pub fn responding(response: Value) -> Self {
        Self {
            response,
            ..Self::default()
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            error: Some(message.to_string()),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn answer(&self, call: Call) -> Result<Value> {
        self.calls.lock().unwrap().push(call);
        match &self.error {
            Some(message) => Err(DevRadarError::api(message.clone())),
            None => Ok(self.response.clone()),
        }
    }
}

#[async_trait]
impl CompatibilityService for StubService {
    async fn check_compatibility(&self, tech_a: &str, tech_b: &str) -> Result<CompatibilityResult> {
        let value = self.answer(Call::Check(tech_a.to_string(), tech_b.to_string()))?;
        CompatibilityResult::from_value(value)
    }

    async fn scan_package_json(&self, manifest: &Map<String, Value>) -> Result<ScanResult> {
        let value = self.answer(Call::Scan(manifest.clone()))?;
        ScanResult::from_value(value)
    }
}
