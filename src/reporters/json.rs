use anyhow::Result;
use serde_json::{json, Map, Value};

use crate::core::result::{CompatibilityResult, ScanResult};
use crate::reporters::traits::Renderer;

/// Structural passthrough of the service response, pretty-printed with
/// two-space indentation.
pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn name(&self) -> &str {
        "JSON"
    }

    fn is_structured(&self) -> bool {
        true
    }

    fn check(&self, tech_a: &str, tech_b: &str, result: &CompatibilityResult) -> Result<String> {
        let mut output = Map::new();
        output.insert("techA".to_string(), Value::from(tech_a));
        output.insert("techB".to_string(), Value::from(tech_b));
        for (key, value) in result.fields() {
            output.insert(key.clone(), value.clone());
        }
        Ok(serde_json::to_string_pretty(&Value::Object(output))?)
    }

    fn scan(&self, result: &ScanResult) -> Result<String> {
        Ok(serde_json::to_string_pretty(result.document())?)
    }

    fn error(&self, message: &str) -> String {
        format!("{:#}", json!({ "error": message }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check_result(value: Value) -> CompatibilityResult {
        CompatibilityResult::from_value(value).unwrap()
    }

    #[test]
    fn test_check_output_exact() {
        let result = check_result(json!({ "status": "compatible" }));
        let output = JsonRenderer.check("nextjs", "prisma", &result).unwrap();
        assert_eq!(
            output,
            "{\n  \"techA\": \"nextjs\",\n  \"techB\": \"prisma\",\n  \"status\": \"compatible\"\n}"
        );
    }

    #[test]
    fn test_check_output_round_trips_merged_object() {
        let result = check_result(json!({
            "status": "partial",
            "message": "Needs adapter",
            "severity": "warning",
            "extra": { "nested": [1, 2, 3] }
        }));
        let output = JsonRenderer.check("react", "vue", &result).unwrap();
        let parsed: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(
            parsed,
            json!({
                "techA": "react",
                "techB": "vue",
                "status": "partial",
                "message": "Needs adapter",
                "severity": "warning",
                "extra": { "nested": [1, 2, 3] }
            })
        );
    }

    #[test]
    fn test_check_output_keeps_key_order() {
        let result = check_result(json!({ "status": "compatible", "b": 1, "a": 2 }));
        let output = JsonRenderer.check("x", "y", &result).unwrap();
        let parsed: Map<String, Value> = serde_json::from_str(&output).unwrap();
        let keys: Vec<_> = parsed.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["techA", "techB", "status", "b", "a"]);
    }

    #[test]
    fn test_result_field_overrides_tech_in_place() {
        let result = check_result(json!({ "status": "compatible", "techA": "next.js" }));
        let output = JsonRenderer.check("nextjs", "prisma", &result).unwrap();
        let parsed: Map<String, Value> = serde_json::from_str(&output).unwrap();
        let keys: Vec<_> = parsed.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["techA", "techB", "status"]);
        assert_eq!(parsed["techA"], "next.js");
    }

    #[test]
    fn test_scan_output_is_verbatim() {
        let doc = json!({
            "stack": {
                "score": 35,
                "detected": [],
                "issues": [],
                "suggestions": []
            },
            "metadata": { "dependencyCount": 0 }
        });
        let result = ScanResult::from_value(doc.clone()).unwrap();
        let output = JsonRenderer.scan(&result).unwrap();
        assert!(output.contains("  \"stack\": {"));
        assert!(output.contains("\"detected\": []"));
        let parsed: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed, doc);
    }

    #[test]
    fn test_error_output() {
        let output = JsonRenderer.error("Path not found: /nope");
        assert_eq!(output, "{\n  \"error\": \"Path not found: /nope\"\n}");
    }

    #[test]
    fn test_json_renderer_metadata() {
        assert_eq!(JsonRenderer.name(), "JSON");
        assert!(JsonRenderer.is_structured());
    }
}
