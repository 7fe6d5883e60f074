use anyhow::Result;
use colored::Color;

use crate::core::classify::{self, capitalize, ARROW, BULLET, CHECK, CROSS};
use crate::core::result::{CompatibilityResult, ScanResult, StackIssue};
use crate::reporters::style::Palette;
use crate::reporters::traits::Renderer;

const RULE_WIDTH: usize = 40;

/// Human-readable terminal report.
pub struct TextRenderer {
    palette: Palette,
}

impl TextRenderer {
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }

    fn header(&self, lines: &mut Vec<String>, title: &str) {
        lines.push(String::new());
        lines.push(self.palette.bold(title));
        lines.push(self.palette.dim(&"─".repeat(RULE_WIDTH)));
        lines.push(String::new());
    }

    pub fn check_lines(&self, tech_a: &str, tech_b: &str, result: &CompatibilityResult) -> Vec<String> {
        let p = &self.palette;
        let mut lines = Vec::new();

        self.header(
            &mut lines,
            &format!("{} + {}", capitalize(tech_a), capitalize(tech_b)),
        );

        let status = &result.status;
        lines.push(p.strong(
            &format!("{} {}", status.symbol(), status.label()),
            status.color(),
        ));

        if let Some(message) = &result.message {
            lines.push(String::new());
            lines.push(p.dim(message));
        }

        if let Some(severity) = &result.severity {
            lines.push(String::new());
            lines.push(p.paint(&severity.tag(), severity.color()));
        }

        if let Some(workaround) = &result.workaround {
            lines.push(String::new());
            lines.push(p.paint(&format!("{} Workaround:", BULLET), Color::Cyan));
            lines.push(format!("  {}", workaround));
        }

        if let Some(url) = &result.docs_url {
            lines.push(String::new());
            lines.push(p.dim(&format!("{} Learn more: {}", ARROW, url)));
        }

        lines.push(String::new());
        lines
    }

    pub fn scan_lines(&self, result: &ScanResult) -> Vec<String> {
        let p = &self.palette;
        let stack = &result.stack;
        let mut lines = Vec::new();

        self.header(&mut lines, "Stack Compatibility Scan");

        lines.push(format!(
            "{}{}",
            p.bold("Score: "),
            p.strong(
                &format!("{}/100", stack.score),
                classify::score_color(stack.score)
            )
        ));

        if !stack.detected.is_empty() {
            lines.push(String::new());
            lines.push(p.bold("Detected Technologies:"));
            for tech in &stack.detected {
                lines.push(format!("  {} {}", p.paint(CHECK, Color::Green), capitalize(tech)));
            }
        }

        if !stack.issues.is_empty() {
            lines.push(String::new());
            lines.push(p.bold(&format!("Issues ({}):", stack.issues.len())));
            for (i, issue) in stack.issues.iter().enumerate() {
                lines.push(format!("  {}. {}", i + 1, pair_title(issue)));
                lines.push(format!(
                    "     {} {}",
                    p.paint(&issue.severity.tag(), issue.severity.color()),
                    issue.message
                ));
            }
        } else if stack.score >= 80.0 {
            lines.push(String::new());
            lines.push(p.paint(
                &format!("{} No compatibility issues found!", CHECK),
                Color::Green,
            ));
        }

        if !stack.suggestions.is_empty() {
            lines.push(String::new());
            lines.push(p.bold("Suggestions:"));
            for suggestion in &stack.suggestions {
                lines.push(format!(
                    "  {} {}",
                    p.paint(BULLET, Color::Cyan),
                    suggestion.message
                ));
                if let Some(url) = &suggestion.url {
                    lines.push(format!("    {}", p.dim(url)));
                }
            }
        }

        lines.push(String::new());
        lines.push(p.dim(&format!(
            "Scanned: {} dependencies",
            result.metadata.dependency_count
        )));
        lines.push(String::new());
        lines
    }
}

fn pair_title(issue: &StackIssue) -> String {
    match issue.technologies() {
        (a, Some(b)) => format!("{} + {}", capitalize(a), capitalize(b)),
        (a, None) => capitalize(a),
    }
}

impl Renderer for TextRenderer {
    fn name(&self) -> &str {
        "text"
    }

    fn is_structured(&self) -> bool {
        false
    }

    fn check(&self, tech_a: &str, tech_b: &str, result: &CompatibilityResult) -> Result<String> {
        Ok(self.check_lines(tech_a, tech_b, result).join("\n"))
    }

    fn scan(&self, result: &ScanResult) -> Result<String> {
        Ok(self.scan_lines(result).join("\n"))
    }

    fn error(&self, message: &str) -> String {
        self.palette
            .paint(&format!("{} Error: {}", CROSS, message), Color::Red)
    }
}
