use colored::Color;

pub const CHECK: &str = "✓";
pub const CROSS: &str = "✗";
pub const WARNING: &str = "⚠";
pub const INFO: &str = "ℹ";
pub const ARROW: &str = "→";
pub const BULLET: &str = "•";

pub const GRAY: Color = Color::BrightBlack;

/// Exit code for any failure caught by a command.
pub const FAILURE_EXIT_CODE: i32 = 1;

/// Uppercase the first character and leave the rest untouched.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Compatible,
    Partial,
    Incompatible,
    Unknown(String),
}

impl From<String> for Status {
    fn from(value: String) -> Self {
        match value.as_str() {
            "compatible" => Status::Compatible,
            "partial" => Status::Partial,
            "incompatible" => Status::Incompatible,
            _ => Status::Unknown(value),
        }
    }
}

impl From<&str> for Status {
    fn from(value: &str) -> Self {
        Status::from(value.to_string())
    }
}

impl Status {
    pub fn as_str(&self) -> &str {
        match self {
            Status::Compatible => "compatible",
            Status::Partial => "partial",
            Status::Incompatible => "incompatible",
            Status::Unknown(raw) => raw,
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Status::Compatible => Color::Green,
            Status::Partial => Color::Yellow,
            Status::Incompatible => Color::Red,
            Status::Unknown(_) => GRAY,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Status::Compatible => CHECK,
            Status::Partial => WARNING,
            Status::Incompatible => CROSS,
            Status::Unknown(_) => INFO,
        }
    }

    pub fn label(&self) -> String {
        capitalize(self.as_str())
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            Status::Compatible | Status::Partial => 0,
            Status::Incompatible => 1,
            Status::Unknown(_) => 2,
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Error,
    Critical,
    Other(String),
}

impl From<String> for Severity {
    fn from(value: String) -> Self {
        match value.as_str() {
            "info" => Severity::Info,
            "warning" => Severity::Warning,
            "error" => Severity::Error,
            "critical" => Severity::Critical,
            _ => Severity::Other(value),
        }
    }
}

impl From<&str> for Severity {
    fn from(value: &str) -> Self {
        Severity::from(value.to_string())
    }
}

impl Severity {
    pub fn as_str(&self) -> &str {
        match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
            Severity::Critical => "critical",
            Severity::Other(raw) => raw,
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Severity::Info => Color::Green,
            Severity::Warning => Color::Yellow,
            Severity::Error | Severity::Critical => Color::Red,
            Severity::Other(_) => GRAY,
        }
    }

    /// Bracketed, uppercased form used in text reports, e.g. `[WARNING]`.
    pub fn tag(&self) -> String {
        format!("[{}]", self.as_str().to_uppercase())
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

pub fn score_color(score: f64) -> Color {
    match score {
        s if s >= 80.0 => Color::Green,
        s if s >= 60.0 => Color::Yellow,
        _ => Color::Red,
    }
}

pub fn scan_exit_code(score: f64) -> i32 {
    match score {
        s if s >= 60.0 => 0,
        s if s >= 40.0 => 1,
        _ => 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_classification_table() {
        let cases = [
            ("compatible", Color::Green, CHECK, "Compatible", 0),
            ("partial", Color::Yellow, WARNING, "Partial", 0),
            ("incompatible", Color::Red, CROSS, "Incompatible", 1),
            ("deprecated", GRAY, INFO, "Deprecated", 2),
        ];
        for (raw, color, symbol, label, code) in cases {
            let status = Status::from(raw);
            assert_eq!(status.color(), color, "{}", raw);
            assert_eq!(status.symbol(), symbol, "{}", raw);
            assert_eq!(status.label(), label, "{}", raw);
            assert_eq!(status.exit_code(), code, "{}", raw);
        }
    }

    #[test]
    fn test_unknown_status_keeps_raw_text() {
        let status = Status::from("COMPATIBLE");
        assert_eq!(status, Status::Unknown("COMPATIBLE".to_string()));
        assert_eq!(status.exit_code(), 2);
        assert_eq!(Status::from("").label(), "");
    }

    #[test]
    fn test_severity_colors() {
        assert_eq!(Severity::from("info").color(), Color::Green);
        assert_eq!(Severity::from("warning").color(), Color::Yellow);
        assert_eq!(Severity::from("error").color(), Color::Red);
        assert_eq!(Severity::from("critical").color(), Color::Red);
        assert_eq!(Severity::from("notice").color(), GRAY);
    }

    #[test]
    fn test_severity_tag() {
        assert_eq!(Severity::Warning.tag(), "[WARNING]");
        assert_eq!(Severity::from("notice").tag(), "[NOTICE]");
    }

    #[test]
    fn test_score_color_tiers() {
        assert_eq!(score_color(100.0), Color::Green);
        assert_eq!(score_color(80.0), Color::Green);
        assert_eq!(score_color(79.9), Color::Yellow);
        assert_eq!(score_color(60.0), Color::Yellow);
        assert_eq!(score_color(59.5), Color::Red);
        assert_eq!(score_color(40.0), Color::Red);
        assert_eq!(score_color(0.0), Color::Red);
    }

    #[test]
    fn test_scan_exit_codes() {
        assert_eq!(scan_exit_code(100.0), 0);
        assert_eq!(scan_exit_code(60.0), 0);
        assert_eq!(scan_exit_code(59.9), 1);
        assert_eq!(scan_exit_code(40.0), 1);
        assert_eq!(scan_exit_code(39.5), 2);
        assert_eq!(scan_exit_code(0.0), 2);
    }

    #[test]
    fn test_capitalize_only_touches_first_char() {
        assert_eq!(capitalize("nextjs"), "Nextjs");
        assert_eq!(capitalize("tRPC"), "TRPC");
        assert_eq!(capitalize("react native"), "React native");
        assert_eq!(capitalize(""), "");
    }
}
