use std::io::{self, Write};

use crate::core::classify::FAILURE_EXIT_CODE;
use crate::core::error::DevRadarError;
use crate::reporters::{JsonRenderer, Palette, Renderer, TextRenderer};

/// Everything a command produced: what goes to each stream and the process
/// exit code. Commands never write or exit themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcome {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

impl Outcome {
    pub fn success(output: String, exit_code: i32) -> Self {
        Self {
            stdout: format!("{}\n", output),
            stderr: String::new(),
            exit_code,
        }
    }

    pub fn failure(renderer: &dyn Renderer, err: &DevRadarError) -> Self {
        Self::failure_message(renderer, &err.to_string())
    }

    pub fn failure_message(renderer: &dyn Renderer, message: &str) -> Self {
        let message = if message.is_empty() {
            "Unknown error"
        } else {
            message
        };
        Self {
            stdout: String::new(),
            stderr: format!("{}\n", renderer.error(message)),
            exit_code: FAILURE_EXIT_CODE,
        }
    }

    pub fn write(&self) -> io::Result<()> {
        if !self.stdout.is_empty() {
            let mut stdout = io::stdout().lock();
            stdout.write_all(self.stdout.as_bytes())?;
            stdout.flush()?;
        }
        if !self.stderr.is_empty() {
            let mut stderr = io::stderr().lock();
            stderr.write_all(self.stderr.as_bytes())?;
            stderr.flush()?;
        }
        Ok(())
    }
}

pub fn renderer(json: bool, palette: Palette) -> Box<dyn Renderer> {
    if json {
        Box::new(JsonRenderer)
    } else {
        Box::new(TextRenderer::new(palette))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renderer_selection() {
        assert!(renderer(true, Palette::plain()).is_structured());
        assert!(!renderer(false, Palette::plain()).is_structured());
    }

    #[test]
    fn test_success_appends_newline() {
        let outcome = Outcome::success("done".to_string(), 2);
        assert_eq!(outcome.stdout, "done\n");
        assert!(outcome.stderr.is_empty());
        assert_eq!(outcome.exit_code, 2);
    }

    #[test]
    fn test_failure_is_exit_one_on_stderr() {
        let text = renderer(false, Palette::plain());
        let outcome = Outcome::failure(text.as_ref(), &DevRadarError::api("Scan request failed"));
        assert!(outcome.stdout.is_empty());
        assert_eq!(outcome.stderr, "✗ Error: Scan request failed\n");
        assert_eq!(outcome.exit_code, 1);
    }

    #[test]
    fn test_empty_message_becomes_unknown_error() {
        let json = renderer(true, Palette::plain());
        let outcome = Outcome::failure(json.as_ref(), &DevRadarError::api(""));
        assert_eq!(outcome.stderr, "{\n  \"error\": \"Unknown error\"\n}\n");
    }
}
