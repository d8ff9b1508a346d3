//! Output management for CLI commands.
//!
//! Handles formatting and display for different output formats,
//! providing a unified interface for text and JSON output.

use crate::error::CorpusError;
use crate::io::exit_code::ExitCode;
use crate::io::format::{JsonResponse, OutputFormat, ResponseMeta};
use serde::Serialize;
use std::fmt::Display;
use std::io::{self, Write};

/// Manages output formatting and display.
pub struct OutputManager {
    format: OutputFormat,
    stdout: Box<dyn Write>,
    stderr: Box<dyn Write>,
    meta_documents: Option<usize>,
}

impl OutputManager {
    /// Create a new output manager with the specified format.
    pub fn new(format: OutputFormat) -> Self {
        Self::new_with_writers(format, Box::new(io::stdout()), Box::new(io::stderr()))
    }

    /// Create an output manager with custom writers.
    pub fn new_with_writers(
        format: OutputFormat,
        stdout: Box<dyn Write>,
        stderr: Box<dyn Write>,
    ) -> Self {
        Self {
            format,
            stdout,
            stderr,
            meta_documents: None,
        }
    }

    /// Attach corpus size metadata to subsequent JSON success responses.
    pub fn set_document_count(&mut self, documents: usize) {
        self.meta_documents = Some(documents);
    }

    fn write_json<T: Serialize>(&mut self, response: JsonResponse<T>) -> io::Result<()> {
        let response = match self.meta_documents {
            Some(documents) => response.with_meta(ResponseMeta::now(documents)),
            None => response,
        };
        writeln!(self.stdout, "{}", serde_json::to_string_pretty(&response)?)
    }

    /// Output a pre-rendered text block, or `data` as JSON.
    pub fn rendered<T>(&mut self, data: T, text: &str) -> io::Result<ExitCode>
    where
        T: Serialize,
    {
        match self.format {
            OutputFormat::Json => self.write_json(JsonResponse::success(&data))?,
            OutputFormat::Text => writeln!(self.stdout, "{text}")?,
        }
        Ok(ExitCode::Success)
    }

    /// Output a not found result.
    pub fn not_found(&mut self, entity: &str, name: &str) -> io::Result<ExitCode> {
        match self.format {
            OutputFormat::Json => {
                let response = JsonResponse::not_found(entity, name);
                writeln!(self.stdout, "{}", serde_json::to_string_pretty(&response)?)?;
            }
            OutputFormat::Text => {
                writeln!(self.stderr, "{entity} '{name}' not found")?;
            }
        }
        Ok(ExitCode::NotFound)
    }

    /// Output a collection with proper formatting.
    ///
    /// Empty collections are treated as not found for `name`.
    pub fn collection<T, I>(&mut self, items: I, entity_name: &str, name: &str) -> io::Result<ExitCode>
    where
        T: Serialize + Display,
        I: IntoIterator<Item = T>,
    {
        let items: Vec<T> = items.into_iter().collect();

        if items.is_empty() {
            return self.not_found(entity_name, name);
        }

        match self.format {
            OutputFormat::Json => self.write_json(JsonResponse::success(&items))?,
            OutputFormat::Text => {
                writeln!(self.stdout, "Found {} {entity_name} for '{name}':", items.len())?;
                writeln!(self.stdout, "{}", "=".repeat(40))?;
                for item in items {
                    writeln!(self.stdout, "{item}")?;
                }
            }
        }
        Ok(ExitCode::Success)
    }

    /// Output an error with suggestions.
    pub fn error(&mut self, error: &CorpusError) -> io::Result<ExitCode> {
        match self.format {
            OutputFormat::Json => {
                let response = JsonResponse::from_error(error);
                writeln!(self.stderr, "{}", serde_json::to_string_pretty(&response)?)?;
            }
            OutputFormat::Text => {
                writeln!(self.stderr, "Error: {error}")?;
                for suggestion in error.recovery_suggestions() {
                    writeln!(self.stderr, "  Suggestion: {suggestion}")?;
                }
            }
        }
        Ok(ExitCode::from_error(error))
    }

    /// Output progress information (text mode only).
    ///
    /// In JSON mode, progress messages are suppressed to avoid
    /// polluting the JSON output.
    pub fn progress(&mut self, message: &str) -> io::Result<()> {
        if matches!(self.format, OutputFormat::Text) {
            writeln!(self.stderr, "{message}")?;
        }
        Ok(())
    }
}
