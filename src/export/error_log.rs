use crate::models::Result;
use std::fs::File;
use std::io::Write;

const SEPARATOR: &str = "-------";

/// The plain-text incident log: one free-form block per incident, each
/// terminated by a separator line and flushed immediately.
pub struct ErrorLog {
    file: File,
}

impl ErrorLog {
    pub fn create(path: &str) -> Result<Self> {
        Ok(Self {
            file: File::create(path)?,
        })
    }

    /// The renderer was tried and failed for this URL.
    pub fn renderer_failure(&mut self, url: &str, reason: &str) -> Result<()> {
        writeln!(self.file, "ERROR: Renderer failed for URL: {}", url)?;
        writeln!(self.file, "       Reason: {}", reason)?;
        self.end_block()
    }

    /// The direct request failed and no renderer session exists to fall
    /// back to.
    pub fn unreachable(&mut self, url: &str) -> Result<()> {
        writeln!(
            self.file,
            "ERROR: Could not fetch URL (request failed, no renderer): {}",
            url
        )?;
        self.end_block()
    }

    /// Content was fetched and parsed but no strategy recognized it.
    pub fn no_data(&mut self, url: &str, attempted_formats: &[&str]) -> Result<()> {
        writeln!(self.file, "WARNING: No staff data extracted from URL: {}", url)?;
        writeln!(
            self.file,
            "         (Tried formats: {})",
            attempted_formats.join(", ")
        )?;
        self.end_block()
    }

    /// Anything else that surfaced while processing a single URL.
    pub fn unexpected(&mut self, url: &str, reason: &str) -> Result<()> {
        writeln!(
            self.file,
            "FATAL ERROR: Unexpected issue processing URL: {}",
            url
        )?;
        writeln!(self.file, "       Reason: {}", reason)?;
        self.end_block()
    }

    fn end_block(&mut self) -> Result<()> {
        writeln!(self.file, "{}", SEPARATOR)?;
        self.file.flush()?;
        Ok(())
    }
}
