use crate::domain::model::Snapshot;
use crate::domain::ports::Render;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub const NAMES: [&'static str; 2] = ["text", "json"];

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "text" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

/// Writes one line per render: the display text, or the whole snapshot as JSON.
pub struct TerminalDisplay<W: Write> {
    out: W,
    format: OutputFormat,
}

impl<W: Write> TerminalDisplay<W> {
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self { out, format }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Render for TerminalDisplay<W> {
    fn set_display_text(&mut self, text: &str) -> Result<()> {
        writeln!(self.out, "{}", text)?;
        self.out.flush()?;
        Ok(())
    }

    fn render_snapshot(&mut self, snapshot: &Snapshot) -> Result<()> {
        match self.format {
            OutputFormat::Text => self.set_display_text(&snapshot.display),
            OutputFormat::Json => {
                let line = serde_json::to_string(snapshot)?;
                self.set_display_text(&line)
            }
        }
    }
}

/// Keeps every rendered display text in memory.
#[derive(Debug, Default, Clone)]
pub struct MemoryDisplay {
    frames: Vec<String>,
}

impl MemoryDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> &[String] {
        &self.frames
    }

    pub fn last(&self) -> Option<&str> {
        self.frames.last().map(String::as_str)
    }
}

impl Render for MemoryDisplay {
    fn set_display_text(&mut self, text: &str) -> Result<()> {
        self.frames.push(text.to_string());
        Ok(())
    }
}
