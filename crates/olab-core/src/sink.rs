//! Presentation sinks
//!
//! The runner pushes `(title, content)` pairs and section headers into a
//! [`PresentationSink`] and never reads anything back. Rendering, and any
//! failure while rendering, is the sink's business.

use std::io::Write;

use olab_model::Value;
use serde::Serialize;

/// Append-only receiver of lab output
pub trait PresentationSink {
    /// Announce a new lab section
    fn section(&mut self, name: &str);

    /// Report one titled result
    fn report(&mut self, title: &str, content: &Value);
}

/// Text sink writing `=== title ===` blocks
///
/// Records and lists render as JSON, pretty-printed when configured. Write
/// failures are logged and counted, never returned to the runner.
#[derive(Debug)]
pub struct ConsoleSink<W: Write> {
    out: W,
    pretty: bool,
    write_failures: usize,
}

impl<W: Write> ConsoleSink<W> {
    #[must_use]
    pub fn new(out: W, pretty: bool) -> Self {
        Self {
            out,
            pretty,
            write_failures: 0,
        }
    }

    /// Number of entries that could not be written
    #[inline]
    #[must_use]
    pub fn write_failures(&self) -> usize {
        self.write_failures
    }

    #[must_use]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn render(&self, content: &Value) -> String {
        match content {
            Value::List(_) | Value::Record(_) if self.pretty => {
                serde_json::to_string_pretty(content).unwrap_or_else(|_| content.to_string())
            }
            other => other.to_string(),
        }
    }

    fn emit(&mut self, text: &str) {
        if let Err(e) = writeln!(self.out, "{text}") {
            self.write_failures += 1;
            tracing::warn!("Console sink write failed: {}", e);
        }
    }
}

impl<W: Write> PresentationSink for ConsoleSink<W> {
    fn section(&mut self, name: &str) {
        self.emit(&format!("\n🔸 {name} 🔸"));
    }

    fn report(&mut self, title: &str, content: &Value) {
        let body = self.render(content);
        self.emit(&format!("\n=== {title} ===\n{body}"));
    }
}

/// One JSON object per line, tagged with the current section
#[derive(Debug)]
pub struct JsonLinesSink<W: Write> {
    out: W,
    section: Option<String>,
    write_failures: usize,
}

#[derive(Serialize)]
struct JsonLine<'a> {
    section: Option<&'a str>,
    title: &'a str,
    content: &'a Value,
}

impl<W: Write> JsonLinesSink<W> {
    #[must_use]
    pub fn new(out: W) -> Self {
        Self {
            out,
            section: None,
            write_failures: 0,
        }
    }

    #[inline]
    #[must_use]
    pub fn write_failures(&self) -> usize {
        self.write_failures
    }

    #[must_use]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> PresentationSink for JsonLinesSink<W> {
    fn section(&mut self, name: &str) {
        self.section = Some(name.to_string());
    }

    fn report(&mut self, title: &str, content: &Value) {
        let line = JsonLine {
            section: self.section.as_deref(),
            title,
            content,
        };
        let written = serde_json::to_writer(&mut self.out, &line)
            .map_err(std::io::Error::from)
            .and_then(|()| self.out.write_all(b"\n"));
        if let Err(e) = written {
            self.write_failures += 1;
            tracing::warn!("JSON sink write failed: {}", e);
        }
    }
}

/// Emits every entry as a structured `tracing` event
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl PresentationSink for TracingSink {
    fn section(&mut self, name: &str) {
        tracing::info!(target: "olab::sink", section = name, "lab section");
    }

    fn report(&mut self, title: &str, content: &Value) {
        tracing::info!(target: "olab::sink", title, content = %content, "lab entry");
    }
}

/// Captured sink entry
#[derive(Debug, Clone, PartialEq)]
pub enum SinkEntry {
    Section(String),
    Report { title: String, content: Value },
}

/// In-memory sink for inspection after a run
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    entries: Vec<SinkEntry>,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[SinkEntry] {
        &self.entries
    }

    /// Section names in announcement order
    #[must_use]
    pub fn sections(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter_map(|e| match e {
                SinkEntry::Section(name) => Some(name.as_str()),
                SinkEntry::Report { .. } => None,
            })
            .collect()
    }

    /// Report titles in order
    #[must_use]
    pub fn titles(&self) -> Vec<&str> {
        self.reports().map(|(title, _)| title).collect()
    }

    /// Content of the first report with `title`
    #[must_use]
    pub fn content(&self, title: &str) -> Option<&Value> {
        self.reports()
            .find(|(t, _)| *t == title)
            .map(|(_, content)| content)
    }

    fn reports(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().filter_map(|e| match e {
            SinkEntry::Report { title, content } => Some((title.as_str(), content)),
            SinkEntry::Section(_) => None,
        })
    }
}

impl PresentationSink for MemorySink {
    fn section(&mut self, name: &str) {
        self.entries.push(SinkEntry::Section(name.to_string()));
    }

    fn report(&mut self, title: &str, content: &Value) {
        self.entries.push(SinkEntry::Report {
            title: title.to_string(),
            content: content.clone(),
        });
    }
}
