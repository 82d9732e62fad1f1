//! Test doubles shared across the crate's unit tests.

use chrono::{DateTime, FixedOffset, TimeZone};

use crate::clock::Clock;
use crate::dispatcher::OutputSink;

/// Clock pinned to one instant. Defaults to 2024-01-01 12:00:00 +0000.
pub struct FixedClock(pub DateTime<FixedOffset>);

impl Default for FixedClock {
    fn default() -> Self {
        let at = FixedOffset::east_opt(0)
            .and_then(|tz| tz.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).single())
            .expect("valid fixed instant");
        Self(at)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}

/// One call made against a [`RecordingSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkCall {
    Line(String),
    Clear,
    SetInput(String),
    OpenLink(String),
    Download { href: String, file_name: String },
}

/// Sink that records every call in order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub calls: Vec<SinkCall>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appended lines, in order.
    pub fn lines(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                SinkCall::Line(l) => Some(l.as_str()),
                _ => None,
            })
            .collect()
    }

    /// The last value written to the input line.
    pub fn input(&self) -> Option<&str> {
        self.calls.iter().rev().find_map(|c| match c {
            SinkCall::SetInput(s) => Some(s.as_str()),
            _ => None,
        })
    }
}

impl OutputSink for RecordingSink {
    fn append_line(&mut self, text: &str) {
        self.calls.push(SinkCall::Line(text.to_string()));
    }

    fn clear(&mut self) {
        self.calls.push(SinkCall::Clear);
    }

    fn set_input(&mut self, text: &str) {
        self.calls.push(SinkCall::SetInput(text.to_string()));
    }

    fn open_link(&mut self, url: &str) {
        self.calls.push(SinkCall::OpenLink(url.to_string()));
    }

    fn download(&mut self, href: &str, file_name: &str) {
        self.calls.push(SinkCall::Download {
            href: href.to_string(),
            file_name: file_name.to_string(),
        });
    }
}
