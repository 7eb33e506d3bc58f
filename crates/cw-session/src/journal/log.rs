//! Journal storage and export.

use serde::{Deserialize, Serialize};

use super::entry::JournalEntry;

/// A chronological log of session events.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Journal {
    entries: Vec<JournalEntry>,
}

impl Journal {
    /// Create an empty journal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry to the journal.
    pub fn append(&mut self, entry: JournalEntry) {
        self.entries.push(entry);
    }

    /// Get all entries.
    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    /// The last `count` entries, oldest first.
    pub fn recent(&self, count: usize) -> &[JournalEntry] {
        let start = self.entries.len().saturating_sub(count);
        &self.entries[start..]
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the journal is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Export the journal as markdown.
    pub fn export_markdown(&self) -> String {
        let mut out = String::from("# Castaway Session Journal\n\n");
        for entry in &self.entries {
            if let JournalEntry::DeckBuilt { generation, .. } = entry {
                out.push_str(&format!("## Weather deck {generation}\n\n"));
                continue;
            }
            let line = format!(
                "- `{}` **{}**: {}\n",
                entry.timestamp().format("%H:%M:%S"),
                entry.kind(),
                entry.describe()
            );
            out.push_str(&line);
        }
        out
    }

    /// Export the journal as plain text.
    pub fn export_text(&self) -> String {
        let mut out = String::from("Castaway Session Journal\n========================\n\n");
        out.push_str(&Self::format_lines(&self.entries));
        out
    }

    /// Export the journal as pretty-printed JSON.
    pub fn export_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// One text line per entry.
    pub fn format_lines(entries: &[JournalEntry]) -> String {
        let mut out = String::new();
        for entry in entries {
            out.push_str(&format!(
                "[{}] {:<8} {}\n",
                entry.timestamp().format("%H:%M:%S"),
                entry.kind(),
                entry.describe()
            ));
        }
        out
    }
}
