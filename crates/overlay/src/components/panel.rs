//! Panel Component - Static titled table of values

use std::fmt;

/// One label/value line in a panel section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelRow {
    /// Row caption
    pub label: String,
    /// Formatted value
    pub value: String,
    /// Draw with emphasis
    pub highlight: bool,
}

impl PanelRow {
    /// Create a plain row
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            highlight: false,
        }
    }

    /// Create an emphasized row
    pub fn highlighted(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            highlight: true,
            ..Self::new(label, value)
        }
    }
}

/// A titled group of rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelSection {
    /// Section heading
    pub title: String,
    /// Rows in display order
    pub rows: Vec<PanelRow>,
    /// Optional footnote
    pub note: Option<String>,
}

impl PanelSection {
    /// Create an empty section
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            rows: Vec::new(),
            note: None,
        }
    }

    /// Builder: Append a row
    pub fn with_row(mut self, row: PanelRow) -> Self {
        self.rows.push(row);
        self
    }

    /// Builder: Set footnote
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

/// Screen-space information panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panel {
    /// Panel heading
    pub title: String,
    /// Sections in display order
    pub sections: Vec<PanelSection>,
    /// Message shown under the title (used for placeholders)
    pub note: Option<String>,
}

impl Panel {
    /// Create an empty panel
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            sections: Vec::new(),
            note: None,
        }
    }

    /// Builder: Append a section
    pub fn with_section(mut self, section: PanelSection) -> Self {
        self.sections.push(section);
        self
    }

    /// Builder: Set the message under the title
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Find the first row with the given caption
    pub fn row(&self, label: &str) -> Option<&PanelRow> {
        self.sections
            .iter()
            .flat_map(|section| section.rows.iter())
            .find(|row| row.label == label)
    }
}

impl fmt::Display for Panel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        if let Some(note) = &self.note {
            writeln!(f, "{note}")?;
        }
        for section in &self.sections {
            writeln!(f, "[{}]", section.title)?;
            for row in &section.rows {
                let marker = if row.highlight { "*" } else { " " };
                writeln!(f, "{marker} {}: {}", row.label, row.value)?;
            }
            if let Some(note) = &section.note {
                writeln!(f, "  ({note})")?;
            }
        }
        Ok(())
    }
}
