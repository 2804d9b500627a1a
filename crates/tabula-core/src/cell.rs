use serde::{Deserialize, Deserializer, Serialize};

/// Horizontal text alignment of a column's cells
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

// The host may save an empty or unrecognized alignment string; both fall
// back to the default instead of failing the whole load.
impl<'de> Deserialize<'de> for Align {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(match value.as_str() {
            "center" => Align::Center,
            "right" => Align::Right,
            _ => Align::Left,
        })
    }
}

/// One table entry: inner text plus alignment and structural flags
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cell {
    #[serde(default)]
    pub text: String,
    /// Position in the flat sequence. A denormalized cache: re-stamped on
    /// every structural change, never trusted as authoritative on input.
    #[serde(default)]
    pub index: usize,
    #[serde(default)]
    pub align: Align,
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_header: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_stripe: bool,
    /// Column width captured by the host during an interactive resize and
    /// merged in before save. The engine carries it verbatim, never sets it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
}

fn is_false(b: &bool) -> bool {
    !*b
}

impl Cell {
    /// Create an empty placeholder cell
    pub fn empty() -> Self {
        Cell::default()
    }

    /// Create a cell with the given text
    pub fn text(text: impl Into<String>) -> Self {
        Cell {
            text: text.into(),
            ..Cell::default()
        }
    }

    /// Builder pattern: set alignment
    pub fn with_align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    /// Check if the cell has no text
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Build a run of empty placeholder cells for a fresh row or column
pub(crate) fn holder_cells(count: usize) -> Vec<Cell> {
    vec![Cell::empty(); count]
}
