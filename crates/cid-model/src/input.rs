/// Raw material handed to the normalizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawInput {
    /// A single free-form text blob (pasted text, a text file, stdin).
    Text(String),
    /// One cell per table row; `None` marks a missing value.
    Column(Vec<Option<String>>),
}

impl RawInput {
    /// Returns true when there is nothing to scan.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(text) => text.trim().is_empty(),
            Self::Column(cells) => cells
                .iter()
                .all(|cell| cell.as_deref().is_none_or(|value| value.trim().is_empty())),
        }
    }

    /// Iterates over the present cells in traversal order.
    pub fn cells(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        match self {
            Self::Text(text) => Box::new(std::iter::once(text.as_str())),
            Self::Column(cells) => Box::new(cells.iter().filter_map(|cell| cell.as_deref())),
        }
    }

    /// Number of rows (1 for text), including missing cells.
    pub fn row_count(&self) -> usize {
        match self {
            Self::Text(_) => 1,
            Self::Column(cells) => cells.len(),
        }
    }
}

impl Default for RawInput {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl From<&str> for RawInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for RawInput {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Option<&str>> for RawInput {
    fn from(value: Option<&str>) -> Self {
        value.map(Self::from).unwrap_or_default()
    }
}

impl From<Vec<Option<String>>> for RawInput {
    fn from(cells: Vec<Option<String>>) -> Self {
        Self::Column(cells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_cells_skip_missing_values() {
        let input = RawInput::from(vec![Some("1".to_string()), None, Some("2".to_string())]);
        assert_eq!(input.cells().collect::<Vec<_>>(), vec!["1", "2"]);
        assert_eq!(input.row_count(), 3);
        assert!(!input.is_empty());
    }

    #[test]
    fn absent_and_blank_inputs_are_empty() {
        assert!(RawInput::from(None::<&str>).is_empty());
        assert!(RawInput::from("  \n").is_empty());
        assert!(RawInput::Column(vec![None, Some(" ".to_string())]).is_empty());
    }
}
