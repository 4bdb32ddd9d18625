use crate::error::{LoadError, Result};

// ---------------------------------------------------------------------------
// Column – one named series of values
// ---------------------------------------------------------------------------

/// A single named column of the source table.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    /// Parsed cell values; missing cells are `NaN`.
    pub values: Vec<f64>,
}

impl Column {
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Table – the complete loaded dataset
// ---------------------------------------------------------------------------

/// Ordered, equal-length columns. The first column is the independent
/// variable `n`; every other column is plotted against it.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    columns: Vec<Column>,
}

impl Table {
    /// Build a table, rejecting an empty column list or ragged columns.
    pub fn new(columns: Vec<Column>) -> Result<Self> {
        let expected = columns.first().ok_or(LoadError::NoColumns)?.len();

        if let Some(bad) = columns.iter().find(|c| c.len() != expected) {
            return Err(LoadError::LengthMismatch {
                column: bad.name.clone(),
                expected,
                found: bad.len(),
            });
        }

        Ok(Table { columns })
    }

    /// The independent variable series (first column by position).
    pub fn independent(&self) -> &Column {
        &self.columns[0]
    }

    /// Every column after the first, in header order.
    pub fn dependent(&self) -> &[Column] {
        &self.columns[1..]
    }

    /// Look up a column by header name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.independent().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
