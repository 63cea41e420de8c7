use crate::{Error, Result, Value};

/// An in-memory table: named columns of equal length.
///
/// Column order is preserved from input to output so an exported frame
/// keeps the source file's layout. All mutation goes through
/// [`Frame::set_column`], which either replaces an existing column or
/// appends a new one at the end.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    names: Vec<String>,
    columns: Vec<Vec<Value>>,
}

impl Frame {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a frame from `(name, values)` pairs, validating that every
    /// column has the same length.
    pub fn from_columns(columns: Vec<(String, Vec<Value>)>) -> Result<Self> {
        let mut frame = Frame::new();
        for (name, values) in columns {
            frame.set_column(&name, values)?;
        }
        Ok(frame)
    }

    #[inline]
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.columns.first().map_or(0, Vec::len)
    }

    #[inline]
    #[must_use]
    pub fn n_cols(&self) -> usize {
        self.names.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.n_rows() == 0
    }

    #[inline]
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    /// All cells of a column, or `None` if the column does not exist.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&[Value]> {
        self.position(name).map(|i| self.columns[i].as_slice())
    }

    /// Cell at `(row, name)`, or `None` if either is missing.
    #[must_use]
    pub fn value(&self, row: usize, name: &str) -> Option<&Value> {
        self.column(name).and_then(|col| col.get(row))
    }

    /// Numeric view of a column; non-numeric cells become `None`.
    #[must_use]
    pub fn f64_column(&self, name: &str) -> Option<Vec<Option<f64>>> {
        self.column(name)
            .map(|col| col.iter().map(Value::as_f64).collect())
    }

    /// Replace an existing column or append a new one. The column must
    /// match the frame's row count unless the frame is still empty.
    pub fn set_column(&mut self, name: &str, values: Vec<Value>) -> Result<()> {
        if !self.names.is_empty() && values.len() != self.n_rows() {
            return Err(Error::ColumnLength {
                name: name.to_string(),
                expected: self.n_rows(),
                actual: values.len(),
            });
        }
        match self.position(name) {
            Some(i) => self.columns[i] = values,
            None => {
                self.names.push(name.to_string());
                self.columns.push(values);
            }
        }
        Ok(())
    }

    /// One row rendered as `(name, value)` pairs in column order.
    pub fn row(&self, index: usize) -> Result<Vec<(&str, &Value)>> {
        if index >= self.n_rows() {
            return Err(Error::RowOutOfBounds {
                index,
                rows: self.n_rows(),
            });
        }
        Ok(self
            .names
            .iter()
            .zip(&self.columns)
            .map(|(name, col)| (name.as_str(), &col[index]))
            .collect())
    }
}
