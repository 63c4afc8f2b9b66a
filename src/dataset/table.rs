use crate::preprocessing::error::{PreprocessingError, Result};

/// Named column of a [`Table`].
#[derive(Clone, Debug, PartialEq)]
pub struct Column<T> {
    name: String,
    values: Vec<T>,
}

impl<T> Column<T> {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn values(&self) -> &[T] {
        &self.values
    }
}

/// In-memory table: a row index plus named columns of equal length.
///
/// Input tables for encoding hold `Option<V>` cells, with `None` as null.
/// Encoded tables hold `usize` codes or bits and carry the input's index.
#[derive(Clone, Debug, PartialEq)]
pub struct Table<T> {
    index: Vec<usize>,
    columns: Vec<Column<T>>,
}

impl<T> Table<T> {
    /// Build a table with the default index `0..n_rows`.
    pub fn new<S: Into<String>>(columns: Vec<(S, Vec<T>)>) -> Result<Self> {
        let n_rows = columns.first().map_or(0, |(_, values)| values.len());
        Self::with_index((0..n_rows).collect(), columns)
    }

    /// Build a table with an explicit row index.
    pub fn with_index<S: Into<String>>(index: Vec<usize>, columns: Vec<(S, Vec<T>)>) -> Result<Self> {
        let mut table = Self::empty(index);
        for (name, values) in columns {
            let name = name.into();
            if values.len() != table.n_rows() {
                return Err(PreprocessingError::InvalidShape {
                    expected: format!("{} rows", table.n_rows()),
                    got: format!("{} rows in column '{}'", values.len(), name),
                });
            }
            if table.contains_column(&name) {
                return Err(PreprocessingError::DuplicateColumn(name));
            }
            table.columns.push(Column { name, values });
        }
        Ok(table)
    }

    /// Single-column table with the default index.
    pub fn from_values<S: Into<String>>(name: S, values: Vec<T>) -> Self {
        Self {
            index: (0..values.len()).collect(),
            columns: vec![Column {
                name: name.into(),
                values,
            }],
        }
    }

    /// Table with the given index and no columns.
    pub fn empty(index: Vec<usize>) -> Self {
        Self {
            index,
            columns: Vec::new(),
        }
    }

    pub fn index(&self) -> &[usize] {
        &self.index
    }

    pub fn n_rows(&self) -> usize {
        self.index.len()
    }

    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.n_rows(), self.n_columns())
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.columns.iter().map(Column::name)
    }

    pub fn columns(&self) -> &[Column<T>] {
        &self.columns
    }

    pub fn contains_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c.name == name)
    }

    /// Values of the column called `name`.
    pub fn column(&self, name: &str) -> Option<&[T]> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .map(Column::values)
    }

    /// Append a column unless one with the same name already exists.
    ///
    /// Returns `false` when the column was skipped.
    pub(crate) fn push_column(&mut self, name: String, values: Vec<T>) -> bool {
        debug_assert_eq!(values.len(), self.n_rows());
        if self.contains_column(&name) {
            return false;
        }
        self.columns.push(Column { name, values });
        true
    }
}
