//! Table-level categorical encoding.
//!
//! Applies a fitted [`VocabularyMapper`] to selected columns of a [`Table`],
//! emitting either one integer column per input column or one column per
//! binary digit.

use crate::dataset::Table;
use crate::preprocessing::encoding::binary::bits;
use crate::preprocessing::encoding::mapper::{CodeMapping, VocabularyMapper};
use crate::preprocessing::encoding::HandleMissing;
use crate::preprocessing::error::{PreprocessingError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;

/// Name of the column `fit_transform` wraps its values in.
pub const FIT_TRANSFORM_COLUMN: &str = "0";

/// Specifies which columns an encoder should be applied to.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ColumnSpec {
    /// Apply to every column, in table order.
    #[default]
    All,
    /// Apply to the named columns, in the given order.
    Names(Vec<String>),
}

impl ColumnSpec {
    /// Select columns by name.
    pub fn names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ColumnSpec::Names(names.into_iter().map(Into::into).collect())
    }

    fn resolve<'a, T>(&'a self, table: &'a Table<T>) -> Result<Vec<&'a str>> {
        match self {
            ColumnSpec::All => Ok(table.column_names().collect()),
            ColumnSpec::Names(names) => names
                .iter()
                .map(|name| {
                    if table.contains_column(name) {
                        Ok(name.as_str())
                    } else {
                        Err(PreprocessingError::UnknownColumn(name.clone()))
                    }
                })
                .collect(),
        }
    }
}

/// Configuration for CategoricalEncoder.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncoderConfig {
    /// Expand each code into one column per binary digit.
    pub binary: bool,
    /// What null and unseen cells become.
    pub handle_missing: HandleMissing,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            binary: true,
            handle_missing: HandleMissing::default(),
        }
    }
}

/// Categorical encoder for named table columns.
///
/// Fits one vocabulary shared by every column it is later applied to.
///
/// # Example
/// ```
/// use catconv::dataset::Table;
/// use catconv::preprocessing::CategoricalEncoder;
///
/// let mut encoder = CategoricalEncoder::new(false);
/// encoder.fit(["T", "K", "9", "C", "I"])?;
///
/// let table = Table::new(vec![
///     ("A", vec![Some("K"), Some("T"), Some("9")]),
///     ("B", vec![Some("C"), Some("I"), Some("K")]),
/// ])?;
/// let encoded = encoder.transform(&table)?;
///
/// assert_eq!(encoded.column("A"), Some(&[2, 1, 3][..]));
/// assert_eq!(encoded.column("B"), Some(&[4, 5, 2][..]));
/// # Ok::<(), catconv::preprocessing::PreprocessingError>(())
/// ```
#[derive(Clone, Debug)]
pub struct CategoricalEncoder<V> {
    config: EncoderConfig,
    mapper: VocabularyMapper<V>,
}

impl<V: Eq + Hash + Clone> CategoricalEncoder<V> {
    /// Create an unfitted encoder.
    pub fn new(binary: bool) -> Self {
        Self {
            config: EncoderConfig {
                binary,
                ..EncoderConfig::default()
            },
            mapper: VocabularyMapper::new(binary),
        }
    }

    /// Create an encoder around an existing (possibly fitted) mapper.
    pub fn from_mapper(mapper: VocabularyMapper<V>) -> Self {
        Self {
            config: EncoderConfig {
                binary: mapper.binary(),
                ..EncoderConfig::default()
            },
            mapper,
        }
    }

    /// Set the strategy for null and unseen cells.
    pub fn with_handle_missing(mut self, strategy: HandleMissing) -> Self {
        self.config.handle_missing = strategy;
        self
    }

    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    pub fn mapper(&self) -> &VocabularyMapper<V> {
        &self.mapper
    }

    /// Fit the underlying vocabulary. See [`VocabularyMapper::fit`].
    pub fn fit<I>(&mut self, values: I) -> Result<()>
    where
        I: IntoIterator<Item = V>,
    {
        self.mapper.fit(values)
    }

    /// Encode every column, filling unresolved cells with 0.
    pub fn transform(&self, table: &Table<Option<V>>) -> Result<Table<usize>> {
        self.transform_with(table, &ColumnSpec::All, 0)
    }

    /// Encode the selected columns.
    ///
    /// The output keeps the input's row index and contains only the encoded
    /// columns. In binary mode column `col` becomes `col_0 .. col_{w-1}`, with
    /// `col_0` holding the most significant digit. If two selected columns
    /// produce the same output name, the first one wins and the later one is
    /// skipped.
    ///
    /// `fillna` is written for cells the mapping does not resolve, which only
    /// happens under [`HandleMissing::Fill`].
    ///
    /// # Errors
    /// - [`PreprocessingError::NotFitted`] if `fit` has not succeeded yet.
    /// - [`PreprocessingError::UnknownColumn`] for a name not in `table`.
    pub fn transform_with(
        &self,
        table: &Table<Option<V>>,
        columns: &ColumnSpec,
        fillna: usize,
    ) -> Result<Table<usize>> {
        let mapping = self.mapper.mapping()?;
        let selected = columns.resolve(table)?;
        let mut encoded = Table::empty(table.index().to_vec());

        for name in selected {
            log::debug!("processing column {}", name);
            let cells = table
                .column(name)
                .ok_or_else(|| PreprocessingError::UnknownColumn(name.to_string()))?;
            let codes = cells
                .iter()
                .map(|cell| self.code_for(mapping, cell.as_ref()));

            if mapping.binary() {
                let width = mapping.binary_width();
                let mut digits = vec![Vec::with_capacity(cells.len()); width];
                for code in codes {
                    match code {
                        Some(code) => {
                            for (column, bit) in digits.iter_mut().zip(bits(code, width)) {
                                column.push(bit);
                            }
                        }
                        None => digits.iter_mut().for_each(|column| column.push(fillna)),
                    }
                }
                for (i, column) in digits.into_iter().enumerate() {
                    let bit_name = format!("{}_{}", name, i);
                    if !encoded.push_column(bit_name, column) {
                        log::trace!("column {}_{} already encoded, skipping", name, i);
                    }
                }
            } else {
                let column = codes.map(|code| code.unwrap_or(fillna)).collect();
                if !encoded.push_column(name.to_string(), column) {
                    log::trace!("column {} already encoded, skipping", name);
                }
            }
        }

        Ok(encoded)
    }

    /// Fit on `values`, then encode them as a single column named `"0"`.
    pub fn fit_transform<I>(&mut self, values: I) -> Result<Table<usize>>
    where
        I: IntoIterator<Item = V>,
    {
        let values: Vec<V> = values.into_iter().collect();
        self.fit(values.iter().cloned())?;
        let table = Table::from_values(
            FIT_TRANSFORM_COLUMN,
            values.into_iter().map(Some).collect(),
        );
        self.transform(&table)
    }

    fn code_for(&self, mapping: &CodeMapping<V>, cell: Option<&V>) -> Option<usize> {
        match self.config.handle_missing {
            HandleMissing::Sentinel => Some(mapping.code_or_missing(cell)),
            HandleMissing::Fill => cell.and_then(|value| mapping.code_of(Some(value))),
        }
    }
}

impl<V: Eq + Hash + Clone> Default for CategoricalEncoder<V> {
    fn default() -> Self {
        Self::new(true)
    }
}

impl<V> fmt::Display for CategoricalEncoder<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CategoricalEncoder(binary={})", self.config.binary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preprocessing::encoding::binary::to_binary_string;

    const VALUES: [&str; 5] = ["T", "K", "9", "C", "I"];

    fn sample_table() -> Table<Option<&'static str>> {
        Table::new(vec![
            ("A", vec![Some("K"), Some("T"), Some("9")]),
            ("B", vec![Some("C"), Some("I"), Some("K")]),
        ])
        .unwrap()
    }

    fn fitted(binary: bool) -> CategoricalEncoder<&'static str> {
        let mut encoder = CategoricalEncoder::new(binary);
        encoder.fit(VALUES).unwrap();
        encoder
    }

    #[test]
    fn test_transform_integer_codes() {
        let encoded = fitted(false).transform(&sample_table()).unwrap();

        assert_eq!(encoded.index(), &[0, 1, 2]);
        assert_eq!(encoded.column_names().collect::<Vec<_>>(), vec!["A", "B"]);
        assert_eq!(encoded.column("A"), Some(&[2, 1, 3][..]));
        assert_eq!(encoded.column("B"), Some(&[4, 5, 2][..]));
    }

    #[test]
    fn test_transform_binary_columns() {
        let encoded = fitted(true).transform(&sample_table()).unwrap();

        assert_eq!(
            encoded.column_names().collect::<Vec<_>>(),
            vec!["A_0", "A_1", "A_2", "B_0", "B_1", "B_2"]
        );
        // A = [K, T, 9] -> [010, 001, 011]
        assert_eq!(encoded.column("A_0"), Some(&[0, 0, 0][..]));
        assert_eq!(encoded.column("A_1"), Some(&[1, 0, 1][..]));
        assert_eq!(encoded.column("A_2"), Some(&[0, 1, 1][..]));
        // B = [C, I, K] -> [100, 101, 010]
        assert_eq!(encoded.column("B_0"), Some(&[1, 1, 0][..]));
        assert_eq!(encoded.column("B_1"), Some(&[0, 0, 1][..]));
        assert_eq!(encoded.column("B_2"), Some(&[0, 1, 0][..]));
    }

    #[test]
    fn test_binary_columns_match_code_strings() {
        let encoder = fitted(true);
        let table = sample_table();
        let encoded = encoder.transform(&table).unwrap();

        for (row, cell) in table.column("B").unwrap().iter().enumerate() {
            let code = encoder.mapper().lookup(cell.as_ref()).unwrap().to_string();
            let digits: String = (0..3)
                .map(|i| encoded.column(&format!("B_{}", i)).unwrap()[row].to_string())
                .collect();
            assert_eq!(digits, code);
        }
    }

    #[test]
    fn test_transform_preserves_custom_index() {
        let table = Table::with_index(vec![7, 3, 5], vec![("A", vec![Some("I"), None, Some("T")])])
            .unwrap();
        let encoded = fitted(false).transform(&table).unwrap();

        assert_eq!(encoded.index(), &[7, 3, 5]);
        assert_eq!(encoded.column("A"), Some(&[5, 0, 1][..]));
    }

    #[test]
    fn test_unseen_encodes_like_null() {
        let table = Table::new(vec![("A", vec![Some("unseen"), None])]).unwrap();

        let encoded = fitted(false).transform(&table).unwrap();
        assert_eq!(encoded.column("A"), Some(&[0, 0][..]));

        let encoded = fitted(true).transform(&table).unwrap();
        for i in 0..3 {
            assert_eq!(encoded.column(&format!("A_{}", i)), Some(&[0, 0][..]));
        }
    }

    #[test]
    fn test_fill_policy_uses_fillna() {
        let table = Table::new(vec![("A", vec![Some("K"), Some("unseen"), None])]).unwrap();

        let encoder = fitted(false).with_handle_missing(HandleMissing::Fill);
        let encoded = encoder.transform_with(&table, &ColumnSpec::All, 9).unwrap();
        assert_eq!(encoded.column("A"), Some(&[2, 9, 9][..]));

        let encoder = fitted(true).with_handle_missing(HandleMissing::Fill);
        let encoded = encoder.transform_with(&table, &ColumnSpec::All, 7).unwrap();
        assert_eq!(encoded.column("A_0"), Some(&[0, 7, 7][..]));
        assert_eq!(encoded.column("A_1"), Some(&[1, 7, 7][..]));
        assert_eq!(encoded.column("A_2"), Some(&[0, 7, 7][..]));
    }

    #[test]
    fn test_sentinel_policy_ignores_fillna() {
        let table = Table::new(vec![("A", vec![None, Some("C")])]).unwrap();
        let encoded = fitted(false)
            .transform_with(&table, &ColumnSpec::All, 42)
            .unwrap();
        assert_eq!(encoded.column("A"), Some(&[0, 4][..]));
    }

    #[test]
    fn test_transform_selected_columns_only() {
        let encoded = fitted(false)
            .transform_with(&sample_table(), &ColumnSpec::names(["B"]), 0)
            .unwrap();
        assert_eq!(encoded.column_names().collect::<Vec<_>>(), vec!["B"]);
        assert_eq!(encoded.index(), &[0, 1, 2]);
    }

    #[test]
    fn test_transform_column_order_follows_selection() {
        let encoded = fitted(false)
            .transform_with(&sample_table(), &ColumnSpec::names(["B", "A"]), 0)
            .unwrap();
        assert_eq!(encoded.column_names().collect::<Vec<_>>(), vec!["B", "A"]);
    }

    #[test]
    fn test_duplicate_selection_is_coalesced() {
        let selection = ColumnSpec::names(["A", "B", "A"]);

        let encoded = fitted(true)
            .transform_with(&sample_table(), &selection, 0)
            .unwrap();
        assert_eq!(encoded.n_columns(), 6);
        assert_eq!(encoded.column("A_1"), Some(&[1, 0, 1][..]));

        let encoded = fitted(false)
            .transform_with(&sample_table(), &selection, 0)
            .unwrap();
        assert_eq!(encoded.column_names().collect::<Vec<_>>(), vec!["A", "B"]);
    }

    #[test]
    fn test_empty_selection_keeps_index() {
        let encoded = fitted(true)
            .transform_with(&sample_table(), &ColumnSpec::Names(vec![]), 0)
            .unwrap();
        assert_eq!(encoded.shape(), (3, 0));
        assert_eq!(encoded.index(), &[0, 1, 2]);
    }

    #[test]
    fn test_unknown_column_fails() {
        let result = fitted(false).transform_with(&sample_table(), &ColumnSpec::names(["Z"]), 0);
        assert!(matches!(result, Err(PreprocessingError::UnknownColumn(name)) if name == "Z"));
    }

    #[test]
    fn test_transform_before_fit_fails() {
        let encoder: CategoricalEncoder<&str> = CategoricalEncoder::new(true);
        let result = encoder.transform(&sample_table());
        assert!(matches!(result, Err(PreprocessingError::NotFitted(_))));
    }

    #[test]
    fn test_transform_is_idempotent() {
        let encoder = fitted(true);
        let table = sample_table();
        assert_eq!(
            encoder.transform(&table).unwrap(),
            encoder.transform(&table).unwrap()
        );
    }

    #[test]
    fn test_fit_transform() {
        let mut encoder = CategoricalEncoder::new(false);
        let encoded = encoder.fit_transform(["b", "a", "b"]).unwrap();
        assert_eq!(
            encoded.column(FIT_TRANSFORM_COLUMN),
            Some(&[1, 2, 1][..])
        );

        let mut encoder = CategoricalEncoder::new(true);
        let encoded = encoder.fit_transform(VALUES).unwrap();
        assert_eq!(encoded.n_columns(), 3);
        for (row, code) in (1..=5).enumerate() {
            let digits: String = (0..3)
                .map(|i| encoded.column(&format!("0_{}", i)).unwrap()[row].to_string())
                .collect();
            assert_eq!(digits, to_binary_string(code, 3));
        }
    }

    #[test]
    fn test_fit_transform_empty_fails() {
        let mut encoder: CategoricalEncoder<&str> = CategoricalEncoder::default();
        assert!(matches!(
            encoder.fit_transform(Vec::new()),
            Err(PreprocessingError::InvalidVocabulary(_))
        ));
    }

    #[test]
    fn test_from_mapper_reuses_mapping() {
        let mut mapper = VocabularyMapper::new(false);
        mapper.fit(VALUES).unwrap();

        let encoder = CategoricalEncoder::from_mapper(mapper);
        assert!(!encoder.config().binary);
        let encoded = encoder.transform(&sample_table()).unwrap();
        assert_eq!(encoded.column("A"), Some(&[2, 1, 3][..]));
    }

    #[test]
    fn test_display() {
        let encoder: CategoricalEncoder<String> = CategoricalEncoder::new(false);
        assert_eq!(encoder.to_string(), "CategoricalEncoder(binary=false)");
    }
}
