//! Vocabulary fitting and value-to-code lookup.
//!
//! [`VocabularyMapper`] learns a [`CodeMapping`] from a sequence of values.
//! The mapping assigns code 0 to the missing sentinel and consecutive codes to
//! every distinct value in first-occurrence order. In binary mode the codes are
//! handed out as zero-padded binary strings instead of integers.
//!
//! # Example
//! ```
//! use catconv::preprocessing::{Code, VocabularyMapper};
//!
//! let mut mapper = VocabularyMapper::new(true);
//! mapper.fit(["T", "K", "9", "C", "I"])?;
//!
//! assert_eq!(mapper.binary_width(), Some(3));
//! assert_eq!(mapper.lookup(Some(&"K"))?, Code::Binary("010".to_string()));
//! assert_eq!(mapper.lookup(Some(&"unseen"))?, Code::Binary("000".to_string()));
//! # Ok::<(), catconv::preprocessing::PreprocessingError>(())
//! ```

use crate::preprocessing::encoding::binary::{binary_width, parse_binary, to_binary_string};
use crate::preprocessing::encoding::vocabulary::Vocabulary;
use crate::preprocessing::error::{PreprocessingError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;

/// Code reserved for null and unseen values.
pub const MISSING_CODE: usize = 0;

/// A code handed out by a fitted mapping.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Code {
    /// Dense integer code (non-binary mapping).
    Integer(usize),
    /// Binary digits of the integer code, most significant first.
    Binary(String),
}

impl Code {
    /// The integer this code stands for.
    pub fn to_integer(&self) -> Result<usize> {
        match self {
            Code::Integer(code) => Ok(*code),
            Code::Binary(s) => parse_binary(s),
        }
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Code::Integer(code) => write!(f, "{}", code),
            Code::Binary(s) => f.write_str(s),
        }
    }
}

/// Serializable parameters of a fitted mapping.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CodeMappingParams<V> {
    /// Vocabulary in code order; the first entry is the missing sentinel (`None`).
    pub entries: Vec<Option<V>>,
    /// Whether codes are handed out as binary strings.
    pub binary: bool,
}

/// Immutable value-to-code mapping produced by [`VocabularyMapper::fit`].
#[derive(Clone, Debug)]
pub struct CodeMapping<V> {
    vocabulary: Vocabulary<V>,
    binary: bool,
    binary_width: usize,
}

impl<V: Eq + Hash + Clone> CodeMapping<V> {
    fn new(vocabulary: Vocabulary<V>, binary: bool) -> Self {
        let binary_width = binary_width(vocabulary.len());
        Self {
            vocabulary,
            binary,
            binary_width,
        }
    }

    /// Number of codes, counting the missing sentinel.
    pub fn len(&self) -> usize {
        self.vocabulary.len()
    }

    /// Always false: code 0 is always assigned.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether codes are handed out as binary strings.
    pub fn binary(&self) -> bool {
        self.binary
    }

    /// Digits per binary code.
    pub fn binary_width(&self) -> usize {
        self.binary_width
    }

    /// Entries in code order, starting with the missing sentinel as `None`.
    pub fn vocabulary(&self) -> impl Iterator<Item = Option<&V>> + '_ {
        self.vocabulary.iter()
    }

    /// Integer code of `value`.
    ///
    /// `None` input maps to [`MISSING_CODE`]; a value never seen during fit
    /// returns `None` so callers can tell it apart from an explicit null.
    pub fn code_of(&self, value: Option<&V>) -> Option<usize> {
        match value {
            None => Some(MISSING_CODE),
            Some(v) => self.vocabulary.code_of(v),
        }
    }

    /// Integer code of `value`, folding unseen values into [`MISSING_CODE`].
    pub fn code_or_missing(&self, value: Option<&V>) -> usize {
        self.code_of(value).unwrap_or(MISSING_CODE)
    }

    /// Code of `value` in this mapping's representation.
    pub fn lookup(&self, value: Option<&V>) -> Code {
        self.represent(self.code_or_missing(value))
    }

    /// Vocabulary entry for an integer code. `Some(None)` is the missing sentinel.
    pub fn entry(&self, code: usize) -> Option<Option<&V>> {
        self.vocabulary.get(code)
    }

    /// Inverse of [`lookup`](Self::lookup).
    pub fn decode(&self, code: &Code) -> Result<Option<&V>> {
        if let Code::Binary(s) = code {
            if s.len() != self.binary_width {
                return Err(PreprocessingError::InvalidCode(format!(
                    "'{}' has {} digits, expected {}",
                    s,
                    s.len(),
                    self.binary_width
                )));
            }
        }
        let n = code.to_integer()?;
        self.entry(n).ok_or_else(|| {
            PreprocessingError::InvalidCode(format!(
                "code {} out of range (vocabulary has {} entries)",
                n,
                self.len()
            ))
        })
    }

    fn represent(&self, code: usize) -> Code {
        if self.binary {
            Code::Binary(to_binary_string(code, self.binary_width))
        } else {
            Code::Integer(code)
        }
    }

    /// Extract parameters for reuse elsewhere.
    pub fn extract_params(&self) -> CodeMappingParams<V> {
        CodeMappingParams {
            entries: self.vocabulary.iter().map(|e| e.cloned()).collect(),
            binary: self.binary,
        }
    }

    /// Reconstruct from parameters.
    pub fn from_params(params: CodeMappingParams<V>) -> Result<Self> {
        let mut entries = params.entries.into_iter();
        match entries.next() {
            Some(None) => {}
            Some(Some(_)) => {
                return Err(PreprocessingError::InvalidVocabulary(
                    "first entry must be the missing sentinel".to_string(),
                ));
            }
            None => {
                return Err(PreprocessingError::InvalidVocabulary(
                    "no entries".to_string(),
                ));
            }
        }

        let mut values = Vec::with_capacity(entries.len());
        let mut seen = HashSet::new();
        for (offset, entry) in entries.enumerate() {
            let value = entry.ok_or_else(|| {
                PreprocessingError::InvalidVocabulary(format!(
                    "missing sentinel repeated at code {}",
                    offset + 1
                ))
            })?;
            if !seen.insert(value.clone()) {
                return Err(PreprocessingError::InvalidVocabulary(format!(
                    "duplicate entry at code {}",
                    offset + 1
                )));
            }
            values.push(value);
        }

        Ok(Self::new(Vocabulary::from_values(values), params.binary))
    }
}

/// Learns a [`CodeMapping`] from observed values.
///
/// Fitting twice replaces the first mapping entirely. Lookups before the first
/// successful fit fail with [`PreprocessingError::NotFitted`].
#[derive(Clone, Debug)]
pub struct VocabularyMapper<V> {
    binary: bool,
    mapping: Option<CodeMapping<V>>,
}

impl<V: Eq + Hash + Clone> VocabularyMapper<V> {
    /// Create an unfitted mapper.
    pub fn new(binary: bool) -> Self {
        Self {
            binary,
            mapping: None,
        }
    }

    /// Wrap an existing mapping.
    pub fn from_mapping(mapping: CodeMapping<V>) -> Self {
        Self {
            binary: mapping.binary(),
            mapping: Some(mapping),
        }
    }

    /// Whether the fitted mapping hands out binary strings.
    pub fn binary(&self) -> bool {
        self.binary
    }

    /// Whether `fit` has succeeded at least once.
    pub fn is_fitted(&self) -> bool {
        self.mapping.is_some()
    }

    /// Digits per binary code, once fitted.
    pub fn binary_width(&self) -> Option<usize> {
        self.mapping.as_ref().map(CodeMapping::binary_width)
    }

    /// Build the mapping from `values`.
    ///
    /// # Errors
    /// Returns [`PreprocessingError::InvalidVocabulary`] if `values` is empty.
    /// The previous mapping, if any, is kept in that case.
    pub fn fit<I>(&mut self, values: I) -> Result<()>
    where
        I: IntoIterator<Item = V>,
    {
        let vocabulary = Vocabulary::from_values(values);
        if vocabulary.n_values() == 0 {
            return Err(PreprocessingError::InvalidVocabulary(
                "Cannot fit VocabularyMapper on empty values".to_string(),
            ));
        }

        let mapping = CodeMapping::new(vocabulary, self.binary);
        log::debug!(
            "fitted vocabulary: {} entries, binary width {}",
            mapping.len(),
            mapping.binary_width()
        );
        self.mapping = Some(mapping);
        Ok(())
    }

    /// The fitted mapping.
    pub fn mapping(&self) -> Result<&CodeMapping<V>> {
        self.mapping.as_ref().ok_or_else(|| {
            PreprocessingError::NotFitted(
                "VocabularyMapper has no mapping; call fit first".to_string(),
            )
        })
    }

    /// Code of `value`. Null and unseen values get the missing code.
    pub fn lookup(&self, value: Option<&V>) -> Result<Code> {
        Ok(self.mapping()?.lookup(value))
    }
}

impl<V: Eq + Hash + Clone> Default for VocabularyMapper<V> {
    fn default() -> Self {
        Self::new(true)
    }
}

impl<V> fmt::Display for VocabularyMapper<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VocabularyMapper(binary={})", self.binary)
    }
}
