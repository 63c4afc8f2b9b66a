//! Categorical preprocessing for tabular data.
//!
//! # Design
//!
//! - **Fit once, transform many**: a mapping is learned from a finite set of
//!   values and never changes until the next `fit`.
//! - **Total transform**: once fitted, encoding never fails on new categories;
//!   nulls and unseen values share the missing code.
//! - **Reusable mapping**: the fitted [`CodeMapping`] can be shared between
//!   encoders or exported as [`CodeMappingParams`].
//!
//! # Example
//!
//! ```ignore
//! use catconv::preprocessing::{CategoricalEncoder, ColumnSpec};
//!
//! let mut encoder = CategoricalEncoder::new(true);
//! encoder.fit(vocabulary)?;
//!
//! let encoded = encoder.transform_with(&table, &ColumnSpec::names(["A", "B"]), 0)?;
//! ```

pub mod encoding;
pub mod error;

pub use encoding::{
    CategoricalEncoder, Code, CodeMapping, CodeMappingParams, ColumnSpec, EncoderConfig,
    HandleMissing, VocabularyMapper, MISSING_CODE,
};
pub use error::{PreprocessingError, Result};
