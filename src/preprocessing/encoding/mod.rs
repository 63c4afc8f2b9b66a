//! Categorical feature encoding.
//!
//! This module converts categorical values into dense integer codes and,
//! optionally, into fixed-width binary digits spread over several columns.
//!
//! # Available Encoders
//!
//! ## VocabularyMapper
//! Learns the value-to-code mapping. Code 0 is reserved for missing values;
//! other values get consecutive codes in first-occurrence order.
//!
//! ```ignore
//! // fit: ["T", "K", "9", "C", "I"]
//! // codes: MISSING=0, T=1, K=2, 9=3, C=4, I=5   (binary: 000 .. 101)
//! ```
//!
//! ## CategoricalEncoder
//! Applies a mapper to named table columns.
//!
//! ```ignore
//! // binary = false: A=[K, T, 9] -> A=[2, 1, 3]
//! // binary = true:  A=[K, T, 9] -> A_0=[0, 0, 0], A_1=[1, 0, 1], A_2=[0, 1, 1]
//! ```

pub mod binary;
mod encoder;
mod mapper;
mod vocabulary;

pub use encoder::{CategoricalEncoder, ColumnSpec, EncoderConfig, FIT_TRANSFORM_COLUMN};
pub use mapper::{Code, CodeMapping, CodeMappingParams, VocabularyMapper, MISSING_CODE};
pub use vocabulary::Vocabulary;

/// Strategy for null and unseen cells during transform.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum HandleMissing {
    /// Encode as the missing sentinel (code 0).
    #[default]
    Sentinel,
    /// Write the caller's `fillna` value instead of a code.
    Fill,
}
