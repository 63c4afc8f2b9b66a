//! # catconv
//!
//! Converts categorical values in tabular columns into dense integer codes or
//! fixed-width binary digits, ready to be used as numeric features.
//!
//! ## Core Design Principles
//!
//! - **Stable codes**: the missing sentinel is always code 0; every other value
//!   gets the next code in first-occurrence order, so fitting the same input
//!   twice yields the same mapping.
//! - **Binary expansion**: with binary mode on, each code is written with
//!   `ceil(log2(n))` digits and each digit becomes its own column.
//! - **Explicit state**: transforming before fitting is an error, not a panic.
//!
//! ## Quick Start
//!
//! ```rust
//! use catconv::dataset::Table;
//! use catconv::preprocessing::CategoricalEncoder;
//!
//! let mut encoder = CategoricalEncoder::new(true);
//! encoder.fit(["T", "K", "9", "C", "I"]).unwrap();
//!
//! let table = Table::new(vec![("A", vec![Some("K"), Some("T"), None])]).unwrap();
//! let encoded = encoder.transform(&table).unwrap();
//!
//! // K = 2 = 010, T = 1 = 001, null = 0 = 000
//! assert_eq!(encoded.column("A_1"), Some(&[1, 0, 0][..]));
//! assert_eq!(encoded.column("A_2"), Some(&[0, 1, 0][..]));
//! ```
//!
//! ## Module Structure
//!
//! - `dataset` — In-memory tables (`Table`) read and written by the encoders
//! - `preprocessing` — Vocabulary fitting, code lookup and table encoding

/// In-memory tabular data.
pub mod dataset;

/// Categorical encoders.
pub mod preprocessing;

pub use dataset::Table;
pub use preprocessing::{CategoricalEncoder, PreprocessingError, VocabularyMapper};
