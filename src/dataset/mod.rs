//! Tabular containers consumed and produced by the encoders.
//!
//! A [`Table`] is a row index plus named, equal-length columns. Encoding reads
//! `Table<Option<V>>` (with `None` as null) and writes `Table<usize>` that keeps
//! the input's row index.
//!
//! # Example
//!
//! ```rust
//! use catconv::dataset::Table;
//!
//! let table = Table::new(vec![
//!     ("A", vec![Some("K"), Some("T"), None]),
//!     ("B", vec![Some("C"), Some("I"), Some("K")]),
//! ])
//! .unwrap();
//!
//! assert_eq!(table.shape(), (3, 2));
//! assert_eq!(table.column("A").unwrap()[2], None);
//! ```

mod table;

pub use self::table::{Column, Table};
