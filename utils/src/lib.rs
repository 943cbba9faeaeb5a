//! String, list and dictionary operations for tidy.
//!
//! - **`string`**: word capitalization, special-character filtering, truncation
//! - **`list`**: chunking, deduplication, flattening
//! - **`dict`**: merging, key filtering, inversion
//! - **`registry`**: the three named lookup tables over dynamic [`Value`](tidy_types::Value)s
//! - **`toolkit`**: the operations with configured defaults applied
//!
//! Every operation is pure: inputs are borrowed, results are new values.

pub mod dict;
pub mod list;
pub mod registry;
pub mod string;
pub mod toolkit;

pub use registry::{DICT_OPS, LIST_OPS, OpFn, OpTable, STRING_OPS, lookup};
pub use toolkit::Toolkit;
