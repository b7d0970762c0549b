//! IO module for format-specific reading and writing operations.
//!
//! - `csv` - the location table and trend exports (polars)
//! - `json` - shelter/earthquake records and lenient field decoding (serde_json)

pub(crate) mod csv;
pub(crate) mod json;

pub(crate) use csv::*;
pub(crate) use json::*;
