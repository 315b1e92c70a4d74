// SPDX-License-Identifier: MIT

//! filedex: recursive file inventory into a fresh SQLite database
//!
//! Walks a directory tree with an explicit work stack, classifies each file
//! by extension into one of five fixed categories, and bulk-inserts the
//! inventory into a freshly created SQLite file in a single transaction.

pub mod classifier;
pub mod db;
pub mod error;
pub mod scanner;

pub use error::{FiledexError, Result};
