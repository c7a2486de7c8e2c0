//! Corpus extraction
//!
//! This module provides the I/O adapter that turns a directory of HTML
//! documents into the raw link mapping consumed by the corpus builder.

pub mod html;
