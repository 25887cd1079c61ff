//! DeepL translation gateway.
//!
//! Validates translation requests from the web client, forwards them to DeepL
//! and maps DeepL's answers and failures onto a stable JSON contract.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;
pub mod translate;
