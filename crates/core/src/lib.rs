//! Core library for bruconv
//!
//! This crate is the **Functional Core** of bruconv: it turns a parsed Insomnia
//! v5 export into a plan of directories and files for a Bruno collection,
//! without performing any I/O. The `bruconv` binary is the Imperative Shell
//! that reads the export, runs the plan against the filesystem and reports.
//!
//! # Module Organization
//!
//! - [`document`]: typed accessors over the loosely-typed YAML tree
//! - [`collection`]: item classification and the folder/request tree walk
//! - [`request`]: `.bru` request rendering, body type and header handling
//! - [`environment`]: sub-environment `vars` rendering
//! - [`bruno`]: the `bruno.json` collection descriptor
//! - [`convert`]: the whole-document [`ConversionPlan`](convert::ConversionPlan)
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use bruconv_core::convert::plan_conversion;
//! use bruconv_core::document::parse_document;
//!
//! let document = parse_document(&export_text)?;
//! let plan = plan_conversion(&document, "My API")?;
//!
//! for artifact in &plan.artifacts {
//!     println!("{}", artifact.path().display());
//! }
//! ```

pub mod bruno;
pub mod collection;
pub mod convert;
pub mod document;
pub mod environment;
pub mod request;

/// File extension of Bruno request and environment files
pub const BRU_EXTENSION: &str = "bru";
