#![forbid(unsafe_code)]
//! Clay Test Harness Generator
//!
//! Clay turns a directory tree of C test sources into a compilable harness:
//! it scans for `test_<suite>__<name>` functions and `clay_on_<event>`
//! callbacks, builds a deterministic registry of suites and declarations,
//! and renders `clay.h` plus `clay_main.c` from embedded templates.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **True invariants**: If a panic represents a generator bug (logic error), use
//!   `.expect("INVARIANT: reason")` with a clear explanation.

pub mod assets;
pub mod builder;
pub mod cli;
pub mod error;
pub mod registry;
pub mod render;
pub mod scan;

pub use assets::{AssetStore, DirAssets, EmbeddedAssets};
pub use builder::HarnessBuilder;
pub use error::GenError;
pub use registry::{Event, FrozenRegistry, Registry, Suite, TestDecl};
