//! Asset store: template and support-module text
//!
//! The renderer never touches the filesystem; every piece of boilerplate
//! (the `clay.h` / `clay.c` templates and the runtime support modules) goes
//! through the [`AssetStore`] trait. Two backings exist:
//!
//! - [`EmbeddedAssets`]: the copies compiled into the binary, the default.
//! - [`DirAssets`]: reads from a directory given via `--clay-path`, for
//!   hacking on the runtime sources without rebuilding the generator.
//!
//! Lookups are deterministic for a given backing; the logical name set is
//! closed (unknown names are a fatal [`GenError::MissingAsset`]).

use std::borrow::Cow;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::error::{GenError, GenResult};

const EMBEDDED: [(&str, &str); 7] = [
    ("clay.c", include_str!("../assets/clay.c")),
    ("clay.h", include_str!("../assets/clay.h")),
    ("clay_fixtures.c", include_str!("../assets/clay_fixtures.c")),
    ("clay_fs.c", include_str!("../assets/clay_fs.c")),
    ("clay_print_default.c", include_str!("../assets/clay_print_default.c")),
    ("clay_print_tap.c", include_str!("../assets/clay_print_tap.c")),
    ("clay_sandbox.c", include_str!("../assets/clay_sandbox.c")),
];

/// Read-only mapping from logical asset name to literal text.
pub trait AssetStore {
    fn fetch(&self, name: &str) -> GenResult<Cow<'_, str>>;
}

/// Assets embedded at compile time.
#[derive(Debug, Default)]
pub struct EmbeddedAssets;

impl AssetStore for EmbeddedAssets {
    fn fetch(&self, name: &str) -> GenResult<Cow<'_, str>> {
        EMBEDDED
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, text)| Cow::Borrowed(*text))
            .ok_or_else(|| GenError::MissingAsset {
                name: name.to_string(),
            })
    }
}

/// Assets read from an external directory (`--clay-path`).
#[derive(Debug)]
pub struct DirAssets {
    root: PathBuf,
}

impl DirAssets {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl AssetStore for DirAssets {
    fn fetch(&self, name: &str) -> GenResult<Cow<'_, str>> {
        match fs::read_to_string(self.root.join(name)) {
            Ok(text) => Ok(Cow::Owned(text)),
            Err(err) if err.kind() == ErrorKind::NotFound => Err(GenError::MissingAsset {
                name: name.to_string(),
            }),
            Err(err) => Err(GenError::Io(err)),
        }
    }
}
