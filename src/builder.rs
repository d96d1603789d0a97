//! Harness builder: drives one generation run
//!
//! Walks a directory tree of `*.c` test sources, feeds each file through
//! the scrubber and both matchers, accumulates the registry, and writes
//! the rendered `clay_main.c` + `clay.h` back into the scanned root.
//!
//! Phase ordering matters: scanning completes and the registry is frozen
//! before rendering begins, and both artifacts are rendered in memory
//! before either file is written, so a failure never leaves a half-written
//! harness behind.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::assets::AssetStore;
use crate::error::{GenError, GenResult};
use crate::registry::Registry;
use crate::render::Renderer;
use crate::scan;

/// A discovered test file: canonical suite name plus its path.
struct SourceUnit {
    name: String,
    path: PathBuf,
}

pub struct HarnessBuilder<'a> {
    assets: &'a dyn AssetStore,
    print_mode: String,
}

impl<'a> HarnessBuilder<'a> {
    pub fn new(assets: &'a dyn AssetStore, print_mode: impl Into<String>) -> Self {
        Self {
            assets,
            print_mode: print_mode.into(),
        }
    }

    /// Scan `root` and write `clay_main.c` and `clay.h` into it.
    pub fn generate(&self, root: &Path) -> GenResult<()> {
        let registry = self.scan(root)?;
        let frozen = registry.freeze();
        let renderer = Renderer::new(&frozen, self.assets, &self.print_mode);

        let harness = renderer.render_harness()?;
        let header = renderer.render_header()?;

        fs::write(root.join("clay_main.c"), harness)?;
        fs::write(root.join("clay.h"), header)?;

        println!("Written Clay suite to \"{}\"", root.display());
        Ok(())
    }

    /// Scan phase: collect and process every source unit under `root`.
    ///
    /// Fails with [`GenError::NoSuites`] when no unit contributed a suite,
    /// before any output is written.
    pub fn scan(&self, root: &Path) -> GenResult<Registry> {
        println!("Loading test suites...");

        let mut units = Vec::new();
        collect_units(root, &[], &mut units)?;

        let mut registry = Registry::new();
        for unit in &units {
            self.process_unit(&mut registry, unit)?;
        }

        if registry.is_empty() {
            return Err(GenError::NoSuites {
                root: root.to_path_buf(),
            });
        }
        Ok(registry)
    }

    fn process_unit(&self, registry: &mut Registry, unit: &SourceUnit) -> GenResult<()> {
        let raw = fs::read_to_string(&unit.path)?;
        let text = scan::scrub(&raw);

        for (event, declaration) in scan::match_events(&text) {
            registry.register_event(event, &declaration);
        }

        match scan::match_suite(&unit.name, &text) {
            Some(suite) => {
                println!("  {} ({} tests)", suite.name, suite.test_count());
                registry.register(suite)?;
            }
            None => debug!(unit = %unit.name, "no tests in unit"),
        }
        Ok(())
    }
}

/// Recursively collect `*.c` files under `dir`. Entries are visited in
/// name order; the registry's sorts are the real determinism guarantee,
/// this just keeps progress output stable too.
fn collect_units(dir: &Path, segments: &[String], out: &mut Vec<SourceUnit>) -> GenResult<()> {
    let mut entries = fs::read_dir(dir)?.collect::<Result<Vec<_>, _>>()?;
    entries.sort_by_key(|entry| entry.file_name());

    for entry in entries {
        let path = entry.path();
        if path.is_dir() {
            let mut child = segments.to_vec();
            child.push(entry.file_name().to_string_lossy().into_owned());
            collect_units(&path, &child, out)?;
        } else if path.extension().is_some_and(|ext| ext == "c") {
            let stem = match path.file_stem() {
                Some(stem) => stem.to_string_lossy().into_owned(),
                None => continue,
            };
            let name = segments
                .iter()
                .cloned()
                .chain(std::iter::once(stem))
                .collect::<Vec<_>>()
                .join("_");
            out.push(SourceUnit { name, path });
        }
    }
    Ok(())
}
