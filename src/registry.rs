//! Suite and declaration registry
//!
//! The registry is a pure accumulator: the matchers hand it fully-formed
//! suites and event overrides, and it enforces the aggregate invariants
//! (unique suite names, append-only declarations). `freeze` closes the
//! registry and produces the sorted view the renderer consumes.
//!
//! Two independent orderings make the output reproducible regardless of
//! filesystem enumeration order: ordinary tests are sorted by short name
//! before a suite is registered (see `scan::matchers`), and freezing sorts
//! suite names and extern declarations lexicographically.

use std::collections::BTreeMap;

use crate::error::{GenError, GenResult};

/// One matched test or lifecycle function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestDecl {
    /// Full signature text, re-declared `extern` in the generated header
    pub declaration: String,
    /// The C symbol, e.g. `test_math_add__overflow`
    pub symbol: String,
    /// Suffix after the double underscore, e.g. `overflow`
    pub short_name: String,
}

/// A named group of test functions discovered in one source unit.
#[derive(Debug, Clone)]
pub struct Suite {
    /// Canonical name: path segments and file stem joined with `_`
    pub name: String,
    /// Optional setup hook (`test_<suite>__initialize`)
    pub initialize: Option<TestDecl>,
    /// Optional teardown hook (`test_<suite>__cleanup`)
    pub cleanup: Option<TestDecl>,
    /// Ordinary tests, sorted by short name. Never empty: a unit with zero
    /// ordinary tests is dropped before a `Suite` is ever built.
    pub tests: Vec<TestDecl>,
}

impl Suite {
    pub fn test_count(&self) -> usize {
        self.tests.len()
    }
}

/// Global lifecycle hooks user code may override with `clay_on_<event>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Init,
    Shutdown,
    Test,
    Suite,
}

impl Event {
    /// Fixed enumeration order, also the rendering order of no-op macros.
    pub const ALL: [Event; 4] = [Event::Init, Event::Shutdown, Event::Test, Event::Suite];

    pub fn as_str(self) -> &'static str {
        match self {
            Event::Init => "init",
            Event::Shutdown => "shutdown",
            Event::Test => "test",
            Event::Suite => "suite",
        }
    }

    /// Parse the `<event>` part of a `clay_on_<event>` symbol.
    /// Unrecognized names yield `None` and are ignored by the caller.
    pub fn from_name(name: &str) -> Option<Event> {
        Event::ALL.into_iter().find(|ev| ev.as_str() == name)
    }
}

/// Accumulator for one generation run. Append-only during the scan phase;
/// call [`Registry::freeze`] before rendering.
#[derive(Debug, Default)]
pub struct Registry {
    suites: BTreeMap<String, Suite>,
    declarations: Vec<String>,
    overridden: Vec<Event>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a suite under its canonical name.
    ///
    /// Suite names are unique by construction (the driver derives them from
    /// distinct paths), so a collision is reported as an error rather than
    /// silently overwriting.
    pub fn register(&mut self, suite: Suite) -> GenResult<()> {
        if self.suites.contains_key(&suite.name) {
            return Err(GenError::DuplicateSuite { name: suite.name });
        }

        for hook in [&suite.initialize, &suite.cleanup].into_iter().flatten() {
            self.declarations.push(hook.declaration.clone());
        }
        for test in &suite.tests {
            self.declarations.push(test.declaration.clone());
        }

        self.suites.insert(suite.name.clone(), suite);
        Ok(())
    }

    /// Record a user override of a global lifecycle event.
    pub fn register_event(&mut self, event: Event, declaration: &str) {
        self.declarations.push(declaration.to_string());
        if !self.overridden.contains(&event) {
            self.overridden.push(event);
        }
    }

    /// True when no suite has been registered yet.
    pub fn is_empty(&self) -> bool {
        self.suites.is_empty()
    }

    /// Close the registry: deduplicate and sort declarations, order suites
    /// by name, and compute the aggregate counts the harness template needs.
    pub fn freeze(self) -> FrozenRegistry {
        let mut externs = self.declarations;
        externs.sort();
        externs.dedup();

        // BTreeMap iteration is already name-ordered
        let suites: Vec<Suite> = self.suites.into_values().collect();
        let callback_count = suites.iter().map(Suite::test_count).sum();

        FrozenRegistry {
            externs,
            suites,
            overridden: self.overridden,
            callback_count,
        }
    }
}

/// Immutable, sorted view of a completed scan. The renderer consumes this
/// and nothing else, which keeps it testable with synthetic registries.
#[derive(Debug)]
pub struct FrozenRegistry {
    /// Unique declaration texts, sorted lexicographically
    pub externs: Vec<String>,
    /// Suites sorted by canonical name
    pub suites: Vec<Suite>,
    /// Total number of ordinary tests across all suites
    pub callback_count: usize,
    overridden: Vec<Event>,
}

impl FrozenRegistry {
    pub fn suite_count(&self) -> usize {
        self.suites.len()
    }

    pub fn is_overridden(&self, event: Event) -> bool {
        self.overridden.contains(&event)
    }
}
