//! Declaration matchers over scrubbed source text
//!
//! Two independent matchers: one for per-suite `test_<suite>__<short>`
//! functions, one for global `clay_on_<event>` callbacks. Both expect text
//! that already went through [`super::scrub`] and only recognize the exact
//! no-argument `void f(void) {` shape at the start of a line.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::warn;

use crate::registry::{Event, Suite, TestDecl};

static EVENT_CB: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^(void\s+clay_on_(\w+)\(\s*void\s*\))\s*\{")
        .expect("INVARIANT: event callback pattern is valid")
});

/// Find the suite declared by `suite_name` in `text`.
///
/// The reserved short names `initialize` and `cleanup` become the suite's
/// hooks instead of ordinary tests; on a duplicate hook the first match wins
/// and a warning is logged. Returns `None` when the unit contributes no
/// ordinary test, even if it defined hooks.
pub fn match_suite(suite_name: &str, text: &str) -> Option<Suite> {
    // Canonical names come from arbitrary file names; escape them so a
    // metacharacter cannot corrupt (or crash) the suite pattern.
    let pattern = format!(
        r"(?m)^(void\s+(test_{}__(\w+))\(\s*void\s*\))\s*\{{",
        regex::escape(suite_name)
    );
    let re = Regex::new(&pattern).expect("INVARIANT: escaped suite pattern is valid");

    let mut initialize: Option<TestDecl> = None;
    let mut cleanup: Option<TestDecl> = None;
    let mut tests = Vec::new();

    for caps in re.captures_iter(text) {
        let decl = TestDecl {
            declaration: caps[1].to_string(),
            symbol: caps[2].to_string(),
            short_name: caps[3].to_string(),
        };

        match decl.short_name.as_str() {
            "initialize" => keep_first(&mut initialize, decl, suite_name),
            "cleanup" => keep_first(&mut cleanup, decl, suite_name),
            _ => tests.push(decl),
        }
    }

    if tests.is_empty() {
        return None;
    }

    // stable sort, decoupling output order from match order
    tests.sort_by(|a, b| a.short_name.cmp(&b.short_name));

    Some(Suite {
        name: suite_name.to_string(),
        initialize,
        cleanup,
        tests,
    })
}

fn keep_first(slot: &mut Option<TestDecl>, decl: TestDecl, suite: &str) {
    match slot {
        Some(kept) => warn!(
            suite,
            hook = %decl.short_name,
            keeping = %kept.symbol,
            "duplicate lifecycle hook; first definition wins"
        ),
        None => *slot = Some(decl),
    }
}

/// Find every recognized `clay_on_<event>` override in `text`.
/// Unrecognized event names are ignored.
pub fn match_events(text: &str) -> Vec<(Event, String)> {
    EVENT_CB
        .captures_iter(text)
        .filter_map(|caps| Event::from_name(&caps[2]).map(|ev| (ev, caps[1].to_string())))
        .collect()
}
