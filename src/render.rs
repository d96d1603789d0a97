//! Renderer: frozen registry + asset store → header and harness text
//!
//! Everything rendered here is a format contract with the clay runtime:
//! the `struct clay_suite` field order, the `_clay_cb_<suite>` array
//! naming, and the `,\n\t` record joins are exactly what the `clay.c`
//! template compiles against. Rendering consumes only the frozen registry
//! and asset text, so it can be exercised with synthetic registries.

use std::collections::HashMap;

use crate::assets::AssetStore;
use crate::error::{GenError, GenResult};
use crate::registry::{Event, FrozenRegistry, Suite, TestDecl};

/// Support modules concatenated ahead of the generated tables, fixed order.
/// The print module variant is appended after these.
const SUPPORT_MODULES: [&str; 3] = ["clay_sandbox.c", "clay_fixtures.c", "clay_fs.c"];

pub struct Renderer<'a> {
    registry: &'a FrozenRegistry,
    assets: &'a dyn AssetStore,
    print_mode: &'a str,
}

impl<'a> Renderer<'a> {
    pub fn new(registry: &'a FrozenRegistry, assets: &'a dyn AssetStore, print_mode: &'a str) -> Self {
        Self {
            registry,
            assets,
            print_mode,
        }
    }

    /// Render the `clay.h` artifact: one sorted `extern` line per unique
    /// declaration, inserted into the header template.
    pub fn render_header(&self) -> GenResult<String> {
        let template = self.assets.fetch("clay.h")?;

        let declarations = self
            .registry
            .externs
            .iter()
            .map(|decl| format!("extern {decl};"))
            .collect::<Vec<_>>()
            .join("\n");

        let mut vars = HashMap::new();
        vars.insert("extern_declarations", declarations);
        substitute(&template, &vars)
    }

    /// Render the `clay_main.c` artifact: support modules, event no-op
    /// macros, per-suite callback arrays, the suite descriptor table, and
    /// the aggregate counts.
    pub fn render_harness(&self) -> GenResult<String> {
        let template = self.assets.fetch("clay.c")?;

        let callbacks = self
            .registry
            .suites
            .iter()
            .map(render_callback_array)
            .collect::<Vec<_>>()
            .join("\n");

        let suite_records = self
            .registry
            .suites
            .iter()
            .map(render_suite_record)
            .collect::<Vec<_>>()
            .join(",\n\t");

        let mut vars = HashMap::new();
        vars.insert("clay_modules", self.concat_modules()?);
        vars.insert("clay_callbacks", callbacks);
        vars.insert("clay_suites", suite_records);
        vars.insert("clay_suite_count", self.registry.suite_count().to_string());
        vars.insert("clay_callback_count", self.registry.callback_count.to_string());
        vars.insert("clay_event_overrides", self.render_event_overrides());
        substitute(&template, &vars)
    }

    fn concat_modules(&self) -> GenResult<String> {
        let mut texts = Vec::with_capacity(SUPPORT_MODULES.len() + 1);
        for name in SUPPORT_MODULES {
            texts.push(self.assets.fetch(name)?.into_owned());
        }
        let print_module = format!("clay_print_{}.c", self.print_mode);
        texts.push(self.assets.fetch(&print_module)?.into_owned());
        Ok(texts.join("\n"))
    }

    /// A no-op macro for every lifecycle event the user did not override,
    /// so generated code can call every hook unconditionally.
    fn render_event_overrides(&self) -> String {
        Event::ALL
            .into_iter()
            .filter(|ev| !self.registry.is_overridden(*ev))
            .map(|ev| format!("#define clay_on_{}() /* nop */", ev.as_str()))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn render_cb(cb: &TestDecl) -> String {
    format!("{{\"{}\", &{}}}", cb.short_name, cb.symbol)
}

fn render_callback_array(suite: &Suite) -> String {
    let entries = suite
        .tests
        .iter()
        .map(render_cb)
        .collect::<Vec<_>>()
        .join(",\n\t");

    format!(
        "static const struct clay_func _clay_cb_{}[] = {{\n    {}\n}};",
        suite.name, entries
    )
}

fn render_suite_record(suite: &Suite) -> String {
    let initialize = suite
        .initialize
        .as_ref()
        .map(render_cb)
        .unwrap_or_else(|| "{NULL, NULL}".to_string());
    let cleanup = suite
        .cleanup
        .as_ref()
        .map(render_cb)
        .unwrap_or_else(|| "{NULL, NULL}".to_string());

    format!(
        "{{\n        \"{}\",\n        {},\n        {},\n        _clay_cb_{}, {}\n    }}",
        // canonical `_` separators display as a C++-style namespace path
        suite.name.replace('_', "::"),
        initialize,
        cleanup,
        suite.name,
        suite.test_count()
    )
}

/// Literal `${name}` substitution. No control flow, no expressions; a
/// placeholder without a value is a fatal error. A lone `$` that does not
/// open a placeholder passes through verbatim.
fn substitute(template: &str, vars: &HashMap<&str, String>) -> GenResult<String> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("${") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find('}') {
            Some(end) => {
                let name = &after[..end];
                let value = vars.get(name).ok_or_else(|| GenError::UnresolvedPlaceholder {
                    name: name.to_string(),
                })?;
                out.push_str(value);
                rest = &after[end + 1..];
            }
            None => {
                // unterminated `${`: literal text
                out.push_str(&rest[start..]);
                return Ok(out);
            }
        }
    }

    out.push_str(rest);
    Ok(out)
}
