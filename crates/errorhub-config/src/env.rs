use std::sync::OnceLock;

use regex::{Captures, Regex};

fn placeholder() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // `{{ env.NAME }}` with an optional `| default("value")`
    RE.get_or_init(|| {
        Regex::new(r#"\{\{\s*env\.([A-Za-z_][A-Za-z0-9_]*)\s*(?:\|\s*default\("([^"]*)"\)\s*)?\}\}"#)
            .expect("placeholder pattern is valid")
    })
}

/// Substitute `{{ env.NAME }}` placeholders with environment values
///
/// A placeholder whose variable is unset uses its `default("..")` when
/// present and is an error otherwise. Comment lines are left alone so a
/// commented-out setting never requires its variable.
pub fn expand_env(input: &str) -> Result<String, String> {
    let mut lines = Vec::new();

    for line in input.split('\n') {
        if line.trim_start().starts_with('#') {
            lines.push(line.to_owned());
            continue;
        }

        let mut missing = None;
        let expanded = placeholder().replace_all(line, |caps: &Captures<'_>| {
            let name = &caps[1];
            match (std::env::var(name), caps.get(2)) {
                (Ok(value), _) => value,
                (Err(_), Some(default)) => default.as_str().to_owned(),
                (Err(_), None) => {
                    missing.get_or_insert_with(|| name.to_owned());
                    String::new()
                }
            }
        });

        if let Some(name) = missing {
            return Err(format!("environment variable `{name}` is not set"));
        }
        lines.push(expanded.into_owned());
    }

    Ok(lines.join("\n"))
}
