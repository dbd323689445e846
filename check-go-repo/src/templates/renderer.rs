//! Template renderer.

use crate::tracking::PathChange;
use handlebars::{no_escape, Handlebars};
use serde_json::{json, Value};

const BODY_TEMPLATE_NAME: &str = "body";

/// Markdown body of the update pull request.
///
/// One section per changed path; unchanged paths are never listed.
pub const BODY_TEMPLATE: &str = r#"{{#each changes}}
{{path}}
last known [{{known}}]({{known_url}})
current    [{{current}}]({{current_url}})
{{#if log}}

```
{{log}}
```
{{/if}}

{{/each}}"#;

/// Creates a configured Handlebars registry.
///
/// The registry is configured with:
/// - No HTML escaping (for markdown output)
/// - Strict mode (catches missing variables)
/// - The built-in PR body template
pub fn create_handlebars_registry() -> Result<Handlebars<'static>, super::TemplateError> {
    let mut hbs = Handlebars::new();

    // Disable HTML escaping for markdown output
    hbs.register_escape_fn(no_escape);

    // Enable strict mode to catch missing variables
    hbs.set_strict_mode(true);

    hbs.register_template_string(BODY_TEMPLATE_NAME, BODY_TEMPLATE)?;

    Ok(hbs)
}

/// Renders the pull request body.
pub struct TemplateRenderer {
    handlebars: Handlebars<'static>,
    commit_url: String,
}

impl TemplateRenderer {
    /// Creates a renderer linking commits under `commit_url`.
    pub fn new(commit_url: impl Into<String>) -> Result<Self, super::TemplateError> {
        Ok(Self {
            handlebars: create_handlebars_registry()?,
            commit_url: commit_url.into(),
        })
    }

    /// Renders the PR body for `changes`.
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub fn render_body(&self, changes: &[PathChange]) -> Result<String, super::TemplateError> {
        let data = self.body_data(changes);
        let rendered = self.handlebars.render(BODY_TEMPLATE_NAME, &data)?;
        Ok(format!("{}\n", rendered.trim()))
    }

    /// Builds the template context for `changes`.
    fn body_data(&self, changes: &[PathChange]) -> Value {
        let changes: Vec<Value> = changes
            .iter()
            .map(|change| {
                json!({
                    "path": change.path.path(),
                    "known": change.known.as_str(),
                    "current": change.current.as_str(),
                    "known_url": self.commit_link(change.known.as_str()),
                    "current_url": self.commit_link(change.current.as_str()),
                    "log": change.log.as_deref().unwrap_or("")
                })
            })
            .collect();

        json!({ "changes": changes })
    }

    fn commit_link(&self, hash: &str) -> String {
        format!("{}{}", self.commit_url, hash)
    }
}
