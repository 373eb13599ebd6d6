//! Page config loading and template rendering for the host page.

use std::fs;
use std::path::Path;

use rust_embed::Embed;
use serde::Deserialize;
use serde_yml::Value;
use signers_wall::WallConfig;
use yaml_merge_keys::merge_keys_serde_yml;

pub const OUTPUT_FILE: &str = "index.html";

const BUILTIN_TEMPLATE: &str = "index.html";

#[derive(Embed)]
#[folder = "templates"]
struct Templates;

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct PageConfig {
    pub title: String,
    pub lang: String,

    /// URL of the wasm-bindgen generated JS module.
    pub script: String,

    /// Passed through to the page as `window.wallOfSignersConfig`.
    pub wall: WallConfig,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: "Wall of Signers".to_string(),
            lang: "en".to_string(),
            script: "./pkg/signers_wall.js".to_string(),
            wall: WallConfig::default(),
        }
    }
}

impl PageConfig {
    pub fn load(path: &Path) -> Result<Self, String> {
        let source = fs::read_to_string(path).map_err(|err| {
            format!("failed to read page config '{}': {}", path.display(), err)
        })?;

        Self::parse(&source)
            .map_err(|err| format!("{} in '{}'", err, path.display()))
    }

    pub fn parse(source: &str) -> Result<Self, String> {
        let raw: Value = serde_yml::from_str(source)
            .map_err(|err| format!("failed to parse page config: {}", err))?;

        let merged = merge_keys_serde_yml(raw).map_err(|err| {
            format!("failed to process YAML merge keys: {}", err)
        })?;

        let mut config: Self = serde_yml::from_value(merged)
            .map_err(|err| format!("failed to decode page config: {}", err))?;

        config.wall = config.wall.normalized();
        Ok(config)
    }
}

pub fn builtin_template() -> Result<String, String> {
    let file = Templates::get(BUILTIN_TEMPLATE).ok_or_else(|| {
        format!("built-in template '{}' is missing", BUILTIN_TEMPLATE)
    })?;

    String::from_utf8(file.data.into_owned()).map_err(|err| {
        format!("built-in template is not valid UTF-8: {}", err)
    })
}

/// Substitutes `{{ title }}`, `{{ lang }}`, `{{ script }}` and
/// `{{ config }}`. Any other placeholder is an error.
///
/// `title` and `lang` are HTML text. `script` and `config` land inside a
/// `<script>` element and are emitted as JS literals, quotes included.
pub fn render_template(
    template: &str,
    config: &PageConfig,
) -> Result<String, String> {
    let wall_json = serde_json::to_string(&config.wall)
        .map_err(|err| format!("failed to serialize wall config: {}", err))?;
    let script_json = serde_json::to_string(&config.script)
        .map_err(|err| format!("failed to serialize script url: {}", err))?;

    let mut out = String::with_capacity(template.len() + wall_json.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let end = after
            .find("}}")
            .ok_or_else(|| "unclosed '{{' in template".to_string())?;

        match after[..end].trim() {
            "title" => out.push_str(&escape_html(&config.title)),
            "lang" => out.push_str(&escape_html(&config.lang)),
            "script" => out.push_str(&escape_script(&script_json)),
            "config" => out.push_str(&escape_script(&wall_json)),
            other => {
                return Err(format!(
                    "unknown placeholder '{}' in template",
                    other
                ));
            }
        }

        rest = &after[end + 2..];
    }

    out.push_str(rest);
    Ok(out)
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

// JSON inlined in a <script> must not be able to close the element.
fn escape_script(json: &str) -> String {
    json.replace("</", "<\\/")
}
