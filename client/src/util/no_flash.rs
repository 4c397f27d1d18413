//! Blocking head script that applies the theme before first paint.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server renders a non-personalized root attribute. This script runs
//! synchronously in `<head>`, reads the same preference slot as
//! `BrowserStore`, evaluates `prefers-color-scheme`, and rewrites the root
//! attribute before the body is painted. Any failure leaves the server value.

#[cfg(test)]
#[path = "no_flash_test.rs"]
mod no_flash_test;

use crate::state::theme::{ResolvedTheme, ThemeAttribute, ThemeMode, ThemeOptions};
use crate::util::color_scheme::DARK_SCHEME_QUERY;

/// Build the inline bootstrap script for `options`.
pub fn bootstrap_script(options: &ThemeOptions) -> String {
    let key = js_string(&options.storage_key);
    let default_mode = js_string(options.default_mode.as_str());
    let modes = ThemeMode::ALL.iter().map(|m| js_string(m.as_str())).collect::<Vec<_>>().join(",");
    let system = js_string(ThemeMode::System.as_str());
    let query = js_string(DARK_SCHEME_QUERY);
    let light = js_string(ResolvedTheme::Light.as_str());
    let dark = js_string(ResolvedTheme::Dark.as_str());
    let apply = apply_statement(options.attribute);

    format!(
        "(function(){{var d=document.documentElement;var c={default_mode};\
try{{var raw=localStorage.getItem({key});if(raw){{var p=JSON.parse(raw);\
if(p!==null&&[{modes}].indexOf(p.chosen)!==-1){{c=p.chosen;}}}}}}catch(e){{}}\
var r=c;if(c==={system}){{r={light};try{{if(window.matchMedia({query}).matches){{r={dark};}}}}catch(e){{}}}}\
{apply}}})();"
    )
}

fn apply_statement(attribute: ThemeAttribute) -> String {
    let light = js_string(ResolvedTheme::Light.as_str());
    let dark = js_string(ResolvedTheme::Dark.as_str());
    match attribute {
        ThemeAttribute::Class => format!("d.classList.remove({light},{dark});d.classList.add(r);"),
        ThemeAttribute::DataTheme => format!("d.setAttribute({},r);", js_string(attribute.name())),
    }
}

/// Quote `raw` as a JavaScript string literal safe to inline in `<script>`.
fn js_string(raw: &str) -> String {
    serde_json::to_string(raw).map_or_else(|_| "\"\"".to_owned(), |quoted| script_safe(&quoted))
}

/// Escape `<` in serialized JSON so the text cannot close its `<script>`.
pub(crate) fn script_safe(json: &str) -> String {
    json.replace('<', "\\u003c")
}
