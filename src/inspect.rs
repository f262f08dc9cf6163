//! Human-readable multi-line dump of JSON values
//!
//! Keys are printed bare when they are identifiers, strings are single
//! quoted, arrays of scalars stay on one line and every object opens a new
//! indentation level, e.g.
//!
//! ```text
//! {
//!   publicKey: 'deployer',
//!   update: {
//!     appState: [ [ 0, '9' ] ]
//!   }
//! }
//! ```

use console::{style, StyledObject};
use serde_json::Value;
use std::fmt::Write;

const INDENT: &str = "  ";

/// Renders `value`, with ANSI colors when `colors` is set
pub fn inspect(value: &Value, colors: bool) -> String {
    let mut out = String::new();
    Inspector { colors }.write_value(&mut out, value, 0);
    out
}

struct Inspector {
    colors: bool,
}

impl Inspector {
    fn write_value(&self, out: &mut String, value: &Value, depth: usize) {
        match value {
            Value::Null => self.paint(out, style("null").bold()),
            Value::Bool(b) => self.paint(out, style(b).yellow()),
            Value::Number(n) => self.paint(out, style(n).yellow()),
            Value::String(s) => self.paint(out, style(quote(s)).green()),
            Value::Array(entries) if entries.is_empty() => out.push_str("[]"),
            Value::Array(entries) if entries.iter().all(is_inline) => {
                out.push_str("[ ");
                for (n, entry) in entries.iter().enumerate() {
                    if n > 0 {
                        out.push_str(", ");
                    }
                    self.write_value(out, entry, depth);
                }
                out.push_str(" ]");
            }
            Value::Array(entries) => {
                out.push_str("[\n");
                for (n, entry) in entries.iter().enumerate() {
                    out.push_str(&INDENT.repeat(depth + 1));
                    self.write_value(out, entry, depth + 1);
                    if n + 1 < entries.len() {
                        out.push(',');
                    }
                    out.push('\n');
                }
                out.push_str(&INDENT.repeat(depth));
                out.push(']');
            }
            Value::Object(map) if map.is_empty() => out.push_str("{}"),
            Value::Object(map) => {
                out.push_str("{\n");
                for (n, (key, val)) in map.iter().enumerate() {
                    let _ = write!(out, "{}{}: ", INDENT.repeat(depth + 1), format_key(key));
                    self.write_value(out, val, depth + 1);
                    if n + 1 < map.len() {
                        out.push(',');
                    }
                    out.push('\n');
                }
                out.push_str(&INDENT.repeat(depth));
                out.push('}');
            }
        }
    }

    fn paint<D: std::fmt::Display>(&self, out: &mut String, styled: StyledObject<D>) {
        let _ = write!(out, "{}", styled.force_styling(self.colors));
    }
}

/// Scalars and arrays of scalars fit on one line
fn is_inline(value: &Value) -> bool {
    match value {
        Value::Object(_) => false,
        Value::Array(entries) => entries.iter().all(|e| !e.is_array() && !e.is_object()),
        _ => true,
    }
}

fn quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', "\\'"))
}

fn format_key(key: &str) -> String {
    let mut chars = key.chars();
    let is_ident = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$');

    if is_ident {
        key.to_string()
    } else {
        quote(key)
    }
}
