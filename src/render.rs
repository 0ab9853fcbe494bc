// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! View rendering.
//!
//! Two template files are loaded once at startup: `layout.html` (the page
//! shell, with a `{{content}}` slot) and `index.html` (the view body for
//! all three modes). Rendering substitutes `{{key}}` placeholders from a
//! per-request field map: string fields are HTML-escaped, everything else
//! is embedded as raw JSON for the page script.

use crate::error::AppError;
use serde_json::Value;
use std::fs;

/// Which view the renderer is producing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Index,
    Success,
    Failure,
}

impl ViewMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ViewMode::Index => "index",
            ViewMode::Success => "success",
            ViewMode::Failure => "failure",
        }
    }
}

/// Per-request map of named fields passed to the renderer.
pub type ViewData = serde_json::Map<String, Value>;

/// Compiled view templates, loaded once and shared read-only.
pub struct Templates {
    layout: String,
    view: String,
}

impl Templates {
    /// Load the default template files from the working directory.
    pub fn load() -> Result<Self, AppError> {
        Self::from_files("layout.html", "index.html")
    }

    pub fn from_files(layout_path: &str, view_path: &str) -> Result<Self, AppError> {
        let layout = fs::read_to_string(layout_path)
            .map_err(|e| AppError::Template(format!("{}: {}", layout_path, e)))?;
        let view = fs::read_to_string(view_path)
            .map_err(|e| AppError::Template(format!("{}: {}", view_path, e)))?;
        Ok(Self::from_parts(layout, view))
    }

    /// Build templates from in-memory strings. Used by tests.
    pub fn from_parts(layout: String, view: String) -> Self {
        Self { layout, view }
    }

    /// Render the view body into the layout's `{{content}}` slot,
    /// substituting `data` fields in both.
    ///
    /// Substitution happens before the splice, so field values are never
    /// re-scanned for placeholders.
    pub fn render(&self, data: &ViewData) -> String {
        let body = substitute(&self.view, data);
        let page = substitute(&self.layout, data);
        page.replace("{{content}}", &body)
    }
}

/// Replace each `{{key}}` with the matching field value. Unknown keys are
/// left in place (the layout's `{{content}}` slot relies on this).
fn substitute(template: &str, data: &ViewData) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];

        let Some(end) = after.find("}}") else {
            out.push_str("{{");
            rest = after;
            continue;
        };

        let key = after[..end].trim();
        match data.get(key) {
            Some(Value::String(text)) => {
                out.push_str(&html_escape::encode_double_quoted_attribute(text));
            }
            Some(value) => out.push_str(&encode_json(value)),
            None => {
                out.push_str("{{");
                out.push_str(&after[..end]);
                out.push_str("}}");
            }
        }
        rest = &after[end + 2..];
    }

    out.push_str(rest);
    out
}

/// Serialize a JSON field for embedding inside a `<script>` block.
fn encode_json(value: &Value) -> String {
    let json = value.to_string();
    // keep "</script>" inside string values from terminating the block
    json.replace("</", "<\\/")
}
