//! Route key derivation and the insertion-ordered route table.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A URL-path-like key derived from a descriptor's location.
///
/// Bracketed path segments become parameter tokens: `users/[id]` derives
/// `/users/:id`. A descriptor sitting directly in the pages directory
/// derives the empty key, i.e. the root route.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RouteKey(String);

impl RouteKey {
    /// Derive a route key from a descriptor path relative to the project
    /// root (`/`-separated), given the pages directory prefix and the
    /// descriptor file name.
    pub fn derive(rel_path: &str, pages_dir: &str, file_name: &str) -> Self {
        let trimmed = rel_path.strip_prefix(pages_dir).unwrap_or(rel_path);
        let suffix = format!("/{file_name}");
        let trimmed = trimmed.strip_suffix(&suffix).unwrap_or(trimmed);
        Self(rewrite_params(trimmed))
    }

    /// The key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is the root route (empty key).
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for RouteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Rewrite every `[name]` segment to `:name`, leaving everything else
/// untouched. A bracket pair with an empty name stays literal.
fn rewrite_params(template: &str) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('[') {
        let Some(close) = rest[open + 1..].find(']') else {
            break;
        };
        if close == 0 {
            out.push_str(&rest[..open + 1]);
            rest = &rest[open + 1..];
            continue;
        }
        out.push_str(&rest[..open]);
        out.push(':');
        out.push_str(&rest[open + 1..open + 1 + close]);
        rest = &rest[open + 2 + close..];
    }
    out.push_str(rest);
    out
}

/// Insertion-ordered map from route key to import identifier.
///
/// Built fresh on every generation pass. A duplicate key keeps its
/// original position but is rebound to the later identifier, so the
/// emitted table never contains the same route twice.
#[derive(Debug, Default)]
pub struct RouteTable {
    entries: IndexMap<RouteKey, String>,
}

impl RouteTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a route binding; returns the displaced identifier when the
    /// key was already present (last-discovered wins).
    pub fn insert(&mut self, route: RouteKey, ident: String) -> Option<String> {
        self.entries.insert(route, ident)
    }

    /// Iterate bindings in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&RouteKey, &str)> {
        self.entries.iter().map(|(k, v)| (k, v.as_str()))
    }

    /// Number of distinct routes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
