//! Storefront Route Models
//!
//! Route entries, their path patterns and the views they load.

use serde::{Serialize, Serializer};
use std::{collections::BTreeMap, fmt};

use crate::error::PagesError;

// =============================================================================
// Views
// =============================================================================

/// Page component a route loads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum View {
    /// Product grid shown on the home and listing pages
    ProductListing,
    /// Fallback page for unknown paths
    Error,
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            View::ProductListing => f.write_str("ProductListing"),
            View::Error => f.write_str("Error"),
        }
    }
}

// =============================================================================
// Patterns
// =============================================================================

/// Path pattern of a route.
///
/// Exact patterns match case-insensitively and tolerate one trailing slash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoutePattern {
    /// A literal path such as `/products`
    Exact(String),
    /// Matches any path, capturing it under `param`
    CatchAll {
        /// Name of the captured parameter
        param: String,
    },
}

impl RoutePattern {
    /// Parses a pattern source.
    ///
    /// `/:name(.*)` is a catch-all capturing into `name`; anything else that
    /// starts with `/` is an exact path.
    pub fn parse(source: &str) -> Result<Self, PagesError> {
        if let Some(param) = source
            .strip_prefix("/:")
            .and_then(|rest| rest.strip_suffix("(.*)"))
        {
            let valid = !param.is_empty()
                && param.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
            if !valid {
                return Err(PagesError::InvalidPattern(source.to_string()));
            }
            return Ok(Self::catch_all(param));
        }

        if source.starts_with('/') && !source.contains(':') {
            return Ok(Self::exact(source));
        }

        Err(PagesError::InvalidPattern(source.to_string()))
    }

    /// Builds an exact pattern.
    pub fn exact(path: impl Into<String>) -> Self {
        Self::Exact(path.into())
    }

    /// Builds a catch-all pattern.
    pub fn catch_all(param: impl Into<String>) -> Self {
        Self::CatchAll {
            param: param.into(),
        }
    }

    /// Whether this pattern matches every path.
    pub fn is_catch_all(&self) -> bool {
        matches!(self, Self::CatchAll { .. })
    }

    /// Matches a normalized path, returning captured params on success.
    pub(crate) fn matches(&self, path: &str) -> Option<BTreeMap<String, String>> {
        match self {
            Self::Exact(pattern) => normalize_path(pattern)
                .eq_ignore_ascii_case(path)
                .then(BTreeMap::new),
            Self::CatchAll { param } => {
                let captured = path.trim_start_matches('/').to_string();
                Some(BTreeMap::from([(param.clone(), captured)]))
            }
        }
    }
}

impl fmt::Display for RoutePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(path) => f.write_str(path),
            Self::CatchAll { param } => write!(f, "/:{param}(.*)"),
        }
    }
}

impl Serialize for RoutePattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Strips query and fragment, ensures a leading slash and drops one trailing
/// slash.
pub(crate) fn normalize_path(path: &str) -> String {
    let path = path.split(|c: char| c == '?' || c == '#').next().unwrap_or_default();
    let path = path.strip_suffix('/').unwrap_or(path);

    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    }
}

// =============================================================================
// Routes
// =============================================================================

/// One entry of the route table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    /// Path pattern
    #[serde(rename = "path")]
    pub pattern: RoutePattern,

    /// Human-readable route name, unique within a table
    pub name: String,

    /// View loaded for this route
    pub view: View,
}

impl Route {
    /// Creates a route entry.
    pub fn new(pattern: RoutePattern, name: impl Into<String>, view: View) -> Self {
        Self {
            pattern,
            name: name.into(),
            view,
        }
    }
}

/// Result of resolving a path against a table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteMatch<'a> {
    /// Normalized path that was resolved
    pub path: String,

    /// Matched route
    pub route: &'a Route,

    /// Captured parameters (catch-all routes only)
    pub params: BTreeMap<String, String>,
}
