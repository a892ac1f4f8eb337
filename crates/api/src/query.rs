//! Query parameter types for API handlers.

use serde::Deserialize;

/// Query parameters for the name search endpoint (`?name=`).
///
/// A missing or empty `name` returns every name.
#[derive(Debug, Deserialize)]
pub struct NameSearchParams {
    pub name: Option<String>,
}
