use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use std::collections::BTreeMap;

// ─── Backing storage ────────────────────────────────────────────────────────

/// Header name → value. BTreeMap for deterministic iteration order.
pub type HeaderMap = BTreeMap<SmolStr, SmolStr>;

/// The record shared between `HttpRequest` handles.
///
/// Plain data, no reference counting of its own — sharing and divergence
/// are handled one level up by `CowValue`. `Clone` here is the field-wise
/// duplicate that a clone-on-write performs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestStorage {
    pub path: SmolStr,
    #[serde(default)]
    pub headers: HeaderMap,
}

impl RequestStorage {
    pub fn new(path: impl Into<SmolStr>, headers: HeaderMap) -> Self {
        Self {
            path: path.into(),
            headers,
        }
    }
}

// ─── Literal builder ────────────────────────────────────────────────────────

/// Build a `HeaderMap` from `"name" => "value"` pairs.
#[macro_export]
macro_rules! headers {
    () => { $crate::request::HeaderMap::new() };
    ($($name:expr => $value:expr),+ $(,)?) => {{
        let mut map = $crate::request::HeaderMap::new();
        $(
            map.insert(
                ::smol_str::SmolStr::new($name),
                ::smol_str::SmolStr::new($value),
            );
        )+
        map
    }};
}
