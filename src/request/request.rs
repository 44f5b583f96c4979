use smol_str::SmolStr;

use super::storage::{HeaderMap, RequestStorage};
use crate::cow_value::CowValue;
use crate::error::RequestError;

// ─── HttpRequest ────────────────────────────────────────────────────────────

/// An HTTP request value with copy-on-write storage.
///
/// Behaves as an independent value under clone/assignment while sharing its
/// `RequestStorage` until a write forces divergence. Cloning is O(1); the
/// first write through either clone splits them apart.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    storage: CowValue<RequestStorage>,
}

impl HttpRequest {
    pub fn new(path: impl Into<SmolStr>, headers: HeaderMap) -> Self {
        Self {
            storage: CowValue::new(RequestStorage::new(path, headers)),
        }
    }

    // ════════════════════════════════════════════════════════════════════════
    // Read access (never copies)
    // ════════════════════════════════════════════════════════════════════════

    #[inline]
    pub fn path(&self) -> &str {
        self.storage.get().path.as_str()
    }

    #[inline]
    pub fn headers(&self) -> &HeaderMap {
        &self.storage.get().headers
    }

    /// Look up a single header. Missing headers are an ordinary `None`,
    /// not an error.
    #[inline]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.storage.get().headers.get(name).map(SmolStr::as_str)
    }

    // ════════════════════════════════════════════════════════════════════════
    // Write access (clone-on-write)
    // ════════════════════════════════════════════════════════════════════════

    pub fn set_path(&mut self, path: impl Into<SmolStr>) {
        self.storage.to_mut().path = path.into();
    }

    /// Insert or replace a header. Returns the previous value, if any.
    pub fn set_header(
        &mut self,
        name: impl Into<SmolStr>,
        value: impl Into<SmolStr>,
    ) -> Option<SmolStr> {
        self.storage.to_mut().headers.insert(name.into(), value.into())
    }

    /// Remove a header. Diverges shared storage even when the header is
    /// absent — the uniqueness check runs before the lookup.
    pub fn remove_header(&mut self, name: &str) -> Option<SmolStr> {
        self.storage.to_mut().headers.remove(name)
    }

    // ════════════════════════════════════════════════════════════════════════
    // Probes
    // ════════════════════════════════════════════════════════════════════════

    /// Identity probe: do two requests share one backing allocation?
    #[inline]
    pub fn shares_storage_with(&self, other: &Self) -> bool {
        self.storage.ptr_eq(&other.storage)
    }

    /// Clone-on-write count for this request's family of copies.
    #[inline]
    pub fn clone_count(&self) -> u64 {
        self.storage.clone_count()
    }

    // ════════════════════════════════════════════════════════════════════════
    // JSON interchange
    // ════════════════════════════════════════════════════════════════════════

    /// Build a request from a JSON object like
    /// `{"path": "/home", "headers": {"Host": "example.com"}}`.
    /// The `headers` key is optional; anything else in the object is ignored.
    pub fn from_json(json: &str) -> Result<Self, RequestError> {
        let value: serde_json::Value =
            serde_json::from_str(json).map_err(|e| RequestError::Json(e.to_string()))?;
        let obj = value.as_object().ok_or(RequestError::NotAnObject)?;

        let path = obj
            .get("path")
            .and_then(|v| v.as_str())
            .ok_or(RequestError::MissingPath)?;

        let mut headers = HeaderMap::new();
        if let Some(raw) = obj.get("headers") {
            let map = raw.as_object().ok_or(RequestError::BadHeaders)?;
            for (name, v) in map {
                let val = v.as_str().ok_or(RequestError::BadHeaders)?;
                headers.insert(SmolStr::new(name), SmolStr::new(val));
            }
        }

        Ok(Self::new(path, headers))
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self.storage.get()).expect("JSON serialize failed")
    }
}
