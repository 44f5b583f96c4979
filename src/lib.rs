//! Copy-on-write value semantics over reference-counted storage, plus the
//! small collection/string utilities that grew up around the exercise.
//!
//! The interesting part is [`CowValue`]: cloning one is O(1) and shares the
//! backing allocation; the first write through a shared handle diverges it
//! onto a private copy. [`HttpRequest`] is the concrete record built on top.

pub mod cow_value;
pub mod error;
pub mod request;
pub mod search;
pub mod seq;
pub mod sort;
pub mod strings;
pub mod types;

pub use cow_value::CowValue;
pub use error::RequestError;
pub use request::{HeaderMap, HttpRequest, RequestStorage};
