mod request;
mod storage;

pub use request::HttpRequest;
pub use storage::{HeaderMap, RequestStorage};

#[cfg(test)]
mod tests;
