//! Result envelope emitted by every repository call.

use serde::{Deserialize, Serialize};

/// Tagged result of an asynchronous load.
///
/// A listings load emits a sequence of these; single-shot calls return one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "value", rename_all = "camelCase")]
pub enum Resource<T> {
    Loading(bool),
    Success(T),
    Error(String),
}

impl<T> Resource<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Resource::Loading(true))
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Resource::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn into_data(self) -> Option<T> {
        match self {
            Resource::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Resource::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Resource<U> {
        match self {
            Resource::Loading(flag) => Resource::Loading(flag),
            Resource::Success(data) => Resource::Success(f(data)),
            Resource::Error(message) => Resource::Error(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors() {
        let r = Resource::Success(vec![1, 2]);
        assert_eq!(r.data(), Some(&vec![1, 2]));
        assert!(!r.is_loading());
        assert_eq!(r.clone().map(|v| v.len()), Resource::Success(2));
        assert_eq!(r.into_data(), Some(vec![1, 2]));

        let r: Resource<()> = Resource::Loading(true);
        assert!(r.is_loading());
        assert!(r.data().is_none());
        assert!(!Resource::<()>::Loading(false).is_loading());
    }

    #[test]
    fn serializes_with_status_tag() {
        let json = serde_json::to_string(&Resource::<u8>::Loading(true)).unwrap();
        assert_eq!(json, r#"{"status":"loading","value":true}"#);
    }
}
