//! Typed wrappers for the API resource groups.
//!
//! Each submodule adds methods to [`Client`](crate::Client) and declares the
//! request and response shapes it exchanges. None of them hold state.

pub mod admin;
pub mod artifact;
pub mod blob;
pub mod image;
pub mod instance;
pub mod metadata;
pub mod namespace;
pub mod network;
pub mod node;

use serde::{Deserialize, Deserializer, Serialize};

/// An event recorded against an instance, network or artifact.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Event {
    #[serde(deserialize_with = "null_as_default")]
    pub timestamp: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub fqdn: String,
    #[serde(deserialize_with = "null_as_default")]
    pub operation: String,
    #[serde(deserialize_with = "null_as_default")]
    pub phase: String,
    #[serde(deserialize_with = "null_as_default")]
    pub duration: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub message: String,
}

/// Body of the bulk delete calls.
#[derive(Debug, Serialize)]
pub(crate) struct DeleteAllRequest<'a> {
    pub namespace: &'a str,
    pub confirm: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct UuidRequest<'a> {
    pub uuid: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct UrlRequest<'a> {
    pub url: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct NodeFilter<'a> {
    pub node: &'a str,
}

/// Treat an explicit JSON `null` like a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_tolerates_nulls_and_gaps() {
        let event: Event = serde_json::from_str(
            r#"{"timestamp":1594251513.6,"fqdn":"sf-1","operation":"create","phase":null,"message":"ok"}"#,
        )
        .unwrap();
        assert_eq!(event.fqdn, "sf-1");
        assert_eq!(event.phase, "");
        assert_eq!(event.duration, 0.0);
    }

    #[test]
    fn event_with_null_timestamp() {
        let events: Vec<Event> = serde_json::from_str(
            r#"[{"timestamp":null,"fqdn":null,"operation":"poweron","phase":"start","duration":null,"message":null},
                {"timestamp":1594251520.1,"fqdn":"sf-2","operation":"poweron","phase":"finish"}]"#,
        )
        .unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].timestamp, 0.0);
        assert_eq!(events[0].operation, "poweron");
        assert_eq!(events[1].fqdn, "sf-2");
    }

    #[test]
    fn delete_all_body() {
        let body = serde_json::to_string(&DeleteAllRequest {
            namespace: "bobspace",
            confirm: true,
        })
        .unwrap();
        assert_eq!(body, r#"{"namespace":"bobspace","confirm":true}"#);
    }
}
