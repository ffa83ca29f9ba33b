//! Namespace and key management.

use serde::Serialize;
use tracing::instrument;

use crate::client::Client;
use crate::error::Error;
use crate::transport::Method;

const NAMESPACES: &str = "auth/namespaces";

#[derive(Serialize)]
struct CreateNamespaceRequest<'a> {
    namespace: &'a str,
}

#[derive(Serialize)]
struct KeyRequest<'a> {
    key: &'a str,
}

impl Client {
    /// List namespace names.
    pub async fn get_namespaces(&self) -> Result<Vec<String>, Error> {
        self.dispatcher()
            .request_json::<(), _>(NAMESPACES, Method::Get, None)
            .await
    }

    #[instrument(skip(self))]
    pub async fn create_namespace(&self, namespace: &str) -> Result<(), Error> {
        self.dispatcher()
            .send_json(
                NAMESPACES,
                Method::Post,
                Some(&CreateNamespaceRequest { namespace }),
            )
            .await
    }

    #[instrument(skip(self))]
    pub async fn delete_namespace(&self, namespace: &str) -> Result<(), Error> {
        self.dispatcher()
            .send_json::<()>(&format!("{NAMESPACES}/{namespace}"), Method::Delete, None)
            .await
    }

    /// Add access key `key_name` to `namespace`.
    #[instrument(skip(self, key))]
    pub async fn create_namespace_key(
        &self,
        namespace: &str,
        key_name: &str,
        key: &str,
    ) -> Result<(), Error> {
        self.dispatcher()
            .send_json(
                &key_path(namespace, key_name),
                Method::Post,
                Some(&KeyRequest { key }),
            )
            .await
    }

    /// Replace the secret of an existing key. The server treats this the same
    /// as creation.
    pub async fn update_namespace_key(
        &self,
        namespace: &str,
        key_name: &str,
        key: &str,
    ) -> Result<(), Error> {
        self.create_namespace_key(namespace, key_name, key).await
    }

    #[instrument(skip(self))]
    pub async fn delete_namespace_key(&self, namespace: &str, key_name: &str) -> Result<(), Error> {
        self.dispatcher()
            .send_json::<()>(&key_path(namespace, key_name), Method::Delete, None)
            .await
    }
}

fn key_path(namespace: &str, key_name: &str) -> String {
    format!("{NAMESPACES}/{namespace}/keys/{key_name}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_paths() {
        assert_eq!(
            key_path("bobspace", "bobskey"),
            "auth/namespaces/bobspace/keys/bobskey"
        );
    }

    #[test]
    fn key_body() {
        let body = serde_json::to_string(&KeyRequest { key: "supersecret" }).unwrap();
        assert_eq!(body, r#"{"key":"supersecret"}"#);
    }
}
