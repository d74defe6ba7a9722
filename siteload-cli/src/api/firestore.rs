//! Firestore REST document store

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

use super::auth::TokenProvider;
use super::path::DocPath;
use super::values::{FieldMap, encode_fields};

const FIRESTORE_BASE: &str = "https://firestore.googleapis.com/v1";

/// A write failed at the document store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("store rejected write at '{path}': HTTP {status}: {body}")]
    Rejected {
        path: String,
        status: u16,
        body: String,
    },
    #[error(transparent)]
    Auth(#[from] anyhow::Error),
}

/// Hierarchical document database the importer writes into.
#[async_trait]
pub trait DocumentStore {
    /// Create the document or merge the given fields into it, leaving
    /// fields outside the map untouched.
    async fn upsert_merge(&mut self, path: &DocPath, fields: &FieldMap) -> Result<(), StoreError>;

    /// Create or fully overwrite the document.
    async fn replace(&mut self, path: &DocPath, fields: &FieldMap) -> Result<(), StoreError>;

    /// Add a new document under `parent` with a server-generated id,
    /// returning that id.
    async fn add(&mut self, parent: &DocPath, fields: &FieldMap) -> Result<String, StoreError>;
}

/// Firestore REST API client.
pub struct FirestoreClient {
    http: reqwest::Client,
    auth: TokenProvider,
    documents_root: String,
}

impl FirestoreClient {
    pub fn new(auth: TokenProvider, http: reqwest::Client) -> Self {
        let documents_root = format!(
            "projects/{}/databases/(default)/documents",
            auth.project_id()
        );
        Self {
            http,
            auth,
            documents_root,
        }
    }

    fn url(&self, path: &DocPath) -> String {
        format!("{}/{}/{}", FIRESTORE_BASE, self.documents_root, path.encoded())
    }

    /// PATCH creates-or-updates; an update mask restricts the write to the
    /// listed fields, which is what makes it a merge.
    async fn patch(
        &mut self,
        path: &DocPath,
        fields: &FieldMap,
        masked: bool,
    ) -> Result<(), StoreError> {
        let token = self.auth.token().await?;
        let mut request = self
            .http
            .patch(self.url(path))
            .bearer_auth(token)
            .json(&encode_fields(fields));
        if masked {
            let mask: Vec<(&str, &String)> = fields
                .keys()
                .map(|name| ("updateMask.fieldPaths", name))
                .collect();
            request = request.query(&mask);
        }
        let response = request.send().await?;
        check(path, response).await?;
        Ok(())
    }
}

async fn check(
    path: &DocPath,
    response: reqwest::Response,
) -> Result<reqwest::Response, StoreError> {
    if response.status().is_success() {
        return Ok(response);
    }
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    Err(StoreError::Rejected {
        path: path.to_string(),
        status,
        body,
    })
}

/// Document id from a full resource name like
/// `projects/p/databases/(default)/documents/project/P-1/contacts/AbC123`.
fn document_id_from_name(name: &str) -> String {
    name.rsplit('/').next().unwrap_or_default().to_string()
}

#[async_trait]
impl DocumentStore for FirestoreClient {
    async fn upsert_merge(&mut self, path: &DocPath, fields: &FieldMap) -> Result<(), StoreError> {
        self.patch(path, fields, true).await
    }

    async fn replace(&mut self, path: &DocPath, fields: &FieldMap) -> Result<(), StoreError> {
        self.patch(path, fields, false).await
    }

    async fn add(&mut self, parent: &DocPath, fields: &FieldMap) -> Result<String, StoreError> {
        let token = self.auth.token().await?;
        let response = self
            .http
            .post(self.url(parent))
            .bearer_auth(token)
            .json(&encode_fields(fields))
            .send()
            .await?;
        let response = check(parent, response).await?;

        #[derive(Deserialize)]
        struct CreatedDocument {
            name: String,
        }
        let created: CreatedDocument = response.json().await?;
        Ok(document_id_from_name(&created.name))
    }
}
