//! REST clients for the document store and the identity service
//!
//! The importer only sees the `DocumentStore` and `IdentityService` traits;
//! the Firestore and Identity Toolkit clients here are the production
//! implementations.

pub mod auth;
pub mod firestore;
pub mod identity;
pub mod path;
pub mod values;

pub use auth::{ServiceAccountKey, TokenProvider};
pub use firestore::{DocumentStore, FirestoreClient, StoreError};
pub use identity::{IdentityAccount, IdentityClient, IdentityError, IdentityService};
pub use path::DocPath;
pub use values::{FieldMap, Value, encode_fields};
