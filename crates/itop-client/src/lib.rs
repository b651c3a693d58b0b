//! iTop REST/JSON web service client.
//!
//! Exposes the two calls the query processor depends on (`submit` and
//! `list_operations`) behind the `Backend` trait, with a reqwest transport
//! for real instances and a scripted `MockBackend` for tests.

pub mod backend;
pub mod config;
pub mod error;
pub mod http;
pub mod mock;

pub use backend::Backend;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::ITopClient;
pub use mock::MockBackend;
