//! Daizy API client library.
//!
//! A Rust library for the Daizy organisation/project REST API. Every
//! operation is a single authenticated request whose JSON response is
//! decoded into a typed value, or into a [`ResponseError`] when the service
//! answers with anything other than `200 OK`.
//!
//! # Quick Start
//!
//! ```no_run
//! use daizy::{CreateProjectRequest, DaizyClient};
//!
//! #[tokio::main]
//! async fn main() -> daizy::Result<()> {
//!     // Create client from environment variables
//!     let client = DaizyClient::from_env()?;
//!
//!     // List all projects of the organisation
//!     let projects = client.get_projects().await?;
//!     println!("Found {} projects", projects.len());
//!
//!     // Create one
//!     let project = client
//!         .create_project(&CreateProjectRequest::new("greenhouse", 444))
//!         .await?;
//!     println!("Created project {}", project.id);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Errors
//!
//! Service errors carry the HTTP status and the field errors reported by
//! the API:
//!
//! ```no_run
//! # async fn example(client: &daizy::DaizyClient) {
//! match client.get_project(32).await {
//!     Ok(project) => println!("{}", project.name),
//!     Err(daizy::DaizyError::Response(re)) => {
//!         eprintln!("HTTP {}: {}", re.status, re);
//!     }
//!     Err(e) => eprintln!("request failed: {e}"),
//! }
//! # }
//! ```
//!
//! # Configuration
//!
//! [`DaizyClient::from_env`] reads:
//!
//! - `DAIZY_ORGANISATION` (required) - Organisation ID
//! - `DAIZY_API_TOKEN` (required) - Bearer token
//! - `DAIZY_API_URL` (optional) - Host (defaults to `https://api-test.daizy.io`)
//! - `DAIZY_API_PATH` (optional) - Path prefix (defaults to `/api/v1`)
//! - `DAIZY_TIMEOUT_SECS` (optional) - Request timeout (defaults to 10)

pub mod cli;
mod client;
mod config;
mod error;
mod models;
pub mod output;
mod traits;

#[cfg(feature = "test-server")]
pub mod mock_server;

// Re-export core types
pub use client::{DaizyClient, NO_BODY};
pub use config::{
    ClientConfig, ClientOption, DEFAULT_BASE_PATH, DEFAULT_BASE_URL, DEFAULT_TIMEOUT,
};
pub use error::{DaizyError, FieldError, ResponseError, Result};
pub use reqwest::Method;

// Re-export traits
pub use traits::{Create, Delete, Get, List, Update};

// Re-export models
pub use models::{CreateProjectRequest, Project, ProjectListResponse, UpdateProjectRequest};
