//! Mock Daizy API server for E2E testing.
//!
//! This module provides an in-memory mock server that simulates the Daizy API
//! for integration and end-to-end testing. Unlike wiremock which mocks at the
//! HTTP level per-test, this server maintains state across requests, enabling
//! realistic workflow testing.
//!
//! # Example
//!
//! ```ignore
//! use daizy::mock_server::MockServer;
//! use daizy::{ClientOption, DaizyClient};
//!
//! #[tokio::test]
//! async fn test_workflow() {
//!     let server = MockServer::start().await;
//!     let client = DaizyClient::new(
//!         "12345",
//!         "test-token",
//!         [ClientOption::BaseUrl(server.url().to_string())],
//!     )
//!     .unwrap();
//!
//!     // Server comes with default fixtures
//!     let project = client.get_project(32).await.unwrap();
//!     assert_eq!(project.name, "aProject");
//!
//!     server.shutdown().await;
//! }
//! ```

mod fixtures;
mod handlers;
mod server;
mod state;

pub use fixtures::{DefaultScenario, Fixtures, DEFAULT_ORGANISATION, DEFAULT_TOKEN};
pub use server::MockServer;
pub use state::MockState;
