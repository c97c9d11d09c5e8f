//! List trait for fetching collections of entities.

use async_trait::async_trait;

use crate::client::DaizyClient;
use crate::error::Result;

/// List every entity of a type in the client's organisation.
///
/// The service returns the whole collection in one response, so there is
/// no paging.
#[async_trait]
pub trait List: Sized + Send {
    /// List all entities.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    async fn list(client: &DaizyClient) -> Result<Vec<Self>>;
}
