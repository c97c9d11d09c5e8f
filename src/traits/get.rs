//! Get trait for fetching single entities.

use async_trait::async_trait;

use crate::client::DaizyClient;
use crate::error::Result;

/// Fetch a single entity by ID.
///
/// # Example
///
/// ```no_run
/// use daizy::{DaizyClient, Get, Project};
///
/// # async fn example() -> daizy::Result<()> {
/// let client = DaizyClient::from_env()?;
/// let project = Project::get(&client, 32).await?;
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait Get: Sized {
    /// The ID type for this entity.
    type Id: Send;

    /// Fetch the entity by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found or the request fails.
    async fn get(client: &DaizyClient, id: Self::Id) -> Result<Self>;
}
