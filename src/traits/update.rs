//! Update trait for modifying entities.

use async_trait::async_trait;

use crate::client::DaizyClient;
use crate::error::Result;

/// Update an existing entity.
///
/// # Example
///
/// ```no_run
/// use daizy::{DaizyClient, Project, Update, UpdateProjectRequest};
///
/// # async fn example() -> daizy::Result<()> {
/// let client = DaizyClient::from_env()?;
/// let updated = Project::update(
///     &client,
///     32,
///     UpdateProjectRequest::new("renamed", 444),
/// ).await?;
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait Update: Sized {
    /// The ID type for this entity.
    type Id: Send;

    /// Parameters for the update.
    type Params: Send;

    /// Update the entity and return the updated version.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found or the request fails.
    async fn update(client: &DaizyClient, id: Self::Id, params: Self::Params) -> Result<Self>;
}
