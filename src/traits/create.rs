//! Create trait for adding entities.

use async_trait::async_trait;

use crate::client::DaizyClient;
use crate::error::Result;

/// Create a new entity.
///
/// # Example
///
/// ```no_run
/// use daizy::{Create, CreateProjectRequest, DaizyClient, Project};
///
/// # async fn example() -> daizy::Result<()> {
/// let client = DaizyClient::from_env()?;
/// let project = Project::create(&client, CreateProjectRequest::new("greenhouse", 444)).await?;
/// println!("created project {}", project.id);
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait Create: Sized {
    /// Parameters for the new entity.
    type Params: Send;

    /// Create the entity and return it as stored by the service.
    ///
    /// # Errors
    ///
    /// Returns an error if the service rejects the parameters or the
    /// request fails.
    async fn create(client: &DaizyClient, params: Self::Params) -> Result<Self>;
}
