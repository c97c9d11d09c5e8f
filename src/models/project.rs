//! Project model and operations.

use async_trait::async_trait;
use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::client::{DaizyClient, NO_BODY};
use crate::error::Result;
use crate::traits::{Create, Delete, Get, List, Update};

/// A Daizy project.
///
/// Projects group devices inside an organisation. All fields are assigned
/// by the service; any field missing from a response decodes to its zero value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    /// Project name.
    pub name: String,

    /// Lifecycle status (e.g. "created").
    pub status: String,

    /// ID of the owning user.
    pub user_id: i64,

    /// Whether device messages are republished over MQTT.
    pub republish_mqtt: bool,

    /// Project ID.
    pub id: i64,

    /// ID of the owning organisation.
    pub organisation_id: i64,
}

/// Response body of the project list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectListResponse {
    /// The projects, in the order the service returned them.
    #[serde(default)]
    pub projects: Vec<Project>,

    /// Total number of projects in the organisation.
    #[serde(default)]
    pub total: i64,

    /// Filter metadata echoed by the service. Not interpreted.
    #[serde(
        rename = "columnFilters",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub column_filters: Option<serde_json::Value>,
}

/// Body for creating a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateProjectRequest {
    /// Project name.
    pub name: String,
    /// ID of the owning user.
    pub user_id: i64,
}

/// Body for updating a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateProjectRequest {
    /// New project name.
    pub name: String,
    /// New owning user ID.
    pub user_id: i64,
}

impl CreateProjectRequest {
    /// Create a request for a named project owned by `user_id`.
    pub fn new(name: impl Into<String>, user_id: i64) -> Self {
        Self {
            name: name.into(),
            user_id,
        }
    }
}

impl UpdateProjectRequest {
    /// Create an update setting the name and owner.
    pub fn new(name: impl Into<String>, user_id: i64) -> Self {
        Self {
            name: name.into(),
            user_id,
        }
    }
}

impl DaizyClient {
    fn projects_path(&self) -> String {
        format!(
            "/organisation/{}/projects",
            urlencoding::encode(self.organisation())
        )
    }

    fn project_path(&self) -> String {
        format!(
            "/organisation/{}/project",
            urlencoding::encode(self.organisation())
        )
    }

    fn project_id_path(&self, id: i64) -> String {
        format!("{}/{}", self.project_path(), id)
    }

    /// Fetch the project list response, including the total count.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is malformed.
    #[tracing::instrument(skip(self))]
    pub async fn list_projects(&self) -> Result<ProjectListResponse> {
        self.request(Method::GET, &self.projects_path(), NO_BODY)
            .await
    }

    /// Get all the projects of the organisation.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is malformed.
    pub async fn get_projects(&self) -> Result<Vec<Project>> {
        Ok(self.list_projects().await?.projects)
    }

    /// Get a single project.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the project does not exist,
    /// or the body is malformed.
    #[tracing::instrument(skip(self))]
    pub async fn get_project(&self, id: i64) -> Result<Project> {
        self.request(Method::GET, &self.project_id_path(id), NO_BODY)
            .await
    }

    /// Create a project and return it as stored by the service.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the service rejects it.
    #[tracing::instrument(skip(self))]
    pub async fn create_project(&self, project: &CreateProjectRequest) -> Result<Project> {
        self.request(Method::POST, &self.project_path(), Some(project))
            .await
    }

    /// Update a project and return the updated version.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the project does not exist,
    /// or the service rejects the update.
    #[tracing::instrument(skip(self))]
    pub async fn update_project(
        &self,
        id: i64,
        project: &UpdateProjectRequest,
    ) -> Result<Project> {
        self.request(Method::PUT, &self.project_id_path(id), Some(project))
            .await
    }

    /// Delete a project. Any success body is ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the project does not exist.
    #[tracing::instrument(skip(self))]
    pub async fn delete_project(&self, id: i64) -> Result<()> {
        self.request_raw(Method::DELETE, &self.project_id_path(id), NO_BODY)
            .await?;
        Ok(())
    }
}

#[async_trait]
impl Get for Project {
    type Id = i64;

    async fn get(client: &DaizyClient, id: i64) -> Result<Self> {
        client.get_project(id).await
    }
}

#[async_trait]
impl List for Project {
    async fn list(client: &DaizyClient) -> Result<Vec<Self>> {
        client.get_projects().await
    }
}

#[async_trait]
impl Create for Project {
    type Params = CreateProjectRequest;

    async fn create(client: &DaizyClient, params: CreateProjectRequest) -> Result<Self> {
        client.create_project(&params).await
    }
}

#[async_trait]
impl Update for Project {
    type Id = i64;
    type Params = UpdateProjectRequest;

    async fn update(
        client: &DaizyClient,
        id: i64,
        params: UpdateProjectRequest,
    ) -> Result<Self> {
        client.update_project(id, &params).await
    }
}

#[async_trait]
impl Delete for Project {
    type Id = i64;

    async fn delete(client: &DaizyClient, id: i64) -> Result<()> {
        client.delete_project(id).await
    }
}
