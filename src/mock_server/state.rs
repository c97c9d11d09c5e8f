//! Mock server state management.
//!
//! Provides the in-memory data store for the mock Daizy API server.

use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::Project;

use super::fixtures::DEFAULT_ORGANISATION;

/// Shared state for the mock server.
///
/// This struct holds all the mock data that the server will serve.
/// It's wrapped in `Arc<RwLock<_>>` for concurrent access.
#[derive(Debug)]
pub struct MockState {
    /// The organisation ID the server answers for. Other organisations get 404.
    pub organisation: String,

    /// Numeric ID stamped on created projects.
    pub organisation_id: i64,

    /// Projects indexed by ID, listed in ID order.
    pub projects: BTreeMap<i64, Project>,

    /// ID handed to the next created project.
    pub next_id: i64,

    /// Optional authentication token. If set, requests must include this token.
    pub required_token: Option<String>,
}

impl Default for MockState {
    fn default() -> Self {
        Self {
            organisation: DEFAULT_ORGANISATION.to_string(),
            organisation_id: 12,
            projects: BTreeMap::new(),
            next_id: 1,
            required_token: None,
        }
    }
}

impl MockState {
    /// Create a new empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create state wrapped in Arc<RwLock> for sharing.
    pub fn shared(self) -> Arc<RwLock<Self>> {
        Arc::new(RwLock::new(self))
    }

    /// Serve a different organisation.
    pub fn with_organisation(mut self, organisation: &str, organisation_id: i64) -> Self {
        self.organisation = organisation.to_string();
        self.organisation_id = organisation_id;
        self
    }

    /// Add a project to the state.
    pub fn with_project(mut self, project: Project) -> Self {
        self.next_id = self.next_id.max(project.id + 1);
        self.projects.insert(project.id, project);
        self
    }

    /// Set the required authentication token.
    pub fn with_required_token(mut self, token: &str) -> Self {
        self.required_token = Some(token.to_string());
        self
    }

    /// Whether requests for `organisation` are served.
    pub fn serves(&self, organisation: &str) -> bool {
        self.organisation == organisation
    }

    /// Get a project by ID.
    pub fn get_project(&self, id: i64) -> Option<&Project> {
        self.projects.get(&id)
    }

    /// List all projects in ID order.
    pub fn list_projects(&self) -> Vec<&Project> {
        self.projects.values().collect()
    }

    /// Create a project and return it.
    pub fn create_project(&mut self, name: String, user_id: i64) -> &Project {
        let id = self.next_id;
        self.next_id += 1;

        let project = Project {
            name,
            status: "created".to_string(),
            user_id,
            republish_mqtt: false,
            id,
            organisation_id: self.organisation_id,
        };

        self.projects.entry(id).or_insert(project)
    }

    /// Update a project and return the updated version.
    pub fn update_project(&mut self, id: i64, name: String, user_id: i64) -> Option<&Project> {
        let project = self.projects.get_mut(&id)?;
        project.name = name;
        project.user_id = user_id;
        Some(project)
    }

    /// Remove a project, returning it if it existed.
    pub fn delete_project(&mut self, id: i64) -> Option<Project> {
        self.projects.remove(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock_server::Fixtures;

    #[test]
    fn test_state_add_and_get_project() {
        let state = MockState::new().with_project(Fixtures::project(7, "Test Project", 12));

        let project = state.get_project(7);
        assert!(project.is_some());
        assert_eq!(project.unwrap().name, "Test Project");
        assert_eq!(state.next_id, 8);
    }

    #[test]
    fn test_state_create_assigns_increasing_ids() {
        let mut state = MockState::new().with_project(Fixtures::project(32, "Existing", 12));

        let first = state.create_project("first".to_string(), 444).id;
        let second = state.create_project("second".to_string(), 444).id;

        assert_eq!(first, 33);
        assert_eq!(second, 34);
        assert_eq!(state.list_projects().len(), 3);
        assert_eq!(state.get_project(33).unwrap().status, "created");
    }

    #[test]
    fn test_state_update_and_delete_project() {
        let mut state = MockState::new().with_project(Fixtures::project(1, "Original", 12));

        let updated = state.update_project(1, "Renamed".to_string(), 9).unwrap();
        assert_eq!(updated.name, "Renamed");
        assert_eq!(updated.user_id, 9);

        assert!(state.update_project(2, "Missing".to_string(), 9).is_none());
        assert!(state.delete_project(1).is_some());
        assert!(state.delete_project(1).is_none());
    }
}
