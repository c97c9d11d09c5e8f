//! Test data fixtures for the mock server.
//!
//! Provides factory functions for creating realistic test data.

use crate::Project;

/// Organisation served by the default scenario.
pub const DEFAULT_ORGANISATION: &str = "12345";

/// Token accepted by servers built with [`Fixtures::default_scenario`]
/// when a token check is enabled.
pub const DEFAULT_TOKEN: &str = "testtoken";

/// Collection of fixture factories for test data.
pub struct Fixtures;

impl Fixtures {
    /// Create a freshly created project.
    pub fn project(id: i64, name: &str, organisation_id: i64) -> Project {
        Project {
            name: name.to_string(),
            status: "created".to_string(),
            user_id: 0,
            republish_mqtt: false,
            id,
            organisation_id,
        }
    }

    /// Create a project owned by a user with MQTT republishing enabled.
    pub fn republishing_project(id: i64, name: &str, user_id: i64, organisation_id: i64) -> Project {
        Project {
            user_id,
            republish_mqtt: true,
            ..Self::project(id, name, organisation_id)
        }
    }

    /// Create the default scenario.
    pub fn default_scenario() -> DefaultScenario {
        DefaultScenario::new()
    }
}

/// A complete test scenario for one organisation.
pub struct DefaultScenario {
    pub organisation: String,
    pub projects: Vec<Project>,
}

impl DefaultScenario {
    fn new() -> Self {
        let organisation_id = 12;

        let projects = vec![
            Fixtures::republishing_project(32, "aProject", 0, organisation_id),
            Fixtures::project(33, "Greenhouse Sensors", organisation_id),
        ];

        Self {
            organisation: DEFAULT_ORGANISATION.to_string(),
            projects,
        }
    }
}
