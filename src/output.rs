//! Output formatting for CLI display.
//!
//! Provides the [`PrettyPrint`] trait for human-readable output
//! as an alternative to JSON serialization, and table rows for lists.

use serde::Serialize;
use tabled::{Table, Tabled};

use crate::error::{DaizyError, Result};
use crate::{Project, ResponseError};

/// Trait for human-readable key-value output.
///
/// Implemented by entity types to provide formatted output
/// suitable for terminal display when `--json` is not specified.
pub trait PrettyPrint {
    /// Returns a formatted string for terminal display.
    fn pretty_print(&self) -> String;
}

impl PrettyPrint for Project {
    fn pretty_print(&self) -> String {
        let header = format!("Project #{}", self.id);
        let divider = "─".repeat(header.len().max(30));

        let lines = [
            header,
            divider,
            format!("Name:           {}", self.name),
            format!("Status:         {}", self.status),
            format!("User:           {}", self.user_id),
            format!("Organisation:   {}", self.organisation_id),
            format!(
                "MQTT Republish: {}",
                if self.republish_mqtt { "yes" } else { "no" }
            ),
        ];

        lines.join("\n")
    }
}

impl PrettyPrint for ResponseError {
    fn pretty_print(&self) -> String {
        let mut lines = vec![format!("{} (HTTP {})", self, self.status)];
        for error in &self.errors {
            lines.push(format!(
                "  {} [{}]: {}",
                error.field, error.error_type, error.message
            ));
        }
        lines.join("\n")
    }
}

/// Table row for a project in list output.
#[derive(Tabled)]
pub struct ProjectRow {
    id: i64,
    name: String,
    status: String,
    #[tabled(rename = "user")]
    user_id: i64,
    #[tabled(rename = "mqtt")]
    republish_mqtt: bool,
}

impl From<&Project> for ProjectRow {
    fn from(p: &Project) -> Self {
        Self {
            id: p.id,
            name: p.name.clone(),
            status: p.status.clone(),
            user_id: p.user_id,
            republish_mqtt: p.republish_mqtt,
        }
    }
}

/// Render projects as a table.
pub fn project_table(projects: &[Project]) -> String {
    let rows: Vec<ProjectRow> = projects.iter().map(ProjectRow::from).collect();
    Table::new(rows).to_string()
}

/// Render a value as pretty-printed JSON.
///
/// # Errors
///
/// Returns [`DaizyError::Encode`] if the value cannot be serialized.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(DaizyError::Encode)
}
