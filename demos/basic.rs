//! Basic example demonstrating the Daizy API client.
//!
//! Run with:
//! ```
//! DAIZY_ORGANISATION=12345 DAIZY_API_TOKEN=your-token cargo run --example basic
//! ```

use daizy::{CreateProjectRequest, DaizyClient, DaizyError, UpdateProjectRequest};

#[tokio::main]
async fn main() -> daizy::Result<()> {
    // Initialize tracing for debugging (optional)
    tracing_subscriber::fmt::init();

    // Create client from environment variables
    println!("Creating Daizy client...");
    let client = DaizyClient::from_env()?;
    println!(
        "Connected to: {}{} (organisation {})",
        client.config().base_url(),
        client.config().base_path(),
        client.organisation()
    );

    // List projects
    println!("\n--- Listing Projects ---");
    let listing = client.list_projects().await?;
    println!("Found {} projects (total: {})", listing.projects.len(), listing.total);

    for project in &listing.projects {
        println!("  - {} (#{}, {})", project.name, project.id, project.status);
    }

    // Create, rename and delete a scratch project
    println!("\n--- Project Lifecycle ---");
    let owner = listing.projects.first().map(|p| p.user_id).unwrap_or_default();
    let created = client
        .create_project(&CreateProjectRequest::new("basic-example", owner))
        .await?;
    println!("Created project #{}", created.id);

    let renamed = client
        .update_project(created.id, &UpdateProjectRequest::new("basic-example-renamed", owner))
        .await?;
    println!("Renamed to {}", renamed.name);

    client.delete_project(created.id).await?;
    println!("Deleted project #{}", created.id);

    // Service errors carry the HTTP status and field errors
    println!("\n--- Error Handling ---");
    match client.get_project(created.id).await {
        Ok(project) => println!("Project still exists: {}", project.name),
        Err(DaizyError::Response(re)) => {
            println!("HTTP {}: {}", re.status, re);
            for error in re.field_errors() {
                println!("  {} [{}]", error.field, error.error_type);
            }
        }
        Err(e) => return Err(e),
    }

    println!("\nDone!");
    Ok(())
}
