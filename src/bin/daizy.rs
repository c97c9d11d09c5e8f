//! Daizy API CLI binary.
//!
//! A command-line interface for interacting with the Daizy API.

use clap::Parser;
use daizy::cli::{log_filter, Cli, Command, Entity};
use daizy::output::{project_table, to_json, PrettyPrint};
use daizy::{CreateProjectRequest, DaizyClient, DaizyError, UpdateProjectRequest};
use serde::Serialize;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(std::env::var("RUST_LOG").ok().as_deref()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let client = match cli
        .connection
        .client_config()
        .and_then(DaizyClient::from_config)
    {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Hint: Set DAIZY_ORGANISATION and DAIZY_API_TOKEN environment variables");
            return ExitCode::FAILURE;
        }
    };

    match run(&client, cli.command, cli.json).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(DaizyError::Response(re)) => {
            eprintln!("Error: {}", re.pretty_print());
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(client: &DaizyClient, command: Command, json: bool) -> daizy::Result<()> {
    match command {
        Command::Get {
            entity: Entity::Project,
            id,
        } => {
            let project = client.get_project(id).await?;
            output_single(&project, json)
        }
        Command::List {
            entity: Entity::Project,
        } => {
            let projects = client.get_projects().await?;
            if json {
                println!("{}", to_json(&projects)?);
            } else {
                println!("{}", project_table(&projects));
                println!("\n{} project(s)", projects.len());
            }
            Ok(())
        }
        Command::Create {
            entity: Entity::Project,
            name,
            user_id,
        } => {
            let project = client
                .create_project(&CreateProjectRequest::new(name, user_id))
                .await?;
            output_single(&project, json)
        }
        Command::Update {
            entity: Entity::Project,
            id,
            name,
            user_id,
        } => {
            let project = client
                .update_project(id, &UpdateProjectRequest::new(name, user_id))
                .await?;
            output_single(&project, json)
        }
        Command::Delete {
            entity: Entity::Project,
            id,
        } => {
            client.delete_project(id).await?;
            if json {
                println!("{}", serde_json::json!({ "deleted": id }));
            } else {
                println!("Deleted project {id}");
            }
            Ok(())
        }
    }
}

fn output_single<T: Serialize + PrettyPrint>(item: &T, json: bool) -> daizy::Result<()> {
    if json {
        println!("{}", to_json(item)?);
    } else {
        println!("{}", item.pretty_print());
    }
    Ok(())
}
