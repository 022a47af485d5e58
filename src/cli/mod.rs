//! CLI command handling
//!
//! Resolves configuration, builds the seeding and navigation collaborators,
//! and dispatches commands to them.

use std::time::Duration;

use crate::commands::{Commands, GlobalArgs};
use crate::common::config::Config;
use crate::common::{join_url, Error, Result};
use crate::db::JsonDb;
use crate::fixtures::TodoItemsBuilder;
use crate::navigation::{HttpNavigator, Navigator};
use crate::scenario::{self, ScenarioRunner};
use crate::seeding::{SeedingService, TaskSeeder};
use crate::tasks::{HttpTaskDispatcher, LocalTasks};

/// Dispatch a CLI command
pub async fn dispatch(command: Commands, args: GlobalArgs) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    apply_overrides(&mut config, &args);

    match command {
        Commands::Run { path, verbose } => {
            let runner = ScenarioRunner::new(build_seeder(&config)?, build_navigator(&config)?);

            let report =
                scenario::run_scenario(&path, &runner, config.generator.default_count, verbose)
                    .await?;

            if report.passed {
                Ok(())
            } else {
                Err(Error::ScenarioFailed {
                    name: report.name,
                    step: report.steps_run,
                })
            }
        }

        Commands::Seed { count } => {
            let todos = TodoItemsBuilder::new()
                .count(count.unwrap_or(config.generator.default_count))
                .build();

            build_seeder(&config)?.seed(&todos).await?;

            match &config.seeding.task_url {
                Some(url) => println!("Seeded {} todos via {}", todos.len(), url),
                None => println!(
                    "Seeded {} todos into {}",
                    todos.len(),
                    config.seeding.db_path().display()
                ),
            }
            Ok(())
        }

        Commands::Visit { path } => {
            build_navigator(&config)?.visit(&path).await?;
            println!("Visited {}", join_url(&config.app.base_url, &path));
            Ok(())
        }

        Commands::Generate { count } => {
            let todos = TodoItemsBuilder::new()
                .count(count.unwrap_or(config.generator.default_count))
                .build();
            println!("{}", serde_json::to_string_pretty(&todos)?);
            Ok(())
        }
    }
}

/// Apply command-line overrides on top of the loaded config
pub fn apply_overrides(config: &mut Config, args: &GlobalArgs) {
    if let Some(base_url) = &args.base_url {
        config.app.base_url = base_url.clone();
    }
    if let Some(db) = &args.db {
        config.seeding.db_path = Some(db.clone());
        config.seeding.task_url = None;
    }
    if let Some(task_url) = &args.task_url {
        config.seeding.task_url = Some(task_url.clone());
    }
}

/// Seeder for the configured target: remote task endpoint or local JSON db
pub fn build_seeder(config: &Config) -> Result<Box<dyn SeedingService>> {
    match &config.seeding.task_url {
        Some(url) => {
            tracing::debug!(%url, "Seeding through remote tasks");
            let dispatcher =
                HttpTaskDispatcher::new(url, Duration::from_secs(config.timeouts.task_secs))?;
            Ok(Box::new(TaskSeeder::new(dispatcher)))
        }
        None => {
            let db = JsonDb::new(config.seeding.db_path());
            tracing::debug!(db = %db.path().display(), "Seeding through local tasks");
            Ok(Box::new(TaskSeeder::new(LocalTasks::with_db(db))))
        }
    }
}

/// Navigator for the configured application
pub fn build_navigator(config: &Config) -> Result<Box<dyn Navigator>> {
    let navigator = HttpNavigator::new(
        config.app.base_url.clone(),
        Duration::from_secs(config.timeouts.page_load_secs),
    )?
    .fail_on_status_code(config.app.fail_on_status_code);
    Ok(Box::new(navigator))
}
