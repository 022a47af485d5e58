//! Scenario runner implementation
//!
//! Seeds the backing store, then visits the application. The two steps run
//! strictly in order on the caller's task, and a failing step ends the run.

use std::path::Path;

use colored::Colorize;

use crate::common::Result;
use crate::fixtures::{todo_items_builder, TodoItem, TodoItemsBuilder};
use crate::navigation::{Navigator, ROOT_PATH};
use crate::seeding::SeedingService;

use super::config::Scenario;

/// Number of steps in every scenario: seed, then visit
const STEPS_TOTAL: usize = 2;

/// Runs seed-then-visit against a seeding service and a navigator
pub struct ScenarioRunner<S, N> {
    seeder: S,
    navigator: N,
}

impl<S: SeedingService, N: Navigator> ScenarioRunner<S, N> {
    pub fn new(seeder: S, navigator: N) -> Self {
        Self { seeder, navigator }
    }

    /// Generate a fresh batch, seed it, then visit the application root
    pub async fn run(&self) -> Result<()> {
        let todos = todo_items_builder();
        self.run_with(&todos).await
    }

    /// Seed `todos` unmodified, then visit the application root
    pub async fn run_with(&self, todos: &[TodoItem]) -> Result<()> {
        self.run_visiting(todos, ROOT_PATH).await
    }

    /// Seed `todos`, then visit `path`
    pub async fn run_visiting(&self, todos: &[TodoItem], path: &str) -> Result<()> {
        self.seed(todos).await?;
        self.visit(path).await
    }

    /// Seed step on its own
    pub async fn seed(&self, todos: &[TodoItem]) -> Result<()> {
        tracing::info!(count = todos.len(), "Seeding todos");
        self.seeder.seed(todos).await
    }

    /// Visit step on its own
    pub async fn visit(&self, path: &str) -> Result<()> {
        tracing::info!(path, "Visiting");
        self.navigator.visit(path).await
    }
}

/// Result of a scenario run
#[derive(Debug)]
pub struct ScenarioReport {
    pub name: String,
    pub passed: bool,
    pub steps_run: usize,
    pub steps_total: usize,
    pub error: Option<String>,
}

/// Run a scenario from a YAML file
///
/// Collaborator failures mark the scenario failed; an unreadable scenario
/// file is returned as an error.
pub async fn run_scenario<S, N>(
    path: &Path,
    runner: &ScenarioRunner<S, N>,
    default_count: usize,
    verbose: bool,
) -> Result<ScenarioReport>
where
    S: SeedingService,
    N: Navigator,
{
    let scenario = Scenario::load(path)?;

    println!(
        "\n{} {}",
        "Running Scenario:".blue().bold(),
        scenario.name.white().bold()
    );

    if let Some(desc) = &scenario.description {
        println!("  {}", desc.dimmed());
    }

    let mut builder =
        TodoItemsBuilder::new().count(scenario.todos.count.unwrap_or(default_count));
    if let Some(n) = scenario.todos.completed_every {
        builder = builder.completed_every(n);
    }
    let todos = builder.build();

    println!("\n{}", "Steps:".cyan());

    // Step 1: seed
    if let Err(e) = runner.seed(&todos).await {
        return Ok(failed(&scenario, 1, e));
    }
    println!(
        "  {} Step 1: seed {} todos",
        "✓".green(),
        todos.len().to_string().dimmed()
    );
    if verbose {
        for todo in &todos {
            println!("      {} {}", todo.id.dimmed(), todo.title);
        }
    }

    // Step 2: visit
    if let Err(e) = runner.visit(&scenario.visit).await {
        return Ok(failed(&scenario, 2, e));
    }
    println!("  {} Step 2: visit {}", "✓".green(), scenario.visit.dimmed());

    println!(
        "\n{} {}\n",
        "✓".green().bold(),
        "Scenario Passed".green().bold()
    );

    Ok(ScenarioReport {
        name: scenario.name,
        passed: true,
        steps_run: STEPS_TOTAL,
        steps_total: STEPS_TOTAL,
        error: None,
    })
}

fn failed(scenario: &Scenario, step_num: usize, error: crate::common::Error) -> ScenarioReport {
    println!("  {} Step {}: {}", "✗".red(), step_num, error);
    println!("\n{} {}\n", "✗".red().bold(), "Scenario Failed".red().bold());

    ScenarioReport {
        name: scenario.name.clone(),
        passed: false,
        steps_run: step_num,
        steps_total: STEPS_TOTAL,
        error: Some(error.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Error;
    use crate::fixtures::DEFAULT_TODO_COUNT;
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    #[derive(Debug, Clone, PartialEq)]
    enum Event {
        SeedStarted(Vec<TodoItem>),
        SeedFinished,
        Visit(String),
    }

    type Log = Arc<Mutex<Vec<Event>>>;

    struct FakeSeeder {
        log: Log,
        fail: bool,
    }

    #[async_trait]
    impl SeedingService for FakeSeeder {
        async fn seed(&self, todos: &[TodoItem]) -> Result<()> {
            self.log
                .lock()
                .unwrap()
                .push(Event::SeedStarted(todos.to_vec()));
            // Yield so an overlapping visit would show up between the two events
            tokio::task::yield_now().await;
            if self.fail {
                return Err(Error::task_failed("db:seed", "constraint violation"));
            }
            self.log.lock().unwrap().push(Event::SeedFinished);
            Ok(())
        }
    }

    struct FakeNavigator {
        log: Log,
        fail: bool,
    }

    #[async_trait]
    impl Navigator for FakeNavigator {
        async fn visit(&self, path: &str) -> Result<()> {
            self.log.lock().unwrap().push(Event::Visit(path.to_string()));
            if self.fail {
                return Err(Error::navigation(path, "404 Not Found"));
            }
            Ok(())
        }
    }

    fn fakes(
        seed_fails: bool,
        visit_fails: bool,
    ) -> (ScenarioRunner<FakeSeeder, FakeNavigator>, Log) {
        let log: Log = Arc::default();
        let runner = ScenarioRunner::new(
            FakeSeeder {
                log: log.clone(),
                fail: seed_fails,
            },
            FakeNavigator {
                log: log.clone(),
                fail: visit_fails,
            },
        );
        (runner, log)
    }

    #[tokio::test]
    async fn test_seed_then_visit_root() {
        let (runner, log) = fakes(false, false);
        let todos = TodoItemsBuilder::new().count(5).build();

        runner.run_with(&todos).await.unwrap();

        assert_eq!(
            *log.lock().unwrap(),
            vec![
                Event::SeedStarted(todos),
                Event::SeedFinished,
                Event::Visit("/".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_run_generates_default_batch() {
        let (runner, log) = fakes(false, false);
        runner.run().await.unwrap();

        let log = log.lock().unwrap();
        match &log[0] {
            Event::SeedStarted(todos) => assert_eq!(todos.len(), DEFAULT_TODO_COUNT),
            other => panic!("expected seed first, got {other:?}"),
        }
        assert_eq!(log.len(), 3);
    }

    #[tokio::test]
    async fn test_empty_batch_passed_unmodified() {
        let (runner, log) = fakes(false, false);
        runner.run_with(&[]).await.unwrap();

        assert_eq!(log.lock().unwrap()[0], Event::SeedStarted(Vec::new()));
    }

    #[tokio::test]
    async fn test_seed_failure_skips_visit() {
        let (runner, log) = fakes(true, false);
        let todos = TodoItemsBuilder::new().count(2).build();

        let err = runner.run_with(&todos).await.unwrap_err();

        assert_eq!(err.to_string(), "Task 'db:seed' failed: constraint violation");
        let log = log.lock().unwrap();
        assert!(!log.iter().any(|e| matches!(e, Event::Visit(_))));
    }

    #[tokio::test]
    async fn test_visit_failure_propagates() {
        let (runner, _log) = fakes(false, true);
        let err = runner.run_with(&[]).await.unwrap_err();
        assert!(matches!(err, Error::Navigation { .. }));
    }

    fn write_scenario(dir: &tempfile::TempDir, yaml: &str) -> std::path::PathBuf {
        let path = dir.path().join("scenario.yaml");
        std::fs::write(&path, yaml).unwrap();
        path
    }

    #[tokio::test]
    async fn test_run_scenario_passes() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_scenario(&dir, "name: seeds the database\ntodos:\n  count: 3\n");
        let (runner, log) = fakes(false, false);

        let report = run_scenario(&path, &runner, 5, false).await.unwrap();

        assert!(report.passed);
        assert_eq!(report.steps_run, 2);
        assert_eq!(report.steps_total, 2);
        let log = log.lock().unwrap();
        match &log[0] {
            Event::SeedStarted(todos) => assert_eq!(todos.len(), 3),
            other => panic!("expected seed first, got {other:?}"),
        }
        assert_eq!(log[2], Event::Visit("/".to_string()));
    }

    #[tokio::test]
    async fn test_run_scenario_uses_default_count() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_scenario(&dir, "name: defaults\n");
        let (runner, log) = fakes(false, false);

        run_scenario(&path, &runner, 7, false).await.unwrap();

        match &log.lock().unwrap()[0] {
            Event::SeedStarted(todos) => assert_eq!(todos.len(), 7),
            other => panic!("expected seed first, got {other:?}"),
        };
    }

    #[tokio::test]
    async fn test_run_scenario_seed_failure_report() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_scenario(&dir, "name: broken seed\n");
        let (runner, log) = fakes(true, false);

        let report = run_scenario(&path, &runner, 5, false).await.unwrap();

        assert!(!report.passed);
        assert_eq!(report.steps_run, 1);
        assert_eq!(
            report.error.as_deref(),
            Some("Task 'db:seed' failed: constraint violation")
        );
        assert_eq!(log.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_run_scenario_visit_failure_report() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_scenario(&dir, "name: missing page\nvisit: /nope\n");
        let (runner, _log) = fakes(false, true);

        let report = run_scenario(&path, &runner, 5, false).await.unwrap();

        assert!(!report.passed);
        assert_eq!(report.steps_run, 2);
        assert_eq!(
            report.error.as_deref(),
            Some("Failed to visit '/nope': 404 Not Found")
        );
    }

    #[tokio::test]
    async fn test_run_scenario_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let (runner, _log) = fakes(false, false);

        let err = run_scenario(&dir.path().join("absent.yaml"), &runner, 5, false)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::FileRead { .. }));
    }
}
