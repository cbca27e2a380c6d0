//! The generation pipeline.
//!
//! `NameCollected -> BackendSkeletonWritten -> FrontendDecisionMade ->
//! (FrontendSkeletonWritten -> PatchesApplied)? -> Done`
//!
//! Every step receives the project root explicitly. External commands are
//! fatal when they fail; file writes and patches are best-effort and each
//! outcome is recorded in a [`StepLog`].

use std::{
    fmt,
    path::{Path, PathBuf},
};

use eyre::{Result as EyreResult, WrapErr, bail, eyre};
use hatch_core::{
    Config, Error, Flavor, GeneratedFile, PatchFile, PatchRequest, ProjectNames, Result,
};
use hatch_templates::{
    CargoToml, ErrorRs, ExampleRoute, MainRs, RouteConfig, RoutesMod, StructsRs, ViteConfig,
    WebRoutes, frontend::WEB_DIR, patches,
};

use crate::process::CommandRunner;

/// Pipeline progress, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    NameCollected,
    BackendSkeletonWritten,
    FrontendDecisionMade,
    FrontendSkeletonWritten,
    PatchesApplied,
    Done,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Stage::NameCollected => "name collected",
            Stage::BackendSkeletonWritten => "backend skeleton written",
            Stage::FrontendDecisionMade => "frontend decision made",
            Stage::FrontendSkeletonWritten => "frontend skeleton written",
            Stage::PatchesApplied => "patches applied",
            Stage::Done => "done",
        };
        f.write_str(text)
    }
}

/// What happened to a single file.
#[derive(Debug)]
pub enum StepOutcome {
    Written,
    Patched,
    Failed(Box<Error>),
}

#[derive(Debug)]
pub struct Step {
    /// Path relative to the project root
    pub path: PathBuf,
    pub outcome: StepOutcome,
}

/// Ordered record of every write and patch in a run.
#[derive(Debug, Default)]
pub struct StepLog {
    steps: Vec<Step>,
}

impl StepLog {
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn failures(&self) -> impl Iterator<Item = &Step> {
        self.steps
            .iter()
            .filter(|s| matches!(s.outcome, StepOutcome::Failed(_)))
    }

    pub fn has_failures(&self) -> bool {
        self.failures().next().is_some()
    }

    pub fn extend(&mut self, other: StepLog) {
        self.steps.extend(other.steps);
    }

    /// Write a generated file, recording the outcome instead of stopping.
    fn write(&mut self, root: &Path, file: &dyn GeneratedFile) {
        let path = file.path(root);
        let outcome = match file.write(root) {
            Ok(()) => StepOutcome::Written,
            Err(e) => StepOutcome::Failed(e),
        };
        self.record(root, path, outcome);
    }

    /// Apply a patch to a file under `root`, recording the outcome.
    fn patch(&mut self, root: &Path, relative: impl AsRef<Path>, request: PatchRequest) {
        let path = root.join(relative);
        let outcome = match PatchFile::new(&path, request).apply() {
            Ok(()) => StepOutcome::Patched,
            Err(e) => StepOutcome::Failed(e),
        };
        self.record(root, path, outcome);
    }

    fn record(&mut self, root: &Path, path: PathBuf, outcome: StepOutcome) {
        let path = path.strip_prefix(root).map(Path::to_path_buf).unwrap_or(path);
        match &outcome {
            StepOutcome::Failed(e) => {
                tracing::warn!(path = %path.display(), error = %e, "step failed")
            }
            other => tracing::debug!(path = %path.display(), outcome = ?other, "step done"),
        }
        self.steps.push(Step { path, outcome });
    }
}

/// Result of a pipeline run.
#[derive(Debug)]
pub struct ScaffoldReport {
    pub root: PathBuf,
    pub names: ProjectNames,
    pub flavor: Option<Flavor>,
    /// Last stage reached
    pub stage: Stage,
    pub log: StepLog,
    /// Fatal error that stopped the run early
    pub aborted: Option<Box<Error>>,
}

impl ScaffoldReport {
    fn new(root: PathBuf, names: ProjectNames, flavor: Option<Flavor>) -> Self {
        Self {
            root,
            names,
            flavor,
            stage: Stage::NameCollected,
            log: StepLog::default(),
            aborted: None,
        }
    }

    fn advance(&mut self, stage: Stage) {
        tracing::debug!(%stage, "stage reached");
        self.stage = stage;
    }

    /// Whether the run stopped early or any step failed.
    pub fn is_success(&self) -> bool {
        self.aborted.is_none() && !self.log.has_failures()
    }
}

/// Inputs of `hatch new`, already resolved from flags and prompts.
#[derive(Debug, Clone)]
pub struct NewProject {
    pub names: ProjectNames,
    /// Directory the project directory is created in
    pub parent: PathBuf,
    /// `Some` when a web frontend was requested
    pub frontend: Option<Flavor>,
}

impl NewProject {
    pub fn root(&self) -> PathBuf {
        self.parent.join(&self.names.package)
    }
}

/// Create a project: cargo skeleton, backend files, then the optional frontend.
///
/// Fails outright only when `cargo new` fails, since nothing has been
/// written at that point. Later failures are recorded in the report.
pub fn new_project(
    runner: &dyn CommandRunner,
    config: &Config,
    project: &NewProject,
) -> Result<ScaffoldReport> {
    let root = project.root();
    let names = &project.names;

    runner.run("cargo", &["new", names.package.as_str()], &project.parent)?;

    let mut report = ScaffoldReport::new(root.clone(), names.clone(), project.frontend);
    report.log = generate_backend(&root, names, config);
    report.advance(Stage::BackendSkeletonWritten);
    report.advance(Stage::FrontendDecisionMade);

    if let Some(flavor) = project.frontend {
        add_frontend(runner, &mut report, flavor);
    }

    if report.aborted.is_none() {
        report.advance(Stage::Done);
    }
    Ok(report)
}

/// Add the web frontend to an existing generated project.
pub fn add_web_frontend(
    runner: &dyn CommandRunner,
    root: &Path,
    flavor: Flavor,
) -> EyreResult<ScaffoldReport> {
    let package = read_package_name(root)?;
    if has_web_integration(root) {
        bail!("{} already serves a web frontend", root.display());
    }

    let names = ProjectNames::new(package);
    let mut report = ScaffoldReport::new(root.to_path_buf(), names, Some(flavor));
    report.advance(Stage::FrontendDecisionMade);
    add_frontend(runner, &mut report, flavor);

    if report.aborted.is_none() {
        report.advance(Stage::Done);
    }
    Ok(report)
}

fn add_frontend(runner: &dyn CommandRunner, report: &mut ScaffoldReport, flavor: Flavor) {
    if let Err(e) = create_frontend(runner, &report.root, flavor) {
        tracing::warn!(error = %e, "frontend skeleton failed, skipping web integration");
        report.aborted = Some(e);
        return;
    }
    report.advance(Stage::FrontendSkeletonWritten);

    let log = integrate_web_frontend(&report.root, &report.names, flavor);
    report.log.extend(log);
    report.advance(Stage::PatchesApplied);
}

/// Write the backend skeleton over what `cargo new` produced.
pub fn generate_backend(root: &Path, names: &ProjectNames, config: &Config) -> StepLog {
    let mut log = StepLog::default();

    log.write(root, &CargoToml::new(&names.package).with_project(&config.project));
    log.write(
        root,
        &MainRs::new(config.server.clone()).with_edition(&config.project.edition),
    );
    log.write(root, &ErrorRs::new(names));
    log.write(root, &StructsRs);
    // parent directories are created by the write itself
    log.write(root, &ExampleRoute::new(names));
    log.write(root, &RouteConfig);
    log.write(root, &RoutesMod);

    log
}

/// Scaffold the vite app in `<root>/src/web` and install its dependencies.
///
/// An existing `src/web` left by an earlier interrupted run is reused and
/// only the install steps run again.
pub fn create_frontend(runner: &dyn CommandRunner, root: &Path, flavor: Flavor) -> Result<()> {
    let src = root.join("src");
    let web = root.join(WEB_DIR);

    if web.is_dir() {
        tracing::info!(dir = %web.display(), "reusing existing frontend directory");
    } else {
        runner.run(
            "npm",
            &[
                "create",
                "--yes",
                "vite@latest",
                "web",
                "--",
                "--template",
                flavor.vite_template(),
            ],
            &src,
        )?;
    }
    runner.run("npm", &["install"], &web)?;
    runner.run("npm", &["install", "tailwindcss", "@tailwindcss/vite"], &web)?;

    Ok(())
}

/// Write the web routes and build config, then patch the backend to serve them.
pub fn integrate_web_frontend(root: &Path, names: &ProjectNames, flavor: Flavor) -> StepLog {
    let mut log = StepLog::default();

    log.write(root, &WebRoutes::new(names));
    log.patch(root, "src/routes/mod.rs", patches::web_module_declaration());
    log.patch(root, "src/routes/config.rs", patches::web_services());
    log.patch(root, "Cargo.toml", patches::web_dependency());

    log.write(root, &ViteConfig::new(flavor));
    log.patch(
        root,
        Path::new(WEB_DIR).join(flavor.stylesheet()),
        patches::tailwind_import(),
    );

    log
}

/// Whether the backend has already been patched to serve the frontend.
pub fn has_web_integration(root: &Path) -> bool {
    if root.join("src").join("routes").join("web.rs").exists() {
        return true;
    }
    std::fs::read_to_string(RoutesMod.path(root))
        .is_ok_and(|content| content.lines().any(|line| line.trim() == "pub mod web;"))
}

/// `[package].name` from the project's Cargo.toml.
pub fn read_package_name(root: &Path) -> EyreResult<String> {
    let path = root.join("Cargo.toml");
    let content = std::fs::read_to_string(&path)
        .wrap_err_with(|| format!("Failed to read {}", path.display()))?;
    let manifest: toml::Table = content
        .parse()
        .wrap_err_with(|| format!("Failed to parse {}", path.display()))?;

    manifest
        .get("package")
        .and_then(|p| p.get("name"))
        .and_then(|n| n.as_str())
        .map(str::to_string)
        .ok_or_else(|| eyre!("{} has no [package] name", path.display()))
}
