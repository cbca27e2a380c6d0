use std::path::PathBuf;

use clap::Args;
use eyre::{Result, bail};
use hatch_core::{Config, Flavor, ProjectNames};

use crate::{
    pipeline::{self, NewProject},
    process::SystemRunner,
    prompt,
    reports::{Report, ScaffoldSummary, TerminalOutput},
};

#[derive(Args)]
pub struct NewCommand {
    /// Project name (prompted for when omitted)
    pub name: Option<String>,

    /// Directory to create the project in
    #[arg(short, long, default_value = ".")]
    pub dir: PathBuf,

    /// Add a web frontend without asking
    #[arg(long, conflicts_with = "no_web")]
    pub web: bool,

    /// Skip the web frontend without asking
    #[arg(long)]
    pub no_web: bool,

    /// Frontend flavor: vanilla, react, preact, svelte or qwik (implies --web)
    #[arg(short, long, conflicts_with = "no_web")]
    pub flavor: Option<Flavor>,
}

impl NewCommand {
    /// Prompt-everything defaults used by the interactive menu
    pub fn interactive() -> Self {
        Self {
            name: None,
            dir: PathBuf::from("."),
            web: false,
            no_web: false,
            flavor: None,
        }
    }

    pub fn run(&self, config: &Config) -> Result<()> {
        let project = self.resolve(config)?;
        if project.root().exists() {
            bail!("{} already exists", project.root().display());
        }

        let report = pipeline::new_project(&SystemRunner, config, &project)?;

        ScaffoldSummary {
            report: &report,
            web_only: false,
        }
        .render(&mut TerminalOutput);

        if report.is_success() {
            return Ok(());
        }
        if let Some(err) = report.aborted {
            return Err(err.into());
        }
        let failed = report.log.failures().count();
        bail!("{} step(s) failed while generating {}", failed, project.names.package);
    }

    /// Fill in everything not given as a flag by prompting.
    fn resolve(&self, config: &Config) -> Result<NewProject> {
        let name = match &self.name {
            Some(name) => {
                if let Err(reason) = prompt::validate_project_name(name) {
                    bail!(reason);
                }
                name.clone()
            }
            None => prompt::project_name()?,
        };

        let wants_web = if self.web || self.flavor.is_some() {
            true
        } else if self.no_web {
            false
        } else {
            prompt::needs_web_frontend()?
        };

        let frontend = match (wants_web, self.flavor) {
            (false, _) => None,
            (true, Some(flavor)) => Some(flavor),
            (true, None) => Some(prompt::flavor(config.frontend.flavor)?),
        };

        Ok(NewProject {
            names: ProjectNames::new(name),
            parent: self.dir.clone(),
            frontend,
        })
    }
}
