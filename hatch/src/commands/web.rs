use std::path::PathBuf;

use clap::Args;
use eyre::{Result, bail};
use hatch_core::{Config, Flavor};

use crate::{
    pipeline,
    process::SystemRunner,
    prompt,
    reports::{Report, ScaffoldSummary, TerminalOutput},
};

#[derive(Args)]
pub struct WebCommand {
    /// Project directory (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub dir: PathBuf,

    /// Frontend flavor (prompted for when omitted)
    #[arg(short, long)]
    pub flavor: Option<Flavor>,
}

impl WebCommand {
    pub fn run(&self, config: &Config) -> Result<()> {
        let flavor = match self.flavor {
            Some(flavor) => flavor,
            None => prompt::flavor(config.frontend.flavor)?,
        };

        let report = pipeline::add_web_frontend(&SystemRunner, &self.dir, flavor)?;

        ScaffoldSummary {
            report: &report,
            web_only: true,
        }
        .render(&mut TerminalOutput);

        if report.is_success() {
            return Ok(());
        }
        if let Some(err) = report.aborted {
            return Err(err.into());
        }
        let failed = report.log.failures().count();
        bail!("{} step(s) failed while adding the web frontend", failed);
    }
}
