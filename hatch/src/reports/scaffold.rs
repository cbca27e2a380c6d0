use super::{Output, Report};
use crate::pipeline::{ScaffoldReport, StepOutcome};

/// Summary printed after `hatch new` / `hatch web`.
pub struct ScaffoldSummary<'a> {
    pub report: &'a ScaffoldReport,
    /// The run only added the web frontend to an existing project
    pub web_only: bool,
}

impl Report for ScaffoldSummary<'_> {
    fn render(&self, out: &mut dyn Output) {
        let report = self.report;

        if self.web_only {
            out.title(&format!("Web frontend for {}", report.names.package));
        } else {
            out.title(&format!("Created {}", report.names.package));
        }
        out.key_value("Location", &report.root.display().to_string());
        out.key_value("Error type", &report.names.error_type());
        if let Some(flavor) = report.flavor {
            out.key_value("Frontend", flavor.label());
        }
        out.newline();

        if !report.log.steps().is_empty() {
            out.section("Files");
            for step in report.log.steps() {
                let path = step.path.display().to_string();
                match &step.outcome {
                    StepOutcome::Written => out.added_item(&path),
                    StepOutcome::Patched => out.modified_item(&path),
                    StepOutcome::Failed(e) => out.failed_item(&format!("{}: {}", path, e)),
                }
            }
            out.newline();
        }

        if let Some(err) = &report.aborted {
            out.warning(&format!("stopped after {}: {}", report.stage, err));
            return;
        }

        let failed = report.log.failures().count();
        if failed > 0 {
            out.warning(&format!(
                "{} step(s) failed; the project is incomplete",
                failed
            ));
            return;
        }

        out.section("Next steps");
        if !self.web_only {
            out.list_item(&format!("cd {}", report.root.display()));
        }
        if report.flavor.is_some() {
            out.list_item("(cd src/web && npm run build)");
        }
        out.list_item("cargo run");
    }
}
