use std::path::PathBuf;

use clap::Parser;
use planner::{Config, CourseDetail, CourseId};
use tracing::instrument;

#[derive(Debug, Parser)]
#[command(about = "Display a course and its prerequisites")]
pub struct Show {
    /// The identifier of the course to display (case-insensitive)
    #[clap(value_parser = super::parse_course_id)]
    id: CourseId,

    /// Catalog file to load (may be repeated)
    #[arg(short, long = "file", value_name = "FILE", required = true)]
    files: Vec<PathBuf>,

    /// Output format
    #[arg(long, value_name = "FORMAT", default_value = "pretty")]
    output: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Pretty,
    Json,
}

impl Show {
    #[instrument(level = "debug", skip(config))]
    pub fn run(self, config: &Config) -> anyhow::Result<()> {
        let catalog = super::load_catalog(&self.files, config)?;

        let Some(detail) = catalog.detail(&self.id) else {
            eprintln!("Course {} not found", self.id);
            std::process::exit(1);
        };

        println!("{}", self.render(detail)?);
        Ok(())
    }

    fn render(&self, detail: CourseDetail<'_>) -> anyhow::Result<String> {
        Ok(match self.output {
            OutputFormat::Pretty => detail.to_string(),
            OutputFormat::Json => serde_json::to_string_pretty(&detail)?,
        })
    }
}
