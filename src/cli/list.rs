use std::{
    io::{self, Write},
    path::PathBuf,
};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use planner::{Catalog, Config, Course};
use regex::{Regex, RegexBuilder};
use tracing::instrument;

/// Command arguments for `planner list`.
#[derive(Debug, Parser)]
#[command(about = "List courses sorted by identifier")]
pub struct List {
    /// Catalog file to load (may be repeated)
    #[arg(short, long = "file", value_name = "FILE", required = true)]
    files: Vec<PathBuf>,

    /// Case-insensitive regular expression matched against identifier and
    /// title.
    #[arg(long, value_name = "REGEX")]
    filter: Option<String>,

    /// Output format (default: table).
    #[arg(long, value_enum, default_value_t)]
    output: OutputFormat,

    /// Suppress the heading line.
    #[arg(long)]
    quiet: bool,
}

/// Supported output formats.
#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl List {
    #[instrument(level = "debug", skip(config))]
    pub fn run(self, config: &Config) -> anyhow::Result<()> {
        let mut catalog = super::load_catalog(&self.files, config)?;
        catalog.sort();

        let filter = self
            .filter
            .as_deref()
            .map(|pattern| {
                RegexBuilder::new(pattern)
                    .case_insensitive(true)
                    .build()
                    .with_context(|| format!("Invalid filter pattern '{pattern}'"))
            })
            .transpose()?;

        let courses = select(&catalog, filter.as_ref());
        tracing::debug!("{} of {} courses selected", courses.len(), catalog.len());

        let mut stdout = io::stdout().lock();
        self.render(&courses, &mut stdout)
    }

    fn render<W: Write>(&self, courses: &[&Course], out: &mut W) -> anyhow::Result<()> {
        match self.output {
            OutputFormat::Table => {
                if !self.quiet {
                    writeln!(out, "Here is a sample schedule:")?;
                }
                for course in courses {
                    writeln!(out, "{}, {}", course.id(), course.title())?;
                }
            }
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut *out, courses)?;
                writeln!(out)?;
            }
        }
        Ok(())
    }
}

fn select<'a>(catalog: &'a Catalog, filter: Option<&Regex>) -> Vec<&'a Course> {
    catalog
        .iter()
        .filter(|course| {
            filter.is_none_or(|re| re.is_match(course.id()) || re.is_match(course.title()))
        })
        .collect()
}
