use std::path::{Path, PathBuf};

mod interactive;
mod list;
mod show;

use anyhow::Context;
use clap::ArgAction;
use interactive::Interactive;
use list::List;
use planner::{storage::load_into, Catalog, Config, CourseId};
use show::Show;
use tracing::instrument;

/// Configuration file picked up from the working directory when `--config`
/// is not given.
const DEFAULT_CONFIG: &str = "planner.toml";

/// Parse a course identifier, normalizing to uppercase.
///
/// This is a CLI boundary function that accepts lowercase input and
/// surrounding whitespace.
fn parse_course_id(s: &str) -> Result<CourseId, String> {
    CourseId::new(s.trim()).map_err(|e| format!("{e}"))
}

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a TOML configuration file (default: ./planner.toml, if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Field delimiter, overriding the configuration file
    #[arg(short, long, global = true)]
    delimiter: Option<char>,

    #[command(subcommand)]
    command: Option<Command>,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        self.command
            .unwrap_or_else(|| Command::Shell(Interactive::default()))
            .run(self.config.as_deref(), self.delimiter)
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        // stdout belongs to the menu and listings
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

#[derive(Debug, clap::Parser)]
pub enum Command {
    /// Run the interactive menu (default)
    Shell(Interactive),

    /// Print every course, sorted by identifier
    List(List),

    /// Show a single course and its prerequisites
    Show(Show),

    /// Write a configuration file with the default settings
    Init(Init),
}

impl Command {
    fn run(self, config_path: Option<&Path>, delimiter: Option<char>) -> anyhow::Result<()> {
        match self {
            Self::Shell(command) => command.run(resolve_config(config_path, delimiter)?)?,
            Self::List(command) => command.run(&resolve_config(config_path, delimiter)?)?,
            Self::Show(command) => command.run(&resolve_config(config_path, delimiter)?)?,
            Self::Init(_) => Init::run(
                config_path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG)),
                delimiter,
            )?,
        }
        Ok(())
    }
}

#[derive(Debug, clap::Parser)]
pub struct Init {}

impl Init {
    #[instrument]
    fn run(path: &Path, delimiter: Option<char>) -> anyhow::Result<()> {
        if path.exists() {
            anyhow::bail!("Configuration already exists at {}", path.display());
        }

        let mut config = Config::default();
        if let Some(delimiter) = delimiter {
            config.set_delimiter(delimiter);
        }
        config
            .save(path)
            .map_err(|e| anyhow::anyhow!("Failed to create {}: {e}", path.display()))?;

        println!("Initialized configuration in {}", path.display());
        Ok(())
    }
}

/// Loads the configuration named on the command line, or the default file if
/// there is one, then applies the delimiter override.
fn resolve_config(path: Option<&Path>, delimiter: Option<char>) -> anyhow::Result<Config> {
    let mut config = match path {
        Some(path) => Config::load(path).map_err(anyhow::Error::msg)?,
        None => default_config(Path::new(DEFAULT_CONFIG)),
    };
    if let Some(delimiter) = delimiter {
        config.set_delimiter(delimiter);
    }
    Ok(config)
}

fn default_config(path: &Path) -> Config {
    if !path.exists() {
        return Config::default();
    }

    Config::load(path).unwrap_or_else(|e| {
        tracing::debug!("Failed to load config: {e}");
        Config::default()
    })
}

/// Loads every file into a single catalog, in the order given.
///
/// Unlike the interactive menu, a file that cannot be read is an error here.
fn load_catalog(files: &[PathBuf], config: &Config) -> anyhow::Result<Catalog> {
    let mut catalog = Catalog::new();

    for path in files {
        let report = load_into(path, config, &mut catalog)
            .with_context(|| format!("Failed to load catalog {}", path.display()))?;

        for skipped in &report.skipped {
            tracing::warn!(
                "{}:{}: skipped line ({})",
                path.display(),
                skipped.line,
                skipped.reason
            );
        }
    }

    Ok(catalog)
}
