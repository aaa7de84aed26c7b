use std::{io, path::PathBuf};

use clap::Parser;
use planner::{terminal::Palette, Command, Config, Session, Shell};
use tracing::instrument;

#[derive(Debug, Default, Parser)]
#[command(about = "Run the interactive course planner menu")]
pub struct Interactive {
    /// Catalog files to load before the menu is shown
    files: Vec<PathBuf>,
}

impl Interactive {
    #[instrument(level = "debug", skip(config))]
    pub fn run(self, config: Config) -> anyhow::Result<()> {
        let session = Session::new(config, Palette::detect());
        let mut shell = Shell::new(io::stdin().lock(), io::stdout().lock(), session);

        for file in self.files {
            shell.execute(Command::Load(file))?;
        }

        shell.run()?;
        Ok(())
    }
}
