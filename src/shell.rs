//! The interactive course planner menu.
//!
//! The menu loop in [`Shell`] only reads input and turns it into a
//! [`Command`]. Everything a command does happens in [`dispatch`], which
//! takes the command and the mutable planner state and writes its output to
//! any [`Write`]r, so the behaviour of each command can be exercised without a
//! terminal.

mod menu;

use std::{
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
};

pub use menu::{MenuChoice, MenuError};
use tracing::instrument;

use crate::{
    domain::{Catalog, Config},
    storage::load_into,
    terminal::Palette,
};

const NOTHING_LOADED: &str = "No courses loaded. Please load the data structure first.";

/// A request to the planner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Append the courses in a file to the catalog.
    Load(PathBuf),
    /// Sort the catalog and print every course.
    List,
    /// Print a single course. The identifier is normalized before lookup.
    Info(String),
    /// Leave the planner.
    Exit,
}

/// Whether the menu loop should keep going after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Show the menu again.
    Continue,
    /// Stop the loop.
    Exit,
}

/// The state a planner session carries between commands.
#[derive(Debug, Default, Clone)]
pub struct Session {
    /// Every course loaded so far.
    pub catalog: Catalog,
    /// How catalog files are parsed.
    pub config: Config,
    /// How decorative output is coloured.
    pub palette: Palette,
}

impl Session {
    /// Creates a session with an empty catalog.
    #[must_use]
    pub fn new(config: Config, palette: Palette) -> Self {
        Self {
            catalog: Catalog::new(),
            config,
            palette,
        }
    }
}

/// Runs a single command against the session, writing any output to `out`.
///
/// None of the user-facing failures are errors here: a file that cannot be
/// opened, an empty catalog, or an unknown course are all reported on `out`
/// and leave the catalog as it was.
///
/// # Errors
///
/// Returns an error only if writing to `out` fails.
#[instrument(level = "debug", skip(session, out))]
pub fn dispatch<W: Write>(
    command: Command,
    session: &mut Session,
    out: &mut W,
) -> io::Result<Flow> {
    match command {
        Command::Load(path) => load(&path, session, out)?,
        Command::List => list(session, out)?,
        Command::Info(query) => info(&query, session, out)?,
        Command::Exit => {
            writeln!(out, "Thank you for using the course planner!")?;
            return Ok(Flow::Exit);
        }
    }

    Ok(Flow::Continue)
}

fn load<W: Write>(path: &Path, session: &mut Session, out: &mut W) -> io::Result<()> {
    match load_into(path, &session.config, &mut session.catalog) {
        Ok(_) => writeln!(
            out,
            "{}",
            session.palette.success("Courses loaded successfully.")
        ),
        Err(e) => {
            tracing::debug!("{e:?}");
            writeln!(out, "{}", session.palette.warning(&e.to_string()))
        }
    }
}

fn list<W: Write>(session: &mut Session, out: &mut W) -> io::Result<()> {
    if session.catalog.is_empty() {
        return writeln!(out, "{}", session.palette.warning(NOTHING_LOADED));
    }

    session.catalog.sort();

    writeln!(out, "{}", session.palette.info("Here is a sample schedule:"))?;
    for (id, title) in session.catalog.listing() {
        writeln!(out, "{id}, {title}")?;
    }
    Ok(())
}

fn info<W: Write>(query: &str, session: &Session, out: &mut W) -> io::Result<()> {
    if session.catalog.is_empty() {
        return writeln!(out, "{}", session.palette.warning(NOTHING_LOADED));
    }

    match session.catalog.find_str(query) {
        Some(course) => writeln!(out, "{}", course.detail()),
        None => writeln!(out, "{}", session.palette.warning("Course not found.")),
    }
}

/// The menu loop, reading choices from `input` and writing to `output`.
pub struct Shell<R, W> {
    input: R,
    output: W,
    session: Session,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Creates a shell over the given streams.
    #[must_use]
    pub const fn new(input: R, output: W, session: Session) -> Self {
        Self {
            input,
            output,
            session,
        }
    }

    /// Returns the current session state.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Consumes the shell, returning the session and the output stream.
    #[must_use]
    pub fn into_parts(self) -> (Session, W) {
        (self.session, self.output)
    }

    /// Runs a command directly, outside the menu loop.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the output fails.
    pub fn execute(&mut self, command: Command) -> io::Result<Flow> {
        dispatch(command, &mut self.session, &mut self.output)
    }

    /// Runs the menu until the user exits or the input ends.
    ///
    /// Invalid selections are reported and the menu is shown again.
    ///
    /// # Errors
    ///
    /// Returns an error if reading the input or writing the output fails.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "Welcome to the course planner.")?;

        loop {
            self.print_menu()?;

            let Some(selection) = self.prompt("What would you like to do? ")? else {
                break;
            };

            let choice = match selection.parse::<MenuChoice>() {
                Ok(choice) => choice,
                Err(e) => {
                    let message = self.session.palette.warning(&e.to_string());
                    writeln!(self.output, "{message}")?;
                    continue;
                }
            };

            let Some(command) = self.read_command(choice)? else {
                break;
            };

            if self.execute(command)? == Flow::Exit {
                return Ok(());
            }
        }

        tracing::debug!("input closed, leaving the planner");
        Ok(())
    }

    /// Collects whatever extra input a menu choice needs.
    ///
    /// Returns `None` if the input ends while prompting.
    fn read_command(&mut self, choice: MenuChoice) -> io::Result<Option<Command>> {
        let command = match choice {
            MenuChoice::Load => self
                .prompt("Enter the name of the data file: ")?
                .map(|name| Command::Load(PathBuf::from(name))),
            MenuChoice::List => Some(Command::List),
            // dispatch reports the empty catalog
            MenuChoice::Info if self.session.catalog.is_empty() => {
                Some(Command::Info(String::new()))
            }
            MenuChoice::Info => self
                .prompt("What course do you want to know about? ")?
                .map(Command::Info),
            MenuChoice::Exit => Some(Command::Exit),
        };
        Ok(command)
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        for choice in MenuChoice::ALL {
            writeln!(self.output, "{choice}")?;
        }
        Ok(())
    }

    /// Writes a prompt and reads one trimmed line of input.
    ///
    /// Returns `None` at end of input.
    fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", self.session.palette.dim(message))?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
