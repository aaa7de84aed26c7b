use std::{fmt, str::FromStr};

/// An entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Load a catalog file.
    Load,
    /// Print the sorted course list.
    List,
    /// Print a single course.
    Info,
    /// Leave the planner.
    Exit,
}

impl MenuChoice {
    /// Every choice, in the order shown on the menu.
    pub const ALL: [Self; 4] = [Self::Load, Self::List, Self::Info, Self::Exit];

    /// The number the user types to select this choice.
    #[must_use]
    pub const fn number(self) -> i64 {
        match self {
            Self::Load => 1,
            Self::List => 2,
            Self::Info => 3,
            Self::Exit => 9,
        }
    }

    const fn label(self) -> &'static str {
        match self {
            Self::Load => "Load Data Structure.",
            Self::List => "Print Course List.",
            Self::Info => "Print Course.",
            Self::Exit => "Exit",
        }
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.number(), self.label())
    }
}

/// Errors from reading a menu selection.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum MenuError {
    /// The input was not a number at all.
    #[error("Invalid input. Please enter a number between 1 and 9.")]
    NotANumber,

    /// The input was a number with no menu entry.
    #[error("{0} is not a valid option.")]
    Undefined(i64),
}

impl FromStr for MenuChoice {
    type Err = MenuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let number: i64 = s.trim().parse().map_err(|_| MenuError::NotANumber)?;

        Self::ALL
            .into_iter()
            .find(|choice| choice.number() == number)
            .ok_or(MenuError::Undefined(number))
    }
}
