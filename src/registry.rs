use std::fmt::Display;

use crate::console::Console;

/// A runnable entry point. Constructed with no arguments by its registered
/// constructor; all dialogue goes through the console handed to `run`.
pub trait Program {
    fn run(&mut self, console: &mut Console) -> anyhow::Result<()>;
}

type Constructor = fn() -> Box<dyn Program>;

/// Name -> constructor mapping, populated once at startup. Replaces the
/// "detect the caller" trick: the name always comes from the command line,
/// except that a registry holding exactly one program runs it by default.
pub struct Registry {
    entries: Vec<(&'static str, Constructor)>,
}

#[derive(Debug)]
pub enum ResolveError {
    Unknown {
        name: String,
        available: Vec<String>,
    },
    NoDefault {
        available: Vec<String>,
    },
    Empty,
}

impl Registry {
    pub fn new() -> Self {
        Self { entries: vec![] }
    }

    pub fn register(&mut self, name: &'static str, construct: Constructor) {
        self.entries.retain(|(n, _)| !n.eq_ignore_ascii_case(name));
        self.entries.push((name, construct));
    }

    pub fn names(&self) -> Vec<String> {
        self.entries.iter().map(|(n, _)| n.to_string()).collect()
    }

    pub fn resolve(&self, name: Option<&str>) -> Result<Box<dyn Program>, ResolveError> {
        match name {
            Some(name) => match self
                .entries
                .iter()
                .find(|(n, _)| n.eq_ignore_ascii_case(name))
            {
                Some((_, construct)) => Ok(construct()),
                None => Err(ResolveError::Unknown {
                    name: name.to_string(),
                    available: self.names(),
                }),
            },
            None => match self.entries.as_slice() {
                [] => Err(ResolveError::Empty),
                [(_, construct)] => Ok(construct()),
                _ => Err(ResolveError::NoDefault {
                    available: self.names(),
                }),
            },
        }
    }
}

impl Display for ResolveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResolveError::Unknown { name, available } => write!(
                f,
                "no program named '{}' (available: {})",
                name,
                available.join(", ")
            ),
            ResolveError::NoDefault { available } => write!(
                f,
                "several programs are registered; name one (available: {})",
                available.join(", ")
            ),
            ResolveError::Empty => write!(f, "no programs are registered"),
        }
    }
}

impl std::error::Error for ResolveError {}
