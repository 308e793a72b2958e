use std::error::Error;
use std::ffi::{OsStr, OsString};
use std::fmt;

pub const USAGE: &str = "Usage: ./ircserv <port> <password>";

// Program name plus port and password.
const EXPECTED_ARGC: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgsError {
    InvalidArgumentCount { found: usize },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::InvalidArgumentCount { found } => {
                write!(f, "expected 2 arguments (port, password), got {found}")
            }
        }
    }
}

impl Error for ArgsError {}

/// Positional arguments of `ircserv`, kept exactly as the OS handed them over.
#[derive(Clone, PartialEq, Eq)]
pub struct ServerArgs {
    port: OsString,
    password: OsString,
}

impl ServerArgs {
    /// Takes the whole argument vector, program name included.
    pub fn from_args<I, S>(args: I) -> Result<Self, ArgsError>
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();

        if args.len() != EXPECTED_ARGC {
            return Err(ArgsError::InvalidArgumentCount {
                found: args.len().saturating_sub(1),
            });
        }

        let mut args = args.into_iter().skip(1);

        match (args.next(), args.next()) {
            (Some(port), Some(password)) => Ok(Self { port, password }),
            _ => Err(ArgsError::InvalidArgumentCount { found: 0 }),
        }
    }

    pub fn get_port(&self) -> &OsStr {
        &self.port
    }

    pub fn get_password(&self) -> &OsStr {
        &self.password
    }
}

impl fmt::Debug for ServerArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerArgs")
            .field("port", &self.port)
            .field("password", &"<redacted>")
            .finish()
    }
}
