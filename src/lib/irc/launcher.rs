use log::*;
use std::ffi::OsString;
use std::io;
use std::process::ExitCode;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use crate::irc::args::{ServerArgs, USAGE};

#[derive(Debug, PartialEq, Eq)]
pub enum Launch {
    Usage,
    Ready(ServerArgs),
}

impl Launch {
    pub fn exit_code(&self) -> u8 {
        match self {
            Launch::Usage => 1,
            Launch::Ready(_) => 0,
        }
    }
}

impl From<Launch> for ExitCode {
    fn from(launch: Launch) -> Self {
        ExitCode::from(launch.exit_code())
    }
}

/// Checks the argument vector and prints the usage line to `out` when it is wrong.
///
/// Nothing is started on success, the parsed arguments are handed back as is.
pub async fn launch<I, S, W>(args: I, out: &mut W) -> io::Result<Launch>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
    W: AsyncWrite + Unpin,
{
    match ServerArgs::from_args(args) {
        Ok(args) => {
            debug!("arguments accepted: {args:?}");

            Ok(Launch::Ready(args))
        }
        Err(e) => {
            warn!("{e}");

            out.write_all(USAGE.as_ref()).await?;
            out.write_all("\n".as_ref()).await?;
            out.flush().await?;

            Ok(Launch::Usage)
        }
    }
}
