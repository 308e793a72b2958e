use log::*;
use std::process::ExitCode;
use lib::irc::launcher::{launch, Launch};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    env_logger::init();

    let mut stdout = tokio::io::stdout();

    match launch(std::env::args_os(), &mut stdout).await {
        Ok(launch) => launch.into(),
        Err(e) => {
            error!("failed to write usage: {e}");

            Launch::Usage.into()
        }
    }
}
