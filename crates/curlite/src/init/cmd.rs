use std::str::FromStr;

use anyhow::Result;
use log::LevelFilter;

use crate::{
    cmd::{self, Args, RequestOptions},
    error::Error,
    init::logger,
};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const LOG_ENV: &str = "CURLITE_LOG";

/// Parse the command line, bring up logging, and hand back the request.
///
/// `--help` prints and exits here. A wrong URL count prints the usage to
/// stderr before the error is returned.
pub fn init() -> Result<RequestOptions> {
    let args = Args::parse()?;
    logger::init(log_level(&args), args.colored)?;
    log::debug!("{args:?}");

    if args.help {
        println!("version: {VERSION}\r\n{}", cmd::usage());
        std::process::exit(0);
    }

    match args.into_request_options() {
        Err(e @ Error::ArgumentCount(_)) => {
            eprintln!("{}", cmd::usage());
            Err(e.into())
        }
        other => Ok(other?),
    }
}

fn log_level(args: &Args) -> LevelFilter {
    args.log_level
        .or_else(|| {
            let raw = std::env::var(LOG_ENV).ok()?;
            LevelFilter::from_str(&raw).ok()
        })
        .unwrap_or(LevelFilter::Warn)
}
