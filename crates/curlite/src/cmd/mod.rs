mod args;

use std::{ffi::OsString, str::FromStr};

pub use args::*;
use log::LevelFilter;

use crate::{
    common::Method,
    error::{Error, Result},
};

/// Everything the request pipeline needs, built once from the command line.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub method: Method,
    pub data: String,
    /// Raw `Key: Value` strings in the order they were given.
    pub headers: HeadersArg,
    pub url: String,
}

#[derive(Debug, Default)]
pub struct Args {
    pub method: Method,
    pub data: String,
    pub headers: HeadersArg,
    pub urls: Vec<String>,
    pub log_level: Option<LevelFilter>,
    pub colored: bool,
    pub help: bool,
}

impl Args {
    pub fn parse() -> core::result::Result<Self, lexopt::Error> {
        Self::parse_from(std::env::args_os().skip(1))
    }

    /// Parse an argument list that does not include the program name.
    pub fn parse_from<I>(args: I) -> core::result::Result<Self, lexopt::Error>
    where
        I: IntoIterator,
        I::Item: Into<OsString>,
    {
        use lexopt::prelude::*;

        let mut parsed = Args::default();
        let mut parser = lexopt::Parser::from_args(args);
        while let Some(arg) = parser.next()? {
            match arg {
                Short('X') | Long("request") => {
                    parsed.method = parser.value()?.parse()?;
                }
                Short('d') | Long("data") => {
                    parsed.data = parser.value()?.string()?;
                }
                Short('H') | Long("header") => {
                    parsed.headers.push(parser.value()?.string()?);
                }
                Long("log-level") => {
                    let level = parser.value()?.string()?;
                    parsed.log_level = Some(
                        LevelFilter::from_str(&level)
                            .map_err(|e| lexopt::Error::Custom(format!("{e}: {level}").into()))?,
                    );
                }
                Long("colored") => parsed.colored = true,
                Short('h') | Long("help") => parsed.help = true,
                Value(url) => parsed.urls.push(url.string()?),
                _ => return Err(arg.unexpected()),
            }
        }

        Ok(parsed)
    }

    /// Exactly one positional URL is accepted.
    pub fn into_request_options(self) -> Result<RequestOptions> {
        let [url] = <[String; 1]>::try_from(self.urls)
            .map_err(|urls| Error::ArgumentCount(urls.len()))?;
        Ok(RequestOptions {
            method: self.method,
            data: self.data,
            headers: self.headers,
            url,
        })
    }
}

pub fn usage() -> String {
    let methods: Vec<String> = Method::ITEMS.iter().map(ToString::to_string).collect();
    format!(
        "Usage: {name} [options] <URL>\n\
         \n\
         Options:\n\
         \x20 -X, --request <METHOD>   HTTP method, default GET ({methods})\n\
         \x20 -d, --data <DATA>        HTTP payload, sent verbatim\n\
         \x20 -H, --header <HEADER>    HTTP header \"Key: Value\", may be repeated\n\
         \x20     --log-level <LEVEL>  off|error|warn|info|debug|trace, default warn\n\
         \x20     --colored            colour the log level names\n\
         \x20 -h, --help               print this help",
        name = env!("CARGO_PKG_NAME"),
        methods = methods.join("|"),
    )
}
