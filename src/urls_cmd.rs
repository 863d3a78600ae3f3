//! Urls command: print the service queries for the configured network and year.

use anyhow::Result;
use tracing::{info, info_span};

use seisaudio_availability::{availability_url, catalog_url};

use crate::cli::UrlsArgs;
use crate::config;
use crate::convert;

/// Print the availability and catalog URLs, one per line.
pub fn run(args: UrlsArgs) -> Result<()> {
    let _cmd = info_span!("urls").entered();
    let config = config::load(args.query.config.as_deref())?;
    let query = convert::build_query_config(&config.query, &args.query)?;
    info!(
        network = query.network(),
        year = query.year(),
        "building query URLs"
    );

    println!("{}", availability_url(&query));
    println!("{}", catalog_url(&query));
    Ok(())
}
