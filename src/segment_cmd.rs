//! Segment command: show how one interval is split into requests.

use std::fmt::Write as _;

use anyhow::{Context, Result, bail};
use tracing::{debug, info_span};

use seisaudio_calendar::{Interval, SECONDS_PER_DAY, segment};

use crate::cli::SegmentArgs;
use crate::convert::MIN_CHUNK_DAYS;

/// Print one tab-separated row per chunk: start, end, start s, end s.
pub fn run(args: SegmentArgs) -> Result<()> {
    let _cmd = info_span!("segment").entered();
    print!("{}", render(&args)?);
    Ok(())
}

fn render(args: &SegmentArgs) -> Result<String> {
    if !(args.max_days.is_finite() && args.max_days >= MIN_CHUNK_DAYS) {
        bail!(
            "--max-days must be at least {MIN_CHUNK_DAYS}, got {}",
            args.max_days
        );
    }
    let interval = Interval::parse(&args.start, &args.end)
        .with_context(|| format!("invalid interval {} .. {}", args.start, args.end))?;
    let ref_year = args.year.unwrap_or(interval.start().year());
    let chunks = segment(&interval, ref_year, args.max_days * SECONDS_PER_DAY)?;
    debug!(ref_year, n_chunks = chunks.len(), "interval segmented");

    let mut out = String::new();
    for chunk in &chunks {
        writeln!(
            out,
            "{}\t{}\t{}\t{}",
            chunk.start(),
            chunk.end(),
            chunk.start_seconds(ref_year),
            chunk.end_seconds(ref_year)
        )?;
    }
    Ok(out)
}
