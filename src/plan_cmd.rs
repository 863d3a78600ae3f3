//! Plan command: select stations from a saved availability response and
//! write their audio requests and label tracks.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::{info, info_span, warn};

use seisaudio_availability::{
    StationPlan, parse_availability, parse_station_text, plan_station, select_stations,
};

use crate::cli::PlanArgs;
use crate::config;
use crate::convert;

/// Run the selection and planning pipeline.
pub fn run(args: PlanArgs) -> Result<()> {
    let _cmd = info_span!("plan").entered();
    let plans = build_plans(&args)?;

    match &args.output {
        Some(dir) => write_plans(dir, &plans)?,
        None => print!("{}", render_plans(&plans)),
    }
    Ok(())
}

fn build_plans(args: &PlanArgs) -> Result<Vec<StationPlan>> {
    // 1. Config + CLI overrides
    let config = config::load(args.query.config.as_deref())?;
    let query = convert::build_query_config(&config.query, &args.query)?;
    let filter_cfg = convert::build_filter_config(&config.filter, &args.stations)?;
    let plan_cfg = convert::build_plan_config(&config.audio)?;

    // 2. Availability response
    info!(path = %args.availability.display(), "reading availability response");
    let json = fs::read_to_string(&args.availability).with_context(|| {
        format!(
            "failed to read availability response: {}",
            args.availability.display()
        )
    })?;
    let channels = parse_availability(&json).with_context(|| {
        format!(
            "failed to parse availability response: {}",
            args.availability.display()
        )
    })?;

    // 3. Optional station catalog
    let catalog = match &args.catalog {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read catalog: {}", path.display()))?;
            let stations = parse_station_text(&text)
                .with_context(|| format!("failed to parse catalog: {}", path.display()))?;
            info!(n_stations = stations.len(), "catalog loaded");
            Some(stations)
        }
        None => None,
    };

    // 4. Filter and select
    let selection = select_stations(&channels, catalog.as_deref(), &filter_cfg, query.year())
        .context("station selection failed")?;
    info!(
        "selected {} of {} channels",
        selection.len(),
        channels.len()
    );
    if selection.is_empty() {
        bail!(
            "no station passed the filters ({} channels in response)",
            channels.len()
        );
    }

    // 5. Plan each selected station
    selection
        .selected()
        .iter()
        .map(|candidate| -> Result<StationPlan> {
            let plan = plan_station(candidate, &query, &plan_cfg)?;
            info!(
                station = plan.id(),
                sample_rate = plan.sample_rate(),
                coverage = plan.coverage(),
                n_requests = plan.requests().len(),
                "station planned"
            );
            Ok(plan)
        })
        .collect()
}

fn urls_text(plan: &StationPlan) -> String {
    plan.requests()
        .iter()
        .map(|r| format!("{}\n", r.url()))
        .collect()
}

fn render_plans(plans: &[StationPlan]) -> String {
    let mut out = String::new();
    for plan in plans {
        out.push_str(&format!(
            "# {} sample_rate={} coverage={:.4} audio_rate={}\n",
            plan.id(),
            plan.sample_rate(),
            plan.coverage(),
            plan.audio_rate()
        ));
        out.push_str(&urls_text(plan));
        out.push_str(plan.labels());
    }
    out
}

fn write_plans(dir: &Path, plans: &[StationPlan]) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create output directory: {}", dir.display()))?;
    for plan in plans {
        let labels_path = dir.join(format!("{}.labels.txt", plan.id()));
        let urls_path = dir.join(format!("{}.urls.txt", plan.id()));
        if labels_path.exists() {
            warn!(path = %labels_path.display(), "overwriting existing label file");
        }
        fs::write(&labels_path, plan.labels())
            .with_context(|| format!("failed to write labels: {}", labels_path.display()))?;
        fs::write(&urls_path, urls_text(plan))
            .with_context(|| format!("failed to write URLs: {}", urls_path.display()))?;
        info!(station = plan.id(), path = %labels_path.display(), "label track written");
    }
    Ok(())
}
