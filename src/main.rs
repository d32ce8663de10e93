use anyhow::Result;
use clap::Parser;

use probeplot::app::ProbePlotApp;
use probeplot::chart;
use probeplot::cli::{Cli, Command};
use probeplot::config;
use probeplot::data::loader;
use probeplot::state::ViewerState;
use probeplot::stats::{self, StatRequest};

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Command::Plot {
            input,
            output,
            sets,
            threshold,
            show,
        } => {
            let dataset = loader::load_file(&input)?;
            log::info!(
                "Loaded {} samples across {} sets from {}",
                dataset.len(),
                dataset.set_names.len(),
                input.display()
            );

            chart::render_png(&dataset, &sets, threshold, &output, config::PLOT_SIZE)?;

            if show {
                run_viewer(ViewerState::new(dataset, sets, threshold))?;
            }
            Ok(())
        }

        Command::Summarize {
            input,
            threshold,
            max,
            hits,
            json,
        } => {
            let dataset = loader::load_file(&input)?;

            let requests = if max.is_empty() && hits.is_empty() {
                config::default_stat_requests()
            } else {
                max.into_iter()
                    .map(StatRequest::Max)
                    .chain(hits.into_iter().map(StatRequest::HitsOver))
                    .collect()
            };

            let summary = stats::summarize(&dataset, &requests, threshold)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                print!("{summary}");
            }
            Ok(())
        }
    }
}

/// Open the interactive viewer. Blocks until the window is closed.
fn run_viewer(state: ViewerState) -> Result<()> {
    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "probeplot – Prime+Probe viewer",
        options,
        Box::new(move |_cc| Ok(Box::new(ProbePlotApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("viewer failed: {e}"))
}
