//! CLI argument parsing for probeplot.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config;

#[derive(Parser, Debug)]
#[command(name = "probeplot")]
#[command(version)]
#[command(about = "Plotting and summary statistics for Prime+Probe cache-timing measurements", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render the access-time chart to a PNG file
    Plot {
        /// Measurement CSV produced by the Prime+Probe tool
        #[arg(short, long, default_value = config::DEFAULT_INPUT)]
        input: PathBuf,

        /// Output image path
        #[arg(short, long, default_value = config::DEFAULT_PLOT_OUTPUT)]
        output: PathBuf,

        /// Comma-separated set columns to plot
        #[arg(
            long,
            value_name = "SETS",
            value_delimiter = ',',
            default_values_t = config::DEFAULT_PLOT_SETS.map(String::from)
        )]
        sets: Vec<String>,

        /// Hit/miss decision threshold in cycles
        #[arg(short, long, default_value_t = config::DEFAULT_THRESHOLD)]
        threshold: f64,

        /// Open an interactive plot window after writing the image
        #[arg(long)]
        show: bool,
    },

    /// Print summary statistics for the measurement run
    Summarize {
        /// Measurement CSV produced by the Prime+Probe tool
        #[arg(short, long, default_value = config::DEFAULT_INPUT)]
        input: PathBuf,

        /// Hit/miss decision threshold in cycles
        #[arg(short, long, default_value_t = config::DEFAULT_THRESHOLD)]
        threshold: f64,

        /// Report the maximum access time of SET (repeatable; replaces the
        /// default statistics)
        #[arg(long = "max", value_name = "SET")]
        max: Vec<String>,

        /// Report how many samples of SET exceed the threshold (repeatable;
        /// replaces the default statistics)
        #[arg(long = "hits", value_name = "SET")]
        hits: Vec<String>,

        /// Emit the statistics as JSON instead of text lines
        #[arg(long)]
        json: bool,
    },
}
