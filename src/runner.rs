use crate::bench::{run_sweep, SweepReport, Workload};
use crate::cli::output::{print_benchmark_json, print_charts, print_misspelled, OutputFormat};
use crate::error::Result;
use crate::report::{self, spell_check_text_file};
use crate::store::Strategy;
use crate::Config;
use indicatif::{ProgressBar, ProgressStyle};

const PROGRESS_TEMPLATE: &str = "{spinner:.cyan} [{bar:30.cyan/blue}] {pos}/{len} {msg}";

#[derive(Debug, Clone, Copy)]
pub struct RunOptions {
    pub format: OutputFormat,
    pub colored: bool,
    pub progress: bool,
}

#[derive(Debug, Clone)]
pub struct BenchmarkOutcome {
    pub sweep: SweepReport,
    pub misspelled: Vec<String>,
}

/// Sweep every strategy over the configured lengths, print both charts,
/// then spell-check the sample text and print what was misspelled.
pub fn run_benchmark(config: &Config, options: &RunOptions) -> Result<BenchmarkOutcome> {
    let workload = Workload {
        word_list: &config.word_list,
        skip_blank_lines: config.skip_blank_lines,
        token: &config.token,
    };

    let total = config.lengths.lengths()?.len() * Strategy::ALL.len();
    let pb = if options.progress {
        ProgressBar::new(total as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::with_template(PROGRESS_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    let sweep = run_sweep(&workload, &config.lengths, |length, strategy, _| {
        pb.set_message(format!("{} @ {}", strategy.label(), length));
        pb.inc(1);
    });
    pb.finish_and_clear();
    let sweep = sweep?;

    let charts = report::charts(&sweep);
    let misspelled = spell_check_text_file(
        &config.sample_text,
        &config.word_list,
        config.report_strategy,
        config.skip_blank_lines,
    )?;

    match options.format {
        OutputFormat::Text => {
            print_charts(&charts, config.chart_height, options.colored);
            print_misspelled(&misspelled, options.colored);
        }
        OutputFormat::Json => {
            print_benchmark_json(&sweep, &charts, &config.sample_text, &misspelled)?;
        }
    }

    Ok(BenchmarkOutcome { sweep, misspelled })
}
