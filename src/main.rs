use anyhow::{Context, Result};
use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use spellbench::cli::output::{self, OutputFormat};
use spellbench::config::Overrides;
use spellbench::maze::{self, Grid, Position, Wizard};
use spellbench::tokenizer::tokenize_file;
use spellbench::{run_benchmark, Config, Dictionary, RunOptions, Strategy};
use std::fs;
use std::io;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "spellbench")]
#[command(version, about = "Compare dictionary representations for spell-checking", long_about = None)]
struct Cli {
    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Output format (text, json)
    #[arg(short = 'o', long, default_value = "text", global = true)]
    format: OutputFormat,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Time all four strategies, draw the charts and check the sample text (default)
    Run(RunArgs),
    /// Spell-check files with one strategy
    Check(CheckArgs),
    /// Rank wizards by the time they need to reach a maze exit
    Maze(MazeArgs),
}

#[derive(Args, Debug, Default)]
struct DictionaryArgs {
    /// Word list, one word per line
    #[arg(short, long, value_name = "FILE")]
    word_list: Option<PathBuf>,

    /// Dictionary representation (linear, sorted, trie, hash)
    #[arg(short, long)]
    strategy: Option<Strategy>,

    /// Drop blank word-list lines instead of storing the empty word
    #[arg(long)]
    skip_blank_lines: bool,
}

#[derive(Args, Debug, Default)]
struct RunArgs {
    #[command(flatten)]
    dictionary: DictionaryArgs,

    /// Text file checked after the sweep
    #[arg(long, value_name = "FILE")]
    sample_text: Option<PathBuf>,

    /// Shortest synthetic text
    #[arg(long)]
    start: Option<usize>,

    /// Longest synthetic text (inclusive)
    #[arg(long)]
    end: Option<usize>,

    /// Length increment between measurements
    #[arg(long)]
    step: Option<usize>,

    /// Token repeated to form the synthetic text
    #[arg(long)]
    token: Option<String>,

    /// Hide the progress bar
    #[arg(long)]
    no_progress: bool,
}

#[derive(Args, Debug)]
struct CheckArgs {
    /// Files to check
    #[arg(value_name = "FILES", required = true)]
    files: Vec<PathBuf>,

    #[command(flatten)]
    dictionary: DictionaryArgs,

    /// Exit with code 0 even if errors are found
    #[arg(long)]
    no_fail: bool,
}

#[derive(Args, Debug)]
struct MazeArgs {
    /// Grid file; `#` is a wall. Defaults to the built-in example
    #[arg(long, value_name = "FILE")]
    grid: Option<PathBuf>,

    /// Wizard as ROW,COL,SPEED (repeatable)
    #[arg(long = "wizard", value_name = "ROW,COL,SPEED")]
    wizards: Vec<Wizard>,

    /// Exit cell as ROW,COL. Defaults to the `E` marker
    #[arg(long, value_name = "ROW,COL", value_parser = maze::parse_position)]
    exit: Option<Position>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "spellbench", &mut io::stdout());
        return Ok(());
    }

    let colored = !cli.no_color && console::Term::stdout().features().colors_supported();

    match cli.command.unwrap_or_else(|| Commands::Run(RunArgs::default())) {
        Commands::Run(args) => run(args, cli.format, colored),
        Commands::Check(args) => check(args, cli.format, colored),
        Commands::Maze(args) => rank_wizards(args, cli.format, colored),
    }
}

fn overrides(dictionary: DictionaryArgs) -> Overrides {
    Overrides {
        word_list: dictionary.word_list,
        report_strategy: dictionary.strategy,
        skip_blank_lines: dictionary.skip_blank_lines,
        ..Default::default()
    }
}

fn run(args: RunArgs, format: OutputFormat, colored: bool) -> Result<()> {
    let config = Config::load(Overrides {
        sample_text: args.sample_text,
        start: args.start,
        end: args.end,
        step: args.step,
        token: args.token,
        ..overrides(args.dictionary)
    })?;

    let options = RunOptions {
        format,
        colored,
        progress: !args.no_progress,
    };
    run_benchmark(&config, &options)?;
    Ok(())
}

fn check(args: CheckArgs, format: OutputFormat, colored: bool) -> Result<()> {
    let config = Config::load(overrides(args.dictionary))?;
    let dictionary = Dictionary::load(
        config.report_strategy,
        &config.word_list,
        config.skip_blank_lines,
    )?;

    let mut total_errors = 0;
    let mut missing_files = 0;
    for file_path in &args.files {
        if !file_path.exists() {
            eprintln!("Error: File not found: {}", file_path.display());
            missing_files += 1;
            continue;
        }

        let misspelled = dictionary.check(&tokenize_file(file_path)?);
        output::print_check_result(file_path, &misspelled, colored, format)?;
        total_errors += misspelled.len();
    }

    if format == OutputFormat::Text {
        output::print_check_summary(total_errors, &args.files, colored);
    }

    // --no-fail covers misspellings only; unreadable input always fails
    if missing_files > 0 || (total_errors > 0 && !args.no_fail) {
        std::process::exit(1);
    }

    Ok(())
}

fn rank_wizards(args: MazeArgs, format: OutputFormat, colored: bool) -> Result<()> {
    let (grid, wizards): (Grid, Vec<Wizard>) = match &args.grid {
        Some(path) => {
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read grid: {}", path.display()))?;
            let grid: Grid = content.parse()?;
            let wizards = if args.wizards.is_empty() {
                let start = grid
                    .find('S')
                    .context("No wizards given and the grid has no `S` marker")?;
                vec![Wizard { position: start, speed: 1.0 }]
            } else {
                args.wizards
            };
            (grid, wizards)
        }
        None => {
            let wizards = if args.wizards.is_empty() {
                maze::example_wizards()
            } else {
                args.wizards
            };
            (maze::EXAMPLE_GRID.parse()?, wizards)
        }
    };

    let exit = match args.exit {
        Some(exit) => exit,
        None => grid
            .find('E')
            .context("No --exit given and the grid has no `E` marker")?,
    };

    let times = maze::arrival_times(&grid, &wizards, exit)?;
    let fastest = maze::fastest_wizard(&grid, &wizards, exit)?;
    output::print_maze_result(exit, &wizards, &times, fastest.as_ref(), colored, format)?;
    Ok(())
}
