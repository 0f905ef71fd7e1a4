use crate::bench::SweepReport;
use crate::error::Result;
use crate::maze::{Ranking, Wizard};
use crate::report::Chart;
use colored::*;
use serde::Serialize;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

pub const MISSPELLED_LABEL: &str = "Misspelled words:";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Serialize)]
struct JsonBenchmark<'a> {
    sweep: &'a SweepReport,
    charts: &'a [Chart],
    sample_text: String,
    misspelled: &'a [String],
}

#[derive(Debug, Serialize)]
struct JsonCheck<'a> {
    file: String,
    misspelled: &'a [String],
}

#[derive(Debug, Serialize)]
struct JsonMaze<'a> {
    exit: (usize, usize),
    wizards: &'a [Wizard],
    arrival_times: &'a [f64],
    fastest: Option<&'a Ranking>,
}

pub fn print_charts(charts: &[Chart], height: usize, colored: bool) {
    for chart in charts {
        println!("{}", chart.render(height, colored));
    }
}

/// The sample-file result line, e.g. `Misspelled words: ["Helllo"]`.
pub fn format_misspelled(words: &[String], colored: bool) -> String {
    let list = format!("{:?}", words);
    if colored {
        format!("{} {}", MISSPELLED_LABEL.bold(), list.red())
    } else {
        format!("{} {}", MISSPELLED_LABEL, list)
    }
}

pub fn print_misspelled(words: &[String], colored: bool) {
    println!("{}", format_misspelled(words, colored));
}

pub fn print_benchmark_json(
    sweep: &SweepReport,
    charts: &[Chart],
    sample_text: &Path,
    misspelled: &[String],
) -> Result<()> {
    let output = JsonBenchmark {
        sweep,
        charts,
        sample_text: sample_text.display().to_string(),
        misspelled,
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

pub fn print_check_result(
    file_path: &Path,
    misspelled: &[String],
    colored_output: bool,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            if misspelled.is_empty() {
                return Ok(());
            }
            let file_name = file_path.display().to_string();
            if colored_output {
                println!("\n{}", file_name.bold().underline());
                for word in misspelled {
                    println!("  {}", word.red().bold());
                }
            } else {
                println!("\n{}", file_name);
                for word in misspelled {
                    println!("  {}", word);
                }
            }
        }
        OutputFormat::Json => {
            let output = JsonCheck {
                file: file_path.display().to_string(),
                misspelled,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }
    Ok(())
}

pub fn print_check_summary(total_errors: usize, files: &[impl AsRef<Path>], colored: bool) {
    println!();
    if total_errors == 0 {
        if colored {
            println!("{}", "✓ No spelling errors found!".green().bold());
        } else {
            println!("✓ No spelling errors found!");
        }
    } else {
        let error_word = if total_errors == 1 { "error" } else { "errors" };
        let file_word = if files.len() == 1 { "file" } else { "files" };
        if colored {
            println!(
                "{} {} {} found in {} {}",
                "✗".red().bold(),
                total_errors.to_string().red().bold(),
                error_word,
                files.len(),
                file_word
            );
        } else {
            println!("✗ {} {} found in {} {}", total_errors, error_word, files.len(), file_word);
        }
    }
}

pub fn print_maze_result(
    exit: (usize, usize),
    wizards: &[Wizard],
    arrival_times: &[f64],
    fastest: Option<&Ranking>,
    colored: bool,
    format: OutputFormat,
) -> Result<()> {
    if let OutputFormat::Json = format {
        let output = JsonMaze {
            exit,
            wizards,
            arrival_times,
            fastest,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    for (wizard, time) in wizards.iter().zip(arrival_times) {
        let time = if *time < 0.0 {
            "unreachable".to_string()
        } else {
            format!("{:.3}", time)
        };
        println!("  wizard at {:?} (speed {}): {}", wizard.position, wizard.speed, time);
    }

    match fastest {
        Some(ranking) => {
            let line = format!(
                "The wizard at position {:?} with speed {} will reach the exit first.",
                ranking.wizard.position, ranking.wizard.speed
            );
            if colored {
                println!("{}", line.green().bold());
            } else {
                println!("{}", line);
            }
        }
        None => {
            let line = format!("No wizard can reach the exit at {:?}.", exit);
            if colored {
                println!("{}", line.yellow());
            } else {
                println!("{}", line);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_misspelled() {
        let words = vec!["Helllo".to_string(), "wrld".to_string()];
        assert_eq!(
            format_misspelled(&words, false),
            "Misspelled words: [\"Helllo\", \"wrld\"]"
        );
        assert_eq!(format_misspelled(&[], false), "Misspelled words: []");
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("yaml".parse::<OutputFormat>().is_err());
        assert_eq!(OutputFormat::Text.to_string(), "text");
    }
}
