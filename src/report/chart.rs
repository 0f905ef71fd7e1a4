use crate::bench::{Phase, SweepReport};
use crate::store::Strategy;
use colored::*;
use serde::Serialize;

pub const X_LABEL: &str = "Text Length";
pub const Y_LABEL: &str = "Running Time (seconds)";

const MARKERS: [char; 4] = ['*', '+', 'o', 'x'];
const OVERLAP: char = '#';
const Y_AXIS_WIDTH: usize = 11;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Line {
    pub label: String,
    pub values: Vec<f64>,
}

/// One line chart: a shared x axis and one line per strategy.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub x: Vec<usize>,
    pub lines: Vec<Line>,
}

#[derive(Clone, Copy, PartialEq)]
enum Cell {
    Empty,
    Line(usize),
    Overlap,
}

impl Chart {
    pub fn from_sweep(report: &SweepReport, phase: Phase) -> Self {
        Self {
            title: phase.title().to_string(),
            x_label: X_LABEL.to_string(),
            y_label: Y_LABEL.to_string(),
            x: report.lengths.clone(),
            lines: report
                .series
                .iter()
                .map(|s| Line {
                    label: s.label.clone(),
                    values: s.phase(phase).to_vec(),
                })
                .collect(),
        }
    }

    fn max_value(&self) -> f64 {
        self.lines
            .iter()
            .flat_map(|l| l.values.iter().copied())
            .filter(|v| v.is_finite())
            .fold(0.0, f64::max)
    }

    /// Render as a plain-text scatter of the series, `height` rows tall.
    pub fn render(&self, height: usize, colored: bool) -> String {
        let height = height.max(2);
        let col_width = self
            .x
            .iter()
            .map(|x| x.to_string().len() + 1)
            .max()
            .unwrap_or(1)
            .max(6);
        let max = match self.max_value() {
            m if m > 0.0 => m,
            _ => 1.0,
        };

        let mut grid = vec![vec![Cell::Empty; self.x.len()]; height];
        for (idx, line) in self.lines.iter().enumerate() {
            for (col, &value) in line.values.iter().enumerate().take(self.x.len()) {
                if !value.is_finite() {
                    continue;
                }
                let level = ((value / max) * (height - 1) as f64).round() as usize;
                let row = height - 1 - level.min(height - 1);
                let cell = &mut grid[row][col];
                *cell = match *cell {
                    Cell::Empty => Cell::Line(idx),
                    Cell::Line(other) if other == idx => Cell::Line(idx),
                    _ => Cell::Overlap,
                };
            }
        }

        let mut out = String::new();
        let title = if colored {
            self.title.bold().to_string()
        } else {
            self.title.clone()
        };
        out.push_str(&format!("{}\n{}\n", title, self.y_label));

        for (row, cells) in grid.iter().enumerate() {
            let axis = if row == 0 {
                format!("{:>w$.6}", max, w = Y_AXIS_WIDTH - 1)
            } else if row == height - 1 {
                format!("{:>w$.6}", 0.0, w = Y_AXIS_WIDTH - 1)
            } else if row == height / 2 {
                format!("{:>w$.6}", max / 2.0, w = Y_AXIS_WIDTH - 1)
            } else {
                " ".repeat(Y_AXIS_WIDTH - 1)
            };
            out.push_str(&axis);
            out.push('|');
            for cell in cells {
                out.push_str(&" ".repeat(col_width - 1));
                out.push_str(&self.marker(*cell, colored));
            }
            out.push('\n');
        }

        out.push_str(&" ".repeat(Y_AXIS_WIDTH - 1));
        out.push('+');
        out.push_str(&"-".repeat(col_width * self.x.len()));
        out.push('\n');

        out.push_str(&" ".repeat(Y_AXIS_WIDTH));
        for x in &self.x {
            out.push_str(&format!("{:>w$}", x, w = col_width));
        }
        out.push('\n');
        out.push_str(&format!("{:>w$}\n", self.x_label, w = Y_AXIS_WIDTH + col_width * self.x.len()));

        out.push_str(&self.legend(colored));
        out.push('\n');
        out
    }

    fn legend(&self, colored: bool) -> String {
        let mut entries: Vec<String> = self
            .lines
            .iter()
            .enumerate()
            .map(|(idx, line)| format!("{} {}", self.marker(Cell::Line(idx), colored), line.label))
            .collect();
        entries.push(format!("{} overlap", self.marker(Cell::Overlap, colored)));
        format!("{}{}", " ".repeat(Y_AXIS_WIDTH), entries.join("   "))
    }

    fn marker(&self, cell: Cell, colored: bool) -> String {
        let (ch, color) = match cell {
            Cell::Empty => return " ".to_string(),
            Cell::Line(idx) => (MARKERS[idx % MARKERS.len()], line_color(idx)),
            Cell::Overlap => (OVERLAP, Color::White),
        };
        if colored {
            ch.to_string().color(color).bold().to_string()
        } else {
            ch.to_string()
        }
    }
}

fn line_color(idx: usize) -> Color {
    match Strategy::ALL.get(idx) {
        Some(Strategy::Linear) => Color::Blue,
        Some(Strategy::Sorted) => Color::Yellow,
        Some(Strategy::Trie) => Color::Green,
        Some(Strategy::Hash) => Color::Red,
        None => Color::Magenta,
    }
}
