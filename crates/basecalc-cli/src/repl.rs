//! Line-oriented interactive session.
//!
//! Each tool keeps its own session state between lines and every successful
//! calculation lands in a shared [`History`].

use std::io::{self, BufRead, IsTerminal, Write};

use anyhow::{Context, Result, anyhow, bail};
use basecalc_core::history::History;
use basecalc_core::session::{
    ArithmeticSession, ConversionSession, MatrixOperation, MatrixSession, Slot,
};
use basecalc_core::{Matrix, Operation, Radix};

const HELP: &str = "\
commands:
  radix <bin|oct|dec|hex>          base for convert and calc
  convert <value>                  show value in all four bases
  calc <a> <op> <b>                arithmetic in the current base
  op <add|sub|mul>                 matrix operation
  dim <a|b> <rows> <cols>          resize a matrix (zero-filled)
  load <a|b> <matrix>              e.g. load a 1,2;3,4
  set <a|b> <row> <col> <value>    edit one cell (0-based)
  show                             print A, B and the last result
  run                              apply the matrix operation
  det <a|b|result>                 determinant
  history [json]                   past calculations, newest first
  clear                            forget history
  quit";

/// What the loop should do after a line.
#[derive(Debug, PartialEq)]
pub enum Outcome {
    Print(String),
    Quit,
}

/// All tool sessions plus their shared history.
#[derive(Debug, Default)]
pub struct Repl {
    conversion: ConversionSession,
    arithmetic: ArithmeticSession,
    matrix: MatrixSession,
    history: History,
}

impl Repl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Handle one input line.
    pub fn execute(&mut self, line: &str) -> Result<Outcome> {
        let words: Vec<&str> = line.split_whitespace().collect();
        let Some((&command, args)) = words.split_first() else {
            return Ok(Outcome::Print(String::new()));
        };

        let text = match (command, args) {
            ("quit" | "exit", _) => return Ok(Outcome::Quit),
            ("help" | "?", _) => HELP.to_string(),
            ("radix", [r]) => {
                let radix: Radix = r.parse()?;
                self.conversion.set_radix(radix);
                self.arithmetic.set_radix(radix);
                format!("radix: {radix}")
            }
            ("convert", [value]) => self.convert(value)?,
            ("calc", [left, op, right]) => self.calc(left, op, right)?,
            ("op", [op]) => {
                let op: MatrixOperation = op.parse()?;
                self.matrix.set_operation(op);
                format!("matrix operation: {op}")
            }
            ("dim", [slot, rows, cols]) => {
                let slot = parse_slot(slot)?;
                let rows = parse_index(rows)?;
                let cols = parse_index(cols)?;
                if rows == 0 || cols == 0 {
                    bail!("dimensions must be at least 1x1");
                }
                self.matrix.set_dimensions(slot, rows, cols);
                self.show()
            }
            ("load", [slot, rest @ ..]) if !rest.is_empty() => {
                let slot = parse_slot(slot)?;
                let m: Matrix<f64> = rest.join(" ").parse()?;
                self.matrix.load(slot, m);
                self.show()
            }
            ("set", [slot, row, col, value]) => {
                let slot = parse_slot(slot)?;
                self.matrix
                    .set_cell_text(slot, parse_index(row)?, parse_index(col)?, value)?;
                self.show()
            }
            ("show", []) => self.show(),
            ("run", []) => {
                let op = self.matrix.operation();
                let out = self
                    .matrix
                    .calculate(&mut self.history)
                    .with_context(|| format!("matrix {op} failed"))?;
                out.to_tsv()
            }
            ("det", [which]) => self.determinant(which)?,
            ("history", []) => self.render_history(),
            ("history", ["json"]) => serde_json::to_string_pretty(
                &self.history.entries().collect::<Vec<_>>(),
            )?,
            ("clear", []) => {
                self.history.clear();
                "history cleared".to_string()
            }
            _ => bail!("unrecognized command {line:?} (try `help`)"),
        };
        Ok(Outcome::Print(text))
    }

    fn convert(&mut self, value: &str) -> Result<String> {
        self.conversion.set_input(value);
        let c = self.conversion.calculate(&mut self.history)?;
        Ok(Radix::ALL
            .iter()
            .map(|&r| format!("{:<12} {}", r.name(), c.get(r)))
            .collect::<Vec<_>>()
            .join("\n"))
    }

    fn calc(&mut self, left: &str, op: &str, right: &str) -> Result<String> {
        let op: Operation = op.parse()?;
        self.arithmetic.set_operation(op);
        self.arithmetic.set_left(left);
        self.arithmetic.set_right(right);
        let result = self.arithmetic.calculate(&mut self.history)?;
        Ok(result.to_string())
    }

    fn determinant(&self, which: &str) -> Result<String> {
        let det = match which.to_ascii_lowercase().as_str() {
            "result" | "r" => self
                .matrix
                .result_determinant()
                .ok_or_else(|| anyhow!("no result yet (use `run`)"))??,
            other => self.matrix.determinant(parse_slot(other)?)?,
        };
        Ok(det.to_string())
    }

    fn show(&self) -> String {
        let a = self.matrix.matrix(Slot::A);
        let b = self.matrix.matrix(Slot::B);
        let mut out = format!(
            "A ({}x{})\n{}\n{}\nB ({}x{})\n{}",
            a.rows(),
            a.cols(),
            a.to_tsv(),
            self.matrix.operation().symbol(),
            b.rows(),
            b.cols(),
            b.to_tsv()
        );
        if let Some(r) = self.matrix.result() {
            out.push_str(&format!("\n=\n{}", r.to_tsv()));
        }
        out
    }

    fn render_history(&self) -> String {
        if self.history.is_empty() {
            return "no calculations yet".to_string();
        }
        self.history
            .entries()
            .map(|e| {
                let mut line = format!(
                    "#{} {} {}: {} = {}",
                    e.id,
                    e.timestamp.format("%H:%M:%S"),
                    e.operation,
                    e.input,
                    e.result
                );
                if let Some(details) = &e.details {
                    line.push_str(&format!(" ({details})"));
                }
                line
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn parse_slot(s: &str) -> Result<Slot> {
    match s.to_ascii_lowercase().as_str() {
        "a" => Ok(Slot::A),
        "b" => Ok(Slot::B),
        _ => bail!("unknown matrix {s:?} (expected a or b)"),
    }
}

fn parse_index(s: &str) -> Result<usize> {
    s.parse()
        .with_context(|| format!("{s:?} is not a non-negative integer"))
}

/// Read commands from stdin until EOF or `quit`.
///
/// With `as_json` set the history is dumped as JSON on exit.
pub fn run(as_json: bool) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut repl = Repl::new();
    let interactive = stdin.is_terminal();

    if interactive {
        writeln!(stdout, "basecalc (type `help` for commands)")?;
    }
    loop {
        if interactive {
            write!(stdout, "> ")?;
            stdout.flush()?;
        }
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        match repl.execute(&line) {
            Ok(Outcome::Quit) => break,
            Ok(Outcome::Print(text)) if text.is_empty() => {}
            Ok(Outcome::Print(text)) => writeln!(stdout, "{text}")?,
            Err(e) => {
                tracing::debug!(error = %e, "command failed");
                eprintln!("error: {e:#}");
            }
        }
    }

    if as_json {
        let entries: Vec<_> = repl.history().entries().collect();
        writeln!(stdout, "{}", serde_json::to_string(&entries)?)?;
    }
    Ok(())
}
