//! One-shot subcommands.

use anyhow::{Context, Result, bail};
use basecalc_core::matrix::COFACTOR_WARN_DIM;
use basecalc_core::radix::{apply_operation, convert};
use basecalc_core::session::MatrixOperation;
use basecalc_core::{Matrix, Operation, Radix};
use serde_json::{Value, json};

use crate::cli::MatrixCommand;

/// A command result in both human and machine form.
#[derive(Debug)]
pub struct Report {
    pub text: String,
    pub json: Value,
}

impl Report {
    /// Render for stdout.
    pub fn render(&self, as_json: bool) -> String {
        if as_json {
            self.json.to_string()
        } else {
            self.text.clone()
        }
    }
}

pub fn run_convert(value: &str, from: Radix) -> Result<Report> {
    if value.is_empty() {
        bail!("enter a number to convert");
    }
    let c = convert(value, from).with_context(|| format!("cannot convert {value:?}"))?;
    let text = Radix::ALL
        .iter()
        .map(|&r| format!("{:<12} {}", r.name(), c.get(r)))
        .collect::<Vec<_>>()
        .join("\n");
    Ok(Report {
        text,
        json: serde_json::to_value(&c)?,
    })
}

pub fn run_calc(left: &str, op: Operation, right: &str, radix: Radix) -> Result<Report> {
    let result = apply_operation(left, right, op, radix)
        .with_context(|| format!("{op} in {radix} failed"))?;
    Ok(Report {
        text: format!("{left} {} {right} = {result}", op.symbol()),
        json: json!({
            "radix": radix,
            "operation": op,
            "left": left,
            "right": right,
            "result": result,
        }),
    })
}

pub fn run_matrix(command: &MatrixCommand) -> Result<Report> {
    let (op, pair) = match command {
        MatrixCommand::Add(pair) => (MatrixOperation::Add, pair),
        MatrixCommand::Sub(pair) => (MatrixOperation::Subtract, pair),
        MatrixCommand::Mul(pair) => (MatrixOperation::Multiply, pair),
        MatrixCommand::Det { a, lu } => return run_determinant(a, *lu),
    };
    let out = op.apply(&pair.a, &pair.b).with_context(|| {
        format!(
            "cannot apply matrix {op} to {}x{} and {}x{}",
            pair.a.rows(),
            pair.a.cols(),
            pair.b.rows(),
            pair.b.cols()
        )
    })?;
    Ok(Report {
        text: out.to_tsv(),
        json: json!({ "operation": op, "result": out.to_rows() }),
    })
}

fn run_determinant(a: &Matrix<f64>, lu: bool) -> Result<Report> {
    if !a.is_square() {
        bail!("determinant needs a square matrix, got {}x{}", a.rows(), a.cols());
    }
    if !lu && a.rows() > COFACTOR_WARN_DIM {
        tracing::info!("pass --lu for large matrices");
    }
    let det = if lu {
        a.determinant_lu().context("determinant needs a square matrix")?
    } else {
        a.determinant()
            .context("determinant needs a square matrix")?
            .context("cofactor determinant failed")?
    };
    Ok(Report {
        text: det.to_string(),
        json: json!({ "method": if lu { "lu" } else { "cofactor" }, "determinant": det }),
    })
}
