use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Matrix;
use crate::Scalar;
use crate::error::{CoreError, Result};
use crate::history::{HistoryKind, HistorySink, NewEntry};

/// Binary matrix operations offered by the matrix tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatrixOperation {
    Add,
    Subtract,
    Multiply,
}

impl MatrixOperation {
    pub fn symbol(self) -> &'static str {
        match self {
            MatrixOperation::Add => "+",
            MatrixOperation::Subtract => "-",
            MatrixOperation::Multiply => "×",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            MatrixOperation::Add => "addition",
            MatrixOperation::Subtract => "subtraction",
            MatrixOperation::Multiply => "multiplication",
        }
    }

    /// Whether both operands must share one shape.
    pub fn is_elementwise(self) -> bool {
        matches!(self, MatrixOperation::Add | MatrixOperation::Subtract)
    }

    /// Whether the operation is defined for these operands.
    pub fn accepts<T: Scalar>(self, a: &Matrix<T>, b: &Matrix<T>) -> bool {
        if self.is_elementwise() {
            a.can_add_or_subtract(b)
        } else {
            a.can_multiply(b)
        }
    }

    pub fn apply<T: Scalar>(self, a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>> {
        match self {
            MatrixOperation::Add => a.add(b),
            MatrixOperation::Subtract => a.subtract(b),
            MatrixOperation::Multiply => a.multiply(b),
        }
    }
}

impl fmt::Display for MatrixOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MatrixOperation {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "add" | "plus" | "+" => Ok(MatrixOperation::Add),
            "subtract" | "sub" | "minus" | "-" => Ok(MatrixOperation::Subtract),
            "multiply" | "mul" | "times" | "*" | "x" | "×" => Ok(MatrixOperation::Multiply),
            _ => Err(CoreError::UnknownOperation(s.to_string())),
        }
    }
}

/// One of the two operand matrices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    A,
    B,
}

/// State of the matrix tool: two operands, an operation and a result.
///
/// Cells are `f64` so decimal entries work; integer entries still give
/// exact sums, products and cofactor determinants within `f64` precision.
#[derive(Debug, Clone)]
pub struct MatrixSession {
    operation: MatrixOperation,
    a: Matrix<f64>,
    b: Matrix<f64>,
    result: Option<Matrix<f64>>,
    error: Option<CoreError>,
}

impl Default for MatrixSession {
    fn default() -> Self {
        Self::new(2, 2)
    }
}

impl MatrixSession {
    /// Two zero matrices of the given shape, operation `Add`.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            operation: MatrixOperation::Add,
            a: Matrix::zeros(rows, cols),
            b: Matrix::zeros(rows, cols),
            result: None,
            error: None,
        }
    }

    pub fn operation(&self) -> MatrixOperation {
        self.operation
    }

    pub fn matrix(&self, slot: Slot) -> &Matrix<f64> {
        match slot {
            Slot::A => &self.a,
            Slot::B => &self.b,
        }
    }

    pub fn result(&self) -> Option<&Matrix<f64>> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&CoreError> {
        self.error.as_ref()
    }

    fn discard_result(&mut self) {
        self.result = None;
        self.error = None;
    }

    fn other_mut(&mut self, slot: Slot) -> &mut Matrix<f64> {
        match slot {
            Slot::A => &mut self.b,
            Slot::B => &mut self.a,
        }
    }

    fn slot_mut(&mut self, slot: Slot) -> &mut Matrix<f64> {
        match slot {
            Slot::A => &mut self.a,
            Slot::B => &mut self.b,
        }
    }

    /// Resize the operands.
    ///
    /// Both `A` and `B` are reset to zero-filled grids of the new shape,
    /// whichever slot was edited and whatever the operation.
    pub fn set_dimensions(&mut self, slot: Slot, rows: usize, cols: usize) {
        self.a = Matrix::zeros(rows, cols);
        self.b = Matrix::zeros(rows, cols);
        tracing::debug!(?slot, rows, cols, "matrix dimensions changed");
        self.discard_result();
    }

    /// Replace one operand wholesale (e.g. with a preset).
    ///
    /// For element-wise operations a shape change also resets the other
    /// operand to zeros of the new shape.
    pub fn load(&mut self, slot: Slot, matrix: Matrix<f64>) {
        let (rows, cols) = matrix.shape();
        *self.slot_mut(slot) = matrix;
        if self.operation.is_elementwise() {
            let other = self.other_mut(slot);
            if !other.has_shape(rows, cols) {
                *other = Matrix::zeros(rows, cols);
            }
        }
        self.discard_result();
    }

    /// Overwrite one cell.
    pub fn set_cell(&mut self, slot: Slot, row: usize, col: usize, value: f64) -> Result<()> {
        self.slot_mut(slot).set(row, col, value)?;
        self.discard_result();
        Ok(())
    }

    /// Overwrite one cell from user text.
    ///
    /// Empty text stores zero. Text that is not a number leaves the cell
    /// untouched and returns an error.
    pub fn set_cell_text(&mut self, slot: Slot, row: usize, col: usize, text: &str) -> Result<()> {
        let value = if text.trim().is_empty() {
            0.0
        } else {
            f64::parse_cell(text).ok_or_else(|| CoreError::InvalidCell {
                row,
                col,
                text: text.to_string(),
            })?
        };
        self.set_cell(slot, row, col, value)
    }

    /// Switch operation.
    ///
    /// Choosing add or subtract forces `B` to `A`'s shape (zero-filled when
    /// the shape changes).
    pub fn set_operation(&mut self, operation: MatrixOperation) {
        self.operation = operation;
        if operation.is_elementwise() && !self.a.can_add_or_subtract(&self.b) {
            self.b = Matrix::zeros(self.a.rows(), self.a.cols());
        }
        self.discard_result();
    }

    /// Apply the operation to `A` and `B` and log it to `history`.
    pub fn calculate(&mut self, history: &mut impl HistorySink) -> Result<&Matrix<f64>> {
        let op = self.operation;
        if !op.accepts(&self.a, &self.b) {
            let err = CoreError::DimensionMismatch {
                expected: if op.is_elementwise() {
                    vec![self.a.rows(), self.a.cols()]
                } else {
                    vec![self.a.cols(), self.b.cols()]
                },
                got: vec![self.b.rows(), self.b.cols()],
            };
            self.result = None;
            self.error = Some(err.clone());
            return Err(err);
        }

        let out = op.apply(&self.a, &self.b)?;
        let shape = |m: &Matrix<f64>| format!("{}×{}", m.rows(), m.cols());
        history.record(NewEntry {
            kind: HistoryKind::Matrix,
            operation: format!("matrix {op}"),
            input: format!("A: {} {} B: {}", self.a, op.symbol(), self.b),
            result: out.to_string(),
            details: Some(format!(
                "{} {} {} = {}",
                shape(&self.a),
                op.symbol(),
                shape(&self.b),
                shape(&out)
            )),
        });
        tracing::debug!(%op, rows = out.rows(), cols = out.cols(), "matrix operation");
        self.error = None;
        Ok(&*self.result.insert(out))
    }

    /// Determinant of one operand.
    pub fn determinant(&self, slot: Slot) -> Result<f64> {
        square_determinant(self.matrix(slot))
    }

    /// Determinant of the last result, if there is one.
    pub fn result_determinant(&self) -> Option<Result<f64>> {
        self.result.as_ref().map(square_determinant)
    }
}

fn square_determinant(m: &Matrix<f64>) -> Result<f64> {
    m.determinant().unwrap_or(Err(CoreError::NotSquare {
        rows: m.rows(),
        cols: m.cols(),
    }))
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::history::History;

    fn filled(rows: Vec<Vec<f64>>) -> Matrix<f64> {
        Matrix::from_rows(rows).unwrap()
    }

    #[test]
    fn test_add_records_history() {
        let mut h = History::new();
        let mut s = MatrixSession::default();
        s.load(Slot::A, filled(vec![vec![1.0, 2.0], vec![3.0, 4.0]]));
        s.load(Slot::B, filled(vec![vec![5.0, 6.0], vec![7.0, 8.0]]));
        let r = s.calculate(&mut h).unwrap();
        assert_eq!(r.to_rows(), vec![vec![6.0, 8.0], vec![10.0, 12.0]]);

        let e = h.latest().unwrap();
        assert_eq!(e.kind, HistoryKind::Matrix);
        assert_eq!(e.operation, "matrix addition");
        assert_eq!(e.input, "A: [1, 2], [3, 4] + B: [5, 6], [7, 8]");
        assert_eq!(e.result, "[6, 8], [10, 12]");
        assert_eq!(e.details.as_deref(), Some("2×2 + 2×2 = 2×2"));
    }

    #[test]
    fn test_dimension_change_resets_both() {
        let mut s = MatrixSession::default();
        s.set_cell(Slot::A, 0, 0, 9.0).unwrap();
        s.calculate(&mut ()).unwrap();
        s.set_dimensions(Slot::A, 3, 3);
        assert!(s.result().is_none());
        assert_eq!(s.matrix(Slot::A), &Matrix::zeros(3, 3));
        assert_eq!(s.matrix(Slot::B), &Matrix::zeros(3, 3));
    }

    #[test]
    fn test_multiply_resize_applies_to_both() {
        let mut s = MatrixSession::default();
        s.set_operation(MatrixOperation::Multiply);
        s.set_dimensions(Slot::A, 3, 3);
        assert_eq!(s.matrix(Slot::A).shape(), (3, 3));
        assert_eq!(s.matrix(Slot::B).shape(), (3, 3));

        s.set_dimensions(Slot::B, 2, 3);
        assert_eq!(s.matrix(Slot::A).shape(), (2, 3));
        assert!(s.calculate(&mut ()).is_err());
        assert!(matches!(s.error(), Some(CoreError::DimensionMismatch { .. })));

        s.load(Slot::B, Matrix::zeros(3, 1));
        assert_eq!(s.matrix(Slot::A).shape(), (2, 3));
        let r = s.calculate(&mut ()).unwrap();
        assert_eq!(r.shape(), (2, 1));
    }

    #[test]
    fn test_switching_to_add_forces_shape() {
        let mut s = MatrixSession::default();
        s.set_operation(MatrixOperation::Multiply);
        s.load(Slot::B, Matrix::zeros(2, 4));
        s.set_operation(MatrixOperation::Subtract);
        assert_eq!(s.matrix(Slot::B).shape(), (2, 2));
        assert!(s.calculate(&mut ()).is_ok());
    }

    #[test]
    fn test_cell_edit_discards_result() {
        let mut s = MatrixSession::default();
        s.calculate(&mut ()).unwrap();
        s.set_cell(Slot::B, 1, 1, 2.0).unwrap();
        assert!(s.result().is_none());
    }

    #[test]
    fn test_set_cell_text() {
        let mut s = MatrixSession::default();
        s.set_cell_text(Slot::A, 0, 1, "2.5").unwrap();
        assert_eq!(s.matrix(Slot::A).get(0, 1).unwrap(), 2.5);
        s.set_cell_text(Slot::A, 0, 1, "").unwrap();
        assert_eq!(s.matrix(Slot::A).get(0, 1).unwrap(), 0.0);
        s.set_cell_text(Slot::A, 0, 0, "7").unwrap();
        assert!(s.set_cell_text(Slot::A, 0, 0, "abc").is_err());
        assert_eq!(s.matrix(Slot::A).get(0, 0).unwrap(), 7.0);
        assert!(s.set_cell_text(Slot::A, 5, 0, "1").is_err());
    }

    #[test]
    fn test_determinants() {
        let mut s = MatrixSession::new(3, 3);
        s.load(Slot::A, Matrix::identity(3));
        assert_eq!(s.determinant(Slot::A).unwrap(), 1.0);
        assert!(s.result_determinant().is_none());
        s.set_operation(MatrixOperation::Multiply);
        s.set_dimensions(Slot::B, 3, 2);
        assert_eq!(
            s.determinant(Slot::B),
            Err(CoreError::NotSquare { rows: 3, cols: 2 })
        );
    }

    #[test]
    fn test_result_determinant() {
        let mut s = MatrixSession::default();
        s.set_operation(MatrixOperation::Multiply);
        s.load(Slot::A, filled(vec![vec![1.0, 2.0], vec![3.0, 4.0]]));
        s.load(Slot::B, Matrix::identity(2));
        s.calculate(&mut ()).unwrap();
        assert_eq!(s.result_determinant(), Some(Ok(-2.0)));
    }

    #[test]
    fn test_operation_from_str() {
        assert_eq!("mul".parse::<MatrixOperation>().unwrap(), MatrixOperation::Multiply);
        assert!("divide".parse::<MatrixOperation>().is_err());
    }
}
