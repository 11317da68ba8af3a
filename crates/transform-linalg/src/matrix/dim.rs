//! Operations that remove or add a column or row.
//!
//! Like the vector equivalents, these are implemented for every concrete size up to 8, while the
//! other dimension stays generic.

use super::{CutCol, CutRow, Matrix};
use crate::Vector;

macro_rules! impl_columns {
    ($($c:literal => $m:literal),+ $(,)?) => {
        $(
            impl<T: Copy, const R: usize> Matrix<T, $c, R> {
                /// Creates a matrix from its first column and a matrix containing the remaining
                /// columns.
                pub fn from_head_tail(head: Vector<T, R>, tail: Matrix<T, $m, R>) -> Self {
                    Self::from_fn(|col, row| if col == 0 { head[row] } else { tail.0[col - 1][row] })
                }

                /// Returns every column except the first one.
                pub fn tail(&self) -> Matrix<T, $m, R> {
                    Matrix::from_fn(|col, row| self.0[col + 1][row])
                }

                /// Overwrites every column except the first one.
                pub fn set_tail(&mut self, tail: Matrix<T, $m, R>) {
                    self.0[1..].copy_from_slice(&tail.0);
                }
            }

            impl<T: Copy, const R: usize> CutCol for Matrix<T, $c, R> {
                type Output = Matrix<T, $m, R>;

                #[track_caller]
                fn cut_col(&self, col: usize) -> Self::Output {
                    assert!(col < $c, "cannot remove column {col} from a matrix with {} columns", $c);
                    Matrix::from_fn(|c, row| if c < col { self.0[c][row] } else { self.0[c + 1][row] })
                }
            }
        )+
    };
}

macro_rules! impl_rows {
    ($($r:literal => $m:literal),+ $(,)?) => {
        $(
            impl<T: Copy, const C: usize> Matrix<T, C, $r> {
                /// Creates a matrix from its first row and a matrix containing the remaining rows.
                pub fn from_headr_tailr(headr: Vector<T, C>, tailr: Matrix<T, C, $m>) -> Self {
                    Self::from_fn(|col, row| if row == 0 { headr[col] } else { tailr.0[col][row - 1] })
                }

                /// Returns every row except the first one.
                pub fn tailr(&self) -> Matrix<T, C, $m> {
                    Matrix(self.0.map(|column| column.tail()))
                }

                /// Overwrites every row except the first one.
                pub fn set_tailr(&mut self, tailr: Matrix<T, C, $m>) {
                    for (column, tail) in self.0.iter_mut().zip(tailr.0) {
                        column.set_tail(tail);
                    }
                }
            }

            impl<T: Copy, const C: usize> CutRow for Matrix<T, C, $r> {
                type Output = Matrix<T, C, $m>;

                #[track_caller]
                fn cut_row(&self, row: usize) -> Self::Output {
                    assert!(row < $r, "cannot remove row {row} from a matrix with {} rows", $r);
                    Matrix(self.0.map(|column| column.cut(row)))
                }
            }
        )+
    };
}

impl_columns!(2 => 1, 3 => 2, 4 => 3, 5 => 4, 6 => 5, 7 => 6, 8 => 7);
impl_rows!(2 => 1, 3 => 2, 4 => 3, 5 => 4, 6 => 5, 7 => 6, 8 => 7);

#[cfg(test)]
mod tests {
    use crate::{vec2, vec3, Mat3, Matrix};

    use super::*;

    #[rustfmt::skip]
    fn mat() -> Mat3<i32> {
        Matrix::from_rows([
            [1, 2, 3],
            [4, 5, 6],
            [7, 8, 9],
        ])
    }

    #[test]
    fn head_tail() {
        let m = mat();
        assert_eq!(m.head(), vec3(1, 4, 7));
        assert_eq!(m.tail(), Matrix::from_rows([[2, 3], [5, 6], [8, 9]]));
        assert_eq!(m.headr(), vec3(1, 2, 3));
        assert_eq!(m.tailr(), Matrix::from_rows([[4, 5, 6], [7, 8, 9]]));

        assert_eq!(Mat3::from_head_tail(m.head(), m.tail()), m);
        assert_eq!(Mat3::from_headr_tailr(m.headr(), m.tailr()), m);
    }

    #[test]
    fn set_tail() {
        let mut m = mat();
        m.set_tail(Matrix::ZERO);
        assert_eq!(m, Matrix::from_rows([[1, 0, 0], [4, 0, 0], [7, 0, 0]]));

        let mut m = mat();
        m.set_tailr(Matrix::splat(-1));
        assert_eq!(m, Matrix::from_rows([[1, 2, 3], [-1, -1, -1], [-1, -1, -1]]));
    }

    #[test]
    fn cut() {
        let m = mat();
        assert_eq!(m.cut_col(0), m.tail());
        assert_eq!(m.cut_row(0), m.tailr());
        assert_eq!(m.cut_col(1), Matrix::from_rows([[1, 3], [4, 6], [7, 9]]));
        assert_eq!(m.cut_row(2), Matrix::from_rows([[1, 2, 3], [4, 5, 6]]));

        let row: Matrix<i32, 2, 1> = Matrix::from_rows([[1, 2]]);
        assert_eq!(row.cut_col(1), Matrix::from_rows([[1]]));
        assert_eq!(Matrix::from_columns([vec2(1, 2)]).cut_row(0)[0], [2]);
    }

    #[test]
    #[should_panic(expected = "cannot remove column 3 from a matrix with 3 columns")]
    fn cut_col_out_of_bounds() {
        mat().cut_col(3);
    }

    #[test]
    #[should_panic(expected = "cannot remove row 5 from a matrix with 3 rows")]
    fn cut_row_out_of_bounds() {
        mat().cut_row(5);
    }
}
