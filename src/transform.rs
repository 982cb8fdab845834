//! Quarter-turn rotation of square matrices.
//!
//! The rotation primitive is dimension-independent so it can be tested on
//! its own; the engine only ever feeds it 3x3 quadrants with `k` equal to
//! [`CLOCKWISE`] or [`COUNTER_CLOCKWISE`].
//!
//! Under one clockwise quarter-turn of an NxN matrix, the cell at (r, c)
//! moves to (c, N-1-r). Two turns send it to (N-1-r, N-1-c), three turns
//! to (N-1-c, r).

use crate::error::InvalidInput;

/// Quarter-turn count for one clockwise rotation.
pub const CLOCKWISE: i32 = 1;
/// One counter-clockwise rotation equals three clockwise quarter-turns.
pub const COUNTER_CLOCKWISE: i32 = 3;

/// Normalize any rotation count into 0..=3 clockwise quarter-turns.
pub(crate) fn normalize_turns(k: i32) -> usize {
    k.rem_euclid(4) as usize
}

/// Destination of (row, col) after `turns` clockwise quarter-turns of an
/// n x n matrix. `turns` must already be normalized into 0..=3.
const fn rotated_position(row: usize, col: usize, n: usize, turns: usize) -> (usize, usize) {
    match turns {
        1 => (col, n - 1 - row),
        2 => (n - 1 - row, n - 1 - col),
        3 => (n - 1 - col, row),
        _ => (row, col),
    }
}

/// Rotate a square matrix clockwise by `k` quarter-turns.
///
/// `k` may be any integer; negative values rotate counter-clockwise and
/// all values are reduced modulo 4, so `k = 0` returns a structurally
/// equal copy. The result is always a new matrix; the input is never
/// aliased.
///
/// ## Errors
///
/// [`InvalidInput`] if the matrix has no rows, has rows of uneven length,
/// or is not square.
pub fn rotate<T: Clone>(matrix: &[Vec<T>], k: i32) -> Result<Vec<Vec<T>>, InvalidInput> {
    let rows = matrix.len();
    if rows == 0 {
        return Err(InvalidInput::Empty);
    }

    let cols = matrix[0].len();
    for (row, cells) in matrix.iter().enumerate() {
        if cells.len() != cols {
            return Err(InvalidInput::Ragged {
                row,
                expected: cols,
                got: cells.len(),
            });
        }
    }
    if cols != rows {
        return Err(InvalidInput::NotSquare { rows, cols });
    }

    let turns = normalize_turns(k);
    let mut rotated = matrix.to_vec();
    for (row, cells) in matrix.iter().enumerate() {
        for (col, cell) in cells.iter().enumerate() {
            let (dest_row, dest_col) = rotated_position(row, col, rows, turns);
            rotated[dest_row][dest_col] = cell.clone();
        }
    }

    Ok(rotated)
}

/// Rotate a fixed-size square matrix clockwise by `k` quarter-turns.
///
/// Shape is enforced by the type, so this cannot fail. Every destination
/// is written because the position mapping is a bijection.
pub(crate) fn rotate_fixed<T: Copy, const N: usize>(cells: [[T; N]; N], k: i32) -> [[T; N]; N] {
    let turns = normalize_turns(k);
    let mut rotated = cells;
    for (row, line) in cells.iter().enumerate() {
        for (col, cell) in line.iter().enumerate() {
            let (dest_row, dest_col) = rotated_position(row, col, N, turns);
            rotated[dest_row][dest_col] = *cell;
        }
    }
    rotated
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid3() -> Vec<Vec<u8>> {
        vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]]
    }

    #[test]
    fn test_normalize_turns() {
        assert_eq!(normalize_turns(0), 0);
        assert_eq!(normalize_turns(1), 1);
        assert_eq!(normalize_turns(4), 0);
        assert_eq!(normalize_turns(7), 3);
        assert_eq!(normalize_turns(-1), 3);
        assert_eq!(normalize_turns(-5), 3);
    }

    #[test]
    fn test_zero_turns_copies() {
        let matrix = grid3();
        let rotated = rotate(&matrix, 0).unwrap();
        assert_eq!(rotated, matrix);
    }

    #[test]
    fn test_one_clockwise_turn() {
        let rotated = rotate(&grid3(), 1).unwrap();
        assert_eq!(rotated, vec![vec![7, 4, 1], vec![8, 5, 2], vec![9, 6, 3]]);
    }

    #[test]
    fn test_two_turns() {
        let rotated = rotate(&grid3(), 2).unwrap();
        assert_eq!(rotated, vec![vec![9, 8, 7], vec![6, 5, 4], vec![3, 2, 1]]);
    }

    #[test]
    fn test_three_turns_is_counter_clockwise() {
        let rotated = rotate(&grid3(), COUNTER_CLOCKWISE).unwrap();
        assert_eq!(rotated, vec![vec![3, 6, 9], vec![2, 5, 8], vec![1, 4, 7]]);
    }

    #[test]
    fn test_negative_turns_match_positive_normalization() {
        let matrix = grid3();
        assert_eq!(rotate(&matrix, -1).unwrap(), rotate(&matrix, 3).unwrap());
        assert_eq!(rotate(&matrix, -3).unwrap(), rotate(&matrix, 1).unwrap());
        assert_eq!(rotate(&matrix, 5).unwrap(), rotate(&matrix, 1).unwrap());
    }

    #[test]
    fn test_other_dimensions() {
        let two = vec![vec![1, 2], vec![3, 4]];
        assert_eq!(
            rotate(&two, CLOCKWISE).unwrap(),
            vec![vec![3, 1], vec![4, 2]]
        );

        let one = vec![vec![42]];
        assert_eq!(rotate(&one, 2).unwrap(), one);

        let four: Vec<Vec<u8>> = (0..4).map(|r| (0..4).map(|c| r * 4 + c).collect()).collect();
        let back = rotate(&rotate(&four, 2).unwrap(), 2).unwrap();
        assert_eq!(back, four);
    }

    #[test]
    fn test_rotate_does_not_alias_input() {
        let matrix = grid3();
        let mut rotated = rotate(&matrix, 0).unwrap();
        rotated[0][0] = 99;
        assert_eq!(matrix[0][0], 1);
    }

    #[test]
    fn test_empty_matrix_rejected() {
        let empty: Vec<Vec<u8>> = vec![];
        assert_eq!(rotate(&empty, 1), Err(InvalidInput::Empty));
    }

    #[test]
    fn test_ragged_matrix_rejected() {
        let ragged = vec![vec![1, 2], vec![3]];
        assert_eq!(
            rotate(&ragged, 1),
            Err(InvalidInput::Ragged {
                row: 1,
                expected: 2,
                got: 1
            })
        );
    }

    #[test]
    fn test_non_square_matrix_rejected() {
        let rect = vec![vec![1, 2, 3], vec![4, 5, 6]];
        assert_eq!(
            rotate(&rect, 1),
            Err(InvalidInput::NotSquare { rows: 2, cols: 3 })
        );

        // Rows of consistent zero length are not square either.
        let hollow: Vec<Vec<u8>> = vec![vec![], vec![]];
        assert_eq!(
            rotate(&hollow, 1),
            Err(InvalidInput::NotSquare { rows: 2, cols: 0 })
        );
    }

    #[test]
    fn test_rotate_fixed_matches_dynamic() {
        let fixed = [[1u8, 2, 3], [4, 5, 6], [7, 8, 9]];
        for k in -4..=4 {
            let dynamic = rotate(&grid3(), k).unwrap();
            let rotated = rotate_fixed(fixed, k);
            for row in 0..3 {
                assert_eq!(rotated[row].to_vec(), dynamic[row], "k = {k}");
            }
        }
    }
}
