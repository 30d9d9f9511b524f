use crate::prelude::*;

use core::hash::{Hash, Hasher};
use smallvec::SmallVec;

mod direction;
pub use direction::*;

mod listing;
pub use listing::*;

/// Cell storage; boards up to 4x4 stay inline.
pub type Cells = SmallVec<[u16; 16]>;

pub const BLANK: u16 = 0;

/// A validated square layout: a permutation of `0..size*size`, with `0` as the blank.
#[derive(Debug, Clone)]
pub struct Board {
    cells: Cells,
    size: usize,
    blank: usize,
}

impl Board {
    pub fn new(cells: impl IntoIterator<Item = u16>) -> Result<Board, ValidationError> {
        let cells: Cells = cells.into_iter().collect();
        let len = cells.len();
        if len == 0 {
            return Err(ValidationError::Empty);
        }

        let size = integer_sqrt(len);
        if size * size != len {
            return Err(ValidationError::NotSquare { len });
        }

        let mut seen: SmallVec<[bool; 16]> = SmallVec::from_elem(false, len);
        for &value in &cells {
            let slot = seen
                .get_mut(value as usize)
                .ok_or(ValidationError::OutOfRange { value, len })?;
            if *slot {
                return Err(ValidationError::Duplicate { value });
            }
            *slot = true;
        }

        // `len` distinct values below `len` always include the blank.
        let blank = cells
            .iter()
            .position(|&c| c == BLANK)
            .unwrap_or_else(|| unreachable!());

        Ok(Board { cells, size, blank })
    }

    /// Tiles `1..size*size` in reading order, blank in the bottom-right corner.
    pub fn solved(size: usize) -> Result<Board, ValidationError> {
        let len = size
            .checked_mul(size)
            .ok_or(ValidationError::TooLarge { size })?;
        if len == 0 {
            return Err(ValidationError::Empty);
        }
        if len - 1 > u16::MAX as usize {
            return Err(ValidationError::TooLarge { size });
        }

        let cells = (1..=(len - 1) as u16)
            .chain(core::iter::once(BLANK))
            .collect();
        Ok(Board {
            cells,
            size,
            blank: len - 1,
        })
    }

    pub fn cells(&self) -> &[u16] {
        &self.cells
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn blank(&self) -> usize {
        self.blank
    }

    pub fn row_col(&self, pos: usize) -> (usize, usize) {
        (pos / self.size, pos % self.size)
    }

    pub fn legal_moves(&self) -> SmallVec<[usize; 4]> {
        legal_move_positions(self.blank, self.size)
    }

    /// Swaps the blank with the tile at `pos`, which must be adjacent to it.
    pub fn swap_blank(&self, pos: usize) -> Board {
        debug_assert!(self.legal_moves().contains(&pos));

        let mut cells = self.cells.clone();
        cells.swap(self.blank, pos);
        Board {
            cells,
            size: self.size,
            blank: pos,
        }
    }

    pub fn slide(&self, direction: Direction) -> Option<Board> {
        direction
            .neighbor(self.blank, self.size)
            .map(|pos| self.swap_blank(pos))
    }

    pub fn check_same_size(&self, goal: &Board) -> Result<(), ValidationError> {
        if self.size == goal.size {
            Ok(())
        } else {
            Err(ValidationError::SizeMismatch {
                start: self.size,
                goal: goal.size,
            })
        }
    }

    /// Whether blank moves can turn `self` into `goal`.
    ///
    /// Every blank move is a transposition of the whole permutation and shifts
    /// the blank by one step, so the two parities always change together.
    pub fn is_solvable_from(&self, goal: &Board) -> bool {
        assert_eq!(self.size, goal.size);

        let mut goal_position = vec![0; self.cells.len()];
        for (pos, &value) in goal.cells.iter().enumerate() {
            goal_position[value as usize] = pos;
        }
        let permutation = self
            .cells
            .iter()
            .map(|&value| goal_position[value as usize])
            .collect::<Vec<_>>();

        let (row, col) = self.row_col(self.blank);
        let (goal_row, goal_col) = goal.row_col(goal.blank);
        let blank_distance = row.abs_diff(goal_row) + col.abs_diff(goal_col);

        permutation_is_odd(&permutation) == (blank_distance % 2 == 1)
    }
}

pub fn legal_move_positions(blank: usize, size: usize) -> SmallVec<[usize; 4]> {
    Direction::all()
        .filter_map(|direction| direction.neighbor(blank, size))
        .collect()
}

fn permutation_is_odd(permutation: &[usize]) -> bool {
    let mut visited = vec![false; permutation.len()];
    let mut cycles = 0;
    for start in 0..permutation.len() {
        if visited[start] {
            continue;
        }
        cycles += 1;
        let mut at = start;
        while !visited[at] {
            visited[at] = true;
            at = permutation[at];
        }
    }
    (permutation.len() - cycles) % 2 == 1
}

fn integer_sqrt(n: usize) -> usize {
    let mut root = 0;
    while (root + 1) * (root + 1) <= n {
        root += 1;
    }
    root
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.cells == other.cells
    }
}

impl Eq for Board {}

impl Hash for Board {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.cells.hash(state);
    }
}

impl core::str::FromStr for Board {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Board, ValidationError> {
        Board::new(parse_values(digit_runs(s))?)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let width = (self.cells.len() - 1).to_string().len();
        for row in self.cells.chunks(self.size) {
            let line = row
                .iter()
                .map(|&c| match c {
                    BLANK => format!("{:>width$}", "."),
                    c => format!("{:>width$}", c),
                })
                .collect::<Vec<_>>();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solved_layout() {
        assert_eq!(Board::solved(3).unwrap().cells(), &[1, 2, 3, 4, 5, 6, 7, 8, 0]);
        assert_eq!(Board::solved(3).unwrap().blank(), 8);
    }

    #[test]
    fn solved_rejects_zero_size() {
        assert_eq!(Board::solved(0), Err(ValidationError::Empty));
    }

    #[test]
    fn solved_largest_size() {
        let board = Board::solved(256).unwrap();
        assert_eq!(board.cells().len(), 65_536);
        assert_eq!(board.cells()[65_534], 65_535);
        assert_eq!(board.blank(), 65_535);
        assert_eq!(Board::solved(257), Err(ValidationError::TooLarge { size: 257 }));
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(Board::new(Vec::new()), Err(ValidationError::Empty));
    }

    #[test]
    fn rejects_non_square() {
        assert_eq!(
            Board::new(vec![0, 1, 2]),
            Err(ValidationError::NotSquare { len: 3 })
        );
    }

    #[test]
    fn rejects_duplicates() {
        assert_eq!(
            Board::new(vec![0, 1, 1, 3]),
            Err(ValidationError::Duplicate { value: 1 })
        );
    }

    #[test]
    fn rejects_out_of_range() {
        assert_eq!(
            Board::new(vec![0, 1, 2, 4]),
            Err(ValidationError::OutOfRange { value: 4, len: 4 })
        );
    }

    #[test]
    fn single_cell_board_is_valid() {
        let board = Board::new(vec![0]).unwrap();
        assert_eq!(board.size(), 1);
        assert!(board.legal_moves().is_empty());
    }

    #[test]
    fn parses_from_str() {
        let board: Board = "1 2 3, 4 5 6 / 7 8 0".parse().unwrap();
        assert_eq!(board, Board::solved(3).unwrap());
    }

    #[test]
    fn top_left_corner_of_4x4() {
        let mut positions = legal_move_positions(0, 4).to_vec();
        positions.sort();
        assert_eq!(positions, vec![1, 4]);
    }

    #[test]
    fn move_position_counts() {
        for size in 2..6 {
            for blank in 0..size * size {
                let row = blank / size;
                let col = blank % size;
                let on_edge = |i: usize| i == 0 || i == size - 1;
                let expected = match (on_edge(row), on_edge(col)) {
                    (true, true) => 2,
                    (true, false) | (false, true) => 3,
                    (false, false) => 4,
                };
                assert_eq!(legal_move_positions(blank, size).len(), expected);
            }
        }
    }

    #[test]
    fn moves_emitted_left_right_up_down() {
        assert_eq!(legal_move_positions(4, 3).to_vec(), vec![3, 5, 1, 7]);
    }

    #[test]
    fn equal_cells_make_equal_boards() {
        let a = board(&[1, 2, 3, 4, 5, 6, 7, 0, 8]);
        let b = Board::solved(3).unwrap().slide(Direction::Left).unwrap();
        assert_eq!(a, b);
        assert_eq!(b.blank(), 7);
    }

    #[test]
    fn one_swap_is_solvable() {
        let start = board(&[1, 2, 3, 4, 5, 6, 7, 0, 8]);
        assert!(start.is_solvable_from(&GOAL_3));
    }

    #[test]
    fn swapped_tiles_are_unsolvable() {
        let start = board(&[2, 1, 3, 4, 5, 6, 7, 8, 0]);
        assert!(!start.is_solvable_from(&GOAL_3));
    }

    #[test]
    fn size_mismatch_is_reported() {
        assert_eq!(
            Board::solved(3).unwrap().check_same_size(&Board::solved(4).unwrap()),
            Err(ValidationError::SizeMismatch { start: 3, goal: 4 })
        );
    }

    #[test]
    fn displays_grid() {
        assert_eq!(Board::solved(2).unwrap().to_string(), "1 2\n3 .\n");
    }

    #[quickcheck]
    fn walks_keep_a_permutation(moves: Vec<Direction>) -> bool {
        let board = board_with_moves(&GOAL_4, &moves);
        Board::new(board.cells().iter().copied()).as_ref() == Ok(&board)
            && board.cells()[board.blank()] == BLANK
    }

    #[quickcheck]
    fn walks_stay_solvable(moves: Vec<Direction>) -> bool {
        board_with_moves(&GOAL_4, &moves).is_solvable_from(&GOAL_4)
    }
}
