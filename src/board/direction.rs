use enum_iterator::Sequence;

/// The way the blank travels when it swaps with a neighbouring tile.
///
/// Declaration order is the order successors are generated in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Sequence)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub fn all() -> impl Iterator<Item = Direction> {
        enum_iterator::all()
    }

    /// The cell the blank at `pos` would swap with, if it stays on the board.
    pub fn neighbor(self, pos: usize, size: usize) -> Option<usize> {
        let (row, col) = (pos / size, pos % size);
        match self {
            Direction::Left if col > 0 => Some(pos - 1),
            Direction::Right if col + 1 < size => Some(pos + 1),
            Direction::Up if row > 0 => Some(pos - size),
            Direction::Down if row + 1 < size => Some(pos + size),
            _ => None,
        }
    }

    /// The direction that carries the blank from `from` to the adjacent `to`.
    pub fn between(from: usize, to: usize, size: usize) -> Option<Direction> {
        Direction::all().find(|d| d.neighbor(from, size) == Some(to))
    }

    pub fn reverse(self) -> Direction {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let s = match self {
            Direction::Left => "Left",
            Direction::Right => "Right",
            Direction::Up => "Up",
            Direction::Down => "Down",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_in_generation_order() {
        assert_eq!(
            Direction::all().collect::<Vec<_>>(),
            vec![
                Direction::Left,
                Direction::Right,
                Direction::Up,
                Direction::Down
            ]
        );
    }

    #[test]
    fn edges_block_moves() {
        assert_eq!(Direction::Left.neighbor(3, 3), None);
        assert_eq!(Direction::Right.neighbor(5, 3), None);
        assert_eq!(Direction::Up.neighbor(2, 3), None);
        assert_eq!(Direction::Down.neighbor(6, 3), None);
    }

    #[test]
    fn between_finds_direction() {
        assert_eq!(Direction::between(4, 1, 3), Some(Direction::Up));
        assert_eq!(Direction::between(4, 8, 3), None);
    }

    #[quickcheck]
    fn reverse_undoes_move(direction: Direction, pos: u8) -> bool {
        let pos = pos as usize % 16;
        match direction.neighbor(pos, 4) {
            Some(next) => direction.reverse().neighbor(next, 4) == Some(pos),
            None => true,
        }
    }
}
