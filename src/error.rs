use thiserror::Error;

/// Rejections raised while turning raw cell sequences into boards.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("board has no cells")]
    Empty,
    #[error("a {size}x{size} board has more cells than tile values")]
    TooLarge { size: usize },
    #[error("{len} cells do not form a square board")]
    NotSquare { len: usize },
    #[error("cell value {value} is out of range for a board of {len} cells")]
    OutOfRange { value: u16, len: usize },
    #[error("cell value {value} appears more than once")]
    Duplicate { value: u16 },
    #[error("start is {start}x{start} but goal is {goal}x{goal}")]
    SizeMismatch { start: usize, goal: usize },
    #[error("found {found} cell values, expected {needed}")]
    TooFewTokens { found: usize, needed: usize },
    #[error("{token:?} is not a valid cell value")]
    BadToken { token: String },
}
