mod arena;
pub use arena::*;

mod closed;
pub use closed::*;

mod engine;
pub use engine::*;

mod frontier;
pub use frontier::*;

mod path;
pub use path::*;

mod state;
pub use state::*;
