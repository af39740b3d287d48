//! The comparison table and the asynchronous passes that fill it.

pub mod reader;
pub mod session;
pub mod table;
pub mod types;

pub use reader::{NoteReader, ReadError, VaultReader, load_cell};
pub use session::ComparisonView;
pub use table::ComparisonTable;
pub use types::{CellOutcome, CellState, CellUpdate, DAY_COLUMN_WIDTH, TableLayout};
