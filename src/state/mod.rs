pub mod brush;
pub mod editor;
pub mod grid;
pub mod interaction;
pub mod mapper;
pub mod summary;

pub use brush::{BrushEditor, Tool};
pub use editor::{EditorAction, EditorState, Notice};
pub use grid::GridState;
pub use interaction::{CellCoord, Command, InteractionController, Mode, PointerInput};
pub use mapper::CoordinateMapper;
pub use summary::MapSummary;
