//! UI Components

mod item_grid;

pub use item_grid::ItemGrid;
