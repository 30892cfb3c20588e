pub mod cookie;
mod grid;
mod period;
mod view;

pub use grid::*;
pub use period::*;
pub use view::*;
