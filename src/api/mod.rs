pub mod color;
pub mod lookup;

pub use color::{handle_color, handle_root, __path_handle_color, __path_handle_root};
pub use lookup::{handle_lookup, __path_handle_lookup};
