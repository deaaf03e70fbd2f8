mod error;
mod load;
mod snapshot;
mod text;

pub use error::{LineProblem, LoadError, SaveError};
pub use load::{load_inventory, LoadSource, LoadedInventory};
pub use snapshot::{load_snapshot, save_snapshot};
pub use text::load_text;
