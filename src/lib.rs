//! CD collection inventory: an ordered in-memory record table with a
//! binary snapshot on disk, a plain text fallback for data written by
//! older versions, and an interactive menu front end.

pub mod cli_style;
pub mod config;
pub mod inventory;
pub mod menu;
pub mod persistence;

pub use inventory::{Inventory, Record};
pub use persistence::{load_inventory, LoadError, LoadSource};
