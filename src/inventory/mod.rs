mod inventory;
mod record;

pub use inventory::Inventory;
pub use record::{parse_record_id, InvalidIdError, Record};
