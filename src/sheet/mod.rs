pub mod definition;
pub mod json_sheet;
pub mod updater;

pub use definition::{Record, RowUpdate, Sheet, UpdateSummary};
pub use json_sheet::JsonSheet;
pub use updater::update_sheet;
