//! Worksheet-to-record extraction
//!
//! Turns one worksheet into an ordered sequence of header-keyed records:
//! row 0 supplies the field names, blank rows are dropped, and every other
//! row becomes a [`Record`].

pub mod numeric;
pub mod reader;
pub mod record;
pub mod workbook;

pub use numeric::round_special;
pub use reader::{ExtractError, extract};
pub use record::{Record, RecordSet};
pub use workbook::{WorkbookTables, read_workbook};
