//! Loading the CSV inputs.
//!
//! The input directory holds `meta.csv` (a data dictionary) and the four
//! data files. Loading checks that every file exists and that each one
//! has, and documents, the columns the engine needs. It does not parse
//! values.

mod error;
mod files;
mod load;
mod meta;
mod rows;

pub use error::InputError;
pub use files::InputFile;
pub use load::{InputSet, ensure_inputs_exist, read_headers, read_rows, verify_inputs};
pub use meta::{MetaIndex, check_columns};
pub use rows::{DoorRow, EgressRow, ExitRow, MetaRow, StationRow};
