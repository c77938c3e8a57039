//! Vendor payload ingestion: serde views of the showcase JSON and the
//! mapping into the scoring model. File/string input only; fetching the
//! payload from the network is someone else's job.

pub mod parser;
pub mod payload;
pub mod prop_ids;

pub use parser::{load_player_from_file, parse_player};
pub use payload::RawPayload;
