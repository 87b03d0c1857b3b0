#![doc = include_str!("../readme.md")]

pub mod derive;
pub mod error;
pub mod field;
pub mod format;
pub mod notify;
pub mod options;
pub mod record;
pub mod snapshot;

pub use derive::eta::Eta;
pub use derive::status::StatusTag;
pub use error::{Error, Result};
pub use field::{Field, FieldKey};
pub use notify::{FinishedTorrents, NoopNotifier, Notifier};
pub use options::{Profile, RequestOptions, RequestedData};
pub use record::{FieldValue, TorrentRecord, ViewRecord};
pub use snapshot::RawSnapshot;

/// Separator the torrent client uses to pack several values in a single
/// field (tracker lists, peer counts).
pub const DELIMITER: &str = "@!@";
