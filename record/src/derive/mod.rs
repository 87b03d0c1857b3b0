//! One deriver per computed field.
//!
//! Fields without a deriver are copied from the snapshot unchanged.

use crate::field::{Field, FieldKey};
use crate::record::FieldValue;
use crate::snapshot::RawSnapshot;

pub mod date;
pub mod eta;
pub mod peers;
pub mod percent;
pub mod status;
pub mod tags;
pub mod trackers;

/// Computes the value of a single field from the snapshot.
pub fn value(key: &FieldKey, snapshot: &RawSnapshot) -> FieldValue {
    let field = match key {
        FieldKey::Known(field) => *field,
        FieldKey::Other(name) => return FieldValue::Raw(snapshot.raw(name)),
    };

    match field {
        Field::Status => FieldValue::Status(status::derive(snapshot)),
        Field::Eta => FieldValue::Eta(eta::derive(snapshot)),
        Field::PercentComplete => FieldValue::Number(percent::derive(snapshot)),
        Field::Tags => FieldValue::Strings(tags::derive(snapshot)),
        Field::Trackers => FieldValue::Strings(trackers::derive(snapshot)),
        Field::TotalPeers | Field::TotalSeeds => {
            FieldValue::Count(peers::derive(snapshot, field.as_str()))
        }
        Field::Added | Field::CreationDate => {
            FieldValue::Text(date::derive(snapshot, field.as_str()))
        }
        Field::Hash
        | Field::BytesDone
        | Field::DownloadRate
        | Field::DownloadTotal
        | Field::Name
        | Field::Ratio
        | Field::SizeBytes
        | Field::UploadTotal
        | Field::UploadRate
        | Field::Priority
        | Field::FreeDiskSpace
        | Field::ConnectedPeers
        | Field::ConnectedSeeds
        | Field::Message
        | Field::BasePath
        | Field::IgnoreScheduler
        | Field::Comment
        | Field::IsPrivate
        | Field::Directory
        | Field::Filename
        | Field::IsMultiFile => FieldValue::Raw(snapshot.raw(field.as_str())),
    }
}
