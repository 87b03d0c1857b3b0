use std::str::FromStr;

pub mod selector;

/// Fields a view record knows about.
///
/// The declaration order is the default iteration order used when the caller
/// does not request specific fields.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Deserialize, serde::Serialize,
)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Hash,
    Added,
    BytesDone,
    DownloadRate,
    DownloadTotal,
    Eta,
    Name,
    PercentComplete,
    Ratio,
    SizeBytes,
    Status,
    TotalPeers,
    TotalSeeds,
    UploadTotal,
    UploadRate,
    Priority,
    Trackers,
    CreationDate,
    FreeDiskSpace,
    ConnectedPeers,
    ConnectedSeeds,
    Message,
    BasePath,
    IgnoreScheduler,
    Comment,
    IsPrivate,
    Directory,
    Filename,
    IsMultiFile,
    Tags,
}

impl Field {
    /// Every known field, in default order.
    pub const ALL: [Field; 30] = [
        Self::Hash,
        Self::Added,
        Self::BytesDone,
        Self::DownloadRate,
        Self::DownloadTotal,
        Self::Eta,
        Self::Name,
        Self::PercentComplete,
        Self::Ratio,
        Self::SizeBytes,
        Self::Status,
        Self::TotalPeers,
        Self::TotalSeeds,
        Self::UploadTotal,
        Self::UploadRate,
        Self::Priority,
        Self::Trackers,
        Self::CreationDate,
        Self::FreeDiskSpace,
        Self::ConnectedPeers,
        Self::ConnectedSeeds,
        Self::Message,
        Self::BasePath,
        Self::IgnoreScheduler,
        Self::Comment,
        Self::IsPrivate,
        Self::Directory,
        Self::Filename,
        Self::IsMultiFile,
        Self::Tags,
    ];

    /// The name used by the torrent client and in the view record.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Hash => "hash",
            Self::Added => "added",
            Self::BytesDone => "bytesDone",
            Self::DownloadRate => "downloadRate",
            Self::DownloadTotal => "downloadTotal",
            Self::Eta => "eta",
            Self::Name => "name",
            Self::PercentComplete => "percentComplete",
            Self::Ratio => "ratio",
            Self::SizeBytes => "sizeBytes",
            Self::Status => "status",
            Self::TotalPeers => "totalPeers",
            Self::TotalSeeds => "totalSeeds",
            Self::UploadTotal => "uploadTotal",
            Self::UploadRate => "uploadRate",
            Self::Priority => "priority",
            Self::Trackers => "trackers",
            Self::CreationDate => "creationDate",
            Self::FreeDiskSpace => "freeDiskSpace",
            Self::ConnectedPeers => "connectedPeers",
            Self::ConnectedSeeds => "connectedSeeds",
            Self::Message => "message",
            Self::BasePath => "basePath",
            Self::IgnoreScheduler => "ignoreScheduler",
            Self::Comment => "comment",
            Self::IsPrivate => "isPrivate",
            Self::Directory => "directory",
            Self::Filename => "filename",
            Self::IsMultiFile => "isMultiFile",
            Self::Tags => "tags",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a name does not match any known [`Field`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownField(pub String);

impl std::fmt::Display for UnknownField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown field {:?}", self.0)
    }
}

impl std::error::Error for UnknownField {}

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == name)
            .ok_or_else(|| UnknownField(name.to_owned()))
    }
}

/// A requested field name.
///
/// Callers may request names this crate does not know about, those are
/// copied from the snapshot as-is.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum FieldKey {
    Known(Field),
    Other(String),
}

impl FieldKey {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Known(field) => field.as_str(),
            Self::Other(name) => name.as_str(),
        }
    }
}

impl From<Field> for FieldKey {
    fn from(value: Field) -> Self {
        Self::Known(value)
    }
}

impl From<&str> for FieldKey {
    fn from(value: &str) -> Self {
        match Field::from_str(value) {
            Ok(field) => Self::Known(field),
            Err(UnknownField(name)) => Self::Other(name),
        }
    }
}

impl From<String> for FieldKey {
    fn from(value: String) -> Self {
        match Field::from_str(&value) {
            Ok(field) => Self::Known(field),
            Err(_) => Self::Other(value),
        }
    }
}
