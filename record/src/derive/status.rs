use crate::snapshot::RawSnapshot;

/// Status markers displayed for a torrent, in the order they were derived.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusTag {
    Checking,
    Complete,
    Seeding,
    Paused,
    Stopped,
    Downloading,
    Error,
    Active,
    Inactive,
}

impl StatusTag {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Checking => "checking",
            Self::Complete => "complete",
            Self::Seeding => "seeding",
            Self::Paused => "paused",
            Self::Stopped => "stopped",
            Self::Downloading => "downloading",
            Self::Error => "error",
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }
}

impl std::fmt::Display for StatusTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies the torrent from its client flags.
///
/// At most one primary classification applies, checked in priority order.
/// `error` follows when the client reports a message, and the list always
/// ends with exactly one of `active` or `inactive`.
pub fn derive(snapshot: &RawSnapshot) -> Vec<StatusTag> {
    let mut tags = primary(snapshot);

    if !snapshot.text("message").is_empty() {
        tags.push(StatusTag::Error);
    }

    if snapshot.text("uploadRate") == "0" && snapshot.text("downloadRate") == "0" {
        tags.push(StatusTag::Inactive);
    } else {
        tags.push(StatusTag::Active);
    }

    tags
}

fn primary(snapshot: &RawSnapshot) -> Vec<StatusTag> {
    if snapshot.flag("isHashChecking") == Some(true) {
        return vec![StatusTag::Checking];
    }

    let complete = snapshot.flag("isComplete");
    let open = snapshot.flag("isOpen");
    let started = snapshot.flag("state");

    // complete torrents list `complete` first when open, `stopped` first when closed
    match (complete, open, started) {
        (Some(true), Some(true), Some(true)) => vec![StatusTag::Complete, StatusTag::Seeding],
        (Some(true), Some(true), Some(false)) => vec![StatusTag::Paused],
        (Some(true), Some(false), _) => vec![StatusTag::Stopped, StatusTag::Complete],
        (Some(false), Some(true), Some(true)) => vec![StatusTag::Downloading],
        (Some(false), Some(true), Some(false)) => vec![StatusTag::Paused],
        (Some(false), Some(false), _) => vec![StatusTag::Stopped],
        _ => Vec::new(),
    }
}
