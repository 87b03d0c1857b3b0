use crate::format;
use crate::snapshot::RawSnapshot;

/// Estimated time left before a torrent finishes downloading.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Eta {
    /// A formatted duration such as `"2m 5s"`.
    Duration(String),
    /// The torrent is not downloading, serialized as `"Infinity"`.
    Infinite,
}

impl Eta {
    pub const INFINITE: &'static str = "Infinity";

    pub fn as_str(&self) -> &str {
        match self {
            Self::Duration(inner) => inner.as_str(),
            Self::Infinite => Self::INFINITE,
        }
    }
}

impl std::fmt::Display for Eta {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl serde::Serialize for Eta {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> serde::Deserialize<'de> for Eta {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(if value == Self::INFINITE {
            Self::Infinite
        } else {
            Self::Duration(value)
        })
    }
}

/// Remaining bytes divided by the current download rate.
///
/// Overshooting torrents (`bytesDone > sizeBytes`) produce a negative
/// duration, it is not clamped.
pub fn derive(snapshot: &RawSnapshot) -> Eta {
    let rate = snapshot.number("downloadRate");
    if rate > 0.0 {
        let seconds = (snapshot.number("sizeBytes") - snapshot.number("bytesDone")) / rate;
        if seconds.is_finite() {
            return Eta::Duration(format::duration(seconds));
        }
    }
    Eta::Infinite
}
