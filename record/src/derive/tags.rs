use percent_encoding::percent_decode_str;

use crate::snapshot::RawSnapshot;

/// Labels attached to the torrent.
///
/// The client stores them comma separated and percent-encoded. Tokens are
/// sorted on their encoded form, then decoded.
pub fn derive(snapshot: &RawSnapshot) -> Vec<String> {
    let raw = snapshot.text("tags");
    if raw.is_empty() {
        return Vec::new();
    }

    let mut tokens: Vec<&str> = raw.split(',').collect();
    tokens.sort_unstable();
    tokens
        .into_iter()
        .map(|token| percent_decode_str(token).decode_utf8_lossy().into_owned())
        .collect()
}
