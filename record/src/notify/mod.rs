use std::collections::BTreeMap;
use std::sync::{Mutex, PoisonError};

use chrono::{DateTime, Utc};

use crate::derive::status::StatusTag;
use crate::error::{Error, Result};
use crate::record::ViewRecord;

/// Receives every freshly built record together with the one it replaces.
///
/// A single notifier is usually shared by the records of every torrent, and
/// may be called from several threads at once. Failures are reported to the
/// caller through logs only, they never abort a record build.
pub trait Notifier: Send + Sync {
    fn notify(&self, previous: Option<&ViewRecord>, current: &ViewRecord) -> Result<()>;
}

/// Notifier ignoring every record.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopNotifier;

impl Notifier for NoopNotifier {
    fn notify(&self, _previous: Option<&ViewRecord>, _current: &ViewRecord) -> Result<()> {
        Ok(())
    }
}

/// Keeps track of the torrents that finished downloading.
///
/// A torrent finishes when a record with a `downloading` status is replaced
/// by one with a `complete` status. Finished torrents are kept by hash until
/// [`FinishedTorrents::drain`] is called.
#[derive(Debug, Default)]
pub struct FinishedTorrents {
    finished: Mutex<BTreeMap<String, DateTime<Utc>>>,
}

impl FinishedTorrents {
    /// Hashes of the torrents that finished, with the time of the record
    /// that revealed it.
    pub fn finished(&self) -> BTreeMap<String, DateTime<Utc>> {
        self.finished
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the finished torrents and forgets about them.
    pub fn drain(&self) -> BTreeMap<String, DateTime<Utc>> {
        std::mem::take(&mut *self.finished.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

impl Notifier for FinishedTorrents {
    fn notify(&self, previous: Option<&ViewRecord>, current: &ViewRecord) -> Result<()> {
        let Some(previous) = previous else {
            return Ok(());
        };

        let was_downloading = previous.status().contains(&StatusTag::Downloading);
        let is_complete = current.status().contains(&StatusTag::Complete);
        if !(was_downloading && is_complete) {
            return Ok(());
        }

        let hash = current.hash().unwrap_or_default();
        if hash.is_empty() {
            return Err(Error::Notify {
                hash: String::new(),
                reason: "finished torrent record has no hash".into(),
            });
        }

        tracing::info!(hash, "torrent finished downloading");
        self.finished
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(hash.to_owned(), current.last_updated());
        Ok(())
    }
}
