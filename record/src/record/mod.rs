use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::derive::{self, eta::Eta, status::StatusTag};
use crate::field::{Field, FieldKey, selector};
use crate::notify::Notifier;
use crate::options::{Profile, RequestOptions};
use crate::snapshot::RawSnapshot;

/// Value of a single view record field.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Ordered status tags.
    Status(Vec<StatusTag>),
    /// Ordered list of strings (tags, trackers).
    Strings(Vec<String>),
    /// Normalized text (dates).
    Text(String),
    /// Computed number (percent complete).
    Number(f64),
    /// Parsed count (peers, seeds).
    Count(u64),
    Eta(Eta),
    /// Value copied from the snapshot as-is.
    Raw(serde_json::Value),
}

/// Normalized view of a torrent at one point in time.
///
/// Serializes as a flat object of its fields plus `lastUpdated`.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewRecord {
    #[serde(flatten)]
    fields: BTreeMap<String, FieldValue>,
    last_updated: DateTime<Utc>,
}

impl ViewRecord {
    /// Computes every field of `fields` from the snapshot.
    pub fn build(fields: &[FieldKey], snapshot: &RawSnapshot, last_updated: DateTime<Utc>) -> Self {
        let fields = fields
            .iter()
            .map(|key| (key.as_str().to_owned(), derive::value(key, snapshot)))
            .collect();
        Self {
            fields,
            last_updated,
        }
    }

    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.fields.get(field)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn last_updated(&self) -> DateTime<Utc> {
        self.last_updated
    }

    /// Status tags, empty when the status was not requested.
    pub fn status(&self) -> &[StatusTag] {
        match self.fields.get(Field::Status.as_str()) {
            Some(FieldValue::Status(tags)) => tags.as_slice(),
            _ => &[],
        }
    }

    /// Decoded tags, empty when not requested.
    pub fn tags(&self) -> &[String] {
        self.strings(Field::Tags)
    }

    /// Tracker domains, empty when not requested.
    pub fn trackers(&self) -> &[String] {
        self.strings(Field::Trackers)
    }

    pub fn base_path(&self) -> Option<&str> {
        self.raw_str(Field::BasePath)
    }

    pub fn hash(&self) -> Option<&str> {
        self.raw_str(Field::Hash)
    }

    fn strings(&self, field: Field) -> &[String] {
        match self.fields.get(field.as_str()) {
            Some(FieldValue::Strings(values)) => values.as_slice(),
            _ => &[],
        }
    }

    fn raw_str(&self, field: Field) -> Option<&str> {
        match self.fields.get(field.as_str()) {
            Some(FieldValue::Raw(value)) => value.as_str(),
            _ => None,
        }
    }
}

/// The current view of one torrent and the view it replaced.
///
/// Creating and updating go through the same build: resolve the fields,
/// derive each of them, hand the previous and new records to the notifier,
/// then make the new record current.
pub struct TorrentRecord {
    previous: Option<ViewRecord>,
    current: ViewRecord,
    profile: Profile,
    notifier: Arc<dyn Notifier>,
}

impl std::fmt::Debug for TorrentRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TorrentRecord")
            .field("previous", &self.previous)
            .field("current", &self.current)
            .field("profile", &self.profile)
            .finish_non_exhaustive()
    }
}

impl TorrentRecord {
    pub fn new(
        snapshot: &RawSnapshot,
        options: &RequestOptions,
        profile: Profile,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let current = build(snapshot, options, &profile, notifier.as_ref(), None);
        Self {
            previous: None,
            current,
            profile,
            notifier,
        }
    }

    /// Rebuilds the whole record from a newer snapshot.
    pub fn update(&mut self, snapshot: &RawSnapshot, options: &RequestOptions) {
        let next = build(
            snapshot,
            options,
            &self.profile,
            self.notifier.as_ref(),
            Some(&self.current),
        );
        self.previous = Some(std::mem::replace(&mut self.current, next));
    }

    pub fn current(&self) -> &ViewRecord {
        &self.current
    }

    pub fn previous(&self) -> Option<&ViewRecord> {
        self.previous.as_ref()
    }

    pub fn into_current(self) -> ViewRecord {
        self.current
    }

    pub fn status(&self) -> &[StatusTag] {
        self.current.status()
    }

    pub fn tags(&self) -> &[String] {
        self.current.tags()
    }

    pub fn trackers(&self) -> &[String] {
        self.current.trackers()
    }

    pub fn base_path(&self) -> Option<&str> {
        self.current.base_path()
    }

    pub fn hash(&self) -> Option<&str> {
        self.current.hash()
    }

    pub fn last_updated(&self) -> DateTime<Utc> {
        self.current.last_updated()
    }
}

fn build(
    snapshot: &RawSnapshot,
    options: &RequestOptions,
    profile: &Profile,
    notifier: &dyn Notifier,
    previous: Option<&ViewRecord>,
) -> ViewRecord {
    let fields = selector::resolve_fields(options, profile);
    let last_updated = options.current_time.unwrap_or_else(Utc::now);
    let record = ViewRecord::build(&fields, snapshot, last_updated);
    tracing::debug!(
        hash = record.hash().unwrap_or_default(),
        fields = record.len(),
        "built torrent record"
    );

    if let Err(err) = notifier.notify(previous, &record) {
        tracing::warn!(
            hash = record.hash().unwrap_or_default(),
            error = %err,
            "unable to notify about torrent record"
        );
    }

    record
}
