use std::sync::LazyLock;

use regex::Regex;

use crate::DELIMITER;
use crate::snapshot::RawSnapshot;

/// Captures the hostname of a tracker URL, with or without a scheme or
/// credentials.
static HOSTNAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*(?:[a-z][a-z0-9+.-]*://)?(?:[^@/\s]*@)?([a-z0-9-]+(?:\.[a-z0-9-]+)+)")
        .expect("hostname pattern is valid")
});

/// Labels kept when the hostname gives no better hint.
const DESIRED_SUBSETS: usize = 2;

/// Second level labels this short are assumed to be part of the public
/// suffix (`co.uk`, `com.au`).
const MIN_SUBSET_LENGTH: usize = 3;

/// Registrable domain of each tracker, in tracker order.
///
/// Entries without a recognizable hostname are skipped. This is a heuristic
/// and not a public suffix list lookup: `tracker.example.co.uk` gives
/// `example.co.uk` but `a.b.xyz.com` gives `b.xyz.com`.
pub fn derive(snapshot: &RawSnapshot) -> Vec<String> {
    snapshot
        .text("trackers")
        .split(DELIMITER)
        .filter_map(registrable_domain)
        .collect()
}

/// Extracts the registrable domain of a single tracker URL.
pub fn registrable_domain(tracker: &str) -> Option<String> {
    let Some(hostname) = HOSTNAME.captures(tracker).and_then(|caps| caps.get(1)) else {
        if !tracker.is_empty() {
            tracing::trace!(tracker, "no hostname found in tracker");
        }
        return None;
    };

    let labels: Vec<&str> = hostname.as_str().split('.').collect();
    let mut desired = DESIRED_SUBSETS;
    if labels.len() > desired && labels[labels.len() - desired].len() <= MIN_SUBSET_LENGTH {
        desired += 1;
    }

    Some(labels[labels.len().saturating_sub(desired)..].join("."))
}
