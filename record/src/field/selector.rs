use super::FieldKey;
use crate::options::{Profile, RequestOptions, RequestedData};

/// Resolves the list of fields a record build computes.
///
/// Requested names are used verbatim, including names that match no known
/// field. A `requestedData` option that is not a list of names is reported
/// and replaced by the profile's default fields.
pub fn resolve_fields(options: &RequestOptions, profile: &Profile) -> Vec<FieldKey> {
    match &options.requested_data {
        Some(RequestedData::Fields(names)) => names.iter().cloned().map(FieldKey::from).collect(),
        Some(RequestedData::Malformed(value)) => {
            tracing::warn!(
                requested_data = %value,
                "requested data must be a list of field names, using default fields"
            );
            default_fields(profile)
        }
        None => default_fields(profile),
    }
}

fn default_fields(profile: &Profile) -> Vec<FieldKey> {
    profile.default_fields().map(FieldKey::Known).collect()
}
