use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::field::Field;

/// Options accompanying a record build.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestOptions {
    /// Timestamp stamped on the record, wall-clock time when absent.
    #[serde(default)]
    pub current_time: Option<DateTime<Utc>>,

    /// Fields to compute, the profile's default fields when absent.
    #[serde(default)]
    pub requested_data: Option<RequestedData>,
}

impl RequestOptions {
    /// Parse the options from a JSON document.
    ///
    /// A `requestedData` value that is not a list of strings is accepted
    /// here and reported when the fields are resolved.
    pub fn from_json(data: &str) -> Result<Self> {
        Ok(serde_json::from_str(data)?)
    }

    #[must_use]
    pub fn with_current_time(mut self, value: DateTime<Utc>) -> Self {
        self.current_time = Some(value);
        self
    }

    #[must_use]
    pub fn with_requested_data<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.requested_data = Some(RequestedData::Fields(
            fields.into_iter().map(Into::into).collect(),
        ));
        self
    }
}

/// The `requestedData` option as provided by the caller.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(untagged)]
pub enum RequestedData {
    /// A list of field names, used verbatim.
    Fields(Vec<String>),

    /// Anything else, which makes the selector fall back to the defaults.
    Malformed(serde_json::Value),
}

/// Deployment profile applied to the default field list.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Fields removed from the defaults. Explicitly requested fields are
    /// never filtered.
    #[serde(default)]
    pub excluded_fields: Vec<Field>,
}

impl Profile {
    pub fn from_json(data: &str) -> Result<Self> {
        Ok(serde_json::from_str(data)?)
    }

    #[must_use]
    pub fn excluding(fields: impl IntoIterator<Item = Field>) -> Self {
        Self {
            excluded_fields: fields.into_iter().collect(),
        }
    }

    /// The default fields of this profile, in canonical order.
    pub fn default_fields(&self) -> impl Iterator<Item = Field> + '_ {
        Field::ALL
            .into_iter()
            .filter(|field| !self.excluded_fields.contains(field))
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn should_parse_options() {
        let options = RequestOptions::from_json(
            r#"{"currentTime":"2024-05-01T10:00:00Z","requestedData":["hash","status"]}"#,
        )
        .unwrap();
        assert_eq!(
            options.current_time,
            Some(Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap())
        );
        assert_eq!(
            options.requested_data,
            Some(RequestedData::Fields(vec!["hash".into(), "status".into()]))
        );
    }

    #[test]
    fn should_accept_malformed_requested_data() {
        let options = RequestOptions::from_json(r#"{"requestedData":"hash"}"#).unwrap();
        assert_eq!(
            options.requested_data,
            Some(RequestedData::Malformed(serde_json::Value::from("hash")))
        );
        assert_eq!(options.current_time, None);
    }

    #[test]
    fn should_default_when_empty() {
        let options = RequestOptions::from_json("{}").unwrap();
        assert_eq!(options, RequestOptions::default());
    }

    #[test]
    fn should_exclude_profile_fields_from_defaults() {
        let profile = Profile::from_json(r#"{"excludedFields":["freeDiskSpace","comment"]}"#).unwrap();
        let fields: Vec<_> = profile.default_fields().collect();
        assert_eq!(fields.len(), Field::ALL.len() - 2);
        assert!(!fields.contains(&Field::FreeDiskSpace));
        assert!(!fields.contains(&Field::Comment));
        assert_eq!(fields.first(), Some(&Field::Hash));
    }
}
