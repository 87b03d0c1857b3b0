use crate::snapshot::RawSnapshot;

/// Trimmed date as reported by the client, `""` when unknown.
///
/// The client reports `"0"` for dates it never recorded.
pub fn derive(snapshot: &RawSnapshot, field: &str) -> String {
    match snapshot.text(field).trim() {
        "0" => String::new(),
        trimmed => trimmed.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(raw: &str) -> String {
        derive(&RawSnapshot::default().with("added", raw), "added")
    }

    #[test]
    fn should_blank_unknown_dates() {
        assert_eq!(date("0"), "");
        assert_eq!(date("  0  "), "");
        assert_eq!(date(""), "");
        assert_eq!(date("   "), "");
        assert_eq!(derive(&RawSnapshot::default(), "creationDate"), "");
    }

    #[test]
    fn should_trim_dates() {
        assert_eq!(date("2020-01-01"), "2020-01-01");
        assert_eq!(date(" 1591173906\n"), "1591173906");
    }
}
