use crate::snapshot::RawSnapshot;

/// Share of the torrent already downloaded, between 0 and 100.
///
/// Values strictly between 0 and 10 are rounded to two decimals, values
/// strictly between 10 and 100 to one decimal. Anything else, including
/// exactly 10, 100 and `NaN`, is returned unrounded.
pub fn derive(snapshot: &RawSnapshot) -> f64 {
    let percent = snapshot.number("bytesDone") / snapshot.number("sizeBytes") * 100.0;

    if percent > 0.0 && percent < 10.0 {
        round(percent, 2)
    } else if percent > 10.0 && percent < 100.0 {
        round(percent, 1)
    } else {
        percent
    }
}

fn round(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
