use jiff::Timestamp;
use jiff::fmt::strtime;
use jiff::tz::Offset;
use log::trace;

/// Seconds are optional, fractional seconds are optional when seconds are present.
const TIMESTAMP_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f%:z", "%Y-%m-%dT%H:%M%:z"];

/// `YYYY-MM-DDTHH:MM` with every field zero padded.
fn has_fixed_width_date_time(value: &[u8]) -> bool {
    const DIGITS: [usize; 12] = [0, 1, 2, 3, 5, 6, 8, 9, 11, 12, 14, 15];
    value.len() >= 16
        && DIGITS.iter().all(|&i| value[i].is_ascii_digit())
        && value[4] == b'-'
        && value[7] == b'-'
        && value[10] == b'T'
        && value[13] == b':'
}

/// `+HH:MM` or `-HH:MM`.
fn has_offset_suffix(value: &[u8]) -> bool {
    match value.len().checked_sub(6).map(|start| &value[start..]) {
        Some([sign, h1, h2, b':', m1, m2]) => {
            (*sign == b'+' || *sign == b'-')
                && [h1, h2, m1, m2].iter().all(|d| d.is_ascii_digit())
        }
        _ => false,
    }
}

/// Parses an RFC 3339 date-time carrying an explicit offset or `Z`, e.g.
/// `2020-12-31T23:59:59Z` or `2021-01-03T12:15:30.25+02:00`.
///
/// Malformed values are not an error for callers, they simply yield `None`.
pub fn parse_timestamp(value: Option<&str>) -> Option<Timestamp> {
    let value = value?.trim();
    if value.is_empty() {
        return None;
    }

    let with_offset = match value.strip_suffix('Z') {
        Some(local) => format!("{}+00:00", local),
        None => value.to_owned(),
    };

    if !has_fixed_width_date_time(with_offset.as_bytes())
        || !has_offset_suffix(with_offset.as_bytes())
    {
        trace!("ignoring timestamp `{}` with unexpected layout", value);
        return None;
    }

    let parsed = TIMESTAMP_FORMATS.iter().find_map(|format| {
        strtime::parse(format, &with_offset)
            .and_then(|tm| tm.to_timestamp())
            .ok()
    });
    if parsed.is_none() {
        trace!("ignoring unparseable timestamp `{}`", value);
    }
    parsed
}

/// Renders `ts` in UTC with a `Z` designator, printing fractional seconds in groups of three
/// digits and only when they are non-zero (`.100Z`, `.000250Z`).
pub fn format_timestamp(ts: Timestamp) -> String {
    let dt = Offset::UTC.to_datetime(ts);
    let nanos = dt.subsec_nanosecond();

    let fraction = if nanos == 0 {
        String::new()
    } else if nanos % 1_000_000 == 0 {
        format!(".{:03}", nanos / 1_000_000)
    } else if nanos % 1_000 == 0 {
        format!(".{:06}", nanos / 1_000)
    } else {
        format!(".{:09}", nanos)
    };

    format!("{}{}Z", dt.strftime("%Y-%m-%dT%H:%M:%S"), fraction)
}
