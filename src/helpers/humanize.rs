use chrono::{DateTime, Utc};

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;
const WEEK: i64 = 7 * DAY;
const MONTH: i64 = 30 * DAY;
const YEAR: i64 = 365 * DAY;

const CHUNKS: [(i64, &str); 6] = [
    (YEAR, "year"),
    (MONTH, "month"),
    (WEEK, "week"),
    (DAY, "day"),
    (HOUR, "hour"),
    (MINUTE, "minute"),
];

/// Renders `value` relative to `now`: "now", "a minute ago",
/// "2 days, 3 hours ago", "5 minutes from now".
pub fn natural_time(value: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let delta = now.signed_duration_since(value).num_seconds();
    let (seconds, suffix) = if delta >= 0 {
        (delta, "ago")
    } else {
        (-delta, "from now")
    };

    if seconds == 0 {
        return "now".to_string();
    }

    let phrase = if seconds < MINUTE {
        counted(seconds, "second")
    } else if seconds < HOUR {
        counted(seconds / MINUTE, "minute")
    } else if seconds < DAY {
        counted(seconds / HOUR, "hour")
    } else {
        since(seconds)
    };

    format!("{} {}", phrase, suffix)
}

fn counted(count: i64, unit: &str) -> String {
    match (count, unit) {
        (1, "hour") => "an hour".to_string(),
        (1, unit) => format!("a {}", unit),
        (count, unit) => format!("{} {}s", count, unit),
    }
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {}", unit)
    } else {
        format!("{} {}s", count, unit)
    }
}

// largest non-zero unit, followed by the adjacent one when it is non-zero
fn since(seconds: i64) -> String {
    let Some(index) = CHUNKS.iter().position(|(size, _)| seconds >= *size) else {
        return plural(0, "minute");
    };

    let (size, unit) = CHUNKS[index];
    let count = seconds / size;
    let mut out = plural(count, unit);

    if let Some((next_size, next_unit)) = CHUNKS.get(index + 1) {
        let rest = (seconds - count * size) / next_size;
        if rest > 0 {
            out.push_str(", ");
            out.push_str(&plural(rest, next_unit));
        }
    }

    out
}
