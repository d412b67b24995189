//! Timestamp text parsing and relative-age formatting.
//!
//! The upload page renders item times in several shapes ("刚刚",
//! "30分钟前", "2024-12-23", "11-01"). This module turns those into
//! absolute instants, and turns instants back into coarse age strings for
//! the listing display.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};
use once_cell::sync::Lazy;
use regex::Regex;

static RELATIVE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+)\s*(分钟|小时|天)前$").unwrap());
static YEAR_MONTH_DAY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{4})[-/](\d{1,2})[-/](\d{1,2})$").unwrap());
static MONTH_DAY: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d{1,2})[-/](\d{1,2})$").unwrap());

/// Parses one rendered timestamp text into an absolute instant.
///
/// Recognized, in priority order: the literal "刚刚" marker, relative
/// "N分钟前" / "N小时前" / "N天前", "YYYY-MM-DD" with `-` or `/`
/// separators, and "MM-DD" with either separator. Anything else returns
/// `None`, leaving room for new formats ("昨天 13:20" etc.) without
/// breaking existing behavior. Out-of-range month/day components are
/// rejected.
///
/// Month-day inputs always assume `now`'s year, even when a December item
/// is parsed in January; the page offers no year to recover from.
pub fn parse_time_text(text: &str, now: NaiveDateTime) -> Option<NaiveDateTime> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if text == "刚刚" {
        return Some(now);
    }

    if let Some(c) = RELATIVE.captures(text) {
        let n: i64 = c[1].parse().ok()?;
        let delta = match &c[2] {
            "分钟" => Duration::try_minutes(n),
            "小时" => Duration::try_hours(n),
            _ => Duration::try_days(n),
        }?;
        return now.checked_sub_signed(delta);
    }

    if let Some(c) = YEAR_MONTH_DAY.captures(text) {
        return midnight(c[1].parse().ok()?, c[2].parse().ok()?, c[3].parse().ok()?);
    }

    if let Some(c) = MONTH_DAY.captures(text) {
        return midnight(now.year(), c[1].parse().ok()?, c[2].parse().ok()?);
    }

    None
}

fn midnight(year: i32, month: u32, day: u32) -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(year, month, day).map(|d| d.and_time(NaiveTime::MIN))
}

/// Formats the distance from `instant` to `now` as a coarse age string
/// matching the listing display ladder (minutes, hours, days, months,
/// years). Future instants clamp to "刚刚".
pub fn format_age(instant: NaiveDateTime, now: NaiveDateTime) -> String {
    let secs = (now - instant).num_seconds().max(0);
    if secs < 60 {
        return "刚刚".to_string();
    }
    let mins = secs / 60;
    if mins < 60 {
        return format!("{} 分钟前", mins);
    }
    let hours = mins / 60;
    if hours < 24 {
        return format!("{} 小时前", hours);
    }
    let days = hours / 24;
    if days < 30 {
        return format!("{} 天前", days);
    }
    let months = days / 30;
    if months < 12 {
        return format!("{} 个月前", months);
    }
    format!("{} 年前", months / 12)
}
