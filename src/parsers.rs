//! Field parsers for free-form listing text
//!
//! Each parser maps a raw cell to a typed value or `None`. Unparseable
//! input is never an error; it simply contributes nothing downstream.
//! Only ASCII digits `0-9` count as digits; other Unicode decimal digits
//! (full-width `１２３`, Arabic-Indic, ...) are treated like any other
//! non-digit character.

use crate::constants::duration_markers;
use chrono::{NaiveTime, Timelike};
use regex::Regex;
use std::sync::LazyLock;

static DIGIT_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("digit-run pattern is valid"));

/// Departure time of day and its hour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Departure {
    pub time: NaiveTime,
    pub hour: u32,
}

/// Parse a price by concatenating every ASCII digit in the text
///
/// Currency symbols, separators and letters are dropped, so `"1.234"` and
/// `"1234"` both give 1234. Returns `None` when there are no digits or the
/// digits overflow an `i64`.
pub fn parse_price(text: &str) -> Option<i64> {
    let digits: String = text.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse::<i64>().ok()
}

/// Parse an `HH:MM` prefix (after trimming) as a 24-hour time of day
///
/// The prefix must be exactly two digits, a colon and two digits; anything
/// after the fifth character is ignored.
pub fn parse_time(text: &str) -> Option<NaiveTime> {
    let prefix: Vec<char> = text.trim().chars().take(5).collect();
    if prefix.len() != 5 || prefix[2] != ':' {
        return None;
    }

    let hour = two_digits(prefix[0], prefix[1])?;
    let minute = two_digits(prefix[3], prefix[4])?;
    NaiveTime::from_hms_opt(hour, minute, 0)
}

/// Parse a departure time together with its hour of day
pub fn parse_departure(text: &str) -> Option<Departure> {
    parse_time(text).map(|time| Departure {
        time,
        hour: time.hour(),
    })
}

fn two_digits(tens: char, ones: char) -> Option<u32> {
    Some(tens.to_digit(10)? * 10 + ones.to_digit(10)?)
}

/// Parse a free-form duration into minutes
///
/// `"H:MM"` is read as hours and minutes (extra colon parts ignored). If
/// that fails, or there is no colon, digit runs are extracted after
/// normalizing hour/minute markers: one number is taken as hours, two or
/// more as hours then minutes. A bare `"90"` is therefore 90 hours.
pub fn parse_duration(text: &str) -> Option<i64> {
    if text.contains(':') {
        if let Some(minutes) = parse_clock_duration(text) {
            return Some(minutes);
        }
    }

    let normalized: String = text
        .replace(duration_markers::HOURS, "h")
        .replace(duration_markers::MINUTES, "m")
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '.')
        .collect();

    let numbers = DIGIT_RUN
        .find_iter(&normalized)
        .map(|m| m.as_str().parse::<i64>().ok())
        .collect::<Option<Vec<_>>>()?;

    match numbers.as_slice() {
        [] => None,
        [hours] => hours.checked_mul(60),
        [hours, minutes, ..] => hours.checked_mul(60)?.checked_add(*minutes),
    }
}

fn parse_clock_duration(text: &str) -> Option<i64> {
    let mut parts = text.split(':');
    let hours = parts.next()?.trim().parse::<i64>().ok()?;
    let minutes = parts.next()?.trim().parse::<i64>().ok()?;
    hours.checked_mul(60)?.checked_add(minutes)
}
