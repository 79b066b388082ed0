/// 時刻種別（絶対時刻・相対時間）
///
/// どちらも秒とナノ秒の組で格納する。絶対時刻のリテラルは常にローカル時刻として解釈し、
/// 夏時間の判定は chrono のローカルタイムゾーン変換に任せる。

use std::cmp::Ordering;

use chrono::format::{parse_and_remainder, Parsed, StrftimeItems};
use chrono::{Days, Duration, Local, LocalResult, NaiveDate, NaiveDateTime, TimeZone, Utc};

use crate::ftypes_common_rs::ftypes::core::exceptions::FvalueParseError;
use crate::ftypes_common_rs::ftypes::core::field_value::Storage;
use crate::ftypes_common_rs::ftypes::core::kind::{FieldDisplay, FieldKind, ReprKind};
use crate::ftypes_common_rs::ftypes::core::nstime::NsTime;

const NOT_REPRESENTABLE: &str = "Not representable";

pub fn time_zero() -> Storage {
    Storage::Time(NsTime::default())
}

/// 小数部の数字列をナノ秒に変換する
///
/// N 桁なら最後の桁が 10^(9-N) ナノ秒に当たる。ナノ秒未満に非ゼロの桁があれば失敗。
fn get_nsecs(digits: &str) -> Option<i32> {
    let mut scale = 9 - digits.len() as i64;
    let mut value: i32 = 0;
    for c in digits.bytes().rev() {
        if !c.is_ascii_digit() {
            return None;
        }
        let digit = i32::from(c - b'0');
        if digit != 0 {
            if scale < 0 {
                return None;
            }
            value += digit * 10i32.pow(scale as u32);
        }
        scale += 1;
    }
    Some(value)
}

/// `[-][secs][.frac]`。秒の前の空白と `+` は許す
fn parse_relative(s: &str) -> Option<NsTime> {
    let (negative, rest) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s),
    };
    let rest = rest.trim_start();
    let rest = rest.strip_prefix('+').unwrap_or(rest);

    let (secs, fraction) = match rest.strip_prefix('.') {
        Some(fraction) => (0i64, fraction),
        None => {
            let digits_end = rest
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(rest.len());
            if digits_end == 0 {
                return None;
            }
            let secs: i64 = rest[..digits_end].parse().ok()?;
            let tail = &rest[digits_end..];
            let fraction = if tail.is_empty() { tail } else { tail.strip_prefix('.')? };
            (secs, fraction)
        }
    };

    let nsecs = if fraction.is_empty() { 0 } else { get_nsecs(fraction)? };

    if negative {
        Some(NsTime::new(-secs, -nsecs))
    } else {
        Some(NsTime::new(secs, nsecs))
    }
}

pub fn relative_from_literal(s: &str) -> Result<Storage, FvalueParseError> {
    parse_relative(s)
        .map(Storage::Time)
        .ok_or_else(|| FvalueParseError::InvalidRelativeTime(s.to_string()))
}

/// 解析した暦フィールド（月は 1 始まり）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct CalendarFields {
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
}

/// chrono の書式で先頭から読み、暦フィールドと消費しなかった残りを返す
///
/// 書式にない時・分・秒は 0。符号付きの年は受け付けない。
fn scan_layout<'a>(input: &'a str, layout: &str) -> Option<(CalendarFields, &'a str)> {
    let mut parsed = Parsed::new();
    let rest = parse_and_remainder(&mut parsed, input, StrftimeItems::new(layout)).ok()?;
    let hour = match (parsed.hour_div_12(), parsed.hour_mod_12()) {
        (Some(div), Some(rem)) => div * 12 + rem,
        _ => 0,
    };
    let fields = CalendarFields {
        year: parsed.year().filter(|year| *year >= 0)?,
        month: parsed.month()?,
        day: parsed.day()?,
        hour,
        minute: parsed.minute().unwrap_or(0),
        second: parsed.second().unwrap_or(0),
    };
    Some((fields, rest))
}

/// mktime と同様に日・時・分・秒のはみ出しを正規化してローカル時刻の UNIX 秒にする
fn local_epoch_seconds(fields: &CalendarFields) -> Option<i64> {
    let first = NaiveDate::from_ymd_opt(fields.year, fields.month, 1)?;
    let date = first.checked_add_days(Days::new(u64::from(fields.day.saturating_sub(1))))?;
    let midnight: NaiveDateTime = date.and_hms_opt(0, 0, 0)?;
    let offset = i64::from(fields.hour) * 3600
        + i64::from(fields.minute) * 60
        + i64::from(fields.second);
    let naive = midnight.checked_add_signed(Duration::seconds(offset))?;
    match Local.from_local_datetime(&naive) {
        LocalResult::Single(dt) => Some(dt.timestamp()),
        LocalResult::Ambiguous(earliest, _) => Some(earliest.timestamp()),
        LocalResult::None => None,
    }
}

const MONTH_NAME_LAYOUT: &str = "%b %d, %Y %H:%M:%S";

const ABSOLUTE_LAYOUTS: [(&str, bool); 5] = [
    ("%Y-%m-%dT%H:%M:%S", true),
    ("%Y-%m-%d %H:%M:%S", true),
    ("%Y-%m-%d %H:%M", false),
    ("%Y-%m-%d %H", false),
    ("%Y-%m-%d", false),
];

fn parse_absolute(s: &str) -> Option<NsTime> {
    // 年以外に符号の入る書式はない
    if s.len() < "2000-1-1".len() || s.contains('+') {
        return None;
    }

    let mut matched: Option<(CalendarFields, &str, bool)> = None;

    if s.as_bytes()[3] == b' ' {
        matched = scan_layout(s, MONTH_NAME_LAYOUT).map(|(fields, rest)| (fields, rest, true));
    }

    if matched.is_none() {
        matched = ABSOLUTE_LAYOUTS.iter().find_map(|(layout, has_seconds)| {
            scan_layout(s, layout).map(|(fields, rest)| (fields, rest, *has_seconds))
        });
    }

    let (fields, rest, has_seconds) = matched?;
    let secs = local_epoch_seconds(&fields)?;

    let nsecs = if rest.is_empty() {
        0
    } else {
        let fraction = rest.strip_prefix('.')?;
        if !has_seconds || !fraction.starts_with(|c: char| c.is_ascii_digit()) {
            return None;
        }
        get_nsecs(fraction)?
    };

    Some(NsTime::new(secs, nsecs))
}

/// ローカル時刻として解釈する（タイムゾーン表記は受け付けない）
pub fn absolute_from_literal(s: &str) -> Result<Storage, FvalueParseError> {
    parse_absolute(s)
        .map(Storage::Time)
        .ok_or_else(|| FvalueParseError::InvalidAbsoluteTime(s.to_string()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AbsoluteMode {
    Local,
    Utc,
    DoyUtc,
}

impl From<FieldDisplay> for AbsoluteMode {
    fn from(display: FieldDisplay) -> Self {
        match display {
            FieldDisplay::AbsoluteUtc => AbsoluteMode::Utc,
            FieldDisplay::AbsoluteDoyUtc => AbsoluteMode::DoyUtc,
            _ => AbsoluteMode::Local,
        }
    }
}

fn abs_time_to_str(time: NsTime, mode: AbsoluteMode, show_zone: bool) -> String {
    let time = time.normalized();
    let rendered = match mode {
        AbsoluteMode::Local => Local.timestamp_opt(time.secs, 0).earliest().map(|dt| {
            let mut out = format!("{}.{:09}", dt.format("%b %e, %Y %H:%M:%S"), time.nsecs);
            if show_zone {
                out.push_str(&format!(" {}", dt.format("%Z")));
            }
            out
        }),
        AbsoluteMode::Utc | AbsoluteMode::DoyUtc => {
            Utc.timestamp_opt(time.secs, 0).single().map(|dt| {
                let layout = if mode == AbsoluteMode::Utc {
                    "%b %e, %Y %H:%M:%S"
                } else {
                    "%Y/%j %H:%M:%S"
                };
                let mut out = format!("{}.{:09}", dt.format(layout), time.nsecs);
                if show_zone {
                    out.push_str(" UTC");
                }
                out
            })
        }
    };
    rendered.unwrap_or_else(|| NOT_REPRESENTABLE.to_string())
}

pub fn absolute_format(
    _kind: FieldKind,
    storage: &Storage,
    rtype: ReprKind,
    display: FieldDisplay,
) -> Option<String> {
    let time = storage.time();
    match rtype {
        ReprKind::Display => Some(abs_time_to_str(time, AbsoluteMode::from(display), true)),
        // リテラルとして読み戻せるのはゾーンなしのローカル時刻だけ
        ReprKind::DFilter => Some(format!(
            "\"{}\"",
            abs_time_to_str(time, AbsoluteMode::Local, false)
        )),
    }
}

/// 符号付きの「秒.ナノ秒」表記
pub fn rel_time_to_secs_str(time: NsTime) -> String {
    let sign = if time.is_negative() { "-" } else { "" };
    format!(
        "{}{}.{:09}",
        sign,
        time.secs.unsigned_abs(),
        time.nsecs.unsigned_abs()
    )
}

pub fn relative_format(
    _kind: FieldKind,
    storage: &Storage,
    _rtype: ReprKind,
    _display: FieldDisplay,
) -> Option<String> {
    Some(rel_time_to_secs_str(storage.time()))
}

/// 固定幅でないので一度出力して測る
pub fn time_repr_len(
    kind: FieldKind,
    storage: &Storage,
    rtype: ReprKind,
    display: FieldDisplay,
) -> Option<usize> {
    let text = match kind {
        FieldKind::AbsoluteTime => absolute_format(kind, storage, rtype, display),
        _ => relative_format(kind, storage, rtype, display),
    };
    text.map(|s| s.len())
}

pub fn time_compare(a: &Storage, b: &Storage) -> Ordering {
    a.time().cmp(&b.time())
}
