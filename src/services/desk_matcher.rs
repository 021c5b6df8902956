//! Finds followed accounts whose display name carries a convention desk slot,
//! e.g. "サークル名@2日目 西あ-12a".

use std::cmp::Ordering;
use std::collections::BTreeMap;

use regex::Regex;

use crate::domain::models::config::ConventionConfig;
use crate::domain::models::DeskSlot;

const WEEKDAYS: [&str; 7] = ["月", "火", "水", "木", "金", "土", "日"];
const BRACKETS: &[char] = &['(', ')', '（', '）', '【', '】', '「', '」', '『', '』'];
const KANJI_DIGITS: [char; 10] = ['〇', '一', '二', '三', '四', '五', '六', '七', '八', '九'];

/// Map a kanji numeral to its arabic digit.
pub fn kanji_digit_to_arabic(c: char) -> Option<char> {
    KANJI_DIGITS
        .iter()
        .position(|&k| k == c)
        .and_then(|pos| char::from_digit(pos as u32, 10))
}

fn full_width_to_ascii(c: char) -> char {
    match c {
        'Ａ'..='Ｚ' | 'ａ'..='ｚ' | '０'..='９' => {
            char::from_u32(c as u32 - 0xFEE0).unwrap_or(c)
        }
        _ => c,
    }
}

/// Canonical form a slot is matched against.
///
/// Lower-cases, drops whitespace and brackets, turns kanji and full-width
/// digits and letters into ASCII, then removes the first occurrence of the
/// convention name.
pub fn normalize_display_name(name: &str, convention: &str) -> String {
    let normalized: String = name
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace() && !BRACKETS.contains(c))
        .map(|c| kanji_digit_to_arabic(c).unwrap_or(c))
        .map(full_width_to_ascii)
        .collect();

    let convention: String = convention
        .to_lowercase()
        .chars()
        .map(full_width_to_ascii)
        .collect();
    if convention.is_empty() {
        normalized
    } else {
        normalized.replacen(&convention, "", 1)
    }
}

/// Decodes and orders desk slots for one convention.
#[derive(Debug, Clone)]
pub struct DeskMatcher {
    convention: String,
    halls: Vec<String>,
    slot_pattern: Regex,
}

impl DeskMatcher {
    /// Compile the slot pattern for the configured hall names.
    pub fn new(config: &ConventionConfig) -> Result<Self, regex::Error> {
        let halls = config
            .halls
            .iter()
            .map(|hall| regex::escape(hall))
            .collect::<Vec<_>>()
            .join("|");
        let slot_pattern = Regex::new(&format!(
            "([1-4])?(?:日目|日)?([月火水木金土日]?)({halls})([0-9]?)([あ-んア-ンa-z])-?([0-9]{{2}})(ab|a|b)?"
        ))?;

        Ok(Self {
            convention: config.name.clone(),
            halls: config.halls.clone(),
            slot_pattern,
        })
    }

    /// True when the name carries a slot or mentions the convention.
    pub fn is_participating(&self, display_name: &str) -> bool {
        self.slot_pattern
            .is_match(&normalize_display_name(display_name, &self.convention))
            || display_name.contains(&self.convention)
    }

    /// Decode whatever slot information the name carries.
    pub fn parse_slot(&self, screen_name: &str, display_name: &str) -> DeskSlot {
        let normalized = normalize_display_name(display_name, &self.convention);
        let mut slot = DeskSlot::unplaced(screen_name, display_name);

        let Some(caps) = self.slot_pattern.captures(&normalized) else {
            return slot;
        };
        let text = |i: usize| caps.get(i).map(|m| m.as_str()).filter(|s| !s.is_empty());

        slot.day = text(1).and_then(|d| d.parse().ok());
        slot.weekday = text(2).map(str::to_string);
        slot.hall = text(3).map(str::to_string);
        slot.hall_number = text(4).and_then(|n| n.parse().ok());
        slot.block = text(5).map(str::to_string);
        slot.desk = text(6).map(|desk| format!("{desk}{}", text(7).unwrap_or_default()));
        slot
    }

    /// Participants among `connections`, ordered by day, weekday, hall,
    /// hall number, block and desk. Missing values sort last.
    pub fn find_desks(&self, connections: &BTreeMap<String, String>) -> Vec<DeskSlot> {
        let mut slots: Vec<DeskSlot> = connections
            .iter()
            .filter(|(_, display_name)| self.is_participating(display_name))
            .map(|(screen_name, display_name)| self.parse_slot(screen_name, display_name))
            .collect();

        slots.sort_by(|a, b| self.compare(a, b));
        slots
    }

    fn compare(&self, a: &DeskSlot, b: &DeskSlot) -> Ordering {
        let weekday_rank =
            |slot: &DeskSlot| slot.weekday.as_deref().and_then(|w| WEEKDAYS.iter().position(|d| *d == w));
        let hall_rank =
            |slot: &DeskSlot| slot.hall.as_deref().and_then(|h| self.halls.iter().position(|x| x == h));

        none_last(a.day, b.day)
            .then_with(|| none_last(weekday_rank(a), weekday_rank(b)))
            .then_with(|| none_last(hall_rank(a), hall_rank(b)))
            .then_with(|| none_last(a.hall_number, b.hall_number))
            .then_with(|| none_last(a.block.as_ref(), b.block.as_ref()))
            .then_with(|| none_last(a.desk.as_ref(), b.desk.as_ref()))
    }
}

fn none_last<T: Ord>(a: Option<T>, b: Option<T>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
