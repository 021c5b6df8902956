use serde::{Deserialize, Serialize};

/// Attendance slot decoded from a display name.
///
/// Every slot field is optional: a participant matched only by the
/// convention name carries no location at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeskSlot {
    /// Account handle
    pub screen_name: String,
    /// Display name as shown by the provider
    pub display_name: String,
    /// Convention day (1-4)
    pub day: Option<u8>,
    /// Day-of-week marker, e.g. "土"
    pub weekday: Option<String>,
    /// Hall name, e.g. "西"
    pub hall: Option<String>,
    /// Hall number within the hall
    pub hall_number: Option<u8>,
    /// Block letter or kana
    pub block: Option<String>,
    /// Desk number with optional a/b/ab suffix, e.g. "12a"
    pub desk: Option<String>,
}

impl DeskSlot {
    /// Slot carrying only the account identity.
    pub fn unplaced(screen_name: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            screen_name: screen_name.into(),
            display_name: display_name.into(),
            day: None,
            weekday: None,
            hall: None,
            hall_number: None,
            block: None,
            desk: None,
        }
    }

    /// Compact location label, e.g. "1日目 土 西2 あ-12a".
    pub fn location_label(&self) -> String {
        let mut parts = Vec::new();
        if let Some(day) = self.day {
            parts.push(format!("{day}日目"));
        }
        if let Some(weekday) = &self.weekday {
            parts.push(weekday.clone());
        }
        if let Some(hall) = &self.hall {
            let number = self.hall_number.map(|n| n.to_string()).unwrap_or_default();
            parts.push(format!("{hall}{number}"));
        }
        match (&self.block, &self.desk) {
            (Some(block), Some(desk)) => parts.push(format!("{block}-{desk}")),
            (Some(block), None) => parts.push(block.clone()),
            (None, Some(desk)) => parts.push(desk.clone()),
            (None, None) => {}
        }
        if parts.is_empty() {
            "-".to_string()
        } else {
            parts.join(" ")
        }
    }
}
