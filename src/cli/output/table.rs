//! Table output formatting for CLI commands
//!
//! Renders desk slots with comfy-table. Honors `NO_COLOR` and dumb terminals.

use crate::domain::models::DeskSlot;
use comfy_table::{presets, Attribute, Cell, Color, ContentArrangement, Table};
use std::env;

/// Table formatter for CLI output
pub struct TableFormatter {
    /// Whether to use colors in output
    use_colors: bool,
}

impl TableFormatter {
    /// Create a new table formatter
    pub fn new() -> Self {
        Self {
            use_colors: supports_color(),
        }
    }

    /// Format desk slots as a table, one row per account
    pub fn format_desks(&self, slots: &[DeskSlot]) -> String {
        let mut table = Self::create_base_table();

        table.set_header(vec![
            Cell::new("Location").add_attribute(Attribute::Bold),
            Cell::new("Account").add_attribute(Attribute::Bold),
            Cell::new("Name").add_attribute(Attribute::Bold),
        ]);

        for slot in slots {
            let location = slot.location_label();
            let location_cell = if self.use_colors && slot.desk.is_some() {
                Cell::new(&location).fg(Color::Cyan)
            } else {
                Cell::new(&location)
            };

            table.add_row(vec![
                location_cell,
                Cell::new(format!("@{}", slot.screen_name)),
                Cell::new(truncate_text(&slot.display_name, 40)),
            ]);
        }

        table.to_string()
    }

    fn create_base_table() -> Table {
        let mut table = Table::new();

        table
            .load_preset(presets::UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic);

        table
    }
}

impl Default for TableFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Check if color output is supported
fn supports_color() -> bool {
    if env::var("NO_COLOR").is_ok() {
        return false;
    }

    if let Ok(term) = env::var("TERM") {
        if term == "dumb" {
            return false;
        }
    }

    true
}

/// Truncate on a character boundary, appending "..." if truncated
fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot() -> DeskSlot {
        DeskSlot {
            day: Some(1),
            weekday: Some("土".to_string()),
            hall: Some("西".to_string()),
            hall_number: Some(2),
            block: Some("あ".to_string()),
            desk: Some("12a".to_string()),
            ..DeskSlot::unplaced("alice", "Alice")
        }
    }

    fn plain() -> TableFormatter {
        TableFormatter { use_colors: false }
    }

    #[test]
    fn test_no_color_disables_colors() {
        temp_env::with_var("NO_COLOR", Some("1"), || {
            assert!(!TableFormatter::new().use_colors);
        });
        temp_env::with_vars([("NO_COLOR", None), ("TERM", Some("dumb"))], || {
            assert!(!TableFormatter::new().use_colors);
        });
    }

    #[test]
    fn test_format_desks() {
        let formatter = plain();
        let output = formatter.format_desks(&[slot(), DeskSlot::unplaced("bob", "Bob C99")]);

        assert!(output.contains("Location"));
        assert!(output.contains("1日目 土 西2 あ-12a"));
        assert!(output.contains("@alice"));
        assert!(output.contains("@bob"));
    }

    #[test]
    fn test_format_empty() {
        let formatter = plain();
        let output = formatter.format_desks(&[]);
        assert!(output.contains("Account"));
    }

    #[test]
    fn test_truncate_text_is_char_safe() {
        assert_eq!(truncate_text("short", 10), "short");
        assert_eq!(truncate_text("あいうえおかきくけこ", 6), "あいう...");
    }
}
