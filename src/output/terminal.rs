// Colored terminal output for topic cards, theme lists and counts.
//
// main.rs delegates all human-readable printing here; the --json path
// bypasses this module entirely.

use colored::Colorize;

use crate::catalog::TopicRecord;
use crate::selector::Selection;

/// Longest constraint text shown on a card before clipping.
const MAX_CONSTRAINT_CHARS: usize = 80;

/// Display a drawn topic as a card, followed by the reset notice if any.
pub fn display_selection(selection: &Selection) {
    if let Some(notice) = &selection.reset_notice {
        println!("{}", notice.yellow().bold());
    }
    display_topic_card(&selection.record);
}

/// Display a single topic record.
pub fn display_topic_card(record: &TopicRecord) {
    println!("\n  {}  {}", record.emoji, record.topic.bold());
    println!(
        "     {} {}  {} {}",
        "Category:".dimmed(),
        record.category,
        "Difficulty:".dimmed(),
        colorize_difficulty(&record.difficulty),
    );
    println!(
        "     {} {}",
        "Constraint:".dimmed(),
        super::truncate_chars(&record.constraint, MAX_CONSTRAINT_CHARS).italic()
    );
    println!("     {} {}", "Theme:".dimmed(), record.theme);
    println!();
}

/// Display the theme list with per-theme topic counts.
///
/// `general_count` is shown first as the default pool players get when they
/// don't pick a theme.
pub fn display_themes(themes: &[(String, usize)], general_count: usize) {
    println!(
        "\n{}",
        format!("=== Themes ({} available) ===", themes.len()).bold()
    );
    println!();
    println!(
        "  {:<24} {:>4}",
        "(none) General".dimmed(),
        general_count
    );

    if themes.is_empty() {
        println!("  No themed topics in this catalog.");
        return;
    }

    for (theme, count) in themes {
        println!("  {:<24} {:>4}", theme, count);
    }
    println!();
}

/// Display the topic count for a theme lookup.
pub fn display_count(input: &str, resolved: &str, count: usize) {
    if input.trim().is_empty() {
        println!("General topics: {}", count.to_string().bold());
    } else {
        println!(
            "{} → {}: {} topics",
            input.trim(),
            resolved.bold(),
            count.to_string().bold()
        );
    }
}

/// Colorize a difficulty label. Unknown labels are printed as-is.
fn colorize_difficulty(difficulty: &str) -> colored::ColoredString {
    match difficulty {
        "Easy" => difficulty.green(),
        "Medium" => difficulty.yellow(),
        "Hard" => difficulty.red().bold(),
        _ => difficulty.normal(),
    }
}
