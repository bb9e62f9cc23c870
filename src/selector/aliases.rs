// Theme alias table and typo-tolerant theme matching.
//
// Players type theme names on a phone keyboard, so "animl" or "xmas" need to
// land on the right theme. The table is an ordered list rather than a map:
// the substring pass returns the FIRST entry that matches, so reordering the
// table changes which theme ambiguous input resolves to.
//
// "1980" sits at the top, ahead of the Animals group: the table this mirrors
// was scanned with integer-like keys first, so "1980s movies" resolves to
// 1980s rather than Movies.

use crate::catalog::GENERAL_THEME;

/// Lowercase typo/synonym → canonical theme, in match priority order.
pub const THEME_ALIASES: &[(&str, &str)] = &[
    ("1980", "1980s"),
    // Animals
    ("animal", "Animals"),
    ("animl", "Animals"),
    ("anmal", "Animals"),
    ("anim", "Animals"),
    // Christmas
    ("christmas", "christmas"),
    ("xmas", "christmas"),
    ("christ", "christmas"),
    ("chritsmas", "christmas"),
    // Disney
    ("disney", "disney"),
    ("disny", "disney"),
    ("disnee", "disney"),
    // Space
    ("space", "space"),
    ("spce", "space"),
    ("spac", "space"),
    // Music
    ("music", "Music"),
    ("musie", "Music"),
    ("msic", "Music"),
    ("song", "Music"),
    ("instrument", "Music"),
    // Movies
    ("movie", "Movies"),
    ("film", "Movies"),
    ("movies", "Movies"),
    // Food
    ("food", "food"),
    ("fod", "food"),
    ("foods", "food"),
    // Sports
    ("sport", "sports"),
    ("sports", "sports"),
    ("sprts", "sports"),
    // 1980s
    ("80s", "1980s"),
    ("eighties", "1980s"),
    // Modern
    ("modern", "Modern"),
    ("tech", "Modern"),
    ("technology", "Modern"),
    ("tiktok", "Modern"),
    ("zoom", "Modern"),
    // Fairy Tales
    ("fairy", "Fairy Tales"),
    ("fairytale", "Fairy Tales"),
    ("tale", "Fairy Tales"),
    ("fiary", "Fairy Tales"),
    // Transport
    ("transport", "Transport"),
    ("vehicle", "Transport"),
    ("car", "Transport"),
    ("vehicl", "Transport"),
    // School
    ("school", "School"),
    ("scool", "School"),
    ("schol", "School"),
    ("education", "School"),
    // Chores
    ("chore", "Chores"),
    ("chores", "Chores"),
    ("cleaning", "Chores"),
    ("clean", "Chores"),
    // History
    ("history", "History"),
    ("histoy", "History"),
    ("historic", "History"),
    // TV
    ("tv", "TV"),
    ("television", "TV"),
    ("show", "TV"),
    ("shows", "TV"),
];

/// Resolve raw user input to a canonical theme name.
///
/// Blank input means "no theme" and resolves to General. Otherwise the
/// lowercased input is looked up exactly, then scanned for containment in
/// either direction against each alias key in table order. Input that matches
/// nothing comes back trimmed but otherwise untouched, so a theme name that
/// isn't in the table can still match the catalog literally.
///
/// Short inputs overmatch: "a" is contained in "animal" and resolves to Animals.
pub fn fuzzy_match_theme(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return GENERAL_THEME.to_string();
    }

    let normalized = trimmed.to_lowercase();

    if let Some((_, canonical)) = THEME_ALIASES.iter().find(|(key, _)| *key == normalized) {
        return canonical.to_string();
    }

    THEME_ALIASES
        .iter()
        .find(|(key, _)| key.contains(normalized.as_str()) || normalized.contains(key))
        .map(|(_, canonical)| canonical.to_string())
        .unwrap_or_else(|| trimmed.to_string())
}
