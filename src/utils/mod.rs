//! Utility functions and helpers.

/// Parse a `chapter:verse` reference like `2:255` (a dot separator is
/// accepted too).
pub fn parse_verse_ref(input: &str) -> Option<(u32, u32)> {
    let pattern = regex::Regex::new(r"^\s*(\d{1,3})\s*[:.]\s*(\d{1,4})\s*$").ok()?;
    let caps = pattern.captures(input)?;
    let chapter = caps.get(1)?.as_str().parse().ok()?;
    let verse = caps.get(2)?.as_str().parse().ok()?;
    Some((chapter, verse))
}
