use chrono::{DateTime, Utc};

/// Derives the storage key for a resume from the owner's name and the save
/// instant: each whitespace run in the name collapses to a single underscore,
/// then `_YYYYMMDD_HHMMSS` (second precision, UTC) is appended.
///
/// Not collision-free: two saves of the same name within the same second
/// produce the same key, and the later save overwrites the earlier one in
/// memory and on disk. The name is not validated; an empty name yields a
/// key starting with an underscore.
pub fn resume_id(name: &str, at: DateTime<Utc>) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut in_whitespace = false;
    for c in name.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                slug.push('_');
            }
            in_whitespace = true;
        } else {
            slug.push(c);
            in_whitespace = false;
        }
    }
    format!("{}_{}", slug, at.format("%Y%m%d_%H%M%S"))
}
