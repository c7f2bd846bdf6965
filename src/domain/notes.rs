//! Notes accumulation rule.

/// Merges a new note fragment into existing notes.
///
/// Rules:
/// - An empty or whitespace-only fragment leaves the notes unchanged.
/// - A fragment already appearing anywhere in the old notes is dropped.
///   The dedup is substring containment, not exact-line matching, so a
///   fragment that happens to occur inside a longer line is skipped too.
/// - Anything else is appended on a new line.
pub fn merge_notes(old_notes: &str, new_note: &str) -> String {
    let fragment = new_note.trim();

    if fragment.is_empty() || old_notes.contains(fragment) {
        return old_notes.to_string();
    }

    if old_notes.is_empty() {
        fragment.to_string()
    } else {
        format!("{}\n{}", old_notes, fragment)
    }
}
