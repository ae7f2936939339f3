/// Contact-line detection.
///
/// Contact instructions are never trusted to free-form document text: when a
/// line contains one of the caller's markers (a contact-page path fragment or
/// a localized cue phrase), the whole line is replaced by a templated contact
/// block downstream. Matching is case-insensitive substring containment.
pub fn is_contact_line(line: &str, contact_markers: &[String]) -> bool {
    if contact_markers.is_empty() {
        return false;
    }
    let lowered = line.to_lowercase();
    contact_markers
        .iter()
        .filter(|marker| !marker.is_empty())
        .any(|marker| lowered.contains(&marker.to_lowercase()))
}
