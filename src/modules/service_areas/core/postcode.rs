/// Upper-cases a free-text postcode and collapses its whitespace to single spaces.
pub fn normalize_postcode(raw: &str) -> String {
    raw.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_ascii_uppercase()
}

/// The postcode area of a UK postcode: its leading letters ("DE" for "DE1 3AH").
pub fn postcode_area(raw: &str) -> Option<String> {
    let postcode = normalize_postcode(raw);
    let area: String = postcode
        .chars()
        .take_while(|c| c.is_ascii_alphabetic())
        .collect();
    let followed_by_digit = postcode[area.len()..]
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_digit());

    (matches!(area.len(), 1 | 2) && followed_by_digit).then_some(area)
}
