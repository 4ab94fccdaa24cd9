//! Helpers for translating between A1-style cell references and 1-based
//! numeric column/row indices.

/// Converts a 1-based column number into its spreadsheet letter form
/// (1 → "A", 26 → "Z", 27 → "AA").
pub fn column_letters(column: u32) -> String {
    let mut column = column;
    let mut letters = Vec::new();
    while column > 0 {
        let remainder = ((column - 1) % 26) as u8;
        letters.push(b'A' + remainder);
        column = (column - 1) / 26;
    }
    letters.reverse();
    String::from_utf8(letters).unwrap_or_default()
}

/// Formats a 1-based (column, row) pair as an A1-style reference.
pub fn cell_name(column: u32, row: u32) -> String {
    format!("{}{row}", column_letters(column))
}

/// Parses an A1-style reference into a 1-based (column, row) pair. Returns
/// `None` for anything that is not letters followed by a positive row number.
pub fn parse_cell(reference: &str) -> Option<(u32, u32)> {
    let digits_at = reference.find(|c: char| c.is_ascii_digit())?;
    let (letters, digits) = reference.split_at(digits_at);
    if letters.is_empty() || digits.is_empty() {
        return None;
    }

    let mut column: u32 = 0;
    for letter in letters.chars() {
        if !letter.is_ascii_alphabetic() {
            return None;
        }
        let ordinal = letter.to_ascii_uppercase() as u32 - 'A' as u32 + 1;
        column = column.checked_mul(26)?.checked_add(ordinal)?;
    }

    let row: u32 = digits.parse().ok()?;
    if row == 0 {
        return None;
    }
    Some((column, row))
}

/// Parses a merge range such as "A1:C3" into its start and end cells. A bare
/// single-cell reference is treated as a one-cell range.
pub fn parse_range(range: &str) -> Option<((u32, u32), (u32, u32))> {
    match range.split_once(':') {
        Some((start, end)) => Some((parse_cell(start)?, parse_cell(end)?)),
        None => {
            let cell = parse_cell(range)?;
            Some((cell, cell))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_letters_cover_multi_letter_columns() {
        assert_eq!(column_letters(1), "A");
        assert_eq!(column_letters(26), "Z");
        assert_eq!(column_letters(27), "AA");
        assert_eq!(column_letters(702), "ZZ");
        assert_eq!(column_letters(703), "AAA");
    }

    #[test]
    fn cell_references_round_trip() {
        for (column, row) in [(1, 1), (2, 7), (26, 100), (27, 3), (703, 1048576)] {
            let name = cell_name(column, row);
            assert_eq!(parse_cell(&name), Some((column, row)));
        }
    }

    #[test]
    fn invalid_references_are_rejected() {
        assert_eq!(parse_cell(""), None);
        assert_eq!(parse_cell("B"), None);
        assert_eq!(parse_cell("7"), None);
        assert_eq!(parse_cell("B0"), None);
        assert_eq!(parse_cell("not-a-coord"), None);
    }

    #[test]
    fn ranges_parse_with_single_cell_fallback() {
        assert_eq!(parse_range("A1:C3"), Some(((1, 1), (3, 3))));
        assert_eq!(parse_range("B7"), Some(((2, 7), (2, 7))));
        assert_eq!(parse_range("A1:"), None);
    }
}
