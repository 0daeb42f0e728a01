const ALPHABET_LEN: i64 = 26;

const UPPERCASE: [char; 26] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

const LOWERCASE: [char; 26] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r',
    's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// Shifts every ASCII letter of `text` by `shift` positions within its own
/// case, wrapping around the alphabet. Everything else is copied as is.
///
/// Any `i64` is a valid shift: negative values move left and magnitudes past
/// 26 wrap, so `shift("ABC", 29) == shift("ABC", 3)`.
pub fn shift(text: &str, shift: i64) -> String {
    // reduced first so the addition below cannot overflow
    let offset = shift.rem_euclid(ALPHABET_LEN);

    text.chars().map(|c| shift_char(c, offset)).collect()
}

fn shift_char(c: char, offset: i64) -> char {
    let (table, base) = if c.is_ascii_uppercase() {
        (&UPPERCASE, b'A')
    } else if c.is_ascii_lowercase() {
        (&LOWERCASE, b'a')
    } else {
        return c;
    };

    let index = i64::from(c as u8 - base);
    table[(index + offset).rem_euclid(ALPHABET_LEN) as usize]
}
