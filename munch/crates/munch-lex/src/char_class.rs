//! Byte classification for the scanner.
//!
//! Every input byte maps to exactly one [`CharClass`]. The mapping is a dense
//! 256-entry table computed at compile time, so classification is a single
//! indexed load and can never fail.

/// Coarse category of a single input byte.
///
/// The scanner's transition table is written over these classes rather than
/// over raw bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// Byte that cannot appear in any token.
    Invalid,
    /// Space, tab, newline, vertical tab, form feed or carriage return.
    Whitespace,
    /// `(` or `)`.
    Parenthesis,
    /// One of `+ - * / % ^ = < > ! & | ~`.
    Operator,
    /// The digit `0`.
    Zero,
    /// The digits `1` through `9`.
    NonzeroDigit,
    /// The decimal point `.`.
    Dot,
    /// ASCII letters and `_`.
    Word,
}

/// Classification table indexed by byte value.
pub static CHAR_TABLE: [CharClass; 256] = build_table();

const OPERATORS: &[u8] = b"+-*/%^=<>!&|~";

const fn build_table() -> [CharClass; 256] {
    let mut table = [CharClass::Invalid; 256];

    table[b' ' as usize] = CharClass::Whitespace;
    table[b'\t' as usize] = CharClass::Whitespace;
    table[b'\n' as usize] = CharClass::Whitespace;
    table[0x0B] = CharClass::Whitespace;
    table[0x0C] = CharClass::Whitespace;
    table[b'\r' as usize] = CharClass::Whitespace;

    table[b'(' as usize] = CharClass::Parenthesis;
    table[b')' as usize] = CharClass::Parenthesis;

    let mut i = 0;
    while i < OPERATORS.len() {
        table[OPERATORS[i] as usize] = CharClass::Operator;
        i += 1;
    }

    table[b'0' as usize] = CharClass::Zero;
    let mut digit = b'1';
    while digit <= b'9' {
        table[digit as usize] = CharClass::NonzeroDigit;
        digit += 1;
    }

    table[b'.' as usize] = CharClass::Dot;

    let mut letter = b'a';
    while letter <= b'z' {
        table[letter as usize] = CharClass::Word;
        table[(letter - b'a' + b'A') as usize] = CharClass::Word;
        letter += 1;
    }
    table[b'_' as usize] = CharClass::Word;

    table
}

impl CharClass {
    /// Returns the class of `byte`.
    ///
    /// # Example
    ///
    /// ```
    /// use munch_lex::CharClass;
    ///
    /// assert_eq!(CharClass::of(b'7'), CharClass::NonzeroDigit);
    /// assert_eq!(CharClass::of(b'#'), CharClass::Invalid);
    /// ```
    #[inline]
    pub fn of(byte: u8) -> Self {
        CHAR_TABLE[byte as usize]
    }
}

/// Returns the class of `byte`. Shorthand for [`CharClass::of`].
#[inline]
pub fn classify(byte: u8) -> CharClass {
    CharClass::of(byte)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_bytes() {
        for b in [b' ', b'\t', b'\n', 0x0B, 0x0C, b'\r'] {
            assert_eq!(classify(b), CharClass::Whitespace, "byte {:#04x}", b);
        }
    }

    #[test]
    fn test_parentheses() {
        assert_eq!(classify(b'('), CharClass::Parenthesis);
        assert_eq!(classify(b')'), CharClass::Parenthesis);
        assert_eq!(classify(b'['), CharClass::Invalid);
        assert_eq!(classify(b'{'), CharClass::Invalid);
    }

    #[test]
    fn test_operators() {
        for &b in OPERATORS {
            assert_eq!(classify(b), CharClass::Operator, "byte {:?}", b as char);
        }
    }

    #[test]
    fn test_digits() {
        assert_eq!(classify(b'0'), CharClass::Zero);
        for b in b'1'..=b'9' {
            assert_eq!(classify(b), CharClass::NonzeroDigit);
        }
    }

    #[test]
    fn test_word_characters() {
        assert_eq!(classify(b'a'), CharClass::Word);
        assert_eq!(classify(b'Z'), CharClass::Word);
        assert_eq!(classify(b'_'), CharClass::Word);
        assert_eq!(classify(b'.'), CharClass::Dot);
    }

    #[test]
    fn test_total_over_all_bytes() {
        let mut counts = std::collections::HashMap::new();
        for b in 0..=u8::MAX {
            *counts.entry(classify(b)).or_insert(0usize) += 1;
        }
        assert_eq!(counts.values().sum::<usize>(), 256);
        assert_eq!(counts[&CharClass::Whitespace], 6);
        assert_eq!(counts[&CharClass::Parenthesis], 2);
        assert_eq!(counts[&CharClass::Operator], OPERATORS.len());
        assert_eq!(counts[&CharClass::Zero], 1);
        assert_eq!(counts[&CharClass::NonzeroDigit], 9);
        assert_eq!(counts[&CharClass::Dot], 1);
        assert_eq!(counts[&CharClass::Word], 53);
    }

    #[test]
    fn test_non_ascii_is_invalid() {
        assert_eq!(classify(0x00), CharClass::Invalid);
        assert_eq!(classify(0x7F), CharClass::Invalid);
        for b in 0x80..=u8::MAX {
            assert_eq!(classify(b), CharClass::Invalid);
        }
    }
}
