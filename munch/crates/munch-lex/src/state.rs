//! Scanner states and the transition function.

use crate::char_class::CharClass;

/// A state of the scanning automaton.
///
/// `Start` is the initial state and `Error` is an absorbing sink. Every other
/// state is accepting: the bytes consumed so far form one complete token of
/// that state's category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum State {
    /// Dead state; no transition leaves it.
    Error,
    /// Initial state, nothing consumed yet.
    Start,
    /// A run of whitespace.
    Whitespaces,
    /// A single operator symbol.
    Operators,
    /// A single parenthesis.
    Parenthesis,
    /// A lone `0`.
    Zero,
    /// An integer that does not start with `0`.
    NonzeroDigits,
    /// Digits, a dot, then zero or more digits.
    Floating,
    /// A run of word characters.
    Word,
}

impl State {
    /// Computes the successor of `self` on a byte of class `class`.
    ///
    /// # Example
    ///
    /// ```
    /// use munch_lex::{CharClass, State};
    ///
    /// assert_eq!(State::Start.next(CharClass::Zero), State::Zero);
    /// assert_eq!(State::Zero.next(CharClass::Dot), State::Floating);
    /// assert_eq!(State::Zero.next(CharClass::NonzeroDigit), State::Error);
    /// ```
    pub fn next(self, class: CharClass) -> State {
        use CharClass as C;

        match (self, class) {
            (State::Start, C::Whitespace) => State::Whitespaces,
            (State::Start, C::Parenthesis) => State::Parenthesis,
            (State::Start, C::Operator) => State::Operators,
            (State::Start, C::Zero) => State::Zero,
            (State::Start, C::NonzeroDigit) => State::NonzeroDigits,
            (State::Start, C::Word) => State::Word,

            (State::Whitespaces, C::Whitespace) => State::Whitespaces,

            (State::Zero, C::Dot) => State::Floating,

            (State::NonzeroDigits, C::Zero | C::NonzeroDigit) => State::NonzeroDigits,
            (State::NonzeroDigits, C::Dot) => State::Floating,

            (State::Floating, C::Zero | C::NonzeroDigit) => State::Floating,

            (State::Word, C::Word) => State::Word,

            // Operators and parentheses have no outgoing edges at all, so
            // they always match exactly one byte.
            (State::Error, _)
            | (State::Start, C::Invalid | C::Dot)
            | (State::Whitespaces, _)
            | (State::Operators, _)
            | (State::Parenthesis, _)
            | (State::Zero, _)
            | (State::NonzeroDigits, _)
            | (State::Floating, _)
            | (State::Word, _) => State::Error,
        }
    }

    /// Returns `true` if the consumed prefix is a complete token.
    #[inline]
    pub fn is_accepting(self) -> bool {
        !matches!(self, State::Error | State::Start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_CLASSES: [CharClass; 8] = [
        CharClass::Invalid,
        CharClass::Whitespace,
        CharClass::Parenthesis,
        CharClass::Operator,
        CharClass::Zero,
        CharClass::NonzeroDigit,
        CharClass::Dot,
        CharClass::Word,
    ];

    #[test]
    fn test_accepting_states() {
        assert!(!State::Error.is_accepting());
        assert!(!State::Start.is_accepting());
        for state in [
            State::Whitespaces,
            State::Operators,
            State::Parenthesis,
            State::Zero,
            State::NonzeroDigits,
            State::Floating,
            State::Word,
        ] {
            assert!(state.is_accepting(), "{:?}", state);
        }
    }

    #[test]
    fn test_error_is_absorbing() {
        for class in ALL_CLASSES {
            assert_eq!(State::Error.next(class), State::Error);
        }
    }

    #[test]
    fn test_invalid_always_errors() {
        for state in [State::Start, State::Word, State::Floating, State::Whitespaces] {
            assert_eq!(state.next(CharClass::Invalid), State::Error);
        }
    }

    #[test]
    fn test_single_byte_states_never_extend() {
        for class in ALL_CLASSES {
            assert_eq!(State::Operators.next(class), State::Error);
            assert_eq!(State::Parenthesis.next(class), State::Error);
        }
    }

    #[test]
    fn test_start_transitions() {
        assert_eq!(State::Start.next(CharClass::Whitespace), State::Whitespaces);
        assert_eq!(State::Start.next(CharClass::Parenthesis), State::Parenthesis);
        assert_eq!(State::Start.next(CharClass::Operator), State::Operators);
        assert_eq!(State::Start.next(CharClass::Zero), State::Zero);
        assert_eq!(State::Start.next(CharClass::NonzeroDigit), State::NonzeroDigits);
        assert_eq!(State::Start.next(CharClass::Word), State::Word);
        assert_eq!(State::Start.next(CharClass::Dot), State::Error);
    }

    #[test]
    fn test_number_transitions() {
        assert_eq!(State::Zero.next(CharClass::Zero), State::Error);
        assert_eq!(State::Zero.next(CharClass::Dot), State::Floating);
        assert_eq!(State::NonzeroDigits.next(CharClass::Zero), State::NonzeroDigits);
        assert_eq!(State::NonzeroDigits.next(CharClass::Dot), State::Floating);
        assert_eq!(State::NonzeroDigits.next(CharClass::Word), State::Error);
        assert_eq!(State::Floating.next(CharClass::NonzeroDigit), State::Floating);
        assert_eq!(State::Floating.next(CharClass::Dot), State::Error);
    }

    #[test]
    fn test_word_does_not_absorb_digits() {
        assert_eq!(State::Word.next(CharClass::Word), State::Word);
        assert_eq!(State::Word.next(CharClass::NonzeroDigit), State::Error);
        assert_eq!(State::Word.next(CharClass::Zero), State::Error);
    }
}
