//! Maximal-munch driver for the scanning automaton.
//!
//! [`longest_match`] runs the automaton forward until it dies, recording the
//! states it passes through, then rewinds through that history to the most
//! recent accepting state. The history is cleared every time an accepting
//! state is entered, so it only ever holds the speculative tail past the last
//! good match and the rewind never walks further back than necessary.

use tracing::trace;

use crate::char_class::{CharClass, CHAR_TABLE};
use crate::state::State;

/// Result of a successful scan.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Match {
    /// Accepting state the longest match ended in.
    pub state: State,
    /// Offset one past the last byte of the match.
    pub end: usize,
}

impl Match {
    /// Length of the match when the scan began at `start`.
    #[inline]
    pub fn len(&self, start: usize) -> usize {
        self.end - start
    }
}

/// Classifies the byte at `pos`, treating the end of input as [`CharClass::Invalid`].
#[inline]
fn class_at(input: &[u8], pos: usize) -> CharClass {
    match input.get(pos) {
        Some(&b) => CHAR_TABLE[b as usize],
        None => CharClass::Invalid,
    }
}

/// Finds the longest token starting at `start`.
///
/// Returns `None` when not even the first byte begins a token (or `start` is
/// at the end of `input`).
///
/// # Example
///
/// ```
/// use munch_lex::fsm::longest_match;
/// use munch_lex::State;
///
/// let m = longest_match(b"12a", 0).unwrap();
/// assert_eq!(m.state, State::NonzeroDigits);
/// assert_eq!(m.end, 2);
///
/// assert!(longest_match(b"#", 0).is_none());
/// ```
pub fn longest_match(input: &[u8], start: usize) -> Option<Match> {
    // Bottom entry: no accepting state seen yet.
    let mut history = vec![State::Error];
    let mut state = State::Start;
    let mut pos = start;

    while state != State::Error {
        state = state.next(class_at(input, pos));
        pos += 1;
        if state.is_accepting() {
            history.clear();
        }
        history.push(state);
    }

    // `pos` sits one past the byte that killed the automaton. Each pop
    // discards the state that byte produced and steps back over it.
    loop {
        history.pop();
        pos -= 1;
        match history.last() {
            Some(&prev) if prev.is_accepting() => {
                trace!(start, end = pos, state = ?prev, "rewound to accepting state");
                return Some(Match { state: prev, end: pos });
            },
            Some(State::Error) | None => {
                trace!(start, "no token at offset");
                return None;
            },
            Some(_) => {},
        }
    }
}
