//! Edge case tests for munch-lex
