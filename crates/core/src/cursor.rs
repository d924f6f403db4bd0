//! The token stream consumed during a single parse pass.

use std::collections::VecDeque;

/// A forward-only cursor over the raw token list with single-token push-back.
///
/// Built once per parse from the full token list (program name already
/// excluded by the caller), mutated only during the parse pass, and useless
/// afterwards. [`Cursor::prepend`] exists for exactly one purpose: when a
/// token carries a literal `=` separator, the value half is pushed back so
/// that whichever argument claims the name half consumes it as a dedicated
/// value token. No backward seeking is supported.
#[derive(Debug)]
pub struct Cursor {
    tokens: VecDeque<String>,
}

impl Cursor {
    /// Create a cursor over `tokens`.
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tokens: tokens.into_iter().map(Into::into).collect(),
        }
    }

    /// Return the current token and advance, or `None` at the end.
    pub fn next(&mut self) -> Option<String> {
        self.tokens.pop_front()
    }

    /// Insert `token` so that it becomes the very next [`Cursor::next`]
    /// result, without disturbing the tokens after it.
    pub fn prepend(&mut self, token: impl Into<String>) {
        self.tokens.push_front(token.into());
    }

    /// `true` iff no tokens remain.
    pub fn at_end(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Number of tokens not yet consumed.
    pub fn remaining(&self) -> usize {
        self.tokens.len()
    }
}

// ── Token classification ────────────────────────────────────────────────

/// `true` for long-form argument tokens: `--name`.
pub fn is_long_name(token: &str) -> bool {
    token.len() > 2 && token.starts_with("--")
}

/// `true` for short-form tokens: a single flag `-a` or a combo `-abc`.
pub fn is_flag_token(token: &str) -> bool {
    token.len() > 1 && token.starts_with('-') && !token.starts_with("--")
}
