use std::iter::FusedIterator;
use std::time::Duration;

pub const TYPING_DELAY: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TypingState {
    pub displayed: String,
    /// Number of characters revealed so far
    pub cursor: usize,
}

/// Reveals `text` one character per call to `next()`, yielding each new prefix.
///
/// The sequence is finite and cannot be restarted: once every character has
/// been shown it keeps returning `None`.
#[derive(Debug, Clone)]
pub struct TypingSequence {
    chars: Vec<char>,
    state: TypingState,
}

impl TypingSequence {
    pub fn new(text: &str) -> Self {
        let chars = text.chars().collect::<Vec<_>>();
        let state = TypingState {
            displayed: String::with_capacity(text.len()),
            cursor: 0,
        };
        Self { chars, state }
    }

    pub fn state(&self) -> &TypingState {
        &self.state
    }

    /// Length of the full text in characters
    pub fn total_chars(&self) -> usize {
        self.chars.len()
    }

    pub fn is_finished(&self) -> bool {
        self.state.cursor == self.chars.len()
    }

    /// Delay before the next character, `None` once the text is fully shown so
    /// no further timer gets armed.
    pub fn next_tick(&self) -> Option<Duration> {
        (!self.is_finished()).then_some(TYPING_DELAY)
    }
}

impl Iterator for TypingSequence {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        let c = *self.chars.get(self.state.cursor)?;
        self.state.displayed.push(c);
        self.state.cursor += 1;
        Some(self.state.displayed.clone())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.chars.len() - self.state.cursor;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for TypingSequence {}
impl FusedIterator for TypingSequence {}

/// Caret that fades between fully opaque and transparent forever.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorBlink {
    /// Time for one fade in a single direction
    pub half_period: Duration,
}

impl Default for CursorBlink {
    fn default() -> Self {
        Self {
            half_period: Duration::from_millis(800),
        }
    }
}

impl CursorBlink {
    /// Linear opacity at `elapsed`, going 1 -> 0 then back 0 -> 1 (alternating).
    pub fn opacity_at(&self, elapsed: Duration) -> f64 {
        let half = self.half_period.as_secs_f64();
        if half <= 0.0 {
            return 1.0;
        }
        let t = elapsed.as_secs_f64() % (half * 2.0);
        if t < half {
            1.0 - t / half
        } else {
            (t - half) / half
        }
    }

    /// Inline style for the caret element. Keyframes live in `input.css`.
    pub fn css_animation(&self) -> String {
        format!(
            "animation: caret-blink {}ms linear infinite alternate",
            self.half_period.as_millis()
        )
    }
}
