//! Staggered letter reveal.
//!
//! Each character is rendered in its own span carrying an index class
//! (`_15`, `_16`, ...) that the stylesheet uses to delay its entrance. After a
//! fixed delay the whole sequence swaps to the hover class so individual
//! letters can rubber-band on mouse over.

use leptos::*;
use std::time::Duration;

pub const HOME_ANIMATION_DELAY: Duration = Duration::from_millis(4000);
pub const CONTACT_ANIMATION_DELAY: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LetterPhase {
    #[default]
    Unanimated,
    Animated,
}

impl LetterPhase {
    pub fn class(&self) -> &'static str {
        match self {
            LetterPhase::Unanimated => "text-animate",
            LetterPhase::Animated => "text-animate-hover",
        }
    }

    /// Move to `Animated`. Returns true only on the call that changed the phase.
    pub fn advance(&mut self) -> bool {
        match self {
            LetterPhase::Unanimated => {
                *self = LetterPhase::Animated;
                true
            }
            LetterPhase::Animated => false,
        }
    }
}

/// One rendered character and its stagger index class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterSpan {
    pub letter: char,
    pub index_class: String,
}

pub fn letter_spans(text: &str, offset: usize) -> Vec<LetterSpan> {
    text.chars()
        .enumerate()
        .map(|(i, letter)| LetterSpan {
            letter,
            index_class: format!("_{}", offset + i),
        })
        .collect()
}

/// Phase signal that flips to `Animated` once, `delay` after the calling
/// component mounts. The pending timer is cleared if the component unmounts first.
pub fn use_letter_phase(delay: Duration) -> ReadSignal<LetterPhase> {
    let (phase, set_phase) = create_signal(LetterPhase::Unanimated);

    match set_timeout_with_handle(
        move || {
            set_phase.try_update(|p| p.advance());
        },
        delay,
    ) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(_) => {
            log::warn!("could not schedule letter animation, showing final state");
            set_phase.update(|p| {
                p.advance();
            });
        }
    }

    phase
}
