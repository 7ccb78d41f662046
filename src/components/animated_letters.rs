use crate::animation::{letter_spans, LetterPhase};
use leptos::*;

/// Render `text` one span per character, staggered from `offset`.
#[component]
pub fn AnimatedLetters(
    phase: ReadSignal<LetterPhase>,
    text: &'static str,
    offset: usize,
) -> impl IntoView {
    letter_spans(text, offset)
        .into_iter()
        .map(|span| {
            let class = move || format!("{} {}", phase.get().class(), span.index_class);
            view! { <span class=class>{span.letter.to_string()}</span> }
        })
        .collect_view()
}
