use leptos::*;

/// Large outlined "A" drawn next to the hero text. Purely decorative; the
/// stroke animation lives in the stylesheet.
#[component]
pub fn Logo() -> impl IntoView {
    view! {
        <div class="logo-container" aria-hidden="true">
            <img class="solid-logo" src="/assets/images/logo-a.svg" alt=""/>
            <svg
                class="outline-logo"
                width="559pt"
                height="897pt"
                viewBox="0 0 559 897"
                xmlns="http://www.w3.org/2000/svg"
            >
                <g class="svg-container" fill="none">
                    <path d="M279.5 40 L519 857 L430 857 L372 650 L187 650 L129 857 L40 857 Z M279.5 260 L210 570 L349 570 Z"/>
                </g>
            </svg>
        </div>
    }
}
