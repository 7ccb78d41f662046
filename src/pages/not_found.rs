use leptos::*;
use leptos_router::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="container not-found-page">
            <div class="text-zone">
                <h1>"404"</h1>
                <h2>"Page not found"</h2>
                <A href="/" class="flat-button">"BACK HOME"</A>
            </div>
        </div>
    }
}
