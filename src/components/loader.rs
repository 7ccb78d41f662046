use leptos::*;

/// Full-page pacman overlay shown while a view fades in.
///
/// The stylesheet fades `.loader-active` out after its intro animation, so
/// there is no state to manage here.
#[component]
pub fn PageLoader() -> impl IntoView {
    view! {
        <div class="loader loader-active" aria-hidden="true">
            <div class="loader-inner pacman">
                <div></div>
                <div></div>
                <div></div>
                <div></div>
                <div></div>
            </div>
        </div>
    }
}

/// Small rotating ring used inside buttons while a request is running.
#[component]
pub fn ClipLoader(
    #[prop(default = "#fff")] color: &'static str,
    #[prop(default = 20)] size: u32,
) -> impl IntoView {
    let style = format!(
        "width: {size}px; height: {size}px; border-color: {color} {color} transparent;"
    );
    view! { <span class="clip-loader" role="status" aria-label="Sending" style=style></span> }
}
