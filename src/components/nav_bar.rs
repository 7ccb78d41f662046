use crate::routes::{SiteRoute, HOME, NAV_ROUTES};
use leptos::*;
use leptos_router::{use_location, A};

#[component]
pub fn NavBar() -> impl IntoView {
    let location = use_location();

    let link = move |route: SiteRoute| {
        let class = move || {
            if location.pathname.with(|p| route.is_active(p)) {
                "nav-link active"
            } else {
                "nav-link"
            }
        };
        view! { <A href=route.path class=class>{route.label}</A> }
    };

    view! {
        <nav class="site-nav">
            <div class="site-nav-inner">
                <A href=HOME.path class="nav-brand">
                    <img src="/assets/images/logo-a.svg" alt="Allain Legaspi"/>
                </A>
                <div class="nav-links">
                    {NAV_ROUTES.into_iter().map(link).collect_view()}
                </div>
            </div>
        </nav>
    }
}
