use crate::animation::{use_letter_phase, HOME_ANIMATION_DELAY};
use crate::components::{AnimatedLetters, Logo, PageLoader};
use crate::routes::CONTACT;
use leptos::*;
use leptos_router::A;

#[component]
pub fn HomePage() -> impl IntoView {
    let phase = use_letter_phase(HOME_ANIMATION_DELAY);
    let hero_class = move |index: &'static str| move || format!("{} {}", phase.get().class(), index);

    view! {
        <div class="container home-page">
            <div class="text-zone">
                <h1>
                    <span class=move || phase.get().class()>"H"</span>
                    <span class=hero_class("_12")>"i,"</span>
                    <br/>
                    <span class=hero_class("_13")>"I"</span>
                    <span class=hero_class("_14")>"'m"</span>
                    <img src="/assets/images/logo-a.svg" alt="Allain Legaspi"/>
                    <AnimatedLetters phase=phase text="llain" offset=15/>
                    <br/>
                    <AnimatedLetters phase=phase text="Developer" offset=22/>
                    <br/>
                    <AnimatedLetters phase=phase text="FrontEnd | DevOps | Web3" offset=22/>
                </h1>
                <h2>"Photography | Programming | Gaming"</h2>
                <A href=CONTACT.path class="flat-button">"CONTACT ME"</A>
            </div>
            <Logo/>
        </div>
        <PageLoader/>
    }
}
