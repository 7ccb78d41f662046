use leptos::*;

/// A fixed spot on an embedded map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapLocation {
    pub title: &'static str,
    pub embed_url: &'static str,
}

pub const CAMPUS: MapLocation = MapLocation {
    title: "University of Southern Philippines Foundation",
    embed_url: "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3875.847798679174!2d123.8984227!3d10.3285642!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x33a999245d95a295%3A0x1e3cfdb942e107f8!2sUniversity%20of%20Southern%20Philippines%20Foundation!5e0!3m2!1sen!2sph!4v1681234567890!5m2!1sen!2sph",
};

/// Read-only map iframe.
#[component]
pub fn MapEmbed(
    location: MapLocation,
    #[prop(default = 450)] height: u32,
) -> impl IntoView {
    view! {
        <div class="map-wrap">
            <iframe
                title=location.title
                src=location.embed_url
                width="100%"
                height=height.to_string()
                style="border: 0;"
                allowfullscreen=""
                loading="lazy"
                referrerpolicy="no-referrer-when-downgrade"
            ></iframe>
        </div>
    }
}
