mod animated_letters;
mod loader;
mod logo;
mod map_embed;
mod nav_bar;
mod toast_container;

pub use animated_letters::AnimatedLetters;
pub use loader::{ClipLoader, PageLoader};
pub use logo::Logo;
pub use map_embed::{MapEmbed, MapLocation, CAMPUS};
pub use nav_bar::NavBar;
pub use toast_container::ToastContainer;
