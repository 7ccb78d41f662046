mod contact;
mod home;
mod not_found;

pub use contact::ContactPage;
pub use home::HomePage;
pub use not_found::NotFoundPage;
