mod home;
pub use home::Home;

mod placeholder;
pub use placeholder::Placeholder;

mod not_found;
pub use not_found::NotFound;
