mod about;
mod home;
mod projects;
mod store;

pub use about::AboutPage;
pub use home::HomePage;
pub use projects::ProjectsPage;
pub use store::StorePage;

/// Classes for a region that fades in once revealed
pub(crate) fn fade_class(base: &str, revealed: bool) -> String {
    if revealed {
        format!("{base} fade-in-up fade-in-up-visible")
    } else {
        format!("{base} fade-in-up")
    }
}
