//! Page components, one per route.

mod contact;
mod feedback;
mod form_submit;
mod home;
mod not_found;
mod projects;
mod qualifications;
mod skills;

pub use contact::Contact;
pub use feedback::Feedback;
pub use home::Home;
pub use not_found::NotFound;
pub use projects::Projects;
pub use qualifications::Qualifications;
pub use skills::Skills;
