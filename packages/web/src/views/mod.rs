mod home;
pub use home::Home;

mod page;

mod services;
pub use services::Services;

mod about;
pub use about::About;

mod projects;
pub use projects::Projects;

mod contact;
pub use contact::Contact;

mod faq;
pub use faq::Faq;

mod not_found;
pub use not_found::NotFound;
