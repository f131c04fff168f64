//! Screens, one per route.

mod book;
mod category;
mod home;
mod image;
mod not_found;
mod order;
mod sign_in;
mod specification;

pub use book::BookPage;
pub use category::CategoryPage;
pub use home::HomePage;
pub use image::ImagePage;
pub use not_found::NotFoundPage;
pub use order::OrderPage;
pub use sign_in::SignInPage;
pub use specification::SpecificationPage;
