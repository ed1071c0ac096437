mod home;
mod impressum;
mod product;

pub use home::Home;
pub use impressum::Impressum;
pub use product::{Carousel, ProductPage};
