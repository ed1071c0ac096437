//! Home page sections, top to bottom. Each one owns its anchor id so the
//! header and footer can scroll to it.

mod about;
mod contact;
mod downloads;
mod hero;
mod products;

pub use about::About;
pub use contact::Contact;
pub use downloads::Downloads;
pub use hero::Hero;
pub use products::Products;
