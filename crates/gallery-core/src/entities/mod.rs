//! Domain entities - core business objects

mod artwork;
mod order;
mod user;

pub use artwork::{Artwork, ArtworkStatus, Category};
pub use order::{Order, OrderStatus};
pub use user::{PaymentAccount, PaymentProvider, User, UserRole};
