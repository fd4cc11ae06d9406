pub mod auth;
pub mod driver;
pub mod order;
pub mod route;
pub mod session;

pub use auth::{LoginCredentials, LoginResponse};
pub use driver::Driver;
pub use order::OrderTally;
pub use route::{Coordinates, Route, Savings};
pub use session::{Session, UserProfile};
