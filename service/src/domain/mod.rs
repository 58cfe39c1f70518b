//! Domain definitions.

pub mod fare;
pub mod reservation;
pub mod route;
pub mod subscription;

pub use self::{
    fare::Quote, reservation::Reservation, route::Route, subscription::Tier,
};
