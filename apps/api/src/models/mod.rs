pub mod assessment;
pub mod booking;
pub mod career;
pub mod membership;
pub mod user;
