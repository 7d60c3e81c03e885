pub mod about;
pub mod danger;
pub mod forecast;
pub mod layout;
pub mod performance;
pub mod plots;
pub mod weather;
