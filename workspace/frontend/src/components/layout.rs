pub mod disclaimer;
pub mod footer;
pub mod layout;
pub mod navbar;
