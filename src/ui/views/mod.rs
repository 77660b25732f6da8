pub mod detail;
pub mod diagnostic;
pub mod home;
pub mod loading;
pub mod methodology;
