pub mod comments;
pub mod posts;
pub mod profile;
pub mod response;
pub mod views;
