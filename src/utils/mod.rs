pub mod humanize;
pub mod sanitize;
