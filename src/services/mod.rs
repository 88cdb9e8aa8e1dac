pub mod author;
pub mod reader;
