pub mod colors;
pub mod histogram;
pub mod path;
pub mod table;
pub mod time;
