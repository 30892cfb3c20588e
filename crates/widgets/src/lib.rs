pub mod popup;
pub mod print;
pub mod search;
pub mod table;
