pub mod a001_book;
pub mod a002_category;
pub mod a003_order;
pub mod a004_admin;
