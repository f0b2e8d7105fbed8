pub mod header;
pub mod loader;
pub mod message;
pub mod meta;
pub mod product_details;
pub mod product_grid;
pub mod rating;
pub mod review_form;
pub mod reviews_list;
