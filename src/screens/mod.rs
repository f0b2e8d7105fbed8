pub mod cart_screen;
pub mod home_screen;
pub mod login_screen;
pub mod product_screen;
