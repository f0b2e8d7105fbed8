use serde::{Deserialize, Serialize};
use crate::models::product::Product;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CartItem {
    pub product_id: String,
    pub name: String,
    pub image: String,
    pub price: f64,
    pub count_in_stock: u32,
    pub qty: u32,
}

impl CartItem {
    pub fn from_product(product: &Product, qty: u32) -> Self {
        CartItem {
            product_id: product.id.clone(),
            name: product.name.clone(),
            image: product.image.clone(),
            price: product.price,
            count_in_stock: product.count_in_stock,
            qty,
        }
    }
}
