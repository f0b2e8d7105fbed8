use serde::{Deserialize, Serialize};
use crate::models::review::Review;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub image: String,          // Path or URL of the product photo
    pub brand: String,
    pub category: String,
    pub description: String,
    pub price: f64,
    pub count_in_stock: u32,
    pub rating: f64,            // Mean of all review ratings, 0 when unreviewed
    pub num_reviews: u32,
    #[serde(default)]
    pub reviews: Vec<Review>,
}

impl Product {
    pub fn in_stock(&self) -> bool {
        self.count_in_stock > 0
    }
}
