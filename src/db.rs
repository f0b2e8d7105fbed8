#[cfg(feature = "ssr")]
mod db_impl {
    use crate::error::StoreError;
    use crate::models::product::Product;
    use crate::models::review::{Review, ReviewInput};
    use crate::models::user::UserInfo;
    use chrono::{DateTime, Utc};
    use leptos::logging;
    use leptos::logging::log;
    use rusqlite::types::Type;
    use rusqlite::{params, Connection, Error, OptionalExtension, Row};
    use std::sync::Arc;
    use tokio::sync::Mutex;
    use uuid::Uuid;


    pub const DEMO_USER_EMAIL: &str = "jane@example.com";

    const PRODUCT_COLUMNS: &str = "id, name, image, brand, category, description, price, \
         count_in_stock, rating, num_reviews";

    // Define a struct to represent a database connection
    #[derive(Debug)]
    pub struct Database {
        conn: Arc<Mutex<Connection>>,
    }

    impl Database {
        pub fn new(db_path: &str) -> Result<Self, Error> {
            let conn = Connection::open(db_path)?;
            logging::log!("[DB] Connection established at: {}", db_path);
            Ok(Database {
                conn: Arc::new(Mutex::new(conn)),
            })
        }

        pub async fn create_schema(&self) -> Result<(), Error> {
            let conn = self.conn.lock().await;

            conn.execute_batch("PRAGMA foreign_keys = ON;")?;

            conn.execute_batch(
                "CREATE TABLE IF NOT EXISTS users (
                    id TEXT PRIMARY KEY,
                    name TEXT NOT NULL,
                    email TEXT NOT NULL UNIQUE,
                    token TEXT NOT NULL UNIQUE
                );",
            )
            .map_err(|e| {
                logging::error!("[DB] Failed creating users table: {}", e);
                e
            })?;

            conn.execute_batch(
                "CREATE TABLE IF NOT EXISTS products (
                    id TEXT PRIMARY KEY,
                    name TEXT NOT NULL,
                    image TEXT NOT NULL,
                    brand TEXT NOT NULL,
                    category TEXT NOT NULL,
                    description TEXT NOT NULL,
                    price REAL NOT NULL DEFAULT 0,
                    count_in_stock INTEGER NOT NULL DEFAULT 0,
                    rating REAL NOT NULL DEFAULT 0,
                    num_reviews INTEGER NOT NULL DEFAULT 0,
                    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
                );",
            )
            .map_err(|e| {
                logging::error!("[DB] Failed creating products table: {}", e);
                e
            })?;

            // One review per user and product
            conn.execute_batch(
                "CREATE TABLE IF NOT EXISTS reviews (
                    id TEXT PRIMARY KEY,
                    product_id TEXT NOT NULL,
                    user_id TEXT NOT NULL,
                    name TEXT NOT NULL,
                    rating INTEGER NOT NULL,
                    comment TEXT NOT NULL,
                    created_at TEXT NOT NULL,
                    UNIQUE (product_id, user_id),
                    FOREIGN KEY (product_id) REFERENCES products(id) ON DELETE CASCADE,
                    FOREIGN KEY (user_id) REFERENCES users(id) ON DELETE CASCADE
                );",
            )
            .map_err(|e| {
                logging::error!("[DB] Failed creating reviews table: {}", e);
                e
            })?;
            Ok(())
        }

        /// Fills an empty catalogue with demo products and a demo account.
        pub async fn seed_if_empty(&self) -> Result<(), Error> {
            let existing: i64 = {
                let conn = self.conn.lock().await;
                conn.query_row("SELECT COUNT(*) FROM products", [], |row| row.get(0))?
            };
            if existing > 0 {
                log!("[DB] Catalogue already holds {} products, skipping seed", existing);
                return Ok(());
            }

            let seed = [
                ("Airpods Wireless Bluetooth Headphones", "/images/airpods.jpg", "Apple", "Electronics",
                 "Bluetooth technology lets you connect it with compatible devices wirelessly.", 24999.0, 10),
                ("iPhone 13 Pro 256GB Memory", "/images/phone.jpg", "Apple", "Electronics",
                 "Introducing the iPhone 13 Pro. A transformative triple-camera system.", 239999.0, 7),
                ("Cannon EOS 80D DSLR Camera", "/images/camera.jpg", "Cannon", "Electronics",
                 "Characterized by versatile imaging specs.", 92999.99, 5),
                ("Logitech G-Series Gaming Mouse", "/images/mouse.jpg", "Logitech", "Electronics",
                 "Get a better handle on your games with this Logitech gaming mouse.", 4999.99, 0),
            ];
            for (name, image, brand, category, description, price, stock) in seed {
                self.insert_product(&Product {
                    id: Uuid::new_v4().to_string(),
                    name: name.into(),
                    image: image.into(),
                    brand: brand.into(),
                    category: category.into(),
                    description: description.into(),
                    price,
                    count_in_stock: stock,
                    rating: 0.0,
                    num_reviews: 0,
                    reviews: vec![],
                })
                .await?;
            }

            if self.find_user_by_email(DEMO_USER_EMAIL).await?.is_none() {
                let user = self.insert_user("Jane Doe", DEMO_USER_EMAIL).await?;
                log!("[DB] Demo user {} seeded", user.email);
            }
            log!("[DB] Seeded {} products", seed.len());
            Ok(())
        }

        /// Creates an account with a fresh session token.
        pub async fn insert_user(&self, name: &str, email: &str) -> Result<UserInfo, Error> {
            let user = UserInfo {
                id: Uuid::new_v4().to_string(),
                name: name.to_string(),
                email: email.to_string(),
                token: Uuid::new_v4().simple().to_string(),
            };
            let conn = self.conn.lock().await;
            conn.execute(
                "INSERT INTO users (id, name, email, token) VALUES (?1, ?2, ?3, ?4)",
                params![user.id, user.name, user.email, user.token],
            )?;
            Ok(user)
        }

        pub async fn insert_product(&self, product: &Product) -> Result<(), Error> {
            let conn = self.conn.lock().await;
            conn.execute(
                "INSERT INTO products (id, name, image, brand, category, description, price,
                    count_in_stock, rating, num_reviews)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
                params![
                    product.id,
                    product.name,
                    product.image,
                    product.brand,
                    product.category,
                    product.description,
                    product.price,
                    product.count_in_stock,
                    product.rating,
                    product.num_reviews,
                ],
            )?;
            log!("[DB] Product inserted: {}", product.id);
            Ok(())
        }

        pub async fn list_products(&self) -> Result<Vec<Product>, Error> {
            let conn = self.conn.lock().await;
            let mut stmt = conn.prepare(&format!(
                "SELECT {} FROM products ORDER BY created_at DESC, name ASC",
                PRODUCT_COLUMNS
            ))?;
            let rows = stmt.query_map([], product_from_row)?;

            let mut products = Vec::new();
            for row in rows {
                let mut product = row?;
                product.reviews = reviews_for(&conn, &product.id)?;
                products.push(product);
            }
            logging::log!("[DB] Fetched {} products", products.len());
            Ok(products)
        }

        pub async fn get_product(&self, id: &str) -> Result<Option<Product>, Error> {
            let conn = self.conn.lock().await;
            let product = conn
                .query_row(
                    &format!("SELECT {} FROM products WHERE id = ?", PRODUCT_COLUMNS),
                    [id],
                    product_from_row,
                )
                .optional()?;

            match product {
                Some(mut product) => {
                    product.reviews = reviews_for(&conn, id)?;
                    Ok(Some(product))
                }
                None => Ok(None),
            }
        }

        /// Stores a review and refreshes the product's rating and review count
        /// in the same transaction.
        pub async fn add_review(
            &self,
            product_id: &str,
            user: &UserInfo,
            input: &ReviewInput,
        ) -> Result<Review, StoreError> {
            if !(1..=5).contains(&input.rating) {
                return Err(StoreError::InvalidRating);
            }

            let mut conn = self.conn.lock().await;
            let tx = conn.transaction()?;

            let exists = tx
                .query_row("SELECT 1 FROM products WHERE id = ?", [product_id], |_| Ok(()))
                .optional()?
                .is_some();
            if !exists {
                return Err(StoreError::ProductNotFound);
            }

            let already_reviewed = tx
                .query_row(
                    "SELECT 1 FROM reviews WHERE product_id = ?1 AND user_id = ?2",
                    params![product_id, user.id],
                    |_| Ok(()),
                )
                .optional()?
                .is_some();
            if already_reviewed {
                return Err(StoreError::AlreadyReviewed);
            }

            let review = Review {
                id: Uuid::new_v4().to_string(),
                name: user.name.clone(),
                rating: input.rating,
                comment: input.comment.clone(),
                user_id: user.id.clone(),
                created_at: Utc::now(),
            };
            tx.execute(
                "INSERT INTO reviews (id, product_id, user_id, name, rating, comment, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![
                    review.id,
                    product_id,
                    review.user_id,
                    review.name,
                    review.rating,
                    review.comment,
                    review.created_at.to_rfc3339(),
                ],
            )?;
            tx.execute(
                "UPDATE products SET
                    num_reviews = (SELECT COUNT(*) FROM reviews WHERE product_id = ?1),
                    rating = COALESCE((SELECT AVG(rating) FROM reviews WHERE product_id = ?1), 0)
                 WHERE id = ?1",
                [product_id],
            )?;
            tx.commit()?;

            log!("[DB] Review {} added to product {}", review.id, product_id);
            Ok(review)
        }

        pub async fn find_user_by_token(&self, token: &str) -> Result<Option<UserInfo>, Error> {
            let conn = self.conn.lock().await;
            conn.query_row(
                "SELECT id, name, email, token FROM users WHERE token = ?",
                [token],
                user_from_row,
            )
            .optional()
        }

        pub async fn find_user_by_email(&self, email: &str) -> Result<Option<UserInfo>, Error> {
            let conn = self.conn.lock().await;
            conn.query_row(
                "SELECT id, name, email, token FROM users WHERE email = ?",
                [email],
                user_from_row,
            )
            .optional()
        }
    }

    fn product_from_row(row: &Row<'_>) -> Result<Product, Error> {
        Ok(Product {
            id: row.get(0)?,
            name: row.get(1)?,
            image: row.get(2)?,
            brand: row.get(3)?,
            category: row.get(4)?,
            description: row.get(5)?,
            price: row.get(6)?,
            count_in_stock: row.get(7)?,
            rating: row.get(8)?,
            num_reviews: row.get(9)?,
            reviews: Vec::new(),
        })
    }

    fn user_from_row(row: &Row<'_>) -> Result<UserInfo, Error> {
        Ok(UserInfo {
            id: row.get(0)?,
            name: row.get(1)?,
            email: row.get(2)?,
            token: row.get(3)?,
        })
    }

    fn reviews_for(conn: &Connection, product_id: &str) -> Result<Vec<Review>, Error> {
        let mut stmt = conn.prepare(
            "SELECT id, name, rating, comment, user_id, created_at
             FROM reviews WHERE product_id = ? ORDER BY created_at ASC, rowid ASC",
        )?;
        let rows = stmt.query_map([product_id], |row| {
            let created_at: String = row.get(5)?;
            let created_at = DateTime::parse_from_rfc3339(&created_at)
                .map_err(|e| Error::FromSqlConversionFailure(5, Type::Text, Box::new(e)))?
                .with_timezone(&Utc);
            Ok(Review {
                id: row.get(0)?,
                name: row.get(1)?,
                rating: row.get(2)?,
                comment: row.get(3)?,
                user_id: row.get(4)?,
                created_at,
            })
        })?;

        let mut reviews = Vec::new();
        for row in rows {
            reviews.push(row?);
        }
        Ok(reviews)
    }
}

#[cfg(feature = "ssr")]
pub use db_impl::{Database, DEMO_USER_EMAIL};
