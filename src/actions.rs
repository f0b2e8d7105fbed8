//! HTTP-backed actions. Each one dispatches `Request`, calls the JSON API and
//! finishes with `Success` or `Fail` on the matching [`Store`] slice.
use gloo_net::http::{Request, Response};
use leptos::logging::{error, log};
use leptos::{spawn_local, SignalWithUntracked};
use serde::de::DeserializeOwned;
use crate::error::ErrorBody;
use crate::models::cart::CartItem;
use crate::models::product::Product;
use crate::models::review::ReviewInput;
use crate::models::user::{LoginRequest, UserInfo};
use crate::state::{CartAction, FetchAction, ReviewCreateAction, Store, UserLoginAction};
use crate::utils::storage::{self, CART_ITEMS_KEY, USER_INFO_KEY};

const API_BASE: &str = "/api";

/// Turns a non-2xx response into the message shown to the user, preferring
/// the server's `message` field over the bare status line.
async fn error_message(response: Response) -> String {
    let status = response.status();
    let status_text = response.status_text();
    match response.json::<ErrorBody>().await {
        Ok(body) => body.message,
        Err(_) => format!("Request failed with status code {} {}", status, status_text)
            .trim_end()
            .to_string(),
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    if !response.ok() {
        return Err(error_message(response).await);
    }
    response.json::<T>().await.map_err(|e| e.to_string())
}

async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, String> {
    let response = Request::get(url).send().await.map_err(|e| e.to_string())?;
    read_json(response).await
}

pub async fn fetch_product(id: &str) -> Result<Product, String> {
    let url = format!("{}/products/{}", API_BASE, urlencoding::encode(id));
    get_json(&url).await
}

pub fn list_products(store: Store) {
    store.dispatch_product_list(FetchAction::Request);
    spawn_local(async move {
        match get_json::<Vec<Product>>(&format!("{}/products", API_BASE)).await {
            Ok(products) => {
                log!("[ACTION] Loaded {} products", products.len());
                store.dispatch_product_list(FetchAction::Success(products));
            }
            Err(message) => {
                error!("[ACTION] Product list failed: {}", message);
                store.dispatch_product_list(FetchAction::Fail(message));
            }
        }
    });
}

pub fn list_product_details(store: Store, id: String) {
    store.dispatch_product_details(FetchAction::Request);
    spawn_local(async move {
        match fetch_product(&id).await {
            Ok(product) => store.dispatch_product_details(FetchAction::Success(product)),
            Err(message) => {
                error!("[ACTION] Product {} failed: {}", id, message);
                store.dispatch_product_details(FetchAction::Fail(message));
            }
        }
    });
}

async fn post_review(id: &str, token: &str, review: &ReviewInput) -> Result<(), String> {
    let url = format!("{}/products/{}/reviews", API_BASE, urlencoding::encode(id));
    let response = Request::post(&url)
        .header("Authorization", &format!("Bearer {}", token))
        .json(review)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if response.ok() {
        Ok(())
    } else {
        Err(error_message(response).await)
    }
}

pub fn create_product_review(store: Store, id: String, review: ReviewInput) {
    store.dispatch_review_create(ReviewCreateAction::Request);
    let token = store.user_login.with_untracked(|s| s.token().map(str::to_string));
    let Some(token) = token else {
        store.dispatch_review_create(ReviewCreateAction::Fail("Not authorized, no token".into()));
        return;
    };

    spawn_local(async move {
        match post_review(&id, &token, &review).await {
            Ok(()) => {
                log!("[ACTION] Review submitted for {}", id);
                store.dispatch_review_create(ReviewCreateAction::Success);
            }
            Err(message) => store.dispatch_review_create(ReviewCreateAction::Fail(message)),
        }
    });
}

pub fn reset_product_review(store: Store) {
    store.dispatch_review_create(ReviewCreateAction::Reset);
}

pub fn add_to_cart(store: Store, id: String, qty: u32) {
    spawn_local(async move {
        match fetch_product(&id).await {
            Ok(product) => {
                let qty = qty.clamp(1, product.count_in_stock.max(1));
                store.dispatch_cart(CartAction::AddItem(CartItem::from_product(&product, qty)));
                save_cart(store);
            }
            Err(message) => error!("[ACTION] Could not add {} to cart: {}", id, message),
        }
    });
}

pub fn update_cart_qty(store: Store, id: String, qty: u32) {
    store.dispatch_cart(CartAction::UpdateQty(id, qty));
    save_cart(store);
}

pub fn remove_from_cart(store: Store, id: String) {
    store.dispatch_cart(CartAction::RemoveItem(id));
    save_cart(store);
}

fn save_cart(store: Store) {
    store.cart.with_untracked(|cart| storage::save(CART_ITEMS_KEY, &cart.items));
}

async fn post_login(email: String) -> Result<UserInfo, String> {
    let response = Request::post(&format!("{}/users/login", API_BASE))
        .json(&LoginRequest { email })
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    read_json(response).await
}

pub fn login(store: Store, email: String) {
    store.dispatch_user_login(UserLoginAction::Request);
    spawn_local(async move {
        match post_login(email).await {
            Ok(user) => {
                storage::save(USER_INFO_KEY, &user);
                store.dispatch_user_login(UserLoginAction::Success(user));
            }
            Err(message) => store.dispatch_user_login(UserLoginAction::Fail(message)),
        }
    });
}

pub fn logout(store: Store) {
    storage::remove(USER_INFO_KEY);
    store.dispatch_user_login(UserLoginAction::Logout);
}

/// Restores the session and cart saved by a previous visit.
pub fn restore_session(store: Store) {
    if let Some(user) = storage::load::<UserInfo>(USER_INFO_KEY) {
        store.dispatch_user_login(UserLoginAction::Success(user));
    }
    if let Some(items) = storage::load::<Vec<CartItem>>(CART_ITEMS_KEY) {
        for item in items {
            store.dispatch_cart(CartAction::AddItem(item));
        }
    }
}
