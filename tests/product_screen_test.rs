#![cfg(target_arch = "wasm32")]

use chrono::{TimeZone, Utc};
use gloo_timers::future::sleep;
use leptos::*;
use leptos_router::*;
use serde_json::json;
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;
use storefront::models::product::Product;
use storefront::models::review::Review;
use storefront::models::user::UserInfo;
use storefront::screens::product_screen::{ProductScreen, REVIEW_SUBMITTED};
use storefront::state::{ReviewCreateState, Store, UserLoginAction};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

mod mocks;
use mocks::dom::{alert_messages, field_value, go_to, set_field, stub_alert};
use mocks::fetch_mock::{fetch_call_count, last_fetch_request, setup_fetch_mock};

wasm_bindgen_test_configure!(run_in_browser);

fn sample_product(id: &str, stock: u32, reviews: Vec<Review>) -> Product {
    Product {
        id: id.into(),
        name: "Cannon EOS 80D DSLR Camera".into(),
        image: "/images/camera.jpg".into(),
        brand: "Cannon".into(),
        category: "Electronics".into(),
        description: "Characterized by versatile imaging specs".into(),
        price: 92999.99,
        count_in_stock: stock,
        rating: 4.5,
        num_reviews: reviews.len() as u32,
        reviews,
    }
}

fn sample_review() -> Review {
    Review {
        id: "r1".into(),
        name: "Jane Doe".into(),
        rating: 4,
        comment: "Sharp pictures".into(),
        user_id: "u1".into(),
        created_at: Utc.with_ymd_and_hms(2024, 3, 9, 15, 30, 0).unwrap(),
    }
}

fn sample_user() -> UserInfo {
    UserInfo {
        id: "u1".into(),
        name: "Jane Doe".into(),
        email: "jane@example.com".into(),
        token: "token-123".into(),
    }
}

fn serve_products(products: &[Product]) {
    serve_routes(products, json!({}));
}

/// Serves every product at `GET /api/products/<id>` plus the `extra` routes.
fn serve_routes(products: &[Product], extra: serde_json::Value) {
    let mut routes = serde_json::Map::new();
    for product in products {
        routes.insert(
            format!("/api/products/{}", product.id),
            json!({ "status": 200, "body": product }),
        );
    }
    if let serde_json::Value::Object(extra) = extra {
        routes.extend(extra);
    }
    assert!(setup_fetch_mock(&serde_json::Value::Object(routes).to_string()));
}

/// Mounts the product screen at `/product/<id>` inside a fresh container and
/// hands back the store it was given.
fn mount_product_screen(id: &str, user: Option<UserInfo>) -> (web_sys::HtmlElement, Store) {
    let window = web_sys::window().unwrap();
    window
        .history()
        .unwrap()
        .push_state_with_url(&JsValue::NULL, "", Some(&format!("/product/{}", id)))
        .unwrap();

    let document = window.document().unwrap();
    let container: web_sys::HtmlElement = document
        .create_element("div")
        .unwrap()
        .dyn_into()
        .unwrap();
    document.body().unwrap().append_child(&container).unwrap();

    let provided = Rc::new(Cell::new(None));
    let slot = provided.clone();
    mount_to(container.clone(), move || {
        let store = Store::new().provide();
        if let Some(user) = user {
            store.dispatch_user_login(UserLoginAction::Success(user));
        }
        slot.set(Some(store));
        view! {
            <Router>
                <Routes>
                    <Route path="/product/:id" view=ProductScreen />
                    <Route path="/cart/:id" view=|| view! { <p id="cart-page">{ "Cart" }</p> } />
                </Routes>
            </Router>
        }
    });
    let store = provided.get().expect("store provided during mount");
    (container, store)
}

/// Polls until the container's text contains `needle`.
async fn wait_for_text(container: &web_sys::HtmlElement, needle: &str) -> String {
    let mut text = String::new();
    for _ in 0..20 {
        text = container.text_content().unwrap_or_default();
        if text.contains(needle) {
            return text;
        }
        sleep(Duration::from_millis(50)).await;
    }
    panic!("'{}' never rendered, last text: {}", needle, text);
}

/// Polls until `done` holds.
async fn wait_until(what: &str, done: impl Fn() -> bool) {
    for _ in 0..20 {
        if done() {
            return;
        }
        sleep(Duration::from_millis(50)).await;
    }
    panic!("timed out waiting for {}", what);
}

fn element(container: &web_sys::HtmlElement, selector: &str) -> web_sys::Element {
    container
        .query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("no element matches {}", selector))
}

fn click(container: &web_sys::HtmlElement, selector: &str) {
    element(container, selector)
        .dyn_into::<web_sys::HtmlElement>()
        .unwrap()
        .click();
}

/// Fills and submits the review form.
fn submit_review(container: &web_sys::HtmlElement, rating: &str, comment: &str) {
    set_field(&element(container, "form select"), rating, "change");
    set_field(&element(container, "form textarea"), comment, "input");
    click(container, "form button[type='submit']");
}

fn count(container: &web_sys::HtmlElement, selector: &str) -> u32 {
    container.query_selector_all(selector).unwrap().length()
}

fn cleanup(container: web_sys::HtmlElement) {
    container.remove();
}

#[wasm_bindgen_test]
async fn test_in_stock_product_renders_details_and_cart_controls() {
    let product = sample_product("cam-1", 3, vec![]);
    serve_products(&[product]);

    let (container, _) = mount_product_screen("cam-1", None);
    let text = wait_for_text(&container, "Cannon EOS 80D DSLR Camera").await;

    assert!(text.contains("₨92,999.99"));
    assert!(text.contains("In Stock"));
    assert!(text.contains(" 0 reviews"));
    assert!(text.contains("< Go Back"));
    assert_eq!(count(&container, ".add-to-cart select option"), 3);
    assert_eq!(count(&container, ".add-to-cart button"), 1);
    assert_eq!(fetch_call_count("GET /api/products/cam-1"), 1);

    cleanup(container);
}

#[wasm_bindgen_test]
async fn test_out_of_stock_hides_cart_controls() {
    let product = sample_product("cam-2", 0, vec![]);
    serve_products(&[product]);

    let (container, _) = mount_product_screen("cam-2", None);
    let text = wait_for_text(&container, "Out of Stock").await;

    assert!(!text.contains("Add to Cart"));
    assert_eq!(count(&container, ".add-to-cart"), 0);

    cleanup(container);
}

#[wasm_bindgen_test]
async fn test_signed_out_visitor_sees_sign_in_prompt() {
    let product = sample_product("cam-3", 1, vec![]);
    serve_products(&[product]);

    let (container, _) = mount_product_screen("cam-3", None);
    let text = wait_for_text(&container, "Write a Customer Review").await;

    assert!(text.contains("Sign In"));
    assert!(text.contains("to leave a Review"));
    assert!(text.contains("No Reviews"));
    assert_eq!(count(&container, "form"), 0);
    assert_eq!(count(&container, "a[href='/login']"), 1);

    cleanup(container);
}

#[wasm_bindgen_test]
async fn test_signed_in_user_gets_review_form_and_review_list() {
    let product = sample_product("cam-4", 2, vec![sample_review()]);
    serve_products(&[product]);

    let (container, _) = mount_product_screen("cam-4", Some(sample_user()));
    let text = wait_for_text(&container, "Sharp pictures").await;

    assert_eq!(count(&container, "form"), 1);
    // "Select.." plus five ratings
    assert_eq!(count(&container, "form select option"), 6);
    assert!(text.contains("5 - Excellent"));
    assert!(text.contains("2024-03-09"));
    assert!(text.contains("Jane Doe"));
    assert!(!text.contains("No Reviews"));

    cleanup(container);
}

#[wasm_bindgen_test]
async fn test_fetch_error_is_shown_verbatim() {
    serve_products(&[]);

    let (container, _) = mount_product_screen("missing", None);
    wait_for_text(&container, "Product not found").await;
    assert_eq!(count(&container, ".alert-danger"), 1);

    cleanup(container);
}

#[wasm_bindgen_test]
async fn test_review_post_carries_bearer_token_and_fields() {
    stub_alert();
    let product = sample_product("cam-5", 2, vec![]);
    serve_routes(
        &[product],
        json!({
            "POST /api/products/cam-5/reviews": { "status": 201, "body": { "message": "Review added" } }
        }),
    );

    let (container, _) = mount_product_screen("cam-5", Some(sample_user()));
    wait_for_text(&container, "Write a Customer Review").await;
    submit_review(&container, "4", "Great camera");

    let call = "POST /api/products/cam-5/reviews";
    wait_until(call, || last_fetch_request(call) != "null").await;
    let request: serde_json::Value = serde_json::from_str(&last_fetch_request(call)).unwrap();
    assert_eq!(request["authorization"], "Bearer token-123");
    assert_eq!(request["body"]["rating"], 4);
    assert_eq!(request["body"]["comment"], "Great camera");
    assert_eq!(fetch_call_count(call), 1);

    cleanup(container);
}

#[wasm_bindgen_test]
async fn test_successful_review_resets_form_and_refetches_once() {
    stub_alert();
    let product = sample_product("cam-6", 2, vec![]);
    serve_routes(
        &[product],
        json!({
            "POST /api/products/cam-6/reviews": { "status": 201, "body": { "message": "Review added" } }
        }),
    );

    let (container, store) = mount_product_screen("cam-6", Some(sample_user()));
    wait_for_text(&container, "Write a Customer Review").await;
    submit_review(&container, "5", "Love it");

    let get = "GET /api/products/cam-6";
    wait_until("product refetch", || fetch_call_count(get) == 2).await;
    wait_for_text(&container, "Write a Customer Review").await;
    // Resetting the review slice must not trigger a third fetch
    sleep(Duration::from_millis(200)).await;
    assert_eq!(fetch_call_count(get), 2);

    let alerts: Vec<String> = serde_json::from_str(&alert_messages()).unwrap();
    assert_eq!(alerts, vec![REVIEW_SUBMITTED.to_string()]);
    assert_eq!(store.product_review_create.get_untracked(), ReviewCreateState::default());
    assert_eq!(field_value(&element(&container, "form select")), "");
    assert_eq!(field_value(&element(&container, "form textarea")), "");

    cleanup(container);
}

#[wasm_bindgen_test]
async fn test_rejected_review_shows_server_message() {
    stub_alert();
    let product = sample_product("cam-7", 2, vec![]);
    serve_routes(
        &[product],
        json!({
            "POST /api/products/cam-7/reviews": { "status": 400, "body": { "message": "Product already reviewed" } }
        }),
    );

    let (container, store) = mount_product_screen("cam-7", Some(sample_user()));
    wait_for_text(&container, "Write a Customer Review").await;
    submit_review(&container, "3", "Again");

    wait_for_text(&container, "Product already reviewed").await;
    let alert = element(&container, ".alert-danger");
    assert_eq!(alert.text_content().unwrap_or_default().trim(), "Product already reviewed");
    assert_eq!(count(&container, ".alert-danger"), 1);
    // A failed attempt keeps what was entered
    assert_eq!(count(&container, "form option[value='3'][selected]"), 1);
    assert_eq!(count(&container, "form option[selected]"), 1);
    assert_eq!(field_value(&element(&container, "form textarea")), "Again");
    assert!(!store.product_review_create.get_untracked().success);
    assert_eq!(fetch_call_count("GET /api/products/cam-7"), 1);
    assert_eq!(alert_messages(), "[]");

    cleanup(container);
}

#[wasm_bindgen_test]
async fn test_add_to_cart_navigates_with_selected_quantity() {
    let product = sample_product("cam-8", 3, vec![]);
    serve_products(&[product]);

    let (container, _) = mount_product_screen("cam-8", None);
    wait_for_text(&container, "Add to Cart").await;
    assert_eq!(count(&container, ".add-to-cart option[value='1'][selected]"), 1);

    set_field(&element(&container, ".add-to-cart select"), "2", "change");
    // The chosen quantity is carried by the option itself
    wait_until("quantity 2 selected", || {
        count(&container, ".add-to-cart option[value='2'][selected]") == 1
    })
    .await;
    assert_eq!(count(&container, ".add-to-cart option[selected]"), 1);

    click(&container, ".add-to-cart button");
    let location = web_sys::window().unwrap().location();
    wait_until("cart navigation", || {
        location.pathname().map(|p| p == "/cart/cam-8").unwrap_or(false)
    })
    .await;
    assert_eq!(location.search().unwrap(), "?qty=2");

    cleanup(container);
}

#[wasm_bindgen_test]
async fn test_switching_products_resets_quantity() {
    let first = sample_product("cam-9", 3, vec![]);
    let mut second = sample_product("cam-10", 3, vec![]);
    second.name = "Nikon D850".into();
    serve_products(&[first, second]);

    let (container, _) = mount_product_screen("cam-9", None);
    wait_for_text(&container, "Add to Cart").await;
    set_field(&element(&container, ".add-to-cart select"), "3", "change");
    wait_until("quantity 3 selected", || {
        count(&container, ".add-to-cart option[value='3'][selected]") == 1
    })
    .await;

    go_to("/product/cam-10");
    wait_for_text(&container, "Nikon D850").await;
    assert_eq!(count(&container, ".add-to-cart option[value='1'][selected]"), 1);
    assert_eq!(count(&container, ".add-to-cart option[selected]"), 1);
    assert_eq!(field_value(&element(&container, ".add-to-cart select")), "1");

    cleanup(container);
}
