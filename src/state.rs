//! Application-wide state shared through Leptos context.
//!
//! Every slice is a plain struct with a `reduce` transition so it can be
//! driven and tested without a reactive runtime. [`Store`] wraps the slices
//! in signals and is provided once by the root component.
use leptos::*;
use crate::models::cart::CartItem;
use crate::models::product::Product;
use crate::models::user::UserInfo;

#[derive(Debug, Clone, PartialEq)]
pub enum FetchAction<T> {
    Request,
    Success(T),
    Fail(String),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductDetailsState {
    pub loading: bool,
    pub error: Option<String>,
    pub product: Option<Product>,
}

impl ProductDetailsState {
    pub fn reduce(&mut self, action: FetchAction<Product>) {
        match action {
            FetchAction::Request => self.loading = true,
            FetchAction::Success(product) => {
                self.loading = false;
                self.error = None;
                self.product = Some(product);
            }
            FetchAction::Fail(message) => {
                self.loading = false;
                self.error = Some(message);
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductListState {
    pub loading: bool,
    pub error: Option<String>,
    pub products: Vec<Product>,
}

impl ProductListState {
    pub fn reduce(&mut self, action: FetchAction<Vec<Product>>) {
        match action {
            FetchAction::Request => self.loading = true,
            FetchAction::Success(products) => {
                self.loading = false;
                self.error = None;
                self.products = products;
            }
            FetchAction::Fail(message) => {
                self.loading = false;
                self.error = Some(message);
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ReviewCreateAction {
    Request,
    Success,
    Fail(String),
    Reset,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReviewCreateState {
    pub loading: bool,
    pub success: bool,
    pub error: Option<String>,
}

impl ReviewCreateState {
    pub fn reduce(&mut self, action: ReviewCreateAction) {
        match action {
            ReviewCreateAction::Request => {
                self.loading = true;
                self.error = None;
            }
            ReviewCreateAction::Success => {
                self.loading = false;
                self.success = true;
            }
            ReviewCreateAction::Fail(message) => {
                self.loading = false;
                self.error = Some(message);
            }
            ReviewCreateAction::Reset => *self = ReviewCreateState::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum UserLoginAction {
    Request,
    Success(UserInfo),
    Fail(String),
    Logout,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserLoginState {
    pub loading: bool,
    pub error: Option<String>,
    pub user_info: Option<UserInfo>,
}

impl UserLoginState {
    pub fn reduce(&mut self, action: UserLoginAction) {
        match action {
            UserLoginAction::Request => {
                self.loading = true;
                self.error = None;
            }
            UserLoginAction::Success(user) => {
                self.loading = false;
                self.user_info = Some(user);
            }
            UserLoginAction::Fail(message) => {
                self.loading = false;
                self.error = Some(message);
            }
            UserLoginAction::Logout => *self = UserLoginState::default(),
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.user_info.as_ref().map(|u| u.token.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CartAction {
    AddItem(CartItem),
    RemoveItem(String),
    UpdateQty(String, u32),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartState {
    pub items: Vec<CartItem>,
}

impl CartState {
    pub fn reduce(&mut self, action: CartAction) {
        match action {
            CartAction::AddItem(item) => {
                // A product occupies a single line; adding it again replaces the line.
                match self.items.iter_mut().find(|i| i.product_id == item.product_id) {
                    Some(existing) => *existing = item,
                    None => self.items.push(item),
                }
            }
            CartAction::RemoveItem(product_id) => {
                self.items.retain(|i| i.product_id != product_id);
            }
            CartAction::UpdateQty(product_id, qty) => {
                if let Some(item) = self.items.iter_mut().find(|i| i.product_id == product_id) {
                    item.qty = qty.clamp(1, item.count_in_stock.max(1));
                }
            }
        }
    }

    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|i| i.qty).sum()
    }

    /// Sum of qty × price, rounded to cents.
    pub fn subtotal(&self) -> f64 {
        let total: f64 = self.items.iter().map(|i| i.qty as f64 * i.price).sum();
        (total * 100.0).round() / 100.0
    }
}

/// Signals for every slice. `Copy`, so components capture it freely.
#[derive(Clone, Copy)]
pub struct Store {
    pub product_list: RwSignal<ProductListState>,
    pub product_details: RwSignal<ProductDetailsState>,
    pub product_review_create: RwSignal<ReviewCreateState>,
    pub user_login: RwSignal<UserLoginState>,
    pub cart: RwSignal<CartState>,
}

impl Store {
    pub fn new() -> Self {
        Store {
            product_list: create_rw_signal(ProductListState::default()),
            product_details: create_rw_signal(ProductDetailsState::default()),
            product_review_create: create_rw_signal(ReviewCreateState::default()),
            user_login: create_rw_signal(UserLoginState::default()),
            cart: create_rw_signal(CartState::default()),
        }
    }

    pub fn provide(self) -> Self {
        provide_context(self);
        self
    }

    pub fn dispatch_product_list(&self, action: FetchAction<Vec<Product>>) {
        self.product_list.update(|s| s.reduce(action));
    }

    pub fn dispatch_product_details(&self, action: FetchAction<Product>) {
        self.product_details.update(|s| s.reduce(action));
    }

    pub fn dispatch_review_create(&self, action: ReviewCreateAction) {
        self.product_review_create.update(|s| s.reduce(action));
    }

    pub fn dispatch_user_login(&self, action: UserLoginAction) {
        self.user_login.update(|s| s.reduce(action));
    }

    pub fn dispatch_cart(&self, action: CartAction) {
        self.cart.update(|s| s.reduce(action));
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_store() -> Store {
    expect_context::<Store>()
}
