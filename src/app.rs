//! Root component: provides the store and meta context, restores the saved
//! session and cart in the browser, and routes between the screens.
use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use crate::actions;
use crate::components::header::Header;
use crate::components::message::Message;
use crate::screens::cart_screen::CartScreen;
use crate::screens::home_screen::HomeScreen;
use crate::screens::login_screen::LoginScreen;
use crate::screens::product_screen::ProductScreen;
use crate::state::Store;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    let store = Store::new().provide();

    // Effects only run in the browser, where localStorage exists.
    create_effect(move |_| actions::restore_session(store));

    view! {
        <Stylesheet id="leptos" href="/pkg/storefront.css" />
        <Link
            rel="stylesheet"
            href="https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css"
        />
        <Link
            rel="stylesheet"
            href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css"
        />
        <Router>
            <Header />
            <main class="py-3">
                <div class="container">
                    <Routes>
                        <Route path="/" view=HomeScreen />
                        <Route path="/product/:id" view=ProductScreen />
                        <Route path="/cart" view=CartScreen />
                        <Route path="/cart/:id" view=CartScreen />
                        <Route path="/login" view=LoginScreen />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </div>
            </main>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <Message variant="danger">
            { "Page not found " }
            <A href="/">{ "Go Back" }</A>
        </Message>
    }
}
