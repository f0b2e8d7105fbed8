use leptos::*;
use leptos_router::{use_location, A};
use crate::actions;
use crate::state::use_store;
use crate::utils::format::login_path;

#[component]
pub fn Header() -> impl IntoView {
    let store = use_store();
    let cart_count = move || store.cart.with(|cart| cart.item_count());
    let user_name = move || store.user_login.with(|s| s.user_info.as_ref().map(|u| u.name.clone()));
    let pathname = use_location().pathname;
    // Come back to the current page after signing in, unless already on /login.
    let sign_in_path = move || {
        let here = pathname.get();
        if here == "/" || here.starts_with("/login") {
            login_path(None)
        } else {
            login_path(Some(&here))
        }
    };

    view! {
        <header>
            <nav class="navbar navbar-expand-lg navbar-dark bg-dark">
                <div class="container">
                    <A href="/" class="navbar-brand">{ "Storefront" }</A>
                    <div class="navbar-nav ms-auto">
                        <A href="/cart" class="nav-link">
                            <i class="fas fa-shopping-cart"></i>
                            { " Cart " }
                            <span class="badge bg-secondary">{ cart_count }</span>
                        </A>
                        {move || match user_name() {
                            Some(name) => view! {
                                <span class="nav-link">{ name }</span>
                                <button
                                    type="button"
                                    class="btn btn-link nav-link"
                                    on:click=move |_| actions::logout(store)
                                >
                                    { "Logout" }
                                </button>
                            }.into_view(),
                            None => view! {
                                <A href=sign_in_path class="nav-link">
                                    <i class="fas fa-user"></i>
                                    { " Sign In" }
                                </A>
                            }.into_view(),
                        }}
                    </div>
                </div>
            </nav>
        </header>
    }
}
