use leptos::*;
use crate::actions;
use crate::components::loader::Loader;
use crate::components::message::Message;
use crate::components::meta::Meta;
use crate::components::product_grid::ProductGrid;
use crate::state::use_store;

#[component]
pub fn HomeScreen() -> impl IntoView {
    let store = use_store();
    create_effect(move |_| actions::list_products(store));

    view! {
        <Meta />
        <h1>{ "Latest Products" }</h1>
        {move || {
            let state = store.product_list.get();
            if state.loading {
                view! { <Loader /> }.into_view()
            } else if let Some(error) = state.error {
                view! { <Message variant="danger">{ error }</Message> }.into_view()
            } else {
                view! { <ProductGrid products=state.products /> }.into_view()
            }
        }}
    }
}
