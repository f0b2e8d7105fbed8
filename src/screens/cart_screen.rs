use leptos::*;
use leptos_router::*;
use crate::actions;
use crate::components::message::Message;
use crate::components::meta::Meta;
use crate::state::use_store;
use crate::utils::format::{format_price, product_path, quantity_options};

#[derive(Params, PartialEq, Clone, Debug)]
pub struct CartParams {
    pub id: Option<String>,
}

/// Quantity from `?qty=`, falling back to one when absent or malformed.
pub fn requested_qty(raw: Option<&str>) -> u32 {
    raw.and_then(|q| q.parse::<u32>().ok())
        .filter(|q| *q > 0)
        .unwrap_or(1)
}

/// `/cart/:id?qty=n` adds the product before listing the cart; `/cart` only lists it.
#[component]
pub fn CartScreen() -> impl IntoView {
    let store = use_store();
    let params = use_params::<CartParams>();
    let query = use_query_map();

    create_effect(move |_| {
        let id = params.with(|p| p.as_ref().ok().and_then(|p| p.id.clone()));
        let qty = query.with(|q| requested_qty(q.get("qty").map(String::as_str)));
        if let Some(id) = id {
            actions::add_to_cart(store, id, qty);
        }
    });

    view! {
        <Meta title="Shopping Cart" />
        <div class="row">
            <div class="col-md-8">
                <h1>{ "Shopping Cart" }</h1>
                {move || {
                    let items = store.cart.with(|cart| cart.items.clone());
                    if items.is_empty() {
                        return view! {
                            <Message>
                                { "Your cart is empty " }
                                <A href="/">{ "Go Back" }</A>
                            </Message>
                        }.into_view();
                    }
                    view! {
                        <ul class="list-group list-group-flush">
                            {items.into_iter().map(|item| {
                                let id = item.product_id.clone();
                                let remove_id = item.product_id.clone();
                                let qty = item.qty;
                                view! {
                                    <li class="list-group-item">
                                        <div class="row">
                                            <div class="col-md-2">
                                                <img class="img-fluid rounded" src=item.image alt=item.name.clone() />
                                            </div>
                                            <div class="col-md-3">
                                                <A href=product_path(&item.product_id)>{ item.name }</A>
                                            </div>
                                            <div class="col-md-2">{ format_price(item.price) }</div>
                                            <div class="col-md-2">
                                                <select
                                                    class="form-select"
                                                    on:change=move |e| {
                                                        let qty = event_target_value(&e).parse::<u32>().unwrap_or(1);
                                                        actions::update_cart_qty(store, id.clone(), qty);
                                                    }
                                                >
                                                    {quantity_options(item.count_in_stock).into_iter().map(|n| view! {
                                                        <option value=n.to_string() selected={qty == n}>{ n }</option>
                                                    }).collect::<Vec<_>>()}
                                                </select>
                                            </div>
                                            <div class="col-md-2">
                                                <button
                                                    type="button"
                                                    class="btn btn-light"
                                                    on:click=move |_| actions::remove_from_cart(store, remove_id.clone())
                                                >
                                                    <i class="fas fa-trash"></i>
                                                </button>
                                            </div>
                                        </div>
                                    </li>
                                }
                            }).collect::<Vec<_>>()}
                        </ul>
                    }.into_view()
                }}
            </div>
            <div class="col-md-4">
                <div class="card">
                    <ul class="list-group list-group-flush">
                        <li class="list-group-item">
                            <h2>{ move || format!("Subtotal ({}) items", store.cart.with(|c| c.item_count())) }</h2>
                            { move || format_price(store.cart.with(|c| c.subtotal())) }
                        </li>
                    </ul>
                </div>
            </div>
        </div>
    }
}
