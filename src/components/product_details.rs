use leptos::*;
use crate::components::rating::Rating;
use crate::models::product::Product;
use crate::utils::format::{format_price, quantity_options, stock_status};

/// Image and facts for one product, plus the quantity picker and the
/// "Add to Cart" button when the product is in stock.
#[component]
pub fn ProductDetails(
    product: Product,
    qty: RwSignal<u32>,
    on_add_to_cart: Callback<()>,
) -> impl IntoView {
    let in_stock = product.in_stock();
    let stock = product.count_in_stock;
    let reviews_text = format!(" {} reviews", product.num_reviews);

    view! {
        <div class="row">
            <div class="col-md-5">
                <img class="img-fluid" src=product.image.clone() alt=product.name.clone() />
            </div>
            <div class="col-md-7">
                <ul class="list-group list-group-flush">
                    <li class="list-group-item">
                        <h3>{ product.name.clone() }</h3>
                    </li>
                    <li class="list-group-item">
                        <Rating value=product.rating text=reviews_text />
                    </li>
                    <li class="list-group-item">
                        <div class="row">
                            <div class="col-md-2">{ "Price" }</div>
                            <div class="col">
                                <strong>{ format_price(product.price) }</strong>
                            </div>
                        </div>
                    </li>
                    <li class="list-group-item">
                        <div class="row">
                            <div class="col-md-2">{ "Status" }</div>
                            <div class="col stock-status">{ stock_status(stock) }</div>
                        </div>
                    </li>
                    <li class="list-group-item">
                        <div class="row">
                            <div class="col-md-2">{ "Description" }</div>
                            <div class="col">{ product.description.clone() }</div>
                        </div>
                    </li>
                    {in_stock.then(|| view! {
                        <li class="list-group-item add-to-cart">
                            <div class="row">
                                <div class="col-md-2" style="display: flex; align-items: center;">
                                    { "Quantity " }
                                </div>
                                <div class="col-md-3">
                                    <select
                                        class="form-select"
                                        prop:value=move || qty.get().to_string()
                                        on:change=move |e| {
                                            qty.set(event_target_value(&e).parse::<u32>().unwrap_or(1))
                                        }
                                    >
                                        {quantity_options(stock).into_iter().map(|n| view! {
                                            <option value=n.to_string() selected=move || qty.get() == n>{ n }</option>
                                        }).collect::<Vec<_>>()}
                                    </select>
                                </div>
                            </div>
                            <div class="row mt-3">
                                <div class="col-md-5">
                                    <button
                                        type="button"
                                        class="btn btn-primary btn-block"
                                        style="width: 100%;"
                                        disabled={stock == 0}
                                        on:click=move |_| on_add_to_cart.call(())
                                    >
                                        { "Add to Cart" }
                                    </button>
                                </div>
                            </div>
                        </li>
                    })}
                </ul>
            </div>
        </div>
    }
}
