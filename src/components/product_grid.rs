//! Grid of product cards for the catalogue page.
//! Each card links through to the product page and shows image, name, rating and price.
use leptos::*;
use leptos_router::A;
use crate::components::rating::Rating;
use crate::models::product::Product;
use crate::utils::format::{format_price, product_path};

#[component]
pub fn ProductGrid(products: Vec<Product>) -> impl IntoView {
    view! {
        <div class="row">
            {products.into_iter().map(|product| {
                let path = product_path(&product.id);
                let reviews_text = format!(" {} reviews", product.num_reviews);
                let name = product.name.clone();
                view! {
                    <div class="col-sm-12 col-md-6 col-lg-4 col-xl-3">
                        <div class="card my-3 p-3 rounded">
                            <A href=path.clone()>
                                <img class="card-img-top" src=product.image alt=name />
                            </A>
                            <div class="card-body">
                                <A href=path>
                                    <div class="card-title"><strong>{ product.name }</strong></div>
                                </A>
                                <div class="card-text">
                                    <Rating value=product.rating text=reviews_text />
                                </div>
                                <h3 class="card-text">{ format_price(product.price) }</h3>
                            </div>
                        </div>
                    </div>
                }
            }).collect::<Vec<_>>()}
        </div>
    }
}
