use leptos::*;
use leptos_router::*;
use crate::actions;
use crate::components::loader::Loader;
use crate::components::message::Message;
use crate::components::meta::Meta;
use crate::components::product_details::ProductDetails;
use crate::components::review_form::ReviewForm;
use crate::components::reviews_list::ReviewsList;
use crate::models::review::ReviewInput;
use crate::state::use_store;
use crate::utils::format::cart_path;

pub const REVIEW_SUBMITTED: &str = "Review Submitted!";

#[derive(Params, PartialEq, Clone, Debug)]
pub struct ProductParams {
    pub id: Option<String>,
}

/// `/product/:id`: product facts, add-to-cart and customer reviews.
#[component]
pub fn ProductScreen() -> impl IntoView {
    let store = use_store();
    let params = use_params::<ProductParams>();
    let product_id = create_memo(move |_| {
        params.with(|p| p.as_ref().ok().and_then(|p| p.id.clone()))
    });

    let rating = create_rw_signal(0u8);
    let comment = create_rw_signal(String::new());
    let qty = create_rw_signal(1u32);

    let review_submitted = create_memo(move |_| store.product_review_create.with(|s| s.success));

    // Fetch on mount, when the route id changes, and after a review lands.
    // A new product starts again from a quantity of one.
    // Resetting the review slice re-runs this effect; that pass must not refetch.
    create_effect(move |prev: Option<Option<String>>| {
        let id = product_id.get();
        let submitted = review_submitted.get();
        if submitted {
            let _ = window().alert_with_message(REVIEW_SUBMITTED);
            rating.set(0);
            comment.set(String::new());
            actions::reset_product_review(store);
        }
        let id_changed = prev.as_ref() != Some(&id);
        if id_changed {
            qty.set(1);
        }
        if submitted || id_changed {
            if let Some(id) = id.clone() {
                actions::list_product_details(store, id);
            }
        }
        id
    });

    let navigate = use_navigate();
    let add_to_cart = Callback::new(move |_: ()| {
        if let Some(id) = product_id.get_untracked() {
            navigate(&cart_path(&id, qty.get_untracked()), Default::default());
        }
    });

    let submit_review = Callback::new(move |_: ()| {
        if let Some(id) = product_id.get_untracked() {
            actions::create_product_review(
                store,
                id,
                ReviewInput {
                    rating: rating.get_untracked(),
                    comment: comment.get_untracked(),
                },
            );
        }
    });

    let signed_in = Signal::derive(move || store.user_login.with(|s| s.user_info.is_some()));
    let review_error = Signal::derive(move || {
        store.product_review_create.with(|s| s.error.clone())
    });

    view! {
        <A href="/" class="btn btn-light my-3">{ "< Go Back" }</A>
        {move || {
            let state = store.product_details.get();
            if state.loading {
                return view! { <Loader /> }.into_view();
            }
            if let Some(error) = state.error {
                return view! { <Message variant="danger">{ error }</Message> }.into_view();
            }
            let Some(product) = state.product else {
                return view! { <Loader /> }.into_view();
            };

            let title = product.name.clone();
            let reviews = product.reviews.clone();
            view! {
                <Meta title=title />
                <ProductDetails product=product qty=qty on_add_to_cart=add_to_cart />
                <div class="row mt-3">
                    <hr />
                    <div class="col">
                        <ReviewForm
                            signed_in=signed_in
                            error=review_error
                            rating=rating
                            comment=comment
                            on_submit=submit_review
                        />
                    </div>
                    <div class="col-md-1"></div>
                    <div class="col-md-6">
                        <ReviewsList reviews=reviews />
                    </div>
                </div>
            }.into_view()
        }}
    }
}
