use leptos::*;
use crate::components::message::Message;
use crate::components::rating::Rating;
use crate::models::review::Review;

#[component]
pub fn ReviewsList(reviews: Vec<Review>) -> impl IntoView {
    let empty = reviews.is_empty();
    view! {
        <div class="reviews">
            <h2>{ "Reviews" }</h2>
            {empty.then(|| view! { <Message variant="danger">{ "No Reviews" }</Message> })}
            <ul class="list-group list-group-flush">
                {
                    reviews.into_iter().map(|review| {
                        let date = review.date();
                        view! {
                            <li class="list-group-item">
                                <strong>{ review.name }</strong>
                                <Rating value=f64::from(review.rating) />
                                <p>{ date }</p>
                                <p>{ review.comment }</p>
                            </li>
                        }
                    }).collect::<Vec<_>>()
                }
            </ul>
        </div>
    }
}
