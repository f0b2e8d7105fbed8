use leptos::*;
use leptos::ev::SubmitEvent;
use leptos_router::A;
use crate::components::message::Message;
use crate::utils::format::RATING_OPTIONS;

/// "Write a Customer Review" block. Shows the form to signed-in users and a
/// sign-in prompt to everyone else; the field values live with the caller.
#[component]
pub fn ReviewForm(
    #[prop(into)] signed_in: Signal<bool>,
    #[prop(into)] error: Signal<Option<String>>,
    rating: RwSignal<u8>,
    comment: RwSignal<String>,
    on_submit: Callback<()>,
) -> impl IntoView {
    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        on_submit.call(());
    };

    view! {
        <ul class="list-group list-group-flush">
            <li class="list-group-item">
                <h2>{ "Write a Customer Review" }</h2>
                {move || error.get().map(|message| view! {
                    <Message variant="danger">{ message }</Message>
                })}
                {move || if signed_in.get() {
                    view! {
                        <form on:submit=handle_submit>
                            <div class="form-group">
                                <label for="rating" class="form-label">{ "Rating" }</label>
                                <select
                                    id="rating"
                                    class="form-control"
                                    prop:value=move || {
                                        match rating.get() {
                                            0 => String::new(),
                                            n => n.to_string(),
                                        }
                                    }
                                    on:change=move |e| rating.set(event_target_value(&e).parse::<u8>().unwrap_or(0))
                                >
                                    <option value="" selected=move || rating.get() == 0>{ "Select.." }</option>
                                    {RATING_OPTIONS.iter().map(|&(value, label)| view! {
                                        <option value=value.to_string() selected=move || rating.get() == value>
                                            { label }
                                        </option>
                                    }).collect::<Vec<_>>()}
                                </select>
                            </div>
                            <div class="form-group">
                                <label for="comment" class="form-label">{ "Comment" }</label>
                                <textarea
                                    id="comment"
                                    class="form-control"
                                    rows="3"
                                    prop:value=move || comment.get()
                                    on:input=move |e| comment.set(event_target_value(&e))
                                ></textarea>
                            </div>
                            <button type="submit" class="btn btn-primary mt-3">{ "Submit" }</button>
                        </form>
                    }.into_view()
                } else {
                    view! {
                        <Message>
                            <A href="/login">{ "Sign In" }</A>
                            { " to leave a Review" }
                        </Message>
                    }.into_view()
                }}
            </li>
        </ul>
    }
}
