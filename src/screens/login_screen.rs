use leptos::*;
use leptos::ev::SubmitEvent;
use leptos_router::*;
use crate::actions;
use crate::components::loader::Loader;
use crate::components::message::Message;
use crate::components::meta::Meta;
use crate::state::use_store;

/// Where to go after signing in: the `redirect` query value, or home.
pub fn redirect_target(raw: Option<&str>) -> String {
    match raw {
        Some(target) if target.starts_with('/') => target.to_string(),
        Some(target) if !target.is_empty() => format!("/{}", target),
        _ => "/".to_string(),
    }
}

#[component]
pub fn LoginScreen() -> impl IntoView {
    let store = use_store();
    let query = use_query_map();
    let email = create_rw_signal(String::new());
    let redirect = move || query.with(|q| redirect_target(q.get("redirect").map(String::as_str)));

    // Signed-in visitors (including right after a successful login) move on.
    let navigate = use_navigate();
    create_effect(move |_| {
        if store.user_login.with(|s| s.user_info.is_some()) {
            navigate(&redirect(), Default::default());
        }
    });

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        actions::login(store, email.get_untracked());
    };

    view! {
        <Meta title="Sign In" />
        <div class="row justify-content-md-center">
            <div class="col-md-6">
                <h1>{ "Sign In" }</h1>
                {move || store.user_login.with(|s| s.error.clone()).map(|error| view! {
                    <Message variant="danger">{ error }</Message>
                })}
                {move || store.user_login.with(|s| s.loading).then(|| view! { <Loader /> })}
                <form on:submit=handle_submit>
                    <div class="form-group">
                        <label for="email" class="form-label">{ "Email Address" }</label>
                        <input
                            id="email"
                            type="email"
                            class="form-control"
                            placeholder="Enter email"
                            prop:value=move || email.get()
                            on:input=move |e| email.set(event_target_value(&e))
                        />
                    </div>
                    <button type="submit" class="btn btn-primary mt-3">{ "Sign In" }</button>
                </form>
            </div>
        </div>
    }
}
