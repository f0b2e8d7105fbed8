use leptos::*;

#[component]
pub fn Loader() -> impl IntoView {
    view! {
        <div
            class="spinner-border"
            role="status"
            style="width: 100px; height: 100px; margin: auto; display: block;"
        >
            <span class="sr-only">{ "Loading..." }</span>
        </div>
    }
}
