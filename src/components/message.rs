use leptos::*;

/// Bootstrap alert. `variant` is the alert flavour: `info`, `danger`, ...
#[component]
pub fn Message(
    #[prop(default = "info")] variant: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=format!("alert alert-{}", variant) role="alert">
            {children()}
        </div>
    }
}
