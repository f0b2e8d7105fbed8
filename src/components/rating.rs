use leptos::*;
use crate::utils::format::star_classes;

/// Five-star display of a rating, with an optional caption such as " 3 reviews".
#[component]
pub fn Rating(
    value: f64,
    #[prop(optional, into)] text: Option<String>,
    #[prop(default = "#f8e825")] color: &'static str,
) -> impl IntoView {
    let style = format!("color: {}", color);
    view! {
        <div class="rating">
            {star_classes(value).into_iter().map(|class| view! {
                <span><i style=style.clone() class=class></i></span>
            }).collect::<Vec<_>>()}
            <span>{ text.unwrap_or_default() }</span>
        </div>
    }
}
