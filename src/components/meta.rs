use leptos::*;
use leptos_meta::{Meta as MetaTag, Title};

pub const DEFAULT_TITLE: &str = "Welcome To Storefront";
pub const DEFAULT_DESCRIPTION: &str = "We sell the best products for cheap";
pub const DEFAULT_KEYWORDS: &str = "electronics, buy electronics, cheap electronics";

/// Page title and search metadata.
#[component]
pub fn Meta(
    #[prop(into, default = DEFAULT_TITLE.to_string())] title: String,
    #[prop(into, default = DEFAULT_DESCRIPTION.to_string())] description: String,
    #[prop(into, default = DEFAULT_KEYWORDS.to_string())] keywords: String,
) -> impl IntoView {
    view! {
        <Title text=title/>
        <MetaTag name="description" content=description/>
        <MetaTag name="keywords" content=keywords/>
    }
}
