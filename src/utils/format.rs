//! Display helpers shared by the screens.

/// Labels offered by the review form, keyed by star count.
pub const RATING_OPTIONS: [(u8, &str); 5] = [
    (1, "1 - Poor"),
    (2, "2 - Fair"),
    (3, "3 - Good"),
    (4, "4 - Very Good"),
    (5, "5 - Excellent"),
];

pub const CURRENCY_SYMBOL: &str = "₨";

/// Groups the integer part in threes: `1234567.5` becomes `1,234,567.5`.
pub fn comma_number(value: f64) -> String {
    let raw = value.to_string();
    let (sign, unsigned) = match raw.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", raw.as_str()),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(frac) => format!("{}{}.{}", sign, grouped, frac),
        None => format!("{}{}", sign, grouped),
    }
}

pub fn format_price(price: f64) -> String {
    format!("{}{}", CURRENCY_SYMBOL, comma_number(price))
}

/// Icon classes for the five rating stars.
pub fn star_classes(value: f64) -> [&'static str; 5] {
    let mut stars = ["far fa-star"; 5];
    for (i, star) in stars.iter_mut().enumerate() {
        let threshold = (i + 1) as f64;
        *star = if value >= threshold {
            "fas fa-star"
        } else if value >= threshold - 0.5 {
            "fas fa-star-half-alt"
        } else {
            "far fa-star"
        };
    }
    stars
}

pub fn quantity_options(count_in_stock: u32) -> Vec<u32> {
    (1..=count_in_stock).collect()
}

pub fn stock_status(count_in_stock: u32) -> &'static str {
    if count_in_stock > 0 {
        "In Stock"
    } else {
        "Out of Stock"
    }
}

pub fn product_path(product_id: &str) -> String {
    format!("/product/{}", urlencoding::encode(product_id))
}

pub fn cart_path(product_id: &str, qty: u32) -> String {
    format!("/cart/{}?qty={}", urlencoding::encode(product_id), qty)
}

pub fn login_path(redirect: Option<&str>) -> String {
    match redirect {
        Some(target) => format!("/login?redirect={}", urlencoding::encode(target)),
        None => "/login".to_string(),
    }
}
