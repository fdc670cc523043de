pub mod decimal_utils;
pub mod time_utils;

pub use decimal_utils::{percentage_of, round_display};
pub use time_utils::{Clock, FixedClock, SystemClock};

/// Title-cases a snake_case or space separated code ("stock_split" -> "Stock Split").
pub fn titleize(code: &str) -> String {
    code.split(|c: char| c == '_' || c.is_whitespace())
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
