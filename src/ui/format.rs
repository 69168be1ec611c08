//! Text formatting for prices and counts in the store's single locale.

/// Format a whole-rouble amount, e.g. `1299 ₽`.
pub fn format_price(amount: u64) -> String {
    format!("{amount} ₽")
}

/// Russian plural form of "композиция" for `n`.
pub fn compositions_word(n: usize) -> &'static str {
    let tens = n % 100;
    let ones = n % 10;
    if (11..=14).contains(&tens) {
        "композиций"
    } else if ones == 1 {
        "композиция"
    } else if (2..=4).contains(&ones) {
        "композиции"
    } else {
        "композиций"
    }
}

/// Description line under the cart title.
pub fn cart_summary(count: usize) -> String {
    if count == 0 {
        "Корзина пуста".to_string()
    } else {
        format!("{count} {} в корзине", compositions_word(count))
    }
}
