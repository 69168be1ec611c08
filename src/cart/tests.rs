use super::*;
use crate::catalog::{Category, Track, TrackId, sample_tracks};
use crate::error::CartError;
use crate::notice::{Notice, NoticeVariant};
use proptest::prelude::*;

fn track(id: u32, price: u32) -> Track {
    Track {
        id: TrackId(id),
        title: format!("Track {id}"),
        category: Category::Adult,
        duration: "1:00".into(),
        price,
        description: String::new(),
        media: None,
    }
}

fn sample(id: u32) -> Track {
    sample_tracks()
        .into_iter()
        .find(|t| t.id == TrackId(id))
        .unwrap()
}

#[test]
fn cart_item_copies_fields_and_maps_category_label() {
    let t = sample(5);
    let item = CartItem::from(&t);
    assert_eq!(item.id, TrackId(5));
    assert_eq!(item.title, "Ave Maria");
    assert_eq!(item.price, 799);
    assert_eq!(item.category, "Хоровая музыка");
}

#[test]
fn purchase_scenario_tracks_total() {
    let mut cart = CartController::new(false);
    let mut notices: Vec<Notice> = Vec::new();
    let one = sample(1);
    let three = sample(3);

    cart.add_to_cart(&one, &mut notices).unwrap();
    assert_eq!(cart.total_price(), 299);
    assert_eq!(cart.item_count(), 1);

    let err = cart.add_to_cart(&one, &mut notices).unwrap_err();
    assert_eq!(err, CartError::AlreadyInCart(TrackId(1)));
    assert_eq!(cart.item_count(), 1);
    assert_eq!(cart.total_price(), 299);
    let declined = notices.last().unwrap();
    assert_eq!(declined.title, "Уже в корзине");
    assert_eq!(declined.variant, NoticeVariant::Destructive);

    cart.add_to_cart(&three, &mut notices).unwrap();
    let ids: Vec<TrackId> = cart.items().iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![TrackId(1), TrackId(3)]);
    assert_eq!(cart.total_price(), 798);

    cart.remove_from_cart(TrackId(1), &mut notices);
    let ids: Vec<TrackId> = cart.items().iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![TrackId(3)]);
    assert_eq!(cart.total_price(), 499);

    cart.clear_cart(&mut notices);
    assert_eq!(cart.item_count(), 0);
    assert_eq!(cart.total_price(), 0);

    let titles: Vec<&str> = notices.iter().map(|n| n.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "Добавлено в корзину",
            "Уже в корзине",
            "Добавлено в корзину",
            "Удалено",
            "Корзина очищена",
        ]
    );
}

#[test]
fn added_notice_quotes_track_title() {
    let mut cart = CartController::new(false);
    let mut notices: Vec<Notice> = Vec::new();
    cart.add_to_cart(&sample(2), &mut notices).unwrap();
    assert_eq!(
        notices[0].description,
        "\"Радуга после дождя\" добавлена в корзину"
    );
    assert_eq!(notices[0].variant, NoticeVariant::Default);
}

#[test]
fn remove_then_add_restores_item_at_the_end() {
    let mut cart = Cart::new();
    cart.add(&track(1, 10)).unwrap();
    cart.add(&track(2, 20)).unwrap();

    let removed = cart.remove(TrackId(1)).unwrap();
    assert_eq!(removed.id, TrackId(1));
    assert!(!cart.contains(TrackId(1)));

    cart.add(&track(1, 10)).unwrap();
    let ids: Vec<TrackId> = cart.items().iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![TrackId(2), TrackId(1)]);
}

#[test]
fn noops_notify_by_default() {
    let mut cart = CartController::new(false);
    let mut notices: Vec<Notice> = Vec::new();

    assert!(cart.remove_from_cart(TrackId(42), &mut notices).is_none());
    assert_eq!(cart.clear_cart(&mut notices), 0);
    assert_eq!(notices.len(), 2);
}

#[test]
fn quiet_noops_suppress_notices_for_absent_state() {
    let mut cart = CartController::new(true);
    let mut notices: Vec<Notice> = Vec::new();

    cart.remove_from_cart(TrackId(42), &mut notices);
    cart.clear_cart(&mut notices);
    assert!(notices.is_empty());

    cart.add_to_cart(&track(1, 10), &mut notices).unwrap();
    cart.remove_from_cart(TrackId(1), &mut notices);
    assert_eq!(notices.last().unwrap().title, "Удалено");
}

#[test]
fn empty_cart_totals_zero() {
    let cart = Cart::new();
    assert_eq!(cart.total_price(), 0);
    assert_eq!(cart.item_count(), 0);
    assert!(cart.is_empty());
}

proptest! {
    #[test]
    fn distinct_adds_count_and_sum(prices in proptest::collection::vec(1u32..100_000, 0..40)) {
        let mut cart = Cart::new();
        for (i, &price) in prices.iter().enumerate() {
            cart.add(&track(i as u32, price)).unwrap();
        }
        prop_assert_eq!(cart.item_count(), prices.len());
        let expected: u64 = prices.iter().map(|&p| u64::from(p)).sum();
        prop_assert_eq!(cart.total_price(), expected);
    }

    #[test]
    fn repeated_adds_keep_ids_unique(ids in proptest::collection::vec(0u32..10, 0..50)) {
        let mut cart = Cart::new();
        for &id in &ids {
            let _ = cart.add(&track(id, 100));
        }
        let mut distinct = ids.clone();
        distinct.sort_unstable();
        distinct.dedup();
        prop_assert_eq!(cart.item_count(), distinct.len());

        let mut in_cart: Vec<u32> = cart.items().iter().map(|i| i.id.0).collect();
        in_cart.sort_unstable();
        prop_assert_eq!(in_cart, distinct);
    }

    #[test]
    fn clear_always_empties(ids in proptest::collection::vec(0u32..10, 0..20)) {
        let mut cart = Cart::new();
        for &id in &ids {
            let _ = cart.add(&track(id, 5));
        }
        cart.clear();
        prop_assert_eq!(cart.item_count(), 0);
        prop_assert_eq!(cart.total_price(), 0);
    }
}
