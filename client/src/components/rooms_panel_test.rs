use super::*;

fn suite() -> Room {
    Room {
        id: "r1".to_owned(),
        name: "Aurora Suite".to_owned(),
        view: "Ocean sunrise".to_owned(),
        capacity: 3,
        price_per_night: 420.0,
    }
}

#[test]
fn room_meta_joins_view_and_capacity() {
    assert_eq!(room_meta(&suite()), "Ocean sunrise • up to 3 guests");
}

#[test]
fn nightly_price_appends_per_night() {
    assert_eq!(nightly_price(&suite()), "$420/night");
}
