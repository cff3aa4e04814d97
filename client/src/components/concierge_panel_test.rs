use super::*;

#[test]
fn item_labels_keeps_every_item_in_order() {
    let titled = SuggestionItem { title: Some("Rooftop tasting".to_owned()), ..SuggestionItem::default() };
    let items = vec![titled.clone(), SuggestionItem::default(), titled, SuggestionItem::default()];
    assert_eq!(item_labels(&items), vec!["Rooftop tasting", "", "Rooftop tasting", ""]);
}

#[test]
fn item_labels_prefers_name() {
    let item = SuggestionItem {
        name: Some("Moonlit spa".to_owned()),
        title: Some("Spa".to_owned()),
        ..SuggestionItem::default()
    };
    assert_eq!(item_labels(&[item]), vec!["Moonlit spa"]);
}
