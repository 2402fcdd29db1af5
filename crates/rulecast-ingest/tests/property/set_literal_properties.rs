use proptest::prelude::*;
use rulecast_ingest::{parse_history, parse_item_set};

fn item_name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9.]{0,12}"
}

fn quote(name: &str) -> String {
    format!("'{}'", name.replace('\\', "\\\\").replace('\'', "\\'"))
}

proptest! {
    #[test]
    fn parser_never_panics(s in ".{0,80}") {
        let _ = parse_item_set(&s);
        let _ = parse_history(&s);
    }

    #[test]
    fn frozenset_encoding_recovers_every_item(names in prop::collection::vec(item_name(), 1..8)) {
        let body: Vec<String> = names.iter().map(|n| quote(n)).collect();
        let literal = format!("frozenset({{{}}})", body.join(", "));
        let set = parse_item_set(&literal).unwrap();
        for name in &names {
            prop_assert!(set.contains(name));
        }
        prop_assert!(set.len() <= names.len());
    }

    #[test]
    fn quoting_round_trips_arbitrary_text(name in "[^\\s][ -~]{0,20}") {
        let set = parse_item_set(&format!("[{}]", quote(&name))).unwrap();
        prop_assert!(set.contains(&name));
    }

    #[test]
    fn bare_history_matches_literal_history(names in prop::collection::vec(item_name(), 1..6)) {
        let bare = parse_history(&names.join(", ")).unwrap();
        let body: Vec<String> = names.iter().map(|n| quote(n)).collect();
        let literal = parse_history(&format!("{{{}}}", body.join(","))).unwrap();
        prop_assert_eq!(bare, literal);
    }
}
