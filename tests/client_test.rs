use std::collections::HashMap;

use serde::Deserialize;
use serde_json::{Value, json};
use spotidash::spotify::client::{FetchError, parse_collection, parse_page};

#[derive(Debug, Clone, PartialEq, Deserialize)]
struct Row {
    id: String,
}

// Helper to build one synthetic page body
fn page_body(ids: &[&str], next: Option<&str>) -> Value {
    json!({
        "items": ids.iter().map(|id| json!({ "id": id })).collect::<Vec<_>>(),
        "next": next,
        "total": 6,
        "limit": 2,
    })
}

#[test]
fn test_parse_page_plain() {
    let page = parse_page::<Row>(page_body(&["a", "b"], Some("https://api/page2")), None).unwrap();

    assert_eq!(page.items.len(), 2);
    assert_eq!(page.items[0].id, "a");
    assert_eq!(page.next.as_deref(), Some("https://api/page2"));
    assert_eq!(page.total, Some(6));
    assert_eq!(page.limit, Some(2));
}

#[test]
fn test_parse_page_wrapped() {
    // Wrapped responses carry the page under a single named key
    let body = json!({ "artists": page_body(&["a"], None) });
    let page = parse_page::<Row>(body, Some("artists")).unwrap();

    assert_eq!(page.items.len(), 1);
    assert!(page.next.is_none());
}

#[test]
fn test_parse_page_missing_wrapper_key() {
    let result = parse_page::<Row>(page_body(&["a"], None), Some("artists"));

    match result {
        Err(FetchError::Shape(what)) => assert!(what.contains("artists")),
        other => panic!("expected a shape error, got {:?}", other.map(|p| p.items)),
    }
}

#[test]
fn test_parse_page_defaults_missing_items() {
    let page = parse_page::<Row>(json!({ "next": null }), None).unwrap();

    assert!(page.items.is_empty());
    assert!(page.next.is_none());
}

#[test]
fn test_parse_collection_wrapped() {
    let body = json!({ "artists": [ { "id": "a" }, { "id": "b" } ] });
    let rows = parse_collection::<Row>(body, Some("artists")).unwrap();

    assert_eq!(
        rows,
        vec![Row { id: "a".to_string() }, Row { id: "b".to_string() }]
    );
}

#[test]
fn test_pagination_terminates_and_preserves_order() {
    // Synthetic 3-page source: the third page carries no next URL
    let mut source: HashMap<&str, Value> = HashMap::new();
    source.insert("https://api/page1", page_body(&["a", "b"], Some("https://api/page2")));
    source.insert("https://api/page2", page_body(&["c", "d"], Some("https://api/page3")));
    source.insert("https://api/page3", page_body(&["e", "f"], None));

    let mut rows: Vec<Row> = Vec::new();
    let mut pages_fetched = 0;
    let mut next_url = Some("https://api/page1".to_string());

    while let Some(url) = next_url {
        let body = source.get(url.as_str()).cloned().expect("unknown page URL");
        let page = parse_page::<Row>(body, None).unwrap();
        pages_fetched += 1;
        rows.extend(page.items);
        next_url = page.next;
    }

    // Exactly three pages' worth of rows, in page order
    assert_eq!(pages_fetched, 3);
    let collected: Vec<&str> = rows.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(collected, vec!["a", "b", "c", "d", "e", "f"]);
}
