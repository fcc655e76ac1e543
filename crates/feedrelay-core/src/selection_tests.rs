use super::*;

fn post(id: &str) -> FeedPost {
    FeedPost::new(id, format!("https://truthsocial.com/@realDonaldTrump/posts/{}", id))
}

fn ids(posts: &[FeedPost]) -> Vec<&str> {
    posts.iter().map(|p| p.id.as_str()).collect()
}

#[test]
fn test_compare_ids_numeric_not_lexicographic() {
    assert_eq!(compare_ids("9", "10"), Ordering::Less);
    assert_eq!(compare_ids("114881234567890124", "114881234567890123"), Ordering::Greater);
    assert_eq!(compare_ids("007", "7"), Ordering::Equal);
}

#[test]
fn test_compare_ids_beyond_u64() {
    let big = "123456789012345678901234567890";
    let bigger = "123456789012345678901234567891";
    assert_eq!(compare_ids(big, bigger), Ordering::Less);
}

#[test]
fn test_sort_posts_ascending() {
    let mut posts = vec![post("300"), post("25"), post("1000")];
    sort_posts(&mut posts);
    assert_eq!(ids(&posts), vec!["25", "300", "1000"]);
}

#[test]
fn test_first_run_only_newest() {
    let posts = vec![post("1"), post("2"), post("3")];
    let selected = select_new_posts(&posts, None);
    assert_eq!(ids(&selected), vec!["3"]);
}

#[test]
fn test_empty_state_string_counts_as_first_run() {
    let posts = vec![post("1"), post("2")];
    let selected = select_new_posts(&posts, Some("  "));
    assert_eq!(ids(&selected), vec!["2"]);
}

#[test]
fn test_empty_feed() {
    assert!(select_new_posts(&[], None).is_empty());
    assert!(select_new_posts(&[], Some("5")).is_empty());
}

#[test]
fn test_selects_only_newer_posts_in_order() {
    let posts = vec![post("98"), post("99"), post("100"), post("101")];
    let selected = select_new_posts(&posts, Some("99"));
    assert_eq!(ids(&selected), vec!["100", "101"]);
}

#[test]
fn test_nothing_new() {
    let posts = vec![post("1"), post("2")];
    assert!(select_new_posts(&posts, Some("2")).is_empty());
}

#[test]
fn test_non_numeric_state_falls_back_to_string_order() {
    let posts = vec![post("a1"), post("b2")];
    let selected = select_new_posts(&posts, Some("a5"));
    assert_eq!(ids(&selected), vec!["b2"]);
}

#[test]
fn test_zero_state_falls_back_to_string_order() {
    let posts = vec![post("1"), post("2")];
    let selected = select_new_posts(&posts, Some("0"));
    assert_eq!(ids(&selected), vec!["1", "2"]);
}
