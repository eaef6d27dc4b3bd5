use super::*;

#[test]
fn parse_is_idempotent() {
    let text = "2,3 1,1 red\n9,9 6,7 blue\n-1,0 2,2 red\nnope";
    let first = parse(text, grid(4));
    let second = parse(text, grid(4));
    assert_eq!(first, second);
}

#[test]
fn json_is_stable() {
    let text = "2,3 1,1 red\n9,9 6,7 blue";
    let a = serde_json::to_string(&parse(text, grid(4))).unwrap();
    let b = serde_json::to_string(&parse(text, grid(4))).unwrap();
    assert_eq!(a, b);
    assert!(a.contains("\"required_size\":10"));
}
