use super::*;

#[test]
fn single_edge() {
    let result = parse("0,0 1,1 red", grid(2));
    assert_clean(&result);
    assert_eq!(result.edges, vec![edge((0, 0), (1, 1), "red")]);
}

#[test]
fn empty_input() {
    let result = parse("", grid(4));
    assert!(result.edges.is_empty());
    assert!(result.errors.is_empty());
    assert!(result.report().is_none());
}

#[test]
fn several_edges_keep_order() {
    let result = parse("0,0 3,3 red\n3,0 0,3 blue\n1,1 1,2 #00ff00", grid(4));
    assert_clean(&result);
    let colors: Vec<&str> = result.edges.iter().map(|e| e.color.as_str()).collect();
    assert_eq!(colors, vec!["red", "blue", "#00ff00"]);
}

#[test]
fn degenerate_edge_is_allowed() {
    let result = parse("2,2 2,2 red", grid(4));
    assert_clean(&result);
    assert_eq!(result.edges.len(), 1);
}

#[test]
fn corner_coordinates_fit() {
    let result = parse("0,0 99,99 black", grid(100));
    assert_clean(&result);
}

#[test]
fn trailing_newline_is_a_malformed_line() {
    let result = parse("0,0 1,1 red\n", grid(4));
    assert_eq!(result.edges, vec![edge((0, 0), (1, 1), "red")]);
    assert_eq!(errors_of(&result), vec![(2, ErrorKind::MalformedLine)]);
}

#[test]
fn carriage_return_stays_in_color() {
    let result = parse("0,0 1,1 red\r\n1,1 2,2 blue", grid(4));
    assert_clean(&result);
    assert_eq!(result.edges[0].color, "red\r");
    assert_eq!(result.edges[1].color, "blue");
}
