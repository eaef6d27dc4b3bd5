use super::*;

#[test]
fn missing_field() {
    let result = parse("0,0 1,1", grid(4));
    assert!(result.edges.is_empty());
    assert_eq!(errors_of(&result), vec![(1, ErrorKind::MalformedLine)]);
}

#[test]
fn missing_space() {
    let result = parse("0,0 1,1red", grid(4));
    assert_eq!(errors_of(&result), vec![(1, ErrorKind::MalformedLine)]);
}

#[test]
fn extra_field() {
    let result = parse("0,0 1,1 red blue", grid(4));
    assert!(result.edges.is_empty());
    assert_eq!(errors_of(&result), vec![(1, ErrorKind::ExtraField)]);
}

#[test]
fn extra_space() {
    let result = parse("0,0  1,1 red", grid(4));
    assert_eq!(errors_of(&result), vec![(1, ErrorKind::ExtraField)]);
}

#[test]
fn non_numeric_coordinate() {
    let result = parse("0,a 1,1 red", grid(4));
    assert!(result.edges.is_empty());
    assert_eq!(errors_of(&result), vec![(1, ErrorKind::NonNumericCoordinate)]);
}

#[test]
fn non_numeric_in_both_points_reports_once() {
    let result = parse("x,y z,w red", grid(4));
    assert_eq!(errors_of(&result), vec![(1, ErrorKind::NonNumericCoordinate)]);
}

#[test]
fn color_in_place_of_point() {
    // From the sample inputs: four points, no color
    let result = parse("2,3 1,1 3,2 3,3", grid(4));
    assert_eq!(errors_of(&result), vec![(1, ErrorKind::ExtraField)]);
}

#[test]
fn negative_coordinate() {
    let result = parse("-1,0 2,2 red", grid(4));
    assert!(result.edges.is_empty());
    assert_eq!(errors_of(&result), vec![(1, ErrorKind::NegativeCoordinate)]);
}

#[test]
fn out_of_bounds_required_size() {
    let result = parse("9,9 6,7 blue", grid(4));
    assert!(result.edges.is_empty());
    assert_eq!(
        errors_of(&result),
        vec![(1, ErrorKind::OutOfBoundsCoordinate { required_size: 10 })]
    );
}

#[test]
fn out_of_bounds_takes_max_over_all_coordinates() {
    let result = parse("3,2 5,9 blue", grid(4));
    assert_eq!(
        errors_of(&result),
        vec![(1, ErrorKind::OutOfBoundsCoordinate { required_size: 10 })]
    );
}

#[test]
fn negative_and_out_of_bounds_on_one_line() {
    let result = parse("2,1 3,-3 blue\n-1,5 0,0 red", grid(4));
    assert_eq!(
        errors_of(&result),
        vec![
            (1, ErrorKind::NegativeCoordinate),
            (2, ErrorKind::NegativeCoordinate),
            (2, ErrorKind::OutOfBoundsCoordinate { required_size: 6 }),
        ]
    );
}

#[test]
fn blank_line_is_malformed() {
    let result = parse("0,0 1,1 red\n\n1,1 2,2 blue", grid(4));
    assert_eq!(errors_of(&result), vec![(2, ErrorKind::MalformedLine)]);
    assert_eq!(result.edges.len(), 2);
}
