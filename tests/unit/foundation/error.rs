use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        FerryteError::invalid_partition("x")
            .to_string()
            .contains("invalid partition:")
    );
    assert!(
        FerryteError::invalid_operation("x")
            .to_string()
            .contains("invalid operation:")
    );
    assert!(
        FerryteError::unsorted("x")
            .to_string()
            .contains("unsorted diagram:")
    );
}

#[test]
fn fragmented_layer_names_the_row_pair() {
    let err = FerryteError::fragmented(2, 5);
    let FerryteError::FragmentedLayer { row, later_row } = &err else {
        panic!("wrong variant");
    };
    assert_eq!((*row, *later_row), (2, 5));
    assert!(err.to_string().contains("row 5"));
    assert!(err.to_string().contains("row 2"));
}
