use adjacent::{deltas, Error};

#[test]
fn absolute_ticks_to_delta_ticks() {
    let _ = env_logger::builder().is_test(true).try_init();

    let ticks: Vec<u32> = vec![0, 0, 120, 240, 960];
    let deltas = deltas(&ticks).collect::<adjacent::Result<Vec<_>>>();
    assert_eq!(deltas, Ok(vec![0, 120, 120, 720]));
}

#[test]
fn every_bad_pair_is_reported() {
    let _ = env_logger::builder().is_test(true).try_init();

    let ticks: [u16; 5] = [10, 5, 6, 2, 8];
    let errors: Vec<Error> = deltas(&ticks).filter_map(|d| d.err()).collect();
    assert_eq!(
        errors,
        vec![Error::Unrepresentable { index: 0 }, Error::Unrepresentable { index: 2 }]
    );
    assert_eq!(errors[0].to_string(), "difference after element 0 is not representable");
}

#[test]
fn signed_values_may_decrease() {
    let values = [3i32, -1, 4];
    let deltas: Vec<i32> = deltas(&values).map(|d| d.unwrap()).collect();
    assert_eq!(deltas, vec![-4, 5]);
}
