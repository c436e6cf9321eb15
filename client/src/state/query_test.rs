use super::*;

#[test]
fn default_is_idle() {
    assert_eq!(QueryState::<u8>::default(), QueryState::Idle);
}

#[test]
fn from_result_maps_both_arms() {
    assert_eq!(QueryState::from_result(Ok(3)), QueryState::Ready(3));
    assert_eq!(
        QueryState::<u8>::from_result(Err("leads request failed: 500".to_owned())),
        QueryState::Failed("leads request failed: 500".to_owned())
    );
}

#[test]
fn accessors_match_variant() {
    let loading = QueryState::<u8>::Loading;
    assert!(loading.is_loading());
    assert_eq!(loading.ready(), None);
    assert_eq!(loading.error(), None);

    let ready = QueryState::Ready(vec![1, 2]);
    assert!(!ready.is_loading());
    assert_eq!(ready.ready(), Some(&vec![1, 2]));

    let failed = QueryState::<u8>::Failed("boom".to_owned());
    assert_eq!(failed.error(), Some("boom"));
}
