use super::*;

#[test]
fn copied_label_lasts_two_seconds() {
    assert_eq!(COPIED_LABEL_MS, 2_000);
}
