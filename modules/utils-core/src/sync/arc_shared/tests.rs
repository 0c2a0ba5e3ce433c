use super::*;

#[test]
fn clones_share_allocation() {
  let shared = ArcShared::new(42_u32);
  let clone = shared.clone();
  assert!(shared.ptr_eq(&clone));
  assert_eq!(shared.strong_count(), 2);
  assert_eq!(*clone, 42);
}

#[test]
fn try_unwrap_succeeds_for_sole_owner() {
  let shared = ArcShared::new(String::from("payload"));
  let clone = shared.clone();

  let shared = shared.try_unwrap().expect_err("two owners remain");
  drop(clone);
  assert_eq!(shared.try_unwrap().expect("sole owner"), "payload");
}
