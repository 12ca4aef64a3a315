use super::*;

#[test]
fn pending_return_default_empty() {
    assert_eq!(PendingReturn::default().peek(), None);
}

#[test]
fn remember_overwrites_previous_origin() {
    let mut pending = PendingReturn::default();
    pending.remember("/create-post".to_owned());
    pending.remember("/post/7/edit".to_owned());
    assert_eq!(pending.peek(), Some("/post/7/edit"));
}

#[test]
fn take_consumes_origin() {
    let mut pending = PendingReturn::default();
    pending.remember("/create-post".to_owned());
    assert_eq!(pending.take(), Some("/create-post".to_owned()));
    assert_eq!(pending.take(), None);
}
