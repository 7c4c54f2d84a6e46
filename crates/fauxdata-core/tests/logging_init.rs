use fauxdata_core::{Error, init_logging};

#[test]
fn second_initialization_is_reported() {
    init_logging(Some("fauxdata_core=debug")).expect("first init");
    assert!(matches!(
        init_logging(Some("warn")),
        Err(Error::Logging(_))
    ));
}
