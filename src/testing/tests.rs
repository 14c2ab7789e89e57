use super::shared_run_id;
use crate::configuration::models::namespace_prefix::NamespacePrefix;

#[test]
fn test_run_id_is_shared_by_the_test_binary() {
    let first = shared_run_id(&NamespacePrefix::default());
    let second = shared_run_id(&NamespacePrefix::resolve(Some("other".to_string())));

    assert_eq!(first, second);
}

#[test]
fn test_run_id_is_shared_across_threads() {
    let here = shared_run_id(&NamespacePrefix::default());
    let there = std::thread::spawn(|| shared_run_id(&NamespacePrefix::default()))
        .join()
        .unwrap();

    assert_eq!(here, there);
}
