use super::*;
#[path = "determinism_tests.rs"]
mod determinism_tests;

use crate::element::Transformation;

pub(super) fn t(images: &[u32]) -> Transformation {
    Transformation::new(images.to_vec()).unwrap()
}

#[test]
fn engine_and_store_agree_on_generators() {
    let gens = [t(&[1, 0, 2]), t(&[0, 0, 2]), t(&[1, 0, 2])];
    let e = Enumerator::new(&gens);
    let store: &ElementStore<Transformation> = e.store();
    assert_eq!(store.len(), 2);
    assert_eq!(e.graph().nr_rows(), 2);

    // Maps of {0, 1} into itself, fixing 2.
    let mut copy = e.clone();
    copy.run(&Budget::UNLIMITED).unwrap();
    assert_eq!(copy.store().len(), 4);
    assert_eq!(e.store().len(), 2);
}
