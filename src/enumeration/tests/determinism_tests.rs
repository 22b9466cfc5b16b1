use super::t;
use crate::element::{Element, Transformation};
use crate::enumeration::{Budget, Enumerator};
use crate::families::full_transformation_monoid;
use crate::semigroup::Semigroup;

#[test]
fn repeated_construction_numbers_elements_identically() {
    let run = || {
        let mut s = full_transformation_monoid(3).unwrap();
        let elements: Vec<Transformation> = s.elements().unwrap().cloned().collect();
        let words: Vec<Vec<usize>> = (0..elements.len())
            .map(|i| s.factorisation(i).unwrap())
            .collect();
        (elements, words)
    };
    let a = run();
    let b = run();
    assert_eq!(a, b);
}

#[test]
fn capped_and_uncapped_runs_agree() {
    let gens = [t(&[1, 0, 2, 3]), t(&[0, 0, 2, 3]), t(&[3, 0, 1, 2])];
    let mut whole = Enumerator::new(&gens);
    whole.run(&Budget::UNLIMITED).unwrap();

    let mut piecewise = Enumerator::new(&gens);
    while !piecewise.run_steps(5).unwrap().is_saturated() {}
    assert_eq!(whole.store().as_slice(), piecewise.store().as_slice());
    assert_eq!(whole.graph(), piecewise.graph());
}

#[test]
fn breadth_first_words_are_shortest() {
    // In a BFS over the right Cayley graph each element's word length is
    // its distance from the generators, so no shorter word exists.
    let mut s = full_transformation_monoid(3).unwrap();
    let n = s.size().unwrap();
    let graph = s.right_cayley_graph().clone();
    let mut dist = vec![usize::MAX; n];
    let mut queue = std::collections::VecDeque::new();
    for g in 0..graph.degree() {
        dist[g] = 1;
        queue.push_back(g);
    }
    while let Some(i) = queue.pop_front() {
        for c in 0..graph.degree() {
            let j = graph.get_edge(i, c).unwrap();
            if dist[j] == usize::MAX {
                dist[j] = dist[i] + 1;
                queue.push_back(j);
            }
        }
    }
    for i in 0..n {
        assert_eq!(s.word_length(i), Some(dist[i]), "element {i}");
    }
}

#[test]
fn word_tie_break_is_smallest_source_then_column() {
    // [1,2,0] and [2,0,1] are mutually inverse 3-cycles; their product is
    // the identity, reachable as 0*1 and 1*0. The earliest edge is (0, 1).
    let mut s = Semigroup::new([t(&[1, 2, 0]), t(&[2, 0, 1])]).unwrap();
    let id = s.position(&Transformation::identity(3)).unwrap().unwrap();
    assert_eq!(s.factorisation(id).unwrap(), vec![0, 1]);
    assert!(s.at(id).unwrap().is_idempotent());
}
