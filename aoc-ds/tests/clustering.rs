//! Grouping points by repeatedly connecting the closest remaining pair.
use aoc_ds::{DisjointSet, SetId, Union};
use std::collections::HashMap;

type Point = (i64, i64, i64);

const POINTS: [Point; 6] = [
    (0, 0, 0),
    (1, 0, 0),
    (3, 0, 0),
    (10, 0, 0),
    (11, 0, 0),
    (30, 0, 0),
];

fn dist_sq(a: Point, b: Point) -> i64 {
    (a.0 - b.0).pow(2) + (a.1 - b.1).pow(2) + (a.2 - b.2).pow(2)
}

/// All pairs of point indices, closest first.
fn closest_pairs(points: &[Point]) -> Vec<(usize, usize)> {
    let mut pairs: Vec<(i64, usize, usize)> = (0..points.len())
        .flat_map(|i| (i + 1..points.len()).map(move |j| (i, j)))
        .map(|(i, j)| (dist_sq(points[i], points[j]), i, j))
        .collect();
    pairs.sort_unstable();
    pairs.into_iter().map(|(_, i, j)| (i, j)).collect()
}

fn sets_for(points: &[Point], ds: &mut DisjointSet) -> HashMap<Point, SetId> {
    points.iter().map(|&p| (p, ds.new_set())).collect()
}

#[test]
fn largest_clusters_after_fixed_number_of_connections() -> anyhow::Result<()> {
    let mut ds = DisjointSet::new();
    let sets = sets_for(&POINTS, &mut ds);

    for (i, j) in closest_pairs(&POINTS).into_iter().take(3) {
        ds.merge(sets[&POINTS[i]], sets[&POINTS[j]])?;
    }
    assert_eq!(ds.set_count(), 3);

    let mut sizes: Vec<usize> = ds.set_sizes().map(|(_, size)| size).collect();
    sizes.sort_unstable_by(|a, b| b.cmp(a));
    assert_eq!(sizes, vec![3, 2, 1]);
    assert_eq!(sizes.iter().take(3).product::<usize>(), 6);

    // Sizes agree with a per-point lookup through the representative.
    for p in POINTS {
        let root = ds.find(sets[&p])?;
        assert_eq!(ds.set_size(sets[&p])?, ds.set_size(root)?);
    }
    Ok(())
}

#[test]
fn connection_that_joins_everything() -> anyhow::Result<()> {
    let mut ds = DisjointSet::with_capacity(POINTS.len());
    let sets = sets_for(&POINTS, &mut ds);

    let mut last = None;
    let mut pairs = closest_pairs(&POINTS).into_iter();
    while ds.set_count() > 1 {
        let (i, j) = pairs.next().expect("ran out of pairs before connecting");
        let before = ds.set_count();
        let merged = ds.merge(sets[&POINTS[i]], sets[&POINTS[j]])?;
        assert_eq!(ds.set_count(), before - usize::from(merged));
        last = Some((i, j));
    }

    let (i, j) = last.expect("at least one merge");
    assert_eq!((i, j), (4, 5));
    assert_eq!(POINTS[i].0 * POINTS[j].0, 330);
    assert_eq!(ds.roots().count(), 1);
    assert_eq!(ds.set_size(sets[&POINTS[0]])?, POINTS.len());
    Ok(())
}

#[test]
fn surviving_root_is_reported() -> anyhow::Result<()> {
    let mut ds = DisjointSet::with_sets(3);
    let [a, b, c] = [0, 1, 2].map(SetId::from);

    let first = ds.union(a, b)?;
    assert!(first.is_merged());
    assert_eq!(first.root(), a);

    // The larger set wins even when passed second.
    let second = ds.union(c, b)?;
    assert_eq!(second.root(), a);
    let again = ds.union(b, c)?;
    assert_eq!(again, Union::Same(a));
    assert_eq!(again.root(), ds.find(c)?);
    assert!(!ds.union(b, c)?.is_merged());
    Ok(())
}
