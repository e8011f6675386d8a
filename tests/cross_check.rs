//! Drives the tree and the linear-scan baseline through the same
//! scenarios via the public API and requires them to agree.

use itertools::Itertools;
use planekd::{KdTree, Point, PointSet, Rect, SquaredEuclidean};
use rand::Rng;

fn sorted(mut points: Vec<Point<f64>>) -> Vec<Point<f64>> {
    points.sort_unstable_by(|a, b| {
        a.x.partial_cmp(&b.x)
            .unwrap()
            .then(a.y.partial_cmp(&b.y).unwrap())
    });
    points
}

fn random_points(rng: &mut impl Rng, n: usize) -> Vec<Point<f64>> {
    (0..n)
        .map(|_| Point::new(rng.random_range(0.0..1.0), rng.random_range(0.0..1.0)))
        .collect()
}

#[test]
fn the_five_point_scenario_holds_on_both_implementations() {
    let points = [
        Point::new(0.7, 0.2),
        Point::new(0.5, 0.4),
        Point::new(0.2, 0.3),
        Point::new(0.4, 0.7),
        Point::new(0.9, 0.6),
    ];

    let mut tree: KdTree<f64> = KdTree::new();
    let mut set: PointSet<f64> = PointSet::new();
    for point in points {
        tree.insert(point).unwrap();
        set.insert(point).unwrap();
    }

    for (index, point) in points.iter().enumerate() {
        assert!(tree.contains(point).unwrap(), "tree lost point #{index}");
        assert!(set.contains(point).unwrap(), "set lost point #{index}");
    }
    assert!(!tree.contains(&Point::new(0.5, 0.1)).unwrap());
    assert!(!set.contains(&Point::new(0.5, 0.1)).unwrap());

    let band = Rect::new(0.28, 0.78, 0.72, 0.9);
    assert!(tree.range(&band).unwrap().is_empty());
    assert!(set.range(&band).unwrap().is_empty());

    let query = Point::new(0.2, 0.17);
    let from_tree = tree.nearest_one::<SquaredEuclidean>(&query).unwrap().unwrap();
    let from_set = set.nearest_one::<SquaredEuclidean>(&query).unwrap().unwrap();
    assert_eq!(from_tree.point, Point::new(0.2, 0.3));
    assert_eq!(from_tree.point, from_set.point);
    assert_eq!(from_tree.distance, from_set.distance);
}

#[test]
fn size_counts_distinct_points_and_reinsertion_changes_nothing() {
    let mut rng = rand::rng();
    let points = random_points(&mut rng, 300);

    let mut tree: KdTree<f64> = KdTree::with_capacity(points.len());
    for point in &points {
        tree.insert(*point).unwrap();
    }
    let distinct = points
        .iter()
        .unique_by(|p| (p.x.to_bits(), p.y.to_bits()))
        .count();
    assert_eq!(tree.size(), distinct);

    let snapshot = tree.clone();
    for point in &points {
        tree.insert(*point).unwrap();
    }
    assert_eq!(tree, snapshot);
}

#[test]
fn contains_is_false_for_points_never_inserted() {
    let mut rng = rand::rng();
    let points = random_points(&mut rng, 200);

    let mut tree: KdTree<f64> = KdTree::new();
    for point in &points {
        tree.insert(*point).unwrap();
    }

    for _ in 0..200 {
        let probe = Point::new(rng.random_range(2.0..3.0), rng.random_range(0.0..1.0));
        assert!(!tree.contains(&probe).unwrap());
    }
}

#[test]
fn range_agrees_with_the_baseline_as_the_set_grows() {
    let mut rng = rand::rng();

    let mut tree: KdTree<f64> = KdTree::new();
    let mut set: PointSet<f64> = PointSet::new();

    for round in 0..500 {
        let point = Point::new(rng.random_range(0.0..1.0), rng.random_range(0.0..1.0));
        tree.insert(point).unwrap();
        set.insert(point).unwrap();
        assert_eq!(tree.size(), set.size(), "diverged at round {round}");

        let (x0, x1): (f64, f64) = (rng.random_range(0.0..1.0), rng.random_range(0.0..1.0));
        let (y0, y1): (f64, f64) = (rng.random_range(0.0..1.0), rng.random_range(0.0..1.0));
        let query = Rect::new(x0.min(x1), y0.min(y1), x0.max(x1), y0.max(y1));

        assert_eq!(
            sorted(tree.range(&query).unwrap()),
            sorted(set.range(&query).unwrap()),
            "range diverged at round {round}"
        );
    }
}

#[test]
fn nearest_agrees_with_the_baseline_min_distance() {
    let mut rng = rand::rng();

    let mut tree: KdTree<f64> = KdTree::new();
    let mut set: PointSet<f64> = PointSet::new();

    for _ in 0..500 {
        let point = Point::new(rng.random_range(0.0..1.0), rng.random_range(0.0..1.0));
        tree.insert(point).unwrap();
        set.insert(point).unwrap();

        let query = Point::new(rng.random_range(0.0..1.0), rng.random_range(0.0..1.0));
        let from_tree = tree.nearest_one::<SquaredEuclidean>(&query).unwrap().unwrap();
        let from_set = set.nearest_one::<SquaredEuclidean>(&query).unwrap().unwrap();

        assert_eq!(from_tree.distance, from_set.distance);
    }
}

#[test]
fn a_rectangle_whose_boundary_touches_a_point_includes_it() {
    let point = Point::new(0.3, 0.6);

    let mut tree: KdTree<f64> = KdTree::new();
    let mut set: PointSet<f64> = PointSet::new();
    tree.insert(point).unwrap();
    set.insert(point).unwrap();

    // the point sits on each of the four edges in turn
    let queries = [
        Rect::new(0.3, 0.5, 0.5, 0.7),
        Rect::new(0.1, 0.5, 0.3, 0.7),
        Rect::new(0.1, 0.6, 0.5, 0.8),
        Rect::new(0.1, 0.4, 0.5, 0.6),
    ];
    for query in queries {
        assert_eq!(tree.range(&query).unwrap(), vec![point]);
        assert_eq!(set.range(&query).unwrap(), vec![point]);
    }
}

#[test]
fn an_empty_index_answers_every_query_trivially() {
    let tree: KdTree<f64> = KdTree::new();
    let set: PointSet<f64> = PointSet::new();

    assert!(tree.is_empty() && set.is_empty());
    assert_eq!(tree.size(), 0);
    assert_eq!(set.size(), 0);
    assert!(tree.range(&Rect::unit()).unwrap().is_empty());
    assert!(set.range(&Rect::unit()).unwrap().is_empty());
    assert!(tree
        .nearest_one::<SquaredEuclidean>(&Point::new(0.2, 0.5))
        .unwrap()
        .is_none());
    assert!(set
        .nearest_one::<SquaredEuclidean>(&Point::new(0.2, 0.5))
        .unwrap()
        .is_none());
}

#[test]
fn both_implementations_reject_the_same_invalid_arguments() {
    let mut tree: KdTree<f64> = KdTree::new();
    let mut set: PointSet<f64> = PointSet::new();

    let bad_point = Point::new(f64::NAN, 0.5);
    let bad_rect = Rect::new(0.8, 0.0, 0.2, 1.0);

    assert_eq!(
        tree.insert(bad_point).unwrap_err(),
        set.insert(bad_point).unwrap_err()
    );
    assert_eq!(
        tree.contains(&bad_point).unwrap_err(),
        set.contains(&bad_point).unwrap_err()
    );
    assert_eq!(
        tree.range(&bad_rect).unwrap_err(),
        set.range(&bad_rect).unwrap_err()
    );
    assert_eq!(
        tree.nearest_one::<SquaredEuclidean>(&bad_point).unwrap_err(),
        set.nearest_one::<SquaredEuclidean>(&bad_point).unwrap_err()
    );
}

#[cfg(feature = "serde")]
#[test]
fn a_round_tripped_tree_answers_queries_identically() {
    let mut rng = rand::rng();

    let mut tree: KdTree<f64> = KdTree::new();
    for point in random_points(&mut rng, 100) {
        tree.insert(point).unwrap();
    }

    let json = serde_json::to_string(&tree).unwrap();
    let restored: KdTree<f64> = serde_json::from_str(&json).unwrap();

    assert_eq!(tree, restored);
    let query = Point::new(0.5, 0.5);
    assert_eq!(
        tree.nearest_one::<SquaredEuclidean>(&query).unwrap(),
        restored.nearest_one::<SquaredEuclidean>(&query).unwrap()
    );
}
