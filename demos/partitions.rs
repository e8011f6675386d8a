//! Textual stand-in for the interactive partition renderer: builds a
//! small tree, prints every splitting line with the region it spans,
//! then runs a range and a nearest query against the same points.
//!
//! Node numbers are assigned by this walk alone; the tree stores no
//! diagnostic state.

use planekd::{KdTree, NodeRef, Point, Rect, SquaredEuclidean};

fn draw(node: NodeRef<'_, f64, u32>, bound: Rect<f64>, vertical: bool, count: &mut usize) {
    *count += 1;
    let point = node.point();

    if vertical {
        println!(
            "{:>2}. | x = {:.2}  spans y ∈ [{:.2}, {:.2}]  point ({:.2}, {:.2})",
            count, point.x, bound.ymin, bound.ymax, point.x, point.y
        );
    } else {
        println!(
            "{:>2}. — y = {:.2}  spans x ∈ [{:.2}, {:.2}]  point ({:.2}, {:.2})",
            count, point.y, bound.xmin, bound.xmax, point.x, point.y
        );
    }

    let axis = if vertical { 0 } else { 1 };
    let (lower_bound, upper_bound) = bound.split(axis, point.coord(axis));

    if let Some(lower) = node.lower() {
        draw(lower, lower_bound, !vertical, count);
    }
    if let Some(upper) = node.upper() {
        draw(upper, upper_bound, !vertical, count);
    }
}

fn main() -> Result<(), planekd::InvalidArgument> {
    tracing_subscriber::fmt().init();

    let points = [
        (0.1, 0.1),
        (0.15, 0.8),
        (0.3, 0.5),
        (0.7, 0.1),
        (0.95, 0.8),
        (0.3, 0.2),
        (0.6, 0.5),
        (0.2, 0.7),
        (0.4, 0.9),
        (0.7, 0.2),
    ];

    let mut tree: KdTree<f64> = KdTree::with_capacity(points.len());
    for (x, y) in points {
        tree.insert(Point::new(x, y))?;
    }

    println!("partition lines ({} points):", tree.size());
    if let Some(root) = tree.root() {
        let mut count = 0;
        draw(root, Rect::unit(), true, &mut count);
    }

    let query = Rect::new(0.1, 0.5, 0.3, 0.8);
    println!("\npoints in [{}, {}] × [{}, {}]:", query.xmin, query.xmax, query.ymin, query.ymax);
    for point in tree.range(&query)? {
        println!("  ({:.2}, {:.2})", point.x, point.y);
    }

    let from = Point::new(0.2, 0.5);
    if let Some(nearest) = tree.nearest_one::<SquaredEuclidean>(&from)? {
        println!(
            "\nnearest to ({:.2}, {:.2}): ({:.2}, {:.2}) at squared distance {:.4}",
            from.x, from.y, nearest.point.x, nearest.point.y, nearest.distance
        );
    }

    Ok(())
}
