//! Three-dimensional KD-tree over [`ColorPoint`]s
//!
//! Nodes live in an arena and refer to each other by index. Every point
//! keeps the position it was added at; that position doubles as the
//! tie-breaker for equal distances, so results are stable.
//!
//! Partition rule: at a node splitting on axis `a` with value `v`, the left
//! subtree holds points with coordinate `< v` and the right subtree points
//! with coordinate `>= v`. [`KdTree::build`] and [`KdTree::insert`] both keep
//! it.

use std::cmp::Ordering;

use super::best::BestK;
use crate::color::Lab;
use crate::point::ColorPoint;

const DIMENSIONS: usize = 3;

#[derive(Debug, Clone)]
struct Node {
    /// Index into `KdTree::points`, also the insertion sequence number
    point: usize,
    axis: usize,
    left: Option<usize>,
    right: Option<usize>,
}

/// A query result: the matched point and its squared fast-metric distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor<'a> {
    pub point: &'a ColorPoint,
    pub distance_squared: f64,
}

/// KD-tree over Lab coordinates, read-only once built.
#[derive(Debug, Clone, Default)]
pub struct KdTree {
    points: Vec<ColorPoint>,
    nodes: Vec<Node>,
    root: Option<usize>,
}

impl KdTree {
    /// An empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bulk-build a balanced tree.
    ///
    /// Each level splits on the median of its axis, so query cost does not
    /// depend on the order `points` arrive in. Tie order does: it follows
    /// `points`.
    pub fn build(points: Vec<ColorPoint>) -> Self {
        let mut order: Vec<usize> = (0..points.len()).collect();
        let mut tree = Self {
            nodes: Vec::with_capacity(points.len()),
            points,
            root: None,
        };
        tree.root = tree.build_subtree(&mut order, 0);
        tree
    }

    fn build_subtree(&mut self, order: &mut [usize], depth: usize) -> Option<usize> {
        if order.is_empty() {
            return None;
        }
        let axis = depth % DIMENSIONS;
        let points = &self.points;
        order.sort_by(|&x, &y| {
            points[x]
                .lab
                .axis(axis)
                .total_cmp(&points[y].lab.axis(axis))
                .then(x.cmp(&y))
        });

        // Step the median back over equal coordinates so the left side stays strictly below it
        let mut mid = order.len() / 2;
        let split = points[order[mid]].lab.axis(axis);
        while mid > 0 && points[order[mid - 1]].lab.axis(axis).total_cmp(&split) == Ordering::Equal
        {
            mid -= 1;
        }

        let id = self.nodes.len();
        self.nodes.push(Node {
            point: order[mid],
            axis,
            left: None,
            right: None,
        });

        let (left, rest) = order.split_at_mut(mid);
        let left = self.build_subtree(left, depth + 1);
        let right = self.build_subtree(&mut rest[1..], depth + 1);
        self.nodes[id].left = left;
        self.nodes[id].right = right;
        Some(id)
    }

    /// Add one point below the existing nodes.
    ///
    /// No rebalancing happens; a tree grown only by `insert` is as balanced
    /// as its insertion order.
    pub fn insert(&mut self, point: ColorPoint) {
        let seq = self.points.len();
        let lab = point.lab;
        self.points.push(point);

        let Some(mut current) = self.root else {
            self.root = Some(self.push_node(seq, 0));
            return;
        };

        loop {
            let node = &self.nodes[current];
            let axis = node.axis;
            let goes_left = lab.axis(axis) < self.points[node.point].lab.axis(axis);
            let child = if goes_left { node.left } else { node.right };
            match child {
                Some(next) => current = next,
                None => {
                    let id = self.push_node(seq, (axis + 1) % DIMENSIONS);
                    let node = &mut self.nodes[current];
                    if goes_left {
                        node.left = Some(id);
                    } else {
                        node.right = Some(id);
                    }
                    return;
                }
            }
        }
    }

    fn push_node(&mut self, point: usize, axis: usize) -> usize {
        self.nodes.push(Node {
            point,
            axis,
            left: None,
            right: None,
        });
        self.nodes.len() - 1
    }

    /// The `k` points nearest to `query` by Euclidean distance, nearest
    /// first, ties in insertion order.
    ///
    /// Returns `min(k, len)` results; an empty tree or `k == 0` gives none.
    ///
    /// ```
    /// use color_core::{ColorPoint, KdTree, Lab};
    ///
    /// let tree = KdTree::build(vec![
    ///     ColorPoint::new("black", Lab::new(0.0, 0.0, 0.0)),
    ///     ColorPoint::new("gray", Lab::new(0.5, 0.0, 0.0)),
    ///     ColorPoint::new("white", Lab::new(1.0, 0.0, 0.0)),
    /// ]);
    /// let near = tree.k_nearest(&Lab::new(0.6, 0.0, 0.0), 2);
    /// assert_eq!(near[0].point.name, "gray");
    /// assert_eq!(near[1].point.name, "white");
    /// ```
    pub fn k_nearest(&self, query: &Lab, k: usize) -> Vec<Neighbor<'_>> {
        let Some(root) = self.root else {
            return Vec::new();
        };
        if k == 0 {
            return Vec::new();
        }

        let mut best = BestK::new(k);
        // (node, squared distance from query to the node's region)
        let mut stack = vec![(root, 0.0f64)];

        while let Some((id, bound)) = stack.pop() {
            if !best.admits(bound) {
                continue;
            }
            let node = &self.nodes[id];
            let lab = &self.points[node.point].lab;
            best.offer(query.distance_squared(lab), node.point);

            let diff = query.axis(node.axis) - lab.axis(node.axis);
            let (near, far) = if diff < 0.0 {
                (node.left, node.right)
            } else {
                (node.right, node.left)
            };
            // Far side first so the near side is popped and searched before it
            if let Some(far) = far {
                stack.push((far, diff * diff));
            }
            if let Some(near) = near {
                stack.push((near, bound));
            }
        }

        best.into_sorted()
            .into_iter()
            .map(|(distance_squared, point)| Neighbor {
                point: &self.points[point],
                distance_squared,
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Points in insertion order.
    pub fn points(&self) -> &[ColorPoint] {
        &self.points
    }
}

impl FromIterator<ColorPoint> for KdTree {
    fn from_iter<I: IntoIterator<Item = ColorPoint>>(iter: I) -> Self {
        Self::build(iter.into_iter().collect())
    }
}
