//! 2D k-d tree with owning child links.
//!
//! Each node owns one `Record` and up to two boxed children. The splitting
//! axis is `x` at even depths and `y` at odd depths; a value equal to the
//! node's value on the active axis goes to the right subtree. The tree is
//! never rebalanced, so its shape is a pure function of insertion order.

use crate::compute::distance::{euclidean, plane_distance};
use geo::Point;
use kdroster_types::axis::Axis;
use kdroster_types::record::Record;

#[derive(Debug)]
struct KdNode {
    record: Record,
    left: Option<Box<KdNode>>,
    right: Option<Box<KdNode>>,
}

impl KdNode {
    fn new(record: Record) -> Self {
        Self {
            record,
            left: None,
            right: None,
        }
    }

    /// Children ordered as (same side as `target`, other side) on `axis`.
    #[inline]
    fn split_for(&self, axis: Axis, target: &Point<f64>) -> (Option<&KdNode>, Option<&KdNode>) {
        if axis.coord(target) < axis.coord(&self.record.location) {
            (self.left.as_deref(), self.right.as_deref())
        } else {
            (self.right.as_deref(), self.left.as_deref())
        }
    }
}

/// Unbalanced 2D k-d tree.
///
/// # Examples
///
/// ```
/// use kdroster::index::KdTree;
/// use kdroster_types::record::Record;
/// use geo::Point;
///
/// let mut tree = KdTree::new();
/// tree.insert(Record::new(1, "a", "1", "x", Point::new(0.0, 0.0)));
/// tree.insert(Record::new(2, "b", "2", "x", Point::new(10.0, 10.0)));
///
/// let nearest = tree.nearest(&Point::new(9.0, 8.0)).unwrap();
/// assert_eq!(nearest.id, 2);
/// ```
#[derive(Debug, Default)]
pub struct KdTree {
    root: Option<Box<KdNode>>,
    len: usize,
}

impl KdTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a tree by inserting `records` one by one, in iteration order.
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = Record>,
    {
        let mut tree = Self::new();
        for record in records {
            tree.insert(record);
        }
        tree
    }

    /// Place `record` in the first empty slot found by descending from the
    /// root. Strictly-less goes left, everything else goes right.
    pub fn insert(&mut self, record: Record) {
        let mut slot = &mut self.root;
        let mut depth = 0;

        while let Some(node) = slot {
            let axis = Axis::for_depth(depth);
            slot = if axis.coord(&record.location) < axis.coord(&node.record.location) {
                &mut node.left
            } else {
                &mut node.right
            };
            depth += 1;
        }

        *slot = Some(Box::new(KdNode::new(record)));
        self.len += 1;
    }

    /// Nearest record to `target` by Euclidean distance, or `None` when empty.
    pub fn nearest(&self, target: &Point<f64>) -> Option<&Record> {
        self.nearest_with_visits(target).0
    }

    /// Like [`nearest`](Self::nearest), also returning how many nodes were visited.
    pub fn nearest_with_visits(&self, target: &Point<f64>) -> (Option<&Record>, usize) {
        let mut visited = 0;
        let best = self
            .root
            .as_deref()
            .map(|root| nearest_in(root, target, &mut visited));
        (best, visited)
    }

    /// Drop every node, leaving an empty tree.
    pub fn clear(&mut self) {
        let mut stack: Vec<Box<KdNode>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
        self.len = 0;
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of nodes on the longest root-to-leaf path (0 when empty).
    pub fn depth(&self) -> usize {
        let mut max_depth = 0;
        let mut stack: Vec<(&KdNode, usize)> =
            self.root.as_deref().map(|n| (n, 1)).into_iter().collect();

        while let Some((node, depth)) = stack.pop() {
            max_depth = max_depth.max(depth);
            stack.extend(node.left.as_deref().map(|n| (n, depth + 1)));
            stack.extend(node.right.as_deref().map(|n| (n, depth + 1)));
        }

        max_depth
    }
}

// Degenerate (sorted-insert) trees are as deep as they are long; tear them
// down with an explicit stack instead of recursive Box drops.
impl Drop for KdTree {
    fn drop(&mut self) {
        self.clear();
    }
}

/// Where a search frame is in the per-node sequence: same side, compare
/// with self, plane test plus other side, compare with the other side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    SameSide,
    CompareSelf,
    OtherSide,
    CompareOther,
}

#[derive(Debug)]
struct Frame<'a> {
    node: &'a KdNode,
    axis: Axis,
    step: Step,
    best: &'a Record,
    best_dist: f64,
}

impl<'a> Frame<'a> {
    fn new(node: &'a KdNode, axis: Axis) -> Self {
        Self {
            node,
            axis,
            step: Step::SameSide,
            best: &node.record,
            best_dist: f64::INFINITY,
        }
    }
}

/// Branch-and-bound descent driven by an explicit frame stack, so a sorted
/// spine as deep as the tree is long cannot exhaust the call stack.
///
/// `returned` carries the answer of the most recently finished child frame
/// back to its parent, playing the role of a recursive call's return value.
fn nearest_in<'a>(root: &'a KdNode, target: &Point<f64>, visited: &mut usize) -> &'a Record {
    let mut stack = vec![Frame::new(root, Axis::for_depth(0))];
    let mut returned: Option<&'a Record> = None;

    while let Some(frame) = stack.last_mut() {
        let node = frame.node;
        let axis = frame.axis;
        let (same_side, other_side) = node.split_for(axis, target);

        match frame.step {
            Step::SameSide => {
                *visited += 1;
                frame.step = Step::CompareSelf;
                returned = None;
                if let Some(child) = same_side {
                    stack.push(Frame::new(child, axis.next()));
                }
            }
            Step::CompareSelf => {
                let best = returned.take().unwrap_or(&node.record);
                let best_dist = euclidean(target, &best.location);

                // current node wins ties against the same-side result
                let node_dist = euclidean(target, &node.record.location);
                if node_dist <= best_dist {
                    frame.best = &node.record;
                    frame.best_dist = node_dist;
                } else {
                    frame.best = best;
                    frame.best_dist = best_dist;
                }
                frame.step = Step::OtherSide;
            }
            Step::OtherSide => {
                frame.step = Step::CompareOther;
                returned = None;
                if plane_distance(axis, target, &node.record.location) < frame.best_dist
                    && let Some(child) = other_side
                {
                    stack.push(Frame::new(child, axis.next()));
                }
            }
            Step::CompareOther => {
                let mut best = frame.best;
                // the best so far wins ties against the other side
                if let Some(candidate) = returned.take()
                    && euclidean(target, &candidate.location) < frame.best_dist
                {
                    best = candidate;
                }
                stack.pop();
                returned = Some(best);
            }
        }
    }

    // the root frame always finishes with CompareOther
    returned.unwrap_or(&root.record)
}
