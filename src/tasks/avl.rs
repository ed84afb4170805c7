//! AVL tree index over tasks, keyed by id
//!
//! `AvlTree` is the by-id access path of the store: point lookup, insert
//! (overwrite on duplicate id), delete with in-order successor promotion,
//! and ordered traversals, all in O(log n). Every structural change is
//! followed by bottom-up rebalancing so the AVL invariant (left and right
//! subtree heights differ by at most 1 at every node) holds after every
//! operation.
//!
//! The tree also keeps a bounded log of recent structural events
//! ([`TreeOp`]) which reporting consumes read-only.

use crate::tasks::task::Task;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::VecDeque;
use std::fmt;

/// Maximum number of structural events retained in the operation log
const LOG_CAPACITY: usize = 50;

/// A structural event on the tree, tagged with the affected task id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "op", content = "id")]
pub enum TreeOp {
    /// A new node was created for this id
    Insert(u32),
    /// An existing node's task was replaced in place
    Update(u32),
    /// The node holding this id was removed
    Delete(u32),
    /// Left rotation pivoted at the node holding this id
    RotateLeft(u32),
    /// Right rotation pivoted at the node holding this id
    RotateRight(u32),
}

impl fmt::Display for TreeOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeOp::Insert(id) => write!(f, "insert #{}", id),
            TreeOp::Update(id) => write!(f, "update #{}", id),
            TreeOp::Delete(id) => write!(f, "delete #{}", id),
            TreeOp::RotateLeft(id) => write!(f, "rotate-left #{}", id),
            TreeOp::RotateRight(id) => write!(f, "rotate-right #{}", id),
        }
    }
}

/// A single tree node, owning its task and both child subtrees
#[derive(Debug)]
struct AvlNode {
    task: Task,
    left: Option<Box<AvlNode>>,
    right: Option<Box<AvlNode>>,
    /// Cached subtree height: leaf = 1, absent child = 0
    height: u32,
}

impl AvlNode {
    fn new(task: Task) -> Self {
        Self {
            task,
            left: None,
            right: None,
            height: 1,
        }
    }

    fn update_height(&mut self) {
        self.height = 1 + height_of(&self.left).max(height_of(&self.right));
    }

    /// Balance factor: left subtree height minus right subtree height
    fn balance_factor(&self) -> i32 {
        height_of(&self.left) as i32 - height_of(&self.right) as i32
    }
}

fn height_of(node: &Option<Box<AvlNode>>) -> u32 {
    node.as_ref().map_or(0, |n| n.height)
}

fn balance_of(node: &Option<Box<AvlNode>>) -> i32 {
    node.as_ref().map_or(0, |n| n.balance_factor())
}

/// Append an event, evicting the oldest once the log is full
fn record_op(log: &mut VecDeque<TreeOp>, op: TreeOp) {
    if log.len() == LOG_CAPACITY {
        log.pop_front();
    }
    log.push_back(op);
}

/// Self-balancing binary search tree indexing tasks by unique id
#[derive(Debug, Default)]
pub struct AvlTree {
    root: Option<Box<AvlNode>>,
    log: VecDeque<TreeOp>,
}

impl AvlTree {
    /// Create a new empty tree
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a task keyed by its id
    ///
    /// If a node with the same id already exists its task is replaced in
    /// place; otherwise a new node is created and every ancestor on the
    /// path back to the root is rebalanced.
    pub fn insert(&mut self, task: Task) {
        let event = if self.search(task.id).is_some() {
            TreeOp::Update(task.id)
        } else {
            TreeOp::Insert(task.id)
        };
        self.record(event);
        self.root = Some(Self::insert_node(self.root.take(), task, &mut self.log));
    }

    /// Look up a task by id
    pub fn search(&self, id: u32) -> Option<Task> {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            match id.cmp(&node.task.id) {
                Ordering::Less => current = node.left.as_deref(),
                Ordering::Greater => current = node.right.as_deref(),
                Ordering::Equal => return Some(node.task.clone()),
            }
        }
        None
    }

    /// Delete the node holding `id`, rebalancing on the way back up
    ///
    /// Returns false if no node holds that id. A missing id is a normal
    /// outcome, not an error.
    pub fn delete(&mut self, id: u32) -> bool {
        if self.search(id).is_none() {
            return false;
        }
        self.record(TreeOp::Delete(id));
        self.root = Self::delete_node(self.root.take(), id, &mut self.log);
        true
    }

    /// All tasks in ascending id order (in-order traversal)
    pub fn inorder(&self) -> Vec<Task> {
        let mut tasks = Vec::new();
        Self::inorder_walk(self.root.as_deref(), &mut tasks);
        tasks
    }

    /// All tasks in pre-order (root, left, right)
    pub fn preorder(&self) -> Vec<Task> {
        let mut tasks = Vec::new();
        Self::preorder_walk(self.root.as_deref(), &mut tasks);
        tasks
    }

    /// All tasks in post-order (left, right, root)
    pub fn postorder(&self) -> Vec<Task> {
        let mut tasks = Vec::new();
        Self::postorder_walk(self.root.as_deref(), &mut tasks);
        tasks
    }

    /// Number of nodes in the tree
    pub fn size(&self) -> usize {
        Self::count_nodes(self.root.as_deref())
    }

    /// True if the tree holds no tasks
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Height of the tree (0 when empty)
    pub fn height(&self) -> u32 {
        height_of(&self.root)
    }

    /// Structural self-check: every node's balance factor is within ±1
    pub fn is_balanced(&self) -> bool {
        Self::check_balanced(self.root.as_deref())
    }

    /// Structural self-check: in-order ids are strictly ascending
    pub fn is_inorder_sorted(&self) -> bool {
        self.inorder().windows(2).all(|pair| pair[0].id < pair[1].id)
    }

    /// The most recent `count` structural events, oldest first
    pub fn recent_operations(&self, count: usize) -> Vec<TreeOp> {
        let skip = self.log.len().saturating_sub(count);
        self.log.iter().skip(skip).copied().collect()
    }

    fn record(&mut self, op: TreeOp) {
        record_op(&mut self.log, op);
    }

    fn insert_node(
        node: Option<Box<AvlNode>>,
        task: Task,
        log: &mut VecDeque<TreeOp>,
    ) -> Box<AvlNode> {
        let Some(mut node) = node else {
            return Box::new(AvlNode::new(task));
        };
        match task.id.cmp(&node.task.id) {
            Ordering::Less => {
                node.left = Some(Self::insert_node(node.left.take(), task, log));
            }
            Ordering::Greater => {
                node.right = Some(Self::insert_node(node.right.take(), task, log));
            }
            Ordering::Equal => {
                // Duplicate id: replace the task, no structural change
                node.task = task;
                return node;
            }
        }
        Self::rebalance(node, log)
    }

    fn delete_node(
        node: Option<Box<AvlNode>>,
        id: u32,
        log: &mut VecDeque<TreeOp>,
    ) -> Option<Box<AvlNode>> {
        let mut node = node?;
        match id.cmp(&node.task.id) {
            Ordering::Less => {
                node.left = Self::delete_node(node.left.take(), id, log);
            }
            Ordering::Greater => {
                node.right = Self::delete_node(node.right.take(), id, log);
            }
            Ordering::Equal => {
                // At most one child: splice that child (or nothing) in
                if node.left.is_none() {
                    return node.right.take();
                }
                if node.right.is_none() {
                    return node.left.take();
                }
                // Two children: promote the in-order successor's task and
                // delete its original node from the right subtree
                let successor = match node.right.as_deref() {
                    Some(right) => Self::min_task(right),
                    None => return Some(node),
                };
                let successor_id = successor.id;
                node.task = successor;
                node.right = Self::delete_node(node.right.take(), successor_id, log);
            }
        }
        Some(Self::rebalance(node, log))
    }

    /// Leftmost task of a subtree (the in-order successor's value)
    fn min_task(node: &AvlNode) -> Task {
        let mut current = node;
        while let Some(left) = current.left.as_deref() {
            current = left;
        }
        current.task.clone()
    }

    /// Restore the AVL invariant at `node` after a structural change below
    ///
    /// The height is recomputed before the balance factor is read so the
    /// factor reflects the post-change structure. The four imbalance cases
    /// are keyed on the sign of the taller child's balance factor.
    fn rebalance(mut node: Box<AvlNode>, log: &mut VecDeque<TreeOp>) -> Box<AvlNode> {
        node.update_height();
        let balance = node.balance_factor();

        // Left-heavy: left-left takes a single right rotation, left-right
        // first rotates the left child left
        if balance > 1 {
            if balance_of(&node.left) < 0
                && let Some(left) = node.left.take()
            {
                node.left = Some(Self::rotate_left(left, log));
            }
            return Self::rotate_right(node, log);
        }

        // Right-heavy: mirror image of the above
        if balance < -1 {
            if balance_of(&node.right) > 0
                && let Some(right) = node.right.take()
            {
                node.right = Some(Self::rotate_right(right, log));
            }
            return Self::rotate_left(node, log);
        }

        node
    }

    /// Single right rotation pivoted at `z`
    ///
    /// ```text
    ///      z               y
    ///     / \             / \
    ///    y   C   --->    x   z
    ///   / \                 / \
    ///  x   B               B   C
    /// ```
    fn rotate_right(mut z: Box<AvlNode>, log: &mut VecDeque<TreeOp>) -> Box<AvlNode> {
        let Some(mut y) = z.left.take() else {
            return z;
        };
        record_op(log, TreeOp::RotateRight(z.task.id));
        z.left = y.right.take();
        z.update_height();
        y.right = Some(z);
        y.update_height();
        y
    }

    /// Single left rotation pivoted at `z`
    ///
    /// ```text
    ///    z                   y
    ///   / \                 / \
    ///  A   y     --->      z   x
    ///     / \             / \
    ///    B   x           A   B
    /// ```
    fn rotate_left(mut z: Box<AvlNode>, log: &mut VecDeque<TreeOp>) -> Box<AvlNode> {
        let Some(mut y) = z.right.take() else {
            return z;
        };
        record_op(log, TreeOp::RotateLeft(z.task.id));
        z.right = y.left.take();
        z.update_height();
        y.left = Some(z);
        y.update_height();
        y
    }

    fn inorder_walk(node: Option<&AvlNode>, tasks: &mut Vec<Task>) {
        if let Some(node) = node {
            Self::inorder_walk(node.left.as_deref(), tasks);
            tasks.push(node.task.clone());
            Self::inorder_walk(node.right.as_deref(), tasks);
        }
    }

    fn preorder_walk(node: Option<&AvlNode>, tasks: &mut Vec<Task>) {
        if let Some(node) = node {
            tasks.push(node.task.clone());
            Self::preorder_walk(node.left.as_deref(), tasks);
            Self::preorder_walk(node.right.as_deref(), tasks);
        }
    }

    fn postorder_walk(node: Option<&AvlNode>, tasks: &mut Vec<Task>) {
        if let Some(node) = node {
            Self::postorder_walk(node.left.as_deref(), tasks);
            Self::postorder_walk(node.right.as_deref(), tasks);
            tasks.push(node.task.clone());
        }
    }

    fn count_nodes(node: Option<&AvlNode>) -> usize {
        node.map_or(0, |n| {
            1 + Self::count_nodes(n.left.as_deref()) + Self::count_nodes(n.right.as_deref())
        })
    }

    fn check_balanced(node: Option<&AvlNode>) -> bool {
        node.is_none_or(|n| {
            n.balance_factor().abs() <= 1
                && Self::check_balanced(n.left.as_deref())
                && Self::check_balanced(n.right.as_deref())
        })
    }
}
