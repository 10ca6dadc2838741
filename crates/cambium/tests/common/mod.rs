//! Arena-backed trees used by the integration tests.
//!
//! Three flavours exercise the accessor contract: a keyed set with no
//! augmentation, a rank-maintaining list, and a span list maintaining both
//! ranks and offsets. Handles are `u32` indices into a `Vec` arena; erased
//! nodes simply stay behind in the arena.
#![allow(dead_code)]

use cambium::{
    at_index, binary_search, erase, for_each, insert_at_index, insert_at_offset, node_offset,
    push_back, push_back_with_offset, try_insert, Balance, IndexAccess, OffsetAccess, Side,
    SwapAux, TreeAccess, TryInsert,
};

pub fn assert_near(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-9, "expected {b}, got {a}");
}

/// Swap the named slot-bound fields between two arena entries.
macro_rules! swap_fields {
    ($arena:expr, $x:expr, $y:expr, $($field:ident),+) => {
        $(
            let tmp = $arena[$x].$field;
            $arena[$x].$field = $arena[$y].$field;
            $arena[$y].$field = tmp;
        )+
    };
}

// ---------------------------------------------------------------------------
// SetTree: ordered unique keys, no augmentation.
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, PartialEq)]
pub struct SetNode<K> {
    pub key: K,
    parent: Option<u32>,
    left: Option<u32>,
    right: Option<u32>,
    side: Side,
    balance: Balance,
}

pub struct SetTree<K> {
    pub arena: Vec<SetNode<K>>,
    root: Option<u32>,
    leftmost: Option<u32>,
    rightmost: Option<u32>,
    pub len: usize,
}

impl<K> SetTree<K> {
    pub fn new() -> Self {
        Self {
            arena: Vec::new(),
            root: None,
            leftmost: None,
            rightmost: None,
            len: 0,
        }
    }

    fn alloc(&mut self, key: K) -> u32 {
        self.arena.push(SetNode {
            key,
            parent: None,
            left: None,
            right: None,
            side: Side::Left,
            balance: Balance::Poised,
        });
        (self.arena.len() - 1) as u32
    }

    pub fn key(&self, node: u32) -> &K {
        &self.arena[node as usize].key
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn reset(&mut self) {
        self.arena.clear();
        self.root = None;
        self.leftmost = None;
        self.rightmost = None;
        self.len = 0;
    }
}

impl<K: Ord + Clone> SetTree<K> {
    /// Insert `key` if absent; returns whether a node was added.
    pub fn insert(&mut self, key: K) -> bool {
        let outcome = try_insert(
            self,
            |tree: &Self, node| tree.key(node).cmp(&key),
            |tree: &mut Self, _parent, _side| Some(tree.alloc(key.clone())),
        );
        match outcome {
            Some(TryInsert::Inserted(_)) => {
                self.len += 1;
                true
            }
            _ => false,
        }
    }

    pub fn find(&self, key: &K) -> Option<u32> {
        binary_search(self, |node| self.key(node).cmp(key))
    }

    pub fn contains(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    /// Remove `key` if present; returns whether a node was detached.
    pub fn remove(&mut self, key: &K) -> bool {
        match self.find(key) {
            Some(node) => {
                erase(self, node);
                self.len -= 1;
                true
            }
            None => false,
        }
    }

    pub fn keys(&self) -> Vec<K> {
        let mut out = Vec::with_capacity(self.len);
        for_each(self, |node| out.push(self.key(node).clone()));
        out
    }
}

impl<K> TreeAccess for SetTree<K> {
    type Ref = u32;

    fn root(&self) -> Option<u32> {
        self.root
    }

    fn set_root(&mut self, node: Option<u32>) {
        self.root = node;
    }

    fn extreme(&self, side: Side) -> Option<u32> {
        match side {
            Side::Left => self.leftmost,
            Side::Right => self.rightmost,
        }
    }

    fn set_extreme(&mut self, side: Side, node: Option<u32>) {
        match side {
            Side::Left => self.leftmost = node,
            Side::Right => self.rightmost = node,
        }
    }

    fn parent(&self, node: u32) -> Option<u32> {
        self.arena[node as usize].parent
    }

    fn set_parent(&mut self, node: u32, parent: Option<u32>) {
        self.arena[node as usize].parent = parent;
    }

    fn child(&self, node: u32, side: Side) -> Option<u32> {
        let node = &self.arena[node as usize];
        match side {
            Side::Left => node.left,
            Side::Right => node.right,
        }
    }

    fn set_child(&mut self, node: u32, side: Side, child: Option<u32>) {
        let node = &mut self.arena[node as usize];
        match side {
            Side::Left => node.left = child,
            Side::Right => node.right = child,
        }
    }

    fn balance(&self, node: u32) -> Balance {
        self.arena[node as usize].balance
    }

    fn set_balance(&mut self, node: u32, balance: Balance) {
        self.arena[node as usize].balance = balance;
    }

    fn side(&self, node: u32) -> Side {
        self.arena[node as usize].side
    }

    fn set_side(&mut self, node: u32, side: Side) {
        self.arena[node as usize].side = side;
    }
}

// ---------------------------------------------------------------------------
// RankList: positional list with per-node ranks.
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, PartialEq)]
pub struct RankNode<V> {
    pub value: V,
    parent: Option<u32>,
    left: Option<u32>,
    right: Option<u32>,
    side: Side,
    balance: Balance,
    index: u64,
}

pub struct RankList<V> {
    pub arena: Vec<RankNode<V>>,
    root: Option<u32>,
    leftmost: Option<u32>,
    rightmost: Option<u32>,
}

impl<V> RankList<V> {
    pub fn new() -> Self {
        Self {
            arena: Vec::new(),
            root: None,
            leftmost: None,
            rightmost: None,
        }
    }

    /// Allocate a detached node; the caller attaches it with a core entry
    /// point.
    pub fn alloc(&mut self, value: V) -> u32 {
        self.arena.push(RankNode {
            value,
            parent: None,
            left: None,
            right: None,
            side: Side::Left,
            balance: Balance::Poised,
            index: 0,
        });
        (self.arena.len() - 1) as u32
    }

    pub fn value(&self, node: u32) -> &V {
        &self.arena[node as usize].value
    }

    pub fn append(&mut self, value: V) -> u32 {
        let node = self.alloc(value);
        push_back(self, node);
        node
    }

    pub fn insert_at(&mut self, position: u64, value: V) -> u32 {
        let node = self.alloc(value);
        insert_at_index(self, node, position);
        node
    }

    pub fn at(&self, position: u64) -> Option<u32> {
        at_index(self, position)
    }

    pub fn values(&self) -> Vec<V>
    where
        V: Clone,
    {
        let mut out = Vec::new();
        for_each(self, |node| out.push(self.value(node).clone()));
        out
    }
}

impl<V> TreeAccess for RankList<V> {
    type Ref = u32;

    fn root(&self) -> Option<u32> {
        self.root
    }

    fn set_root(&mut self, node: Option<u32>) {
        self.root = node;
    }

    fn extreme(&self, side: Side) -> Option<u32> {
        match side {
            Side::Left => self.leftmost,
            Side::Right => self.rightmost,
        }
    }

    fn set_extreme(&mut self, side: Side, node: Option<u32>) {
        match side {
            Side::Left => self.leftmost = node,
            Side::Right => self.rightmost = node,
        }
    }

    fn parent(&self, node: u32) -> Option<u32> {
        self.arena[node as usize].parent
    }

    fn set_parent(&mut self, node: u32, parent: Option<u32>) {
        self.arena[node as usize].parent = parent;
    }

    fn child(&self, node: u32, side: Side) -> Option<u32> {
        let node = &self.arena[node as usize];
        match side {
            Side::Left => node.left,
            Side::Right => node.right,
        }
    }

    fn set_child(&mut self, node: u32, side: Side, child: Option<u32>) {
        let node = &mut self.arena[node as usize];
        match side {
            Side::Left => node.left = child,
            Side::Right => node.right = child,
        }
    }

    fn balance(&self, node: u32) -> Balance {
        self.arena[node as usize].balance
    }

    fn set_balance(&mut self, node: u32, balance: Balance) {
        self.arena[node as usize].balance = balance;
    }

    fn side(&self, node: u32) -> Side {
        self.arena[node as usize].side
    }

    fn set_side(&mut self, node: u32, side: Side) {
        self.arena[node as usize].side = side;
    }

    fn set_zero_index(&mut self, node: u32) {
        self.arena[node as usize].index = 0;
    }

    fn set_one_index(&mut self, node: u32) {
        self.arena[node as usize].index = 1;
    }

    fn increment_index(&mut self, node: u32) {
        self.arena[node as usize].index += 1;
    }

    fn decrement_index(&mut self, node: u32) {
        self.arena[node as usize].index -= 1;
    }

    fn add_index_of(&mut self, dst: u32, src: u32) {
        self.arena[dst as usize].index += self.arena[src as usize].index;
    }

    fn subtract_index_of(&mut self, dst: u32, src: u32) {
        self.arena[dst as usize].index -= self.arena[src as usize].index;
    }

    fn copy_index_of(&mut self, dst: u32, src: u32) {
        self.arena[dst as usize].index = self.arena[src as usize].index;
    }
}

impl<V> IndexAccess for RankList<V> {
    type Index = u64;

    fn index(&self, node: u32) -> u64 {
        self.arena[node as usize].index
    }

    fn set_index(&mut self, node: u32, index: u64) {
        self.arena[node as usize].index = index;
    }

    fn zero_index() -> u64 {
        0
    }

    fn one_index() -> u64 {
        1
    }
}

impl<V> SwapAux for RankList<V> {
    fn swap_aux(&mut self, x: u32, y: u32) {
        let (x, y) = (x as usize, y as usize);
        swap_fields!(self.arena, x, y, side, balance, index);
    }
}

// ---------------------------------------------------------------------------
// SpanList: positional list with ranks and offsets.
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, PartialEq)]
pub struct SpanNode<V> {
    pub value: V,
    parent: Option<u32>,
    left: Option<u32>,
    right: Option<u32>,
    side: Side,
    balance: Balance,
    index: u64,
    offset: f64,
}

pub struct SpanList<V> {
    pub arena: Vec<SpanNode<V>>,
    root: Option<u32>,
    leftmost: Option<u32>,
    rightmost: Option<u32>,
}

impl<V> SpanList<V> {
    pub fn new() -> Self {
        Self {
            arena: Vec::new(),
            root: None,
            leftmost: None,
            rightmost: None,
        }
    }

    /// Allocate a detached node; the caller attaches it with a core entry
    /// point.
    pub fn alloc(&mut self, value: V) -> u32 {
        self.arena.push(SpanNode {
            value,
            parent: None,
            left: None,
            right: None,
            side: Side::Left,
            balance: Balance::Poised,
            index: 0,
            offset: 0.0,
        });
        (self.arena.len() - 1) as u32
    }

    pub fn value(&self, node: u32) -> &V {
        &self.arena[node as usize].value
    }

    pub fn insert_at(&mut self, offset: f64, value: V) -> u32 {
        let node = self.alloc(value);
        insert_at_offset(self, node, offset);
        node
    }

    pub fn append(&mut self, delta: f64, value: V) -> u32 {
        let node = self.alloc(value);
        push_back_with_offset(self, node, delta);
        node
    }

    /// Node whose global offset is within 1e-9 of `offset`. The tolerance
    /// absorbs the rounding of accumulated stored offsets.
    pub fn find_at(&self, offset: f64) -> Option<u32> {
        cambium::binary_search_by_offset(self, |_, running: f64| {
            if (running - offset).abs() < 1e-9 {
                std::cmp::Ordering::Equal
            } else {
                running.partial_cmp(&offset).expect("ordered offsets")
            }
        })
    }

    pub fn global_offsets(&self) -> Vec<f64> {
        let mut out = Vec::new();
        for_each(self, |node| out.push(node_offset(self, node)));
        out
    }

    pub fn values(&self) -> Vec<V>
    where
        V: Clone,
    {
        let mut out = Vec::new();
        for_each(self, |node| out.push(self.value(node).clone()));
        out
    }
}

impl<V> TreeAccess for SpanList<V> {
    type Ref = u32;

    const MAINTAINS_OFFSET: bool = true;

    fn root(&self) -> Option<u32> {
        self.root
    }

    fn set_root(&mut self, node: Option<u32>) {
        self.root = node;
    }

    fn extreme(&self, side: Side) -> Option<u32> {
        match side {
            Side::Left => self.leftmost,
            Side::Right => self.rightmost,
        }
    }

    fn set_extreme(&mut self, side: Side, node: Option<u32>) {
        match side {
            Side::Left => self.leftmost = node,
            Side::Right => self.rightmost = node,
        }
    }

    fn parent(&self, node: u32) -> Option<u32> {
        self.arena[node as usize].parent
    }

    fn set_parent(&mut self, node: u32, parent: Option<u32>) {
        self.arena[node as usize].parent = parent;
    }

    fn child(&self, node: u32, side: Side) -> Option<u32> {
        let node = &self.arena[node as usize];
        match side {
            Side::Left => node.left,
            Side::Right => node.right,
        }
    }

    fn set_child(&mut self, node: u32, side: Side, child: Option<u32>) {
        let node = &mut self.arena[node as usize];
        match side {
            Side::Left => node.left = child,
            Side::Right => node.right = child,
        }
    }

    fn balance(&self, node: u32) -> Balance {
        self.arena[node as usize].balance
    }

    fn set_balance(&mut self, node: u32, balance: Balance) {
        self.arena[node as usize].balance = balance;
    }

    fn side(&self, node: u32) -> Side {
        self.arena[node as usize].side
    }

    fn set_side(&mut self, node: u32, side: Side) {
        self.arena[node as usize].side = side;
    }

    fn set_zero_index(&mut self, node: u32) {
        self.arena[node as usize].index = 0;
    }

    fn set_one_index(&mut self, node: u32) {
        self.arena[node as usize].index = 1;
    }

    fn increment_index(&mut self, node: u32) {
        self.arena[node as usize].index += 1;
    }

    fn decrement_index(&mut self, node: u32) {
        self.arena[node as usize].index -= 1;
    }

    fn add_index_of(&mut self, dst: u32, src: u32) {
        self.arena[dst as usize].index += self.arena[src as usize].index;
    }

    fn subtract_index_of(&mut self, dst: u32, src: u32) {
        self.arena[dst as usize].index -= self.arena[src as usize].index;
    }

    fn copy_index_of(&mut self, dst: u32, src: u32) {
        self.arena[dst as usize].index = self.arena[src as usize].index;
    }

    fn add_offset_of(&mut self, dst: u32, src: u32) {
        self.arena[dst as usize].offset += self.arena[src as usize].offset;
    }

    fn subtract_offset_of(&mut self, dst: u32, src: u32) {
        self.arena[dst as usize].offset -= self.arena[src as usize].offset;
    }
}

impl<V> IndexAccess for SpanList<V> {
    type Index = u64;

    fn index(&self, node: u32) -> u64 {
        self.arena[node as usize].index
    }

    fn set_index(&mut self, node: u32, index: u64) {
        self.arena[node as usize].index = index;
    }

    fn zero_index() -> u64 {
        0
    }

    fn one_index() -> u64 {
        1
    }
}

impl<V> OffsetAccess for SpanList<V> {
    type Offset = f64;

    fn offset(&self, node: u32) -> f64 {
        self.arena[node as usize].offset
    }

    fn set_offset(&mut self, node: u32, offset: f64) {
        self.arena[node as usize].offset = offset;
    }

    fn add_to_offset(&mut self, node: u32, delta: f64) {
        self.arena[node as usize].offset += delta;
    }

    fn subtract_from_offset(&mut self, node: u32, delta: f64) {
        self.arena[node as usize].offset -= delta;
    }

    fn zero_offset() -> f64 {
        0.0
    }
}

impl<V> SwapAux for SpanList<V> {
    fn swap_aux(&mut self, x: u32, y: u32) {
        let (x, y) = (x as usize, y as usize);
        swap_fields!(self.arena, x, y, side, balance, index, offset);
    }
}
