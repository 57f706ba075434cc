//! Doubly linked list stored in a node arena.
//!
//! Nodes live in a `Vec` and link to each other by slot index, so `prev` and
//! `next` never own anything: the list owns every node through the arena.
//! Slots 0 and 1 are the head and tail sentinels. They never carry an element,
//! which makes `front`/`back` on an empty list fall out of the normal path.

use std::fmt;
use std::iter::FusedIterator;

const HEAD: usize = 0;
const TAIL: usize = 1;

struct Node<T> {
   prev: usize,
   next: usize,
   element: Option<T>,
}

impl<T> Node<T> {
   fn sentinel() -> Self {
      Self {
         prev: HEAD,
         next: TAIL,
         element: None,
      }
   }

   fn new(element: T) -> Self {
      Self {
         prev: HEAD,
         next: TAIL,
         element: Some(element),
      }
   }
}

/// A doubly linked sequence with O(1) work at both ends and O(n) positional
/// access.
///
/// Lookups by index or predicate walk forward from the head, so their cost
/// is proportional to the position of the node they stop at. All removal and
/// lookup operations are total and signal absence with `None`.
pub struct List<T> {
   nodes: Vec<Node<T>>,
   // released slots, reused before the arena grows
   free: Vec<usize>,
   len: usize,
}

impl<T> List<T> {
   pub fn new() -> Self {
      Self {
         nodes: vec![Node::sentinel(), Node::sentinel()],
         free: Vec::new(),
         len: 0,
      }
   }

   pub fn is_empty(&self) -> bool {
      self.len == 0
   }

   pub fn len(&self) -> usize {
      self.len
   }

   /// Inserts `ele` right after the head sentinel.
   pub fn push_front(&mut self, ele: T) {
      let node = self.alloc(ele);
      self.link_after(HEAD, node);
   }

   /// Inserts `ele` right before the tail sentinel.
   pub fn push_back(&mut self, ele: T) {
      let node = self.alloc(ele);
      let last = self.nodes[TAIL].prev;
      self.link_after(last, node);
   }

   pub fn pop_front(&mut self) -> Option<T> {
      if self.is_empty() {
         return None;
      }
      self.unlink(self.nodes[HEAD].next)
   }

   pub fn pop_back(&mut self) -> Option<T> {
      if self.is_empty() {
         return None;
      }
      self.unlink(self.nodes[TAIL].prev)
   }

   pub fn front(&self) -> Option<&T> {
      // the tail sentinel holds no element when the list is empty
      self.nodes[self.nodes[HEAD].next].element.as_ref()
   }

   pub fn back(&self) -> Option<&T> {
      self.nodes[self.nodes[TAIL].prev].element.as_ref()
   }

   /// Returns the 0-based position of the first element matching `pred`,
   /// scanning from the front.
   pub fn find_first_index<P>(&self, mut pred: P) -> Option<usize>
   where
      P: FnMut(&T) -> bool,
   {
      self.iter().position(|ele| pred(ele))
   }

   /// Returns the position of the first element equal to `value`.
   pub fn position(&self, value: &T) -> Option<usize>
   where
      T: PartialEq,
   {
      self.find_first_index(|ele| ele == value)
   }

   pub fn find<P>(&self, mut pred: P) -> Option<&T>
   where
      P: FnMut(&T) -> bool,
   {
      self.iter().find(|ele| pred(*ele))
   }

   pub fn find_mut<P>(&mut self, pred: P) -> Option<&mut T>
   where
      P: FnMut(&T) -> bool,
   {
      let node = self.find_node(pred)?;
      self.nodes[node].element.as_mut()
   }

   /// Element at `index`, or `None` when the index is out of range.
   pub fn at(&self, index: usize) -> Option<&T> {
      let node = self.node_at(index)?;
      self.nodes[node].element.as_ref()
   }

   pub fn at_mut(&mut self, index: usize) -> Option<&mut T> {
      let node = self.node_at(index)?;
      self.nodes[node].element.as_mut()
   }

   /// Unlinks and returns the element at `index`, or `None` when the index
   /// is out of range.
   pub fn remove_at(&mut self, index: usize) -> Option<T> {
      let node = self.node_at(index)?;
      self.unlink(node)
   }

   /// Moves every element of `other` to the back of this list, keeping
   /// their order.
   pub fn append(&mut self, other: List<T>) -> &mut Self {
      self.extend(other);
      self
   }

   pub fn iter(&self) -> Iter<'_, T> {
      Iter {
         list: self,
         front: self.nodes[HEAD].next,
         back: self.nodes[TAIL].prev,
         remaining: self.len,
      }
   }

   fn find_node<P>(&self, mut pred: P) -> Option<usize>
   where
      P: FnMut(&T) -> bool,
   {
      let mut node = self.nodes[HEAD].next;
      while node != TAIL {
         if let Some(ele) = &self.nodes[node].element {
            if pred(ele) {
               return Some(node);
            }
         }
         node = self.nodes[node].next;
      }
      None
   }

   fn node_at(&self, index: usize) -> Option<usize> {
      if index >= self.len {
         return None;
      }
      let mut node = self.nodes[HEAD].next;
      for _ in 0..index {
         node = self.nodes[node].next;
      }
      Some(node)
   }

   fn alloc(&mut self, ele: T) -> usize {
      match self.free.pop() {
         Some(slot) => {
            self.nodes[slot] = Node::new(ele);
            slot
         }
         None => {
            self.nodes.push(Node::new(ele));
            self.nodes.len() - 1
         }
      }
   }

   fn link_after(&mut self, at: usize, node: usize) {
      let next = self.nodes[at].next;
      self.nodes[node].prev = at;
      self.nodes[node].next = next;
      self.nodes[at].next = node;
      self.nodes[next].prev = node;
      self.len += 1;
   }

   // `node` must be a live, non-sentinel slot
   fn unlink(&mut self, node: usize) -> Option<T> {
      let prev = self.nodes[node].prev;
      let next = self.nodes[node].next;
      self.nodes[prev].next = next;
      self.nodes[next].prev = prev;
      self.free.push(node);
      self.len -= 1;
      self.nodes[node].element.take()
   }

   /// Walks the chain both ways and checks it against `len` and the arena.
   #[cfg(test)]
   pub(crate) fn assert_links(&self) {
      let mut forward = Vec::new();
      let mut node = self.nodes[HEAD].next;
      while node != TAIL {
         assert!(self.nodes[node].element.is_some(), "linked slot {node} is empty");
         forward.push(node);
         node = self.nodes[node].next;
      }
      let mut backward = Vec::new();
      let mut node = self.nodes[TAIL].prev;
      while node != HEAD {
         backward.push(node);
         node = self.nodes[node].prev;
      }
      backward.reverse();
      assert_eq!(forward, backward);
      assert_eq!(forward.len(), self.len);
      assert_eq!(self.nodes.len(), self.len + self.free.len() + 2);
   }
}

impl<T> Default for List<T> {
   fn default() -> Self {
      Self::new()
   }
}

impl<T: fmt::Debug> fmt::Debug for List<T> {
   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      f.debug_list().entries(self.iter()).finish()
   }
}

impl<T> Extend<T> for List<T> {
   fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
      for ele in iter {
         self.push_back(ele);
      }
   }
}

impl<T> FromIterator<T> for List<T> {
   fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
      let mut list = List::new();
      list.extend(iter);
      list
   }
}

/// Front-to-back borrowing iterator over a [`List`].
pub struct Iter<'a, T> {
   list: &'a List<T>,
   front: usize,
   back: usize,
   remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
   type Item = &'a T;

   fn next(&mut self) -> Option<&'a T> {
      if self.remaining == 0 {
         return None;
      }
      let node = &self.list.nodes[self.front];
      self.front = node.next;
      self.remaining -= 1;
      node.element.as_ref()
   }

   fn size_hint(&self) -> (usize, Option<usize>) {
      (self.remaining, Some(self.remaining))
   }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
   fn next_back(&mut self) -> Option<&'a T> {
      if self.remaining == 0 {
         return None;
      }
      let node = &self.list.nodes[self.back];
      self.back = node.prev;
      self.remaining -= 1;
      node.element.as_ref()
   }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a List<T> {
   type Item = &'a T;
   type IntoIter = Iter<'a, T>;

   fn into_iter(self) -> Iter<'a, T> {
      self.iter()
   }
}

/// Owning iterator that drains a [`List`] from the front.
pub struct IntoIter<T>(List<T>);

impl<T> Iterator for IntoIter<T> {
   type Item = T;

   fn next(&mut self) -> Option<T> {
      self.0.pop_front()
   }

   fn size_hint(&self) -> (usize, Option<usize>) {
      (self.0.len, Some(self.0.len))
   }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
   fn next_back(&mut self) -> Option<T> {
      self.0.pop_back()
   }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> IntoIterator for List<T> {
   type Item = T;
   type IntoIter = IntoIter<T>;

   fn into_iter(self) -> IntoIter<T> {
      IntoIter(self)
   }
}
