use allocator_api2::alloc::Allocator;
use allocator_api2::alloc::Global;
use core::iter::FusedIterator;
use crate::Node;

/// An iterator over the nodes of a [`List`](crate::List), in traversal order.
///
/// Created by [`List::nodes`](crate::List::nodes).

pub struct Nodes<'a, A: Allocator = Global>(Option<&'a Node<A>>);

/// An iterator over the values of a [`List`](crate::List), in traversal
/// order.
///
/// Created by [`List::iter`](crate::List::iter).

pub struct Iter<'a, A: Allocator = Global>(Nodes<'a, A>);

impl<'a, A: Allocator> Nodes<'a, A> {
  #[inline(always)]
  pub(crate) fn new(head: Option<&'a Node<A>>) -> Self {
    Self(head)
  }
}

impl<'a, A: Allocator> Iterator for Nodes<'a, A> {
  type Item = &'a Node<A>;

  #[inline(always)]
  fn next(&mut self) -> Option<Self::Item> {
    let n = self.0?;
    self.0 = n.next();
    Some(n)
  }
}

impl<'a, A: Allocator> FusedIterator for Nodes<'a, A> { }

impl<'a, A: Allocator> Iter<'a, A> {
  #[inline(always)]
  pub(crate) fn new(nodes: Nodes<'a, A>) -> Self {
    Self(nodes)
  }
}

impl<'a, A: Allocator> Iterator for Iter<'a, A> {
  type Item = i32;

  #[inline(always)]
  fn next(&mut self) -> Option<Self::Item> {
    self.0.next().map(|n| n.value())
  }
}

impl<'a, A: Allocator> FusedIterator for Iter<'a, A> { }
