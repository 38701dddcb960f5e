#![doc = include_str!("../README.md")]
#![no_std]
#![cfg_attr(feature = "allocator_api", feature(allocator_api))]

extern crate alloc;

use allocator_api2::alloc::Allocator;
use allocator_api2::alloc::Global;
use allocator_api2::boxed::Box;
use allocator_api2::vec::Vec;
use core::alloc::Layout;
use core::fmt;

/// The error returned when the allocator backing a list fails to provide
/// memory.

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AllocError;

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// SUBMODULES                                                                 //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

mod iter;

pub use iter::Iter;
pub use iter::Nodes;

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// PUBLIC TYPE AND TRAIT DEFINITIONS                                          //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

/// A singly-linked list of `i32` values.
///
/// The list owns its first node and every node owns its successor. The empty
/// list has no nodes at all; it is not a sentinel.
///
/// Nodes are allocated with `A`. Every operation that allocates comes in two
/// flavors: one that reports failure through
/// [`handle_alloc_error`](alloc::alloc::handle_alloc_error), and a `try_`
/// variant that returns [`AllocError`].

pub struct List<A: Allocator = Global> {
  head: Link<A>,
  allocator: A,
}

/// A single element of a [`List`].
///
/// Nodes are only ever observed by reference, through [`List::head`],
/// [`List::tail`], [`List::find`] or [`List::nodes`].

pub struct Node<A: Allocator = Global> {
  value: i32,
  next: Link<A>,
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// PRIVATE TYPE AND TRAIT DEFINITIONS                                         //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

type Link<A> = Option<Box<Node<A>, A>>;

enum Error {
  ParentAllocatorFailed(Layout),
  CapacityOverflow,
}

enum Panicked { }

trait Fail: Sized {
  fn fail<T>(_: Error) -> Result<T, Self>;
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// UTILITY FUNCTIONS                                                          //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

#[inline(always)]
fn unwrap<T>(x: Result<T, Panicked>) -> T {
  match x { Ok(x) => x, Err(e) => match e { } }
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// Fail                                                                       //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

impl Fail for Panicked {
  #[inline(never)]
  #[cold]
  fn fail<T>(e: Error) -> Result<T, Self> {
    match e {
      Error::ParentAllocatorFailed(layout) =>
        alloc::alloc::handle_alloc_error(layout),
      Error::CapacityOverflow =>
        // Only reachable from `to_array` on a list whose length exceeds what
        // a `Layout` can describe.
        panic!("intlist: capacity overflow!"),
    }
  }
}

impl Fail for AllocError {
  #[inline(always)]
  fn fail<T>(_: Error) -> Result<T, Self> {
    Err(AllocError)
  }
}

impl fmt::Display for AllocError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("memory allocation failed")
  }
}

impl core::error::Error for AllocError { }

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// Node                                                                       //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

fn alloc_node<A, E>(value: i32, allocator: &A) -> Result<Box<Node<A>, A>, E>
where
  A: Allocator + Clone,
  E: Fail,
{
  let node = Node { value, next: None };

  match Box::try_new_in(node, allocator.clone()) {
    Ok(b) => Ok(b),
    Err(_) => E::fail(Error::ParentAllocatorFailed(Layout::new::<Node<A>>())),
  }
}

impl<A: Allocator> Node<A> {
  /// The value held by this node.

  #[inline(always)]
  pub fn value(&self) -> i32 {
    self.value
  }

  /// The successor of this node, or `None` if this is the last node.

  #[inline(always)]
  pub fn next(&self) -> Option<&Node<A>> {
    self.next.as_deref()
  }
}

impl<A: Allocator> fmt::Debug for Node<A> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_tuple("Node").field(&self.value).finish()
  }
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// List                                                                       //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

fn create<A, E>(value: i32, allocator: A) -> Result<List<A>, E>
where
  A: Allocator + Clone,
  E: Fail,
{
  let head = alloc_node(value, &allocator)?;

  Ok(List { head: Some(head), allocator })
}

fn from_array<A, E>(data: &[i32], allocator: A) -> Result<List<A>, E>
where
  A: Allocator + Clone,
  E: Fail,
{
  // An early return drops `list`, which frees every node allocated so far.

  let mut list = List::new_in(allocator);
  let mut link = &mut list.head;

  for &value in data {
    let node = alloc_node(value, &list.allocator)?;
    link = &mut link.insert(node).next;
  }

  Ok(list)
}

fn append<A, E>(list: &mut List<A>, value: i32) -> Result<bool, E>
where
  A: Allocator + Clone,
  E: Fail,
{
  if list.head.is_none() {
    return Ok(false);
  }

  let node = alloc_node(value, &list.allocator)?;

  let mut link = &mut list.head;

  while let Some(n) = link {
    link = &mut n.next;
  }

  *link = Some(node);

  Ok(true)
}

fn to_array<A, E>(list: &List<A>) -> Result<Vec<i32, A>, E>
where
  A: Allocator + Clone,
  E: Fail,
{
  let n = list.size();
  let mut array = Vec::new_in(list.allocator.clone());

  if array.try_reserve_exact(n).is_err() {
    return
      match Layout::array::<i32>(n) {
        Ok(layout) => E::fail(Error::ParentAllocatorFailed(layout)),
        Err(_) => E::fail(Error::CapacityOverflow),
      };
  }

  for value in list.iter() {
    array.push(value);
  }

  Ok(array)
}

impl List<Global> {
  /// Creates an empty list backed by the global allocator.

  pub fn new() -> Self {
    Self::new_in(Global)
  }

  /// Creates a list holding the single value `value`, backed by the global
  /// allocator.
  ///
  /// # Panics
  ///
  /// Calls [`handle_alloc_error`](alloc::alloc::handle_alloc_error) on
  /// failure to allocate memory.

  pub fn create(value: i32) -> Self {
    unwrap(create(value, Global))
  }

  /// Creates a list holding the single value `value`, backed by the global
  /// allocator.
  ///
  /// # Errors
  ///
  /// An error is returned on failure to allocate memory.

  pub fn try_create(value: i32) -> Result<Self, AllocError> {
    create(value, Global)
  }

  /// Creates a list with one node per element of `data`, in order, backed by
  /// the global allocator. An empty slice gives the empty list.
  ///
  /// # Panics
  ///
  /// Calls [`handle_alloc_error`](alloc::alloc::handle_alloc_error) on
  /// failure to allocate memory.

  pub fn from_array(data: &[i32]) -> Self {
    unwrap(from_array(data, Global))
  }

  /// Creates a list with one node per element of `data`, in order, backed by
  /// the global allocator. An empty slice gives the empty list.
  ///
  /// # Errors
  ///
  /// An error is returned on failure to allocate memory. Any nodes allocated
  /// before the failure are freed.

  pub fn try_from_array(data: &[i32]) -> Result<Self, AllocError> {
    from_array(data, Global)
  }
}

impl<A: Allocator> List<A> {
  /// Creates an empty list whose nodes will be allocated with `allocator`.

  pub fn new_in(allocator: A) -> Self {
    Self { head: None, allocator }
  }

  /// A reference to the allocator backing this list.

  pub fn allocator(&self) -> &A {
    &self.allocator
  }

  /// Returns `true` if the list has no nodes.

  #[inline(always)]
  pub fn is_empty(&self) -> bool {
    self.head.is_none()
  }

  /// The first node, or `None` if the list is empty.

  #[inline(always)]
  pub fn head(&self) -> Option<&Node<A>> {
    self.head.as_deref()
  }

  /// The last node, or `None` if the list is empty.
  ///
  /// This walks the whole list.

  pub fn tail(&self) -> Option<&Node<A>> {
    self.nodes().last()
  }

  /// The number of nodes in the list.
  ///
  /// This walks the whole list.

  pub fn size(&self) -> usize {
    self.nodes().count()
  }

  /// The first node, in traversal order, holding `value`.

  pub fn find(&self, value: i32) -> Option<&Node<A>> {
    self.nodes().find(|n| n.value == value)
  }

  /// Removes the first node, in traversal order, holding `value`.
  ///
  /// The remaining nodes keep their relative order. If the removed node was
  /// the first one, its successor becomes the new head. Returns `false`, and
  /// leaves the list untouched, if no node holds `value`.

  pub fn remove(&mut self, value: i32) -> bool {
    let mut link = &mut self.head;

    loop {
      match link {
        None => return false,
        Some(n) if n.value == value => {
          let next = n.next.take();
          *link = next;
          return true;
        }
        Some(n) => link = &mut n.next,
      }
    }
  }

  /// Frees every node of the list, in traversal order.
  ///
  /// This is the same as dropping the list.

  pub fn destroy(self) {
    drop(self)
  }

  /// An iterator over the values of the list, in traversal order.

  pub fn iter(&self) -> Iter<'_, A> {
    Iter::new(self.nodes())
  }

  /// An iterator over the nodes of the list, in traversal order.

  pub fn nodes(&self) -> Nodes<'_, A> {
    Nodes::new(self.head())
  }
}

impl<A: Allocator + Clone> List<A> {
  /// Creates a list holding the single value `value`, allocated with
  /// `allocator`.
  ///
  /// # Panics
  ///
  /// Calls [`handle_alloc_error`](alloc::alloc::handle_alloc_error) on
  /// failure to allocate memory.

  pub fn create_in(value: i32, allocator: A) -> Self {
    unwrap(create(value, allocator))
  }

  /// Creates a list holding the single value `value`, allocated with
  /// `allocator`.
  ///
  /// # Errors
  ///
  /// An error is returned on failure to allocate memory.

  pub fn try_create_in(value: i32, allocator: A) -> Result<Self, AllocError> {
    create(value, allocator)
  }

  /// Creates a list with one node per element of `data`, in order, allocated
  /// with `allocator`.
  ///
  /// # Panics
  ///
  /// Calls [`handle_alloc_error`](alloc::alloc::handle_alloc_error) on
  /// failure to allocate memory.

  pub fn from_array_in(data: &[i32], allocator: A) -> Self {
    unwrap(from_array(data, allocator))
  }

  /// Creates a list with one node per element of `data`, in order, allocated
  /// with `allocator`.
  ///
  /// # Errors
  ///
  /// An error is returned on failure to allocate memory. Any nodes allocated
  /// before the failure are freed.

  pub fn try_from_array_in(data: &[i32], allocator: A) -> Result<Self, AllocError> {
    from_array(data, allocator)
  }

  /// Links a new node holding `value` after the current tail.
  ///
  /// Appending requires a non-empty list: on the empty list nothing is
  /// allocated and `false` is returned. Use [`create`](List::create) or
  /// [`from_array`](List::from_array) to make the first node.
  ///
  /// # Panics
  ///
  /// Calls [`handle_alloc_error`](alloc::alloc::handle_alloc_error) on
  /// failure to allocate memory.

  pub fn append(&mut self, value: i32) -> bool {
    unwrap(append(self, value))
  }

  /// Links a new node holding `value` after the current tail.
  ///
  /// Returns `Ok(false)` without allocating if the list is empty.
  ///
  /// # Errors
  ///
  /// An error is returned on failure to allocate memory, in which case the
  /// list is unchanged.

  pub fn try_append(&mut self, value: i32) -> Result<bool, AllocError> {
    append(self, value)
  }

  /// Copies the values of the list, in traversal order, into a new vector
  /// allocated with the list's allocator. The empty list gives an empty
  /// vector.
  ///
  /// # Panics
  ///
  /// Calls [`handle_alloc_error`](alloc::alloc::handle_alloc_error) on
  /// failure to allocate memory.

  pub fn to_array(&self) -> Vec<i32, A> {
    unwrap(to_array(self))
  }

  /// Copies the values of the list, in traversal order, into a new vector
  /// allocated with the list's allocator.
  ///
  /// # Errors
  ///
  /// An error is returned on failure to allocate memory.

  pub fn try_to_array(&self) -> Result<Vec<i32, A>, AllocError> {
    to_array(self)
  }
}

impl<A: Allocator> Drop for List<A> {
  fn drop(&mut self) {
    // NB: The default drop glue would recurse once per node.

    let mut link = self.head.take();

    while let Some(mut n) = link {
      link = n.next.take();
    }
  }
}

impl Default for List<Global> {
  fn default() -> Self {
    Self::new()
  }
}

impl<A: Allocator, B: Allocator> PartialEq<List<B>> for List<A> {
  fn eq(&self, other: &List<B>) -> bool {
    self.iter().eq(other.iter())
  }
}

impl<A: Allocator> Eq for List<A> { }

impl<A: Allocator> fmt::Debug for List<A> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_list().entries(self.iter()).finish()
  }
}

impl<'a, A: Allocator> IntoIterator for &'a List<A> {
  type Item = i32;
  type IntoIter = Iter<'a, A>;

  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}
