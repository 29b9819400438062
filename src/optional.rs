use crate::{error::BadOptionalAccess, log::debug};
use core::{
    any::type_name,
    fmt,
    mem,
    ops::{Deref, DerefMut},
};
use raw_slot::RawSlot;

/// A container holding either nothing or exactly one `T`, stored inline.
///
/// The value lives in a [`RawSlot`] next to a `populated` flag. The flag is set only
/// after a value has been fully written and cleared before the value is dropped or
/// moved out, so a panic in a constructor or destructor never leaves the container
/// claiming a value it does not hold.
///
/// Every transfer out of a container empties it: [`take`](Optional::take),
/// [`move_from`](Optional::move_from) and [`take_value`](Optional::take_value) all
/// leave the source empty, and its drop is then a no-op.
///
/// # Example
///
/// ```rust
/// use inplace_optional::{BadOptionalAccess, Optional};
///
/// let mut name = Optional::<String>::new();
/// assert_eq!(name.value(), Err(BadOptionalAccess));
///
/// name.emplace_with(|| String::from("ferris"));
/// name.value_mut()?.push('!');
/// assert_eq!(name.value()?, "ferris!");
///
/// let moved = name.take();
/// assert!(!name.has_value());
/// assert_eq!(moved.into_value()?, "ferris!");
/// # Ok::<(), BadOptionalAccess>(())
/// ```
///
/// Assigning a container to itself does not compile:
///
/// ```compile_fail
/// use inplace_optional::Optional;
///
/// let mut a = Optional::some(String::from("x"));
/// a.clone_from(&a);
/// ```
///
/// ```compile_fail
/// use inplace_optional::Optional;
///
/// let mut a = Optional::some(1);
/// a.move_from(&mut a);
/// ```
pub struct Optional<T> {
    slot: RawSlot<T>,
    populated: bool,
}

impl<T> Optional<T> {
    /// An empty container. The storage is not touched.
    #[inline]
    #[must_use]
    pub const fn new() -> Optional<T> {
        Optional { slot: RawSlot::new(), populated: false }
    }

    /// A container holding `value`.
    #[inline]
    #[must_use]
    pub const fn some(value: T) -> Optional<T> {
        Optional { slot: RawSlot::new_with(value), populated: true }
    }

    /// A container holding a clone of `value`.
    #[inline]
    #[must_use]
    pub fn some_cloned(value: &T) -> Optional<T>
    where T: Clone {
        Self::some(value.clone())
    }

    #[inline]
    pub const fn has_value(&self) -> bool { self.populated }

    /// Checked shared access.
    #[inline]
    pub fn value(&self) -> Result<&T, BadOptionalAccess> {
        if self.populated {
            // SAFETY: the flag guarantees a live value.
            Ok(unsafe { self.slot.assume_init_ref() })
        } else {
            Err(BadOptionalAccess)
        }
    }

    /// Checked mutable access.
    #[inline]
    pub fn value_mut(&mut self) -> Result<&mut T, BadOptionalAccess> {
        if self.populated {
            // SAFETY: the flag guarantees a live value.
            Ok(unsafe { self.slot.assume_init_mut() })
        } else {
            Err(BadOptionalAccess)
        }
    }

    /// Checked by-move access: consumes the container and returns its value.
    #[inline]
    pub fn into_value(self) -> Result<T, BadOptionalAccess> {
        self.into_option().ok_or(BadOptionalAccess)
    }

    /// # Safety
    ///
    /// The container must hold a value. Checked with `debug_assert!` only.
    #[inline]
    pub unsafe fn get_unchecked(&self) -> &T {
        debug_assert!(self.populated, "unchecked access to an empty Optional");
        unsafe { self.slot.assume_init_ref() }
    }

    /// # Safety
    ///
    /// The container must hold a value. Checked with `debug_assert!` only.
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self) -> &mut T {
        debug_assert!(self.populated, "unchecked access to an empty Optional");
        unsafe { self.slot.assume_init_mut() }
    }

    /// Consumes the container and moves the value out without checking.
    ///
    /// # Safety
    ///
    /// The container must hold a value. Checked with `debug_assert!` only.
    #[inline]
    pub unsafe fn into_inner_unchecked(mut self) -> T {
        debug_assert!(self.populated, "unchecked access to an empty Optional");
        self.populated = false;
        unsafe { self.slot.assume_init_read() }
    }

    /// Pointer to the storage, whether or not it holds a value.
    #[inline]
    pub const fn as_ptr(&self) -> *const T { self.slot.as_ptr() }

    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T { self.slot.as_mut_ptr() }

    /// Drops the value if there is one. Calling it on an empty container does nothing.
    pub fn reset(&mut self) {
        if self.populated {
            self.populated = false;
            debug!(ty = type_name::<T>(), "reset: dropping contained value");
            // SAFETY: the flag was set, and is cleared first so a panicking
            // destructor cannot lead to a second drop.
            unsafe { self.slot.assume_init_drop() }
        }
    }

    /// Writes `value` into an empty container.
    ///
    /// The container must be empty; this is checked with `debug_assert!` only. In
    /// release builds a previous value is forgotten without being dropped. Use
    /// [`emplace`](Optional::emplace) when the container may be populated.
    #[inline]
    pub fn construct(&mut self, value: T) -> &mut T {
        debug_assert!(!self.populated, "construct on a populated Optional");
        let value = self.slot.write(value);
        self.populated = true;
        value
    }

    /// Like [`construct`](Optional::construct), building the value with `f`.
    ///
    /// If `f` panics the container is unchanged.
    #[inline]
    pub fn construct_with<F>(&mut self, f: F) -> &mut T
    where F: FnOnce() -> T {
        self.construct(f())
    }

    /// Drops any current value, then stores `value`.
    #[inline]
    pub fn emplace(&mut self, value: T) -> &mut T { self.emplace_with(|| value) }

    /// Drops any current value, then stores the value built by `f`.
    ///
    /// If `f` panics the container is left empty.
    ///
    /// ```rust
    /// use inplace_optional::Optional;
    ///
    /// let mut v = Optional::some(vec![1]);
    /// let r = v.emplace_with(|| Vec::with_capacity(8));
    /// r.push(2);
    /// assert_eq!(v.value().map(Vec::as_slice), Ok(&[2][..]));
    /// ```
    pub fn emplace_with<F>(&mut self, f: F) -> &mut T
    where F: FnOnce() -> T {
        self.reset();
        debug!(ty = type_name::<T>(), "emplace");
        self.construct(f())
    }

    /// Drops any current value, then tries to build a new one with `f`.
    ///
    /// On `Err` the container is left empty and the error is returned unchanged.
    ///
    /// ```rust
    /// use inplace_optional::Optional;
    ///
    /// let mut port = Optional::some(80u16);
    /// assert!(port.try_emplace_with(|| "http".parse::<u16>()).is_err());
    /// assert!(!port.has_value());
    ///
    /// assert_eq!(port.try_emplace_with(|| "8080".parse::<u16>()).copied(), Ok(8080));
    /// ```
    pub fn try_emplace_with<E, F>(&mut self, f: F) -> Result<&mut T, E>
    where F: FnOnce() -> Result<T, E> {
        self.reset();
        debug!(ty = type_name::<T>(), "emplace (fallible)");
        let value = f()?;
        Ok(self.construct(value))
    }

    /// Value assignment: stores `value`, assigning into the current value if there is
    /// one.
    pub fn set(&mut self, value: T) -> &mut T {
        if self.populated {
            // SAFETY: the flag guarantees a live value.
            let current = unsafe { self.slot.assume_init_mut() };
            *current = value;
            current
        } else {
            self.construct(value)
        }
    }

    /// Value assignment by copy. A populated container is updated through
    /// [`Clone::clone_from`].
    pub fn set_cloned(&mut self, value: &T) -> &mut T
    where T: Clone {
        if self.populated {
            // SAFETY: the flag guarantees a live value.
            let current = unsafe { self.slot.assume_init_mut() };
            current.clone_from(value);
            current
        } else {
            self.construct(value.clone())
        }
    }

    /// Stores `value` and returns the previous value, if any.
    #[inline]
    pub fn replace(&mut self, value: T) -> Option<T> {
        let previous = self.take_value();
        self.construct(value);
        previous
    }

    /// Moves the value out, leaving the container empty.
    #[inline]
    pub fn take_value(&mut self) -> Option<T> {
        if self.populated {
            self.populated = false;
            // SAFETY: the flag was set and is now cleared, so the value is read
            // out exactly once.
            Some(unsafe { self.slot.assume_init_read() })
        } else {
            None
        }
    }

    /// Move construction: a new container holding this one's value. `self` is left
    /// empty.
    #[inline]
    #[must_use]
    pub fn take(&mut self) -> Optional<T> { Optional::from(self.take_value()) }

    /// Move assignment from `source`, which is always left empty.
    ///
    /// | `self` | `source` | effect |
    /// |---|---|---|
    /// | populated | populated | source's value is assigned into `self`'s |
    /// | populated | empty | `self`'s value is dropped |
    /// | empty | populated | source's value is moved into `self` |
    /// | empty | empty | nothing |
    pub fn move_from(&mut self, source: &mut Optional<T>) {
        debug!(
            ty = type_name::<T>(),
            dst = self.populated,
            src = source.populated,
            "move assignment"
        );
        match (self.populated, source.take_value()) {
            (true, Some(value)) => {
                // SAFETY: the flag guarantees a live value.
                *unsafe { self.slot.assume_init_mut() } = value;
            }
            (true, None) => self.reset(),
            (false, Some(value)) => {
                self.construct(value);
            }
            (false, None) => {}
        }
    }

    /// Exchanges the contents of two containers.
    #[inline]
    pub fn swap(&mut self, other: &mut Optional<T>) {
        debug!(ty = type_name::<T>(), lhs = self.populated, rhs = other.populated, "swap");
        mem::swap(self, other)
    }

    #[inline]
    pub fn as_option(&self) -> Option<&T> { self.value().ok() }

    #[inline]
    pub fn as_option_mut(&mut self) -> Option<&mut T> { self.value_mut().ok() }

    #[inline]
    pub fn into_option(mut self) -> Option<T> { self.take_value() }
}

impl<T> Drop for Optional<T> {
    #[inline]
    fn drop(&mut self) { self.reset() }
}

impl<T> Default for Optional<T> {
    #[inline]
    fn default() -> Self { Self::new() }
}

impl<T: Clone> Clone for Optional<T> {
    fn clone(&self) -> Self {
        match self.as_option() {
            Some(value) => Self::some(value.clone()),
            None => Self::new(),
        }
    }

    /// Copy assignment, following the same four cases as
    /// [`move_from`](Optional::move_from) with `source` left untouched.
    fn clone_from(&mut self, source: &Self) {
        match source.as_option() {
            Some(value) => {
                self.set_cloned(value);
            }
            None => self.reset(),
        }
    }
}

#[cold]
#[inline(never)]
#[track_caller]
fn bad_access() -> ! { panic!("{}", BadOptionalAccess) }

/// Operator access. Panics with the [`BadOptionalAccess`] message when empty; use
/// [`get_unchecked`](Optional::get_unchecked) to skip the check.
impl<T> Deref for Optional<T> {
    type Target = T;

    #[inline]
    #[track_caller]
    fn deref(&self) -> &T {
        match self.value() {
            Ok(value) => value,
            Err(_) => bad_access(),
        }
    }
}

impl<T> DerefMut for Optional<T> {
    #[inline]
    #[track_caller]
    fn deref_mut(&mut self) -> &mut T {
        match self.value_mut() {
            Ok(value) => value,
            Err(_) => bad_access(),
        }
    }
}

impl<T> From<T> for Optional<T> {
    #[inline]
    fn from(value: T) -> Self { Self::some(value) }
}

impl<T> From<Option<T>> for Optional<T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::some(value),
            None => Self::new(),
        }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    #[inline]
    fn from(value: Optional<T>) -> Self { value.into_option() }
}

impl<T: fmt::Debug> fmt::Debug for Optional<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_option() {
            Some(value) => f.debug_tuple("Optional::Populated").field(value).finish(),
            None => f.write_str("Optional::Empty"),
        }
    }
}
