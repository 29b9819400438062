//! # RawSlot - Storage For Exactly One Value
//!
//! A block of memory with the size and alignment of `T` that may or may not hold a
//! live `T`. The slot itself never knows which: it has no discriminant, never drops
//! its contents and never reads them unless told to.
//!
//! ## The Core Contract
//!
//! **The owner of a `RawSlot` is responsible for:**
//!
//! 1. **Initialization state tracking** - Knowing whether a live value is inside
//! 2. **Dropping** - Calling [`RawSlot::assume_init_drop`] exactly once per written value
//! 3. **Never overwriting a live value** - [`RawSlot::write`] forgets what was there
//!
//! ## Layout
//!
//! | Property | `RawSlot<T>` |
//! |----------|--------------|
//! | Size | `size_of::<T>()` |
//! | Alignment | `align_of::<T>()` |
//! | Heap allocation | never |
//! | Drop glue | none |
//!
//! ## Example
//!
//! ```rust
//! use raw_slot::RawSlot;
//!
//! let mut slot = RawSlot::<String>::new();
//! slot.write(String::from("hello"));
//!
//! // SAFETY: a value was written above and not yet moved out.
//! let s = unsafe { slot.assume_init_read() };
//! assert_eq!(s, "hello");
//! ```

#![no_std]

use core::mem::MaybeUninit;

/// Uninitialized storage sized and aligned for one `T`.
///
/// # Safety Invariants You Must Uphold
///
/// 1. **Never read an empty slot** - `assume_init_*` on a slot that holds no live
///    value is undefined behavior.
///
/// 2. **Drop exactly once** - The slot has no drop glue. A written value that is
///    neither read out nor dropped through [`assume_init_drop`](RawSlot::assume_init_drop)
///    is leaked.
///
/// 3. **Do not write over a live value** - [`write`](RawSlot::write) does not drop
///    what was there. This is a leak, not undefined behavior.
#[repr(transparent)]
pub struct RawSlot<T> {
    value: MaybeUninit<T>,
}

impl<T> RawSlot<T> {
    /// Creates an empty slot. No memory is touched.
    ///
    /// # Example
    /// ```rust
    /// use raw_slot::RawSlot;
    ///
    /// let slot = RawSlot::<u64>::new();
    /// assert_eq!(core::mem::size_of_val(&slot), 8);
    /// ```
    #[inline]
    #[must_use]
    #[allow(clippy::new_without_default)]
    pub const fn new() -> RawSlot<T> {
        RawSlot { value: MaybeUninit::uninit() }
    }

    /// Creates a slot that already holds `value`.
    ///
    /// # Example
    /// ```rust
    /// use raw_slot::RawSlot;
    ///
    /// let slot = RawSlot::new_with(42);
    /// // SAFETY: constructed with a value.
    /// assert_eq!(unsafe { *slot.assume_init_ref() }, 42);
    /// ```
    #[inline]
    #[must_use]
    pub const fn new_with(value: T) -> RawSlot<T> {
        RawSlot { value: MaybeUninit::new(value) }
    }

    /// Moves `value` into the slot and returns a reference to it.
    ///
    /// **Critical**: whatever the slot held before is forgotten, not dropped.
    #[inline]
    pub fn write(&mut self, value: T) -> &mut T {
        self.value.write(value)
    }

    /// Gets a shared reference to the value.
    ///
    /// # Safety
    ///
    /// The slot must hold a live value.
    #[inline]
    pub const unsafe fn assume_init_ref(&self) -> &T {
        unsafe { self.value.assume_init_ref() }
    }

    /// Gets a mutable reference to the value.
    ///
    /// # Safety
    ///
    /// The slot must hold a live value.
    #[inline]
    pub unsafe fn assume_init_mut(&mut self) -> &mut T {
        unsafe { self.value.assume_init_mut() }
    }

    /// Moves the value out with a bitwise read.
    ///
    /// Afterwards the slot must be treated as empty until the next `write`.
    ///
    /// # Safety
    ///
    /// The slot must hold a live value.
    ///
    /// # Example
    /// ```rust
    /// use raw_slot::RawSlot;
    ///
    /// let mut slot = RawSlot::new_with(vec![1, 2, 3]);
    /// // SAFETY: constructed with a value, read out once.
    /// let v = unsafe { slot.assume_init_read() };
    /// assert_eq!(v, [1, 2, 3]);
    /// ```
    #[inline]
    pub unsafe fn assume_init_read(&mut self) -> T {
        unsafe { self.value.assume_init_read() }
    }

    /// Drops the value in place.
    ///
    /// Afterwards the slot must be treated as empty until the next `write`.
    ///
    /// # Safety
    ///
    /// The slot must hold a live value.
    #[inline]
    pub unsafe fn assume_init_drop(&mut self) {
        unsafe { self.value.assume_init_drop() }
    }

    /// Raw pointer to the storage. Valid to dereference only while the slot holds a
    /// live value.
    #[inline]
    pub const fn as_ptr(&self) -> *const T {
        self.value.as_ptr()
    }

    /// Raw mutable pointer to the storage.
    ///
    /// Writing through it is always allowed; reading requires a live value.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.value.as_mut_ptr()
    }
}
