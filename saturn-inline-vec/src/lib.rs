//! # Saturn Inline Vec
//!
//! Fixed-capacity, **allocation-free** sequence containers that share a single memory-layout
//! contract: a four-word [`InlineHeader`] followed by an inline byte buffer.
//!
//! Any container laid out that way can be handed to one common set of operations through the
//! canonical views, whatever its element type or capacity. This gives generic container
//! behavior to stack-only, embedded and on-chain code where heap allocation is unavailable.
//!
//! ## Features
//!
//! - **[`InlineHeader`]** – the layout contract (`total_size`, `element_size`, `buffer_length`, `cursor`)
//! - **[`InlineView`] / [`InlineViewMut`]** – canonical views carrying the shared operation set
//! - **[`InlineVec<T, N>`]** – typed generic container built on the views
//! - **[`declare_inline_vec!`]** – generate a concrete `Pod + Zeroable` container type
//! - **[`fill`] / [`clone_storage`]** – initialize and duplicate raw byte storage
//!
//! ## Behavior
//!
//! - Mutating operations clamp out-of-range indices by default ([`IndexPolicy::Clamp`]);
//!   [`IndexPolicy::Strict`] rejects them instead.
//! - Capacity exhaustion, removal from an empty container and out-of-range lookups return an
//!   [`InlineVecError`]; the container is left unchanged.
//! - Sorting covers every slot of the declared buffer, not only the populated prefix.
//!
//! ## Quick Examples
//!
//! ### Using InlineVec
//!
//! ```rust
//! use saturn_inline_vec::InlineVec;
//!
//! let mut list: InlineVec<u32, 8> = InlineVec::new();
//! for value in [1, 2, 3, 4] {
//!     list.push(value).unwrap();
//! }
//! assert_eq!(list.count(), 4);
//! assert_eq!(*list.find(1).unwrap(), 2);
//!
//! list.insert(1, 99).unwrap();
//! assert_eq!(list.as_slice(), &[1, 99, 2, 3, 4]);
//!
//! list.remove(0).unwrap();
//! assert_eq!(list.as_slice(), &[99, 2, 3, 4]);
//! ```
//!
//! ### Using declare_inline_vec!
//!
//! ```rust
//! use saturn_inline_vec::{declare_inline_vec, HeaderCompatible, InlineViewMut};
//!
//! declare_inline_vec!(Prices, u64, 4);
//!
//! let mut prices = Prices::new();
//! prices.push(10_000).unwrap();
//!
//! // Reinterpret the raw storage through the canonical view.
//! let mut view = InlineViewMut::from_storage(prices.as_storage_mut()).unwrap();
//! view.push(&20_000u64.to_ne_bytes()).unwrap();
//! assert_eq!(prices.as_slice(), &[10_000, 20_000]);
//! assert_eq!(prices.inline_view().max(), 4);
//! ```
//!
//! ### Using raw storage
//!
//! ```rust
//! use saturn_inline_vec::{fill, HEADER_SIZE};
//!
//! let mut words = [0u64; 8];
//! let storage: &mut [u8] = bytemuck::cast_slice_mut(&mut words);
//!
//! let mut view = fill(storage, HEADER_SIZE + 4, 1).unwrap();
//! for byte in b"abcd" {
//!     view.push(&[*byte]).unwrap();
//! }
//! assert!(view.push(b"e").is_err());
//! assert_eq!(view.as_view().populated_bytes(), b"abcd");
//! ```
//!
//! [`InlineVec<T, N>`]: inline_vec::InlineVec
//! [`declare_inline_vec!`]: macro@declare_inline_vec

pub mod error;
pub mod header;
pub mod inline_vec;
pub mod macros;
pub mod ordering;
pub mod policy;
pub mod view;

pub use error::{InlineVecError, Result};
pub use header::{HeaderCompatible, InlineHeader, HEADER_SIZE};
pub use inline_vec::InlineVec;
pub use policy::IndexPolicy;
pub use view::{clone_storage, fill, InlineView, InlineViewMut};
