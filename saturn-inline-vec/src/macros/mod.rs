//! Macros generating concrete header-compatible container types.

mod declare_inline_vec;
