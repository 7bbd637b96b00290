//! A statically composed, allocation-frugal parser combinator core.
//!
//! Combinators are generic structs, not closures boxed behind `dyn`: a
//! fully assembled parser is a single concrete type, and the compiler
//! monomorphizes and inlines the whole call graph the same way it would
//! for any other zero-cost abstraction.
//!
//! ## Example
//!
//! ```rust
//! use combinare::cursor::{Cursor, StrSource};
//! use combinare::parser::Parser;
//! use combinare::predicate::digit;
//! use combinare::primitive::accept;
//! use combinare::combinator::some;
//!
//! let mut cursor = Cursor::new(StrSource::new("1729 rest"));
//! let digits = some::<_, _, String>(accept(digit()));
//! assert_eq!(digits.parse(&mut cursor).unwrap().ok(), Some("1729".to_string()));
//! ```
//!
//! ## Layout
//!
//! - [`symbol`] and [`predicate`]: the alphabet and the tests over it.
//! - [`cursor`]: the input abstraction (`CharSource`) and the position
//!   tracker built on top of it (`Cursor`).
//! - [`parser`]: the `Parser` trait and the `Outcome`/`PResult` types every
//!   combinator speaks.
//! - [`primitive`]: `accept`, `expect`, `succ`, `fail`.
//! - [`combinator`]: choice, repetition, sequencing (see
//!   [`combinator::seq`]), and the reducer combinators `all`/`any2`/`any3`/`any4`.
//! - [`accumulate`]: the sink repetition folds into.
//! - [`error`]: the one error type every hard failure raises.

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::await_holding_lock)]
#![warn(clippy::char_lit_as_u8)]
#![warn(clippy::checked_conversions)]
#![warn(clippy::dbg_macro)]
#![warn(clippy::debug_assert_with_mut_call)]
#![warn(clippy::doc_markdown)]
#![warn(clippy::empty_enum)]
#![warn(clippy::enum_glob_use)]
#![warn(clippy::exit)]
#![warn(clippy::expl_impl_clone_on_copy)]
#![warn(clippy::explicit_deref_methods)]
#![warn(clippy::explicit_into_iter_loop)]
#![warn(clippy::fallible_impl_from)]
#![warn(clippy::filter_map_next)]
#![warn(clippy::flat_map_option)]
#![warn(clippy::float_cmp_const)]
#![warn(clippy::fn_params_excessive_bools)]
#![warn(clippy::from_iter_instead_of_collect)]
#![warn(clippy::if_let_mutex)]
#![warn(clippy::implicit_clone)]
#![warn(clippy::imprecise_flops)]
#![warn(clippy::inefficient_to_string)]
#![warn(clippy::invalid_upcast_comparisons)]
#![warn(clippy::large_digit_groups)]
#![warn(clippy::large_stack_arrays)]
#![warn(clippy::large_types_passed_by_value)]
#![warn(clippy::let_unit_value)]
#![warn(clippy::linkedlist)]
#![warn(clippy::lossy_float_literal)]
#![warn(clippy::macro_use_imports)]
#![warn(clippy::manual_ok_or)]
#![warn(clippy::map_err_ignore)]
#![warn(clippy::map_flatten)]
#![warn(clippy::match_on_vec_items)]
#![warn(clippy::match_same_arms)]
#![warn(clippy::match_wild_err_arm)]
#![warn(clippy::match_wildcard_for_single_variants)]
#![warn(clippy::mem_forget)]
#![warn(clippy::mismatched_target_os)]
#![warn(clippy::missing_enforced_import_renames)]
#![warn(clippy::mut_mut)]
#![warn(clippy::mutex_integer)]
#![warn(clippy::needless_borrow)]
#![warn(clippy::needless_for_each)]
#![warn(clippy::option_option)]
#![warn(clippy::path_buf_push_overwrite)]
#![warn(clippy::ptr_as_ptr)]
#![warn(clippy::rc_mutex)]
#![warn(clippy::ref_option_ref)]
#![warn(clippy::rest_pat_in_fully_bound_structs)]
#![warn(clippy::same_functions_in_if_condition)]
#![warn(clippy::single_match_else)]
#![warn(clippy::string_add_assign)]
#![warn(clippy::string_add)]
#![warn(clippy::string_lit_as_bytes)]
#![warn(clippy::trait_duplication_in_bounds)]
#![warn(clippy::unnested_or_patterns)]
#![warn(clippy::unused_self)]
#![warn(clippy::useless_transmute)]
#![warn(clippy::verbose_file_reads)]
#![warn(clippy::zero_sized_map_values)]
#![warn(future_incompatible)]
#![warn(nonstandard_style)]
#![allow(clippy::let_and_return)]
#![allow(clippy::single_match)]

#[cfg(feature = "alloc")]
#[macro_use]
extern crate alloc;

/// Lib module to re-export everything needed from `std` or `core`/`alloc`.
/// This is how `serde` does it, albeit there it is not public.
pub mod lib {
    /// `std` facade allowing `std`/`core` to be interchangeable. Reexports
    /// `alloc` crate optionally, as well as `core` or `std`.
    #[cfg(not(feature = "std"))]
    pub mod std {
        #[doc(hidden)]
        #[cfg(not(feature = "alloc"))]
        pub use core::borrow;

        #[cfg(feature = "alloc")]
        #[doc(hidden)]
        pub use alloc::{borrow, boxed, string, sync, vec};

        #[doc(hidden)]
        pub use core::{cmp, convert, fmt, iter, mem, ops, option, result, slice, str};

        /// internal reproduction of std prelude
        #[doc(hidden)]
        pub mod prelude {
            pub use core::prelude as v1;
        }
    }

    #[cfg(feature = "std")]
    /// internal std exports for `no_std` compatibility
    pub mod std {
        #[doc(hidden)]
        pub use std::{
            alloc, borrow, boxed, cmp, collections, convert, fmt, hash, iter, mem, ops, option,
            result, slice, str, string, sync, vec,
        };

        /// internal reproduction of std prelude
        #[doc(hidden)]
        pub mod prelude {
            pub use std::prelude as v1;
        }
    }
}

pub mod accumulate;
pub mod combinator;
pub mod cursor;
pub mod error;
pub mod parser;
pub mod predicate;
pub mod primitive;
pub mod symbol;

#[cfg(feature = "debug")]
pub mod trace;

/// The common surface for glob import.
///
/// ```rust
/// use combinare::prelude::*;
/// ```
pub mod prelude {
    pub use crate::accumulate::Accumulate;
    pub use crate::combinator::{cut, discard, many, map, option, or, recognize, some};
    pub use crate::cursor::{Cursor, StrSource};
    pub use crate::error::ParseError;
    pub use crate::parser::{parse, Outcome, Parser};
    pub use crate::predicate::Predicate;
    pub use crate::primitive::{accept, expect, fail, succ};
    pub use crate::symbol::Symbol;
}
