//! Reconcile method signatures from different sources.
//!
//! A JIT compilation log and a `javap -c` dump describe the same method
//! differently: generics may be erased, parameter names present or not,
//! types fully qualified or not. [`find_best_match`] picks the `javap`
//! header that denotes a given method, or nothing when the choice would be
//! a guess.

pub mod matcher;
pub mod normalize;

pub use matcher::{Match, Tier, best_match, find_best_match, resolve_bytecode};
pub use normalize::NormalizedSignature;
