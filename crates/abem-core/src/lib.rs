//! # abem
//!
//! Class names for the BEM convention with atomic modifiers: instead of
//! chaining a modifier onto its block (`block--mod`), every modifier is its
//! own class behind a fixed prefix (`block -mod`).
//!
//! ```text
//! Abem                  ← Unbound builder (carries Conventions)
//!     │  block("card")
//! Block                 ← "card"
//!     │  elem("title")
//! Element               ← "card__title"
//!     │  with(Modifiers)
//! String                ← "card__title -active -isLarge"
//! ```
//!
//! Every step is pure. A bound `Block` or `Element` owns its identifier
//! segments and never changes after construction.
//!
//! ```
//! use abem_core::{block, join, modifiers};
//!
//! let card = block("card").unwrap();
//! assert_eq!(
//!     card.with(modifiers!{ "isActive" => true, "hidden" => 0 }).unwrap(),
//!     "card -isActive"
//! );
//! assert_eq!(card.elem("title").unwrap().class(), "card__title");
//! assert_eq!(join!("a", false, "", "b"), "a b");
//! ```

pub mod args;
pub mod builder;
pub mod case;
pub mod conventions;
pub mod error;
pub mod join;
pub mod modifiers;
pub mod value;

pub use args::Call;
pub use builder::{Abem, Block, Element, Outcome, block, class_name};
pub use case::to_camel_case;
pub use conventions::Conventions;
pub use error::AbemError;
pub use join::join;
pub use modifiers::Modifiers;
pub use value::Value;
