//! lcbalun prelude.
//!
//! This module contains the most used types, traits and functions that you
//! can import easily as a group.
//!
//! ```
//! use lcbalun::prelude::*;
//!
//! ```

#[doc(no_inline)]
pub use crate::element::capacitor::{Capacitor, CapacitorBuilder};
#[doc(no_inline)]
pub use crate::element::inductor::{Inductor, InductorBuilder};
#[doc(no_inline)]
pub use crate::element::q::QFactor;
#[doc(no_inline)]
pub use crate::element::{resonant_frequency, ElemType, Element, ElementBuilder, OnePort};

#[doc(no_inline)]
pub use crate::error::ElementError;

#[doc(no_inline)]
pub use crate::scale::Scale;

#[doc(no_inline)]
pub use crate::unit::{Unit, UnitVal, Unitized};
