//! Reactance, impedance and synthesis of ideal one-port elements used to
//! build LC matching networks.
//!
//! ```
//! use lcbalun::prelude::*;
//!
//! let elems = Element::from_reactances_at_frequency(&[-159.15, 6.283], 1e6);
//! assert_eq!(elems[0].symbol(), "C1");
//! assert_eq!(elems[1].symbol(), "L2");
//! ```
pub mod element;
pub mod error;
pub mod prelude;
pub mod scale;
pub mod unit;
pub mod util;
