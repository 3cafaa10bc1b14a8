//! Validation and decomposition of United Kingdom postcodes.
//!
//! A candidate string is first reduced to a canonical form (uppercased, with
//! everything but ASCII letters and digits removed) and then matched against
//! the BS 7666 postcode grammar plus a handful of reserved grammars, each of
//! which must consume the whole candidate. A successful parse yields a
//! [`Postcode`] split into its outward code and optional inward code.
//!
//! The reserved grammars (British Forces Post Office, the overseas
//! territories, Girobank, Santa Claus) and the acceptance of bare outward
//! codes are all opt-in through [`ParseOptions`].
//!
//! # Example
//!
//! ```rust
//! use postcode::{ParseOption, ParseOptions, Postcode};
//!
//! let home = Postcode::parse("ls25 6lg", ParseOptions::NONE)?;
//! assert_eq!(home.out_code(), "LS25");
//! assert_eq!(home.in_code(), Some("6LG"));
//! assert_eq!(home.to_string(), "LS25 6LG");
//!
//! // Reserved grammars participate only when asked for.
//! assert!(Postcode::parse("BFPO 801", ParseOptions::NONE).is_err());
//! let forces = Postcode::parse("BFPO 801", ParseOption::MatchBfpo.into())?;
//! assert_eq!(forces.to_string(), "BFPO 801");
//! # Ok::<(), postcode::ParseError>(())
//! ```

mod matcher;
mod normalize;
mod options;
mod postcode;

pub use options::{ParseOption, ParseOptions};
pub use postcode::{ParseError, Postcode};
