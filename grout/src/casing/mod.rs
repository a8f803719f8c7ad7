//! Naming-convention conversion for identifiers.
//!
//! The mapping layer constantly moves identifiers between Java-side
//! camelCase, database-side underscore_case, and configuration-side
//! hyphen-case. This module does those conversions plus the casing
//! classification the table/column resolvers rely on.
//!
//! ## Modules
//!
//! - [`convert`] - The converters (`camel_to_underline`, `underline_to_camel`,
//!   `camel_to_hyphen`) and first-character helpers
//! - [`classify`] - Casing predicates (`is_camel`, `is_capital_mode`,
//!   `is_mixed_mode`, upper/lower-content checks)
//!
//! ## Examples
//!
//! ```
//! use grout::casing::{camel_to_hyphen, camel_to_underline, is_camel, underline_to_camel};
//!
//! assert_eq!(camel_to_underline("userName"), "user_name");
//! assert_eq!(underline_to_camel("user_name"), "userName");
//! assert_eq!(camel_to_hyphen("managerAdminUserService"), "manager-admin-user-service");
//! assert!(is_camel("userName"));
//! ```

pub mod classify;
pub mod convert;

pub use classify::{
    contains_lower_case, contains_upper_case, is_camel, is_capital_mode, is_mixed_mode,
};
pub use convert::{
    camel_to_hyphen, camel_to_underline, first_char_to_lower, prefix_to_lower,
    remove_prefix_after_prefix_to_lower, underline_to_camel, upper_first,
};
