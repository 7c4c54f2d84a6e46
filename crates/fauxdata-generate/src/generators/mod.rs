//! Generators grouped by the kind of data they produce.

pub mod boolean;
pub mod internet;
pub mod lorem;
pub mod name;

pub use boolean::Bool;
pub use internet::{Internet, is_private};
pub use lorem::Lorem;
pub use name::Name;
