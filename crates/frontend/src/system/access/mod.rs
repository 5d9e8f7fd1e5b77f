//! Role-based access control: which role may open which screen.

pub mod evaluator;
pub mod feature;
pub mod policy;

pub use evaluator::{can_access, has_access};
pub use feature::Feature;
pub use policy::AccessPolicy;
