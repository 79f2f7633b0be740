//! Data model for CPE Well-Formed Names.
//!
//! A [`WellFormedName`] maps each of the eleven fixed [`Attribute`]s to an
//! [`AttributeValue`]: either an already-quoted string or one of the two
//! [`LogicalValue`]s. Names are plain records; binding them to text lives in
//! [`crate::binding`].

mod attribute;
mod logical;
mod wfn;

pub use attribute::{Attribute, AttributeValue};
pub use logical::LogicalValue;
pub use wfn::{WellFormedName, WellFormedNameBuilder};
