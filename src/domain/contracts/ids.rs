//! Identifiers other areas are allowed to hold as weak references

use crate::domain::id::define_id;

define_id!(
    /// Identifier of a user, owned by the user area
    UserId,
    "user ID"
);

define_id!(
    /// Identifier of a team, owned by the team area
    TeamId,
    "team ID"
);
