//! ID prefix constants.
//!
//! Every entity id is `{prefix}-{8 hex chars}`, generated by the database
//! (`randomblob(4)`), e.g. `rcp-3fa9c01e`.

pub const PREFIX_USER: &str = "usr";
pub const PREFIX_RECIPE: &str = "rcp";
pub const PREFIX_COMMENT: &str = "cmt";
pub const PREFIX_LIKE: &str = "lik";
pub const PREFIX_FOLLOW: &str = "fol";

/// All prefixes, for exhaustive tests.
pub const ALL_PREFIXES: &[&str] = &[
    PREFIX_USER,
    PREFIX_RECIPE,
    PREFIX_COMMENT,
    PREFIX_LIKE,
    PREFIX_FOLLOW,
];

/// Check that `id` carries the given prefix followed by a dash.
#[must_use]
pub fn has_prefix(id: &str, prefix: &str) -> bool {
    id.strip_prefix(prefix)
        .is_some_and(|rest| rest.starts_with('-') && rest.len() > 1)
}
