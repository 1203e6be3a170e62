//! XML utilities: namespace resolution and scope-aware lookups.

mod namespaces;
mod utils;

pub use namespaces::{FeedScopes, Namespaces, Scope, DEFAULT_PREFIX};
pub use utils::{
    attr, child_text, direct_text, find_child, find_children, first_attribute, get_tag_name,
    has_tag,
};
