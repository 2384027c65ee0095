//! Fixed name tables used by the selector

/// A destination reachable by name that is not in the aetheryte list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedAlias {
    /// Lowercased text the query is scored against
    pub key: &'static str,
    pub name: &'static str,
    pub zone: &'static str,
    pub id: u32,
    pub sub_id: u8,
}

/// Checked after the catalog; an alias wins only by scoring strictly higher.
pub const FIXED_ALIASES: &[FixedAlias] = &[FixedAlias {
    key: "ishgard",
    name: "Foundation",
    zone: "Foundation",
    id: 70,
    sub_id: 0,
}];

/// Shown and matched in place of a private residence's raw name
pub const PRIVATE_VARIANT_NAME: &str = "Apartment";

/// Leading words ignored when matching aetheryte names, stripped in order
pub const IGNORED_PREFIXES: &[&str] = &["the ", "camp "];

/// Lowercased aetheryte name with ignored prefixes removed
pub fn comparison_name(name: &str) -> String {
    let mut compare = name.to_lowercase();
    for prefix in IGNORED_PREFIXES {
        if let Some(rest) = compare.strip_prefix(prefix) {
            compare = rest.to_string();
        }
    }
    compare
}
