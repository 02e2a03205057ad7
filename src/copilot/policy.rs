//! Policy name normalisation
//!
//! Users and models say "returns", "refund", "Shipping"; the resource
//! service only knows `policy://<kind>_policy`.

/// Scheme for policy resources
pub const POLICY_SCHEME: &str = "policy://";

/// Resource name of the policy index
pub const POLICY_INDEX: &str = "list_all";

/// Map a free-form policy type to its resource name
///
/// Known aliases collapse to their canonical name; anything else is
/// lower-cased and given a `_policy` suffix if it lacks one. `list` and
/// `all` name the policy index.
pub fn normalize_policy_type(policy_type: &str) -> String {
    let lowered = policy_type.trim().to_lowercase();
    let mapped = match lowered.as_str() {
        "shipping" => "shipping_policy",
        "return" | "returns" => "return_policy",
        "refund" | "refunds" => "refund_policy",
        "warranty" | "warranties" => "warranty_policy",
        "list" | "all" => POLICY_INDEX,
        other => other,
    };

    if mapped.ends_with("_policy") || mapped == POLICY_INDEX {
        mapped.to_string()
    } else {
        format!("{}_policy", mapped)
    }
}

/// Resource URI for a policy type
pub fn policy_uri(policy_type: &str) -> String {
    format!("{}{}", POLICY_SCHEME, normalize_policy_type(policy_type))
}

/// Whether a resource read came back unusable
pub fn is_missing_policy(content: &str) -> bool {
    content.starts_with("Error") || content.contains("not found")
}
