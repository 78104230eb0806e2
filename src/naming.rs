use convert_case::{Case, Casing};

/// Directory/file name for a definition or enum property: `"UserProfile"` → `"user_profile"`.
pub fn to_directory_name(identifier: &str) -> String {
    identifier.to_case(Case::Snake)
}

/// Class/enum name: `"user_profile"` → `"UserProfile"`.
pub fn to_type_case(identifier: &str) -> String {
    identifier.to_case(Case::Pascal)
}

/// Field/enum-member name: `"user_profile"` → `"userProfile"`.
/// Differs from [`to_type_case`] only in the first character's case.
pub fn to_field_case(identifier: &str) -> String {
    identifier.to_case(Case::Camel)
}
