use std::{
    collections::{BTreeMap, BTreeSet},
    fmt::{Debug, Display},
    str::FromStr,
};
use strum::IntoEnumIterator;

use crate::errors::ConversionError;

/// The capabilities a user can be granted. Serialized using the keys the
/// backend uses for its flags
#[derive(
    Debug,
    serde::Serialize,
    serde::Deserialize,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Clone,
    Copy,
    strum::EnumCount,
    strum::EnumIter,
)]
pub enum Permission {
    #[serde(rename = "isAdmin")]
    Admin,
    #[serde(rename = "canManageOrder")]
    ManageOrder,
    #[serde(rename = "canManageLogistics")]
    ManageLogistics,
    #[serde(rename = "canManageAfterSales")]
    ManageAfterSales,
    #[serde(rename = "canManageReview")]
    ManageReview,
    #[serde(rename = "canManageInventory")]
    ManageInventory,
    #[serde(rename = "canManageIncome")]
    ManageIncome,
}

impl Permission {
    /// The flag name used on the wire and in storage
    pub const fn key(self) -> &'static str {
        match self {
            Permission::Admin => "isAdmin",
            Permission::ManageOrder => "canManageOrder",
            Permission::ManageLogistics => "canManageLogistics",
            Permission::ManageAfterSales => "canManageAfterSales",
            Permission::ManageReview => "canManageReview",
            Permission::ManageInventory => "canManageInventory",
            Permission::ManageIncome => "canManageIncome",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Permission::Admin => "Has every permission in the system",
            Permission::ManageOrder => "Can create, view, modify and delete orders",
            Permission::ManageLogistics => {
                "Can manage logistics information including shipping and tracking"
            }
            Permission::ManageAfterSales => "Can process after-sales requests and refunds",
            Permission::ManageReview => "Can manage product reviews",
            Permission::ManageInventory => "Can manage product inventory",
            Permission::ManageIncome => "Can manage income and expenditure records",
        }
    }

    /// Label contributed to a user's role summary when held
    pub const fn role_label(self) -> &'static str {
        match self {
            Permission::Admin => "Administrator",
            Permission::ManageOrder => "Order Manager",
            Permission::ManageLogistics => "Logistics Manager",
            Permission::ManageAfterSales => "After-Sales Manager",
            Permission::ManageReview => "Review Manager",
            Permission::ManageInventory => "Inventory Manager",
            Permission::ManageIncome => "Finance Manager",
        }
    }

    /// Returns `true` for the permissions that gate a single business module
    pub fn is_module(self) -> bool {
        !matches!(self, Permission::Admin)
    }

    pub fn modules() -> impl Iterator<Item = Permission> {
        Permission::iter().filter(|p| p.is_module())
    }
}

impl FromStr for Permission {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Permission::iter()
            .find(|p| p.key() == s)
            .ok_or_else(|| ConversionError::UnknownPermission(s.to_string()))
    }
}

impl Display for Permission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let display_text = match self {
            Permission::Admin => "Administrator",
            Permission::ManageOrder => "Order Management",
            Permission::ManageLogistics => "Logistics Management",
            Permission::ManageAfterSales => "After-Sales Management",
            Permission::ManageReview => "Review Management",
            Permission::ManageInventory => "Inventory Management",
            Permission::ManageIncome => "Finance Management",
        };
        write!(f, "{display_text}")
    }
}

/// The set of permissions whose flag is exactly `true`.
///
/// Read from a JSON object of flags. Anything other than a boolean `true`
/// grants nothing, and keys that are not permissions (like `userId` which the
/// backend includes) are skipped. Written back with every known flag present.
///
/// Admin is stored like any other flag and does not imply the others.
#[derive(serde::Serialize, serde::Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(
    from = "BTreeMap<String, serde_json::Value>",
    into = "BTreeMap<&'static str, bool>"
)]
pub struct Permissions(BTreeSet<Permission>);

impl Permissions {
    pub fn contains(&self, permission: Permission) -> bool {
        self.0.contains(&permission)
    }

    pub fn includes(&self, perms: &[Permission]) -> bool {
        perms.iter().all(|x| self.0.contains(x))
    }

    /// Dynamic lookup by wire key, `false` for keys that are not permissions
    pub fn contains_key(&self, key: &str) -> bool {
        key.parse::<Permission>()
            .is_ok_and(|permission| self.contains(permission))
    }

    pub fn insert(&mut self, permission: Permission) -> bool {
        self.0.insert(permission)
    }

    pub fn remove(&mut self, permission: Permission) -> bool {
        self.0.remove(&permission)
    }

    /// Held permissions in declaration order
    pub fn granted(&self) -> impl Iterator<Item = Permission> + '_ {
        self.0.iter().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<Permission>> for Permissions {
    fn from(value: Vec<Permission>) -> Self {
        Self(value.into_iter().collect())
    }
}

impl From<BTreeMap<String, serde_json::Value>> for Permissions {
    fn from(value: BTreeMap<String, serde_json::Value>) -> Self {
        let mut result = Self::default();
        for (key, flag) in value {
            if flag != serde_json::Value::Bool(true) {
                continue;
            }
            if let Ok(permission) = key.parse() {
                result.0.insert(permission);
            }
        }
        result
    }
}

impl From<Permissions> for BTreeMap<&'static str, bool> {
    fn from(value: Permissions) -> Self {
        Permission::iter()
            .map(|p| (p.key(), value.contains(p)))
            .collect()
    }
}

impl Debug for Permissions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let keys: Vec<&str> = self.0.iter().map(|p| p.key()).collect();
        f.debug_tuple("Permissions").field(&keys).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use strum::EnumCount;
    use Permission as p;

    #[rstest]
    #[case::empty("{}", vec![])]
    #[case::admin_only(r#"{"isAdmin":true}"#, vec![p::Admin])]
    #[case::false_is_absent(r#"{"isAdmin":false,"canManageOrder":true}"#, vec![p::ManageOrder])]
    #[case::null_is_absent(r#"{"isAdmin":null,"canManageReview":true}"#, vec![p::ManageReview])]
    #[case::truthy_non_bool(r#"{"isAdmin":1,"canManageIncome":"true"}"#, vec![])]
    #[case::backend_dto(
        r#"{"userId":3,"isAdmin":false,"canManageOrder":true,"canManageLogistics":true,"canManageAfterSales":false,"canManageReview":null,"canManageInventory":true,"canManageIncome":false}"#,
        vec![p::ManageOrder, p::ManageLogistics, p::ManageInventory]
    )]
    #[case::unknown_key(r#"{"canFly":true}"#, vec![])]
    fn json_to_permissions(#[case] s: &str, #[case] permission_list: Vec<Permission>) {
        // Arrange
        let expected: Permissions = permission_list.into();

        // Act
        let actual: Permissions = serde_json::from_str(s).unwrap();

        // Assert
        assert_eq!(actual, expected);
    }

    #[test]
    fn serialized_form_has_every_flag() {
        // Arrange
        let input: Permissions = vec![p::ManageLogistics].into();

        // Act
        let actual = serde_json::to_value(&input).unwrap();

        // Assert
        let object = actual.as_object().unwrap();
        assert_eq!(object.len(), Permission::COUNT);
        assert_eq!(object["canManageLogistics"], serde_json::Value::Bool(true));
        assert_eq!(object["isAdmin"], serde_json::Value::Bool(false));
        let round_tripped: Permissions = serde_json::from_value(actual).unwrap();
        assert_eq!(round_tripped, input);
    }

    #[rstest]
    #[case("isAdmin", p::Admin)]
    #[case("canManageOrder", p::ManageOrder)]
    #[case("canManageLogistics", p::ManageLogistics)]
    #[case("canManageAfterSales", p::ManageAfterSales)]
    #[case("canManageReview", p::ManageReview)]
    #[case("canManageInventory", p::ManageInventory)]
    #[case("canManageIncome", p::ManageIncome)]
    fn key_parses(#[case] key: &str, #[case] expected: Permission) {
        assert_eq!(key.parse::<Permission>().unwrap(), expected);
        assert_eq!(expected.key(), key);
    }

    #[rstest]
    #[case::unknown("canFly")]
    #[case::wrong_case("isadmin")]
    #[case::empty("")]
    fn unknown_key_rejected(#[case] key: &str) {
        assert_eq!(
            key.parse::<Permission>().unwrap_err(),
            ConversionError::UnknownPermission(key.to_string())
        );
    }

    #[test]
    fn contains_key_is_false_for_unknown() {
        let all: Permissions = Permission::iter().collect::<Vec<_>>().into();
        assert!(all.contains_key("canManageOrder"));
        assert!(!all.contains_key("canFly"));
        assert!(!Permissions::default().contains_key("isAdmin"));
    }

    #[test]
    fn admin_does_not_imply_modules() {
        let admin: Permissions = vec![p::Admin].into();
        for module in Permission::modules() {
            assert!(!admin.contains(module), "{module:?}");
        }
    }

    #[test]
    fn modules_exclude_admin() {
        assert_eq!(Permission::modules().count(), Permission::COUNT - 1);
        assert!(Permission::modules().all(|x| x != p::Admin));
    }
}
