use omnitrackr_shared::uac::{DepartmentName, Identity};

/// Records that belong to a single department
pub trait Scoped {
    fn department(&self) -> &str;
}

/// Decides what a session may see
///
/// Admins see every department they hold. Everyone else sees only their
/// current department and without a session nothing is visible.
#[derive(Debug, Clone, Copy)]
pub struct AccessScope<'a> {
    identity: Option<&'a Identity>,
}

impl<'a> AccessScope<'a> {
    pub fn new(identity: Option<&'a Identity>) -> Self {
        Self { identity }
    }

    pub fn identity(&self) -> Option<&'a Identity> {
        self.identity
    }

    pub fn visible_departments(&self) -> Vec<&'a DepartmentName> {
        match self.identity {
            None => Vec::new(),
            Some(identity) if identity.role.is_admin() => identity.departments().iter().collect(),
            Some(identity) => identity.current_department().into_iter().collect(),
        }
    }

    /// Only admins holding more than one department are offered a switcher
    pub fn can_switch_departments(&self) -> bool {
        self.identity
            .is_some_and(|identity| identity.role.is_admin() && identity.departments().len() > 1)
    }

    /// Admins match every record, other users only records of their current
    /// department
    pub fn matches_scope(&self, department: &str) -> bool {
        match self.identity {
            None => false,
            Some(identity) if identity.role.is_admin() => true,
            Some(identity) => identity
                .current_department()
                .is_some_and(|current| current == department),
        }
    }

    /// Keeps the records this scope may see, in their original order
    pub fn filter<'r, T: Scoped>(&self, records: &'r [T]) -> Vec<&'r T> {
        records
            .iter()
            .filter(|record| self.matches_scope(record.department()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use omnitrackr_shared::uac::Role;
    use rstest::{fixture, rstest};

    use super::*;

    struct Record {
        department: &'static str,
        name: &'static str,
    }

    impl Scoped for Record {
        fn department(&self) -> &str {
            self.department
        }
    }

    #[fixture]
    fn records() -> Vec<Record> {
        [
            ("Finance", "ledger.csv"),
            ("Cargo", "manifest.xml"),
            ("Finance", "payroll.csv"),
            ("Engineering", "build.log"),
            ("Unlisted", "orphan.txt"),
        ]
        .into_iter()
        .map(|(department, name)| Record { department, name })
        .collect()
    }

    fn identity(role: Role, departments: &[&str], current: Option<&str>) -> Identity {
        Identity::new(
            7_u64.into(),
            "someone@omnitrackr.com".try_into().unwrap(),
            "Someone".try_into().unwrap(),
            role,
            departments.try_into().unwrap(),
            current.map(|x| x.try_into().unwrap()),
        )
        .unwrap()
    }

    fn names(records: Vec<&Record>) -> Vec<&'static str> {
        records.into_iter().map(|x| x.name).collect()
    }

    #[rstest]
    fn unauthenticated_sees_nothing(records: Vec<Record>) {
        // Arrange
        let scope = AccessScope::new(None);

        // Act + Assert
        assert!(scope.visible_departments().is_empty());
        assert!(!scope.can_switch_departments());
        assert!(!scope.matches_scope("Finance"));
        assert!(scope.filter(&records).is_empty());
    }

    #[rstest]
    fn employee_sees_current_department_only(records: Vec<Record>) {
        // Arrange
        let identity = identity(Role::Employee, &["Finance"], Some("Finance"));
        let scope = AccessScope::new(Some(&identity));

        // Act
        let actual = scope.filter(&records);

        // Assert
        assert_eq!(names(actual), ["ledger.csv", "payroll.csv"]);
        assert_eq!(scope.visible_departments(), [&"Finance"]);
        assert!(!scope.can_switch_departments());
    }

    #[rstest]
    fn employee_without_current_department_sees_nothing(records: Vec<Record>) {
        // Arrange
        let identity = identity(Role::Employee, &["Finance"], None);
        let scope = AccessScope::new(Some(&identity));

        // Act + Assert
        assert!(scope.filter(&records).is_empty());
        assert!(scope.visible_departments().is_empty());
    }

    #[rstest]
    fn admin_sees_everything(records: Vec<Record>) {
        // Arrange
        let identity = identity(Role::Admin, &["Finance", "Cargo"], Some("Cargo"));
        let scope = AccessScope::new(Some(&identity));

        // Act
        let actual = scope.filter(&records);

        // Assert
        assert_eq!(actual.len(), records.len());
        assert_eq!(scope.visible_departments(), [&"Finance", &"Cargo"]);
        assert!(scope.matches_scope("Unlisted"));
    }

    #[rstest]
    #[case::admin_many(Role::Admin, &["Finance", "Cargo"], true)]
    #[case::admin_single(Role::Admin, &["Finance"], false)]
    #[case::employee_many(Role::Employee, &["Finance", "Cargo"], false)]
    #[case::employee_single(Role::Employee, &["Finance"], false)]
    fn switcher_offered(
        #[case] role: Role,
        #[case] departments: &[&str],
        #[case] expected: bool,
    ) {
        // Arrange
        let identity = identity(role, departments, Some("Finance"));

        // Act
        let actual = AccessScope::new(Some(&identity)).can_switch_departments();

        // Assert
        assert_eq!(actual, expected);
    }

    #[test]
    fn match_is_exact() {
        // Arrange
        let identity = identity(Role::Employee, &["Finance"], Some("Finance"));
        let scope = AccessScope::new(Some(&identity));

        // Act + Assert
        assert!(scope.matches_scope("Finance"));
        assert!(!scope.matches_scope("finance"));
        assert!(!scope.matches_scope("Finance "));
    }
}
