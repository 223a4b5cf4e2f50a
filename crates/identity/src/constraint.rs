//! Pure role-constraint decision functions.
//!
//! - No IO
//! - No panics
//! - No side effects: callers mutate only after a check passes.

use std::collections::BTreeSet;

use acmepay_core::{DomainError, DomainResult};

use crate::role::Role;

/// Is granting `role` legal given the currently held `roles`?
///
/// Granting an already-held role succeeds (grant is set union, idempotent).
/// A user may hold multiple roles of the same type but never a mix of
/// administrative and business types.
pub fn check_grant(roles: &BTreeSet<Role>, role: Role) -> DomainResult<()> {
    if roles.contains(&role) {
        return Ok(());
    }

    let holds_other_type = roles.iter().any(|r| r.role_type() != role.role_type());
    if holds_other_type {
        return Err(DomainError::InvalidRoleCombination);
    }

    Ok(())
}

/// Is revoking `role` legal given the currently held `roles`?
///
/// Checked in order: the role must be held; an administrator's roles can
/// never be reduced through this path; the revoke must not leave zero roles.
pub fn check_revoke(roles: &BTreeSet<Role>, role: Role) -> DomainResult<()> {
    if !roles.contains(&role) {
        return Err(DomainError::RoleNotFoundForUser);
    }

    if roles.contains(&Role::Administrator) {
        return Err(DomainError::AdminProtected);
    }

    if roles.len() == 1 {
        return Err(DomainError::MinimumRoleViolation);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::role::RoleType;
    use proptest::prelude::*;

    fn set(roles: &[Role]) -> BTreeSet<Role> {
        roles.iter().copied().collect()
    }

    #[test]
    fn grant_same_business_type_is_allowed() {
        let roles = set(&[Role::User]);
        assert!(check_grant(&roles, Role::Accountant).is_ok());
    }

    #[test]
    fn grant_business_onto_administrator_fails() {
        let roles = set(&[Role::Administrator]);
        assert_eq!(
            check_grant(&roles, Role::Accountant),
            Err(DomainError::InvalidRoleCombination)
        );
    }

    #[test]
    fn grant_administrator_onto_business_fails() {
        let roles = set(&[Role::User, Role::Auditor]);
        assert_eq!(
            check_grant(&roles, Role::Administrator),
            Err(DomainError::InvalidRoleCombination)
        );
    }

    #[test]
    fn grant_already_held_role_is_a_no_op_success() {
        let roles = set(&[Role::Administrator]);
        assert!(check_grant(&roles, Role::Administrator).is_ok());
    }

    #[test]
    fn revoke_unheld_role_fails_first() {
        // The not-held check wins even for an administrator.
        let roles = set(&[Role::Administrator]);
        assert_eq!(
            check_revoke(&roles, Role::Accountant),
            Err(DomainError::RoleNotFoundForUser)
        );
    }

    #[test]
    fn revoke_from_administrator_fails() {
        let roles = set(&[Role::Administrator]);
        assert_eq!(
            check_revoke(&roles, Role::Administrator),
            Err(DomainError::AdminProtected)
        );
    }

    #[test]
    fn revoke_last_role_fails() {
        let roles = set(&[Role::User]);
        assert_eq!(
            check_revoke(&roles, Role::User),
            Err(DomainError::MinimumRoleViolation)
        );
    }

    #[test]
    fn revoke_with_multiple_roles_succeeds() {
        let roles = set(&[Role::User, Role::Accountant]);
        assert!(check_revoke(&roles, Role::Accountant).is_ok());
    }

    fn arb_role() -> impl Strategy<Value = Role> {
        prop::sample::select(Role::ALL.to_vec())
    }

    #[derive(Debug, Clone)]
    enum Op {
        Grant(Role),
        Revoke(Role),
    }

    fn arb_op() -> impl Strategy<Value = Op> {
        prop_oneof![
            arb_role().prop_map(Op::Grant),
            arb_role().prop_map(Op::Revoke),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: after any sequence of checked grants/revokes starting
        /// from a single role, the set stays non-empty and never mixes
        /// administrative and business types.
        #[test]
        fn role_set_invariants_hold_under_any_legal_sequence(
            initial in arb_role(),
            ops in prop::collection::vec(arb_op(), 0..32)
        ) {
            let mut roles = set(&[initial]);

            for op in ops {
                match op {
                    Op::Grant(role) => {
                        if check_grant(&roles, role).is_ok() {
                            roles.insert(role);
                        }
                    }
                    Op::Revoke(role) => {
                        if check_revoke(&roles, role).is_ok() {
                            roles.remove(&role);
                        }
                    }
                }

                prop_assert!(!roles.is_empty());
                let has_admin = roles.iter().any(|r| r.role_type() == RoleType::Administrative);
                let has_business = roles.iter().any(|r| r.role_type() == RoleType::Business);
                prop_assert!(!(has_admin && has_business));
            }
        }
    }
}
