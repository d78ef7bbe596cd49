use proptest::prelude::*;
use userdb_core::{User, UserDbError, UserPatch};

fn arb_user() -> impl Strategy<Value = User> {
    (1i64..10_000, "[A-Za-z ]{1,24}", "[a-z]{1,12}@[a-z]{1,8}\\.com")
        .prop_map(|(id, name, email)| User::new(id, name, email))
}

proptest! {
    #[test]
    fn merge_keeps_id_and_fills_missing_fields(
        current in arb_user(),
        name in proptest::option::of("[A-Za-z ]{1,24}"),
        email in proptest::option::of("[a-z]{1,12}@[a-z]{1,8}\\.org"),
    ) {
        let patch = UserPatch::new(name.clone(), email.clone());
        let result = patch.merge_onto(&current);

        if name.is_none() && email.is_none() {
            let is_invalid_argument = matches!(result, Err(UserDbError::InvalidArgument { .. }));
            prop_assert!(is_invalid_argument);
        } else {
            let merged = result.unwrap();
            prop_assert_eq!(merged.id, current.id);
            prop_assert_eq!(merged.name, name.unwrap_or(current.name.clone()));
            prop_assert_eq!(merged.email, email.unwrap_or(current.email.clone()));
        }
    }
}
