#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use yummio::account::{
        AuthError, AuthService, InMemorySessionStore, InMemoryUserStore, SessionStore, User,
        UserRecord, UserRepository,
    };

    fn demo_service() -> AuthService {
        AuthService::new(
            Arc::new(InMemoryUserStore::with_demo_accounts()),
            Arc::new(InMemorySessionStore::new()),
        )
    }

    #[test]
    fn test_demo_accounts_sign_in() {
        let service = demo_service();

        let demo = service.sign_in("demo@yummio.com", "password123").unwrap();
        assert_eq!(demo.name, "Demo User");

        let sarah = service.sign_in("sarah@yummio.com", "chef2024").unwrap();
        assert_eq!(sarah.name, "Chef Sarah");
    }

    #[test]
    fn test_full_account_lifecycle() {
        let service = demo_service();

        // Register, verify the session, sign out, sign back in
        let user = service
            .sign_up("Pat Baker", "pat@example.com", "sourdough")
            .unwrap();
        assert_eq!(service.current_user(), Some(user.clone()));

        service.sign_out();
        assert_eq!(service.current_user(), None);

        let back = service.sign_in("PAT@EXAMPLE.COM", "sourdough").unwrap();
        assert_eq!(back.id, user.id);
    }

    #[test]
    fn test_duplicate_registration_rejected() {
        let service = demo_service();

        service
            .sign_up("First", "chef@example.com", "abcdef")
            .unwrap();

        let err = service
            .sign_up("Second", "Chef@Example.com", "ghijkl")
            .unwrap_err();
        assert_eq!(err, AuthError::EmailAlreadyRegistered);
    }

    #[test]
    fn test_error_messages_match_account_screens() {
        assert_eq!(AuthError::MissingFields.to_string(), "Please fill in all fields");
        assert_eq!(
            AuthError::InvalidEmail.to_string(),
            "Please enter a valid email address"
        );
        assert_eq!(
            AuthError::PasswordTooShort.to_string(),
            "Password must be at least 6 characters long"
        );
        assert_eq!(
            AuthError::InvalidCredentials.to_string(),
            "Invalid email or password"
        );
        assert_eq!(
            AuthError::EmailAlreadyRegistered.to_string(),
            "An account with this email already exists"
        );
        assert_eq!(
            AuthError::UnknownEmail.to_string(),
            "No account found with this email address"
        );
    }

    #[test]
    fn test_injected_fake_store_drives_auth() {
        struct SingleUserStore;

        impl UserRepository for SingleUserStore {
            fn find_by_email(&self, email: &str) -> Option<UserRecord> {
                (email.eq_ignore_ascii_case("only@user.com")).then(|| UserRecord {
                    user: User {
                        id: "42".to_string(),
                        name: "Only User".to_string(),
                        email: "only@user.com".to_string(),
                        avatar: None,
                    },
                    password: "onlypass".to_string(),
                })
            }

            fn insert(&self, _record: UserRecord) {}
        }

        let service = AuthService::new(
            Arc::new(SingleUserStore),
            Arc::new(InMemorySessionStore::new()),
        );

        assert!(service.sign_in("only@user.com", "onlypass").is_ok());
        assert_eq!(
            service.sign_in("demo@yummio.com", "password123").unwrap_err(),
            AuthError::InvalidCredentials
        );
    }

    #[test]
    fn test_session_store_round_trip() {
        let store = InMemorySessionStore::new();
        assert_eq!(store.load().unwrap(), None);

        let user = User {
            id: "7".to_string(),
            name: "Round Trip".to_string(),
            email: "round@trip.com".to_string(),
            avatar: None,
        };

        store.save(&user).unwrap();
        assert_eq!(store.load().unwrap(), Some(user));

        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);
    }
}
