//! Constant values shared by test fixtures.

/// Base URL used when building public object URLs in tests.
pub static TEST_PUBLIC_BASE_URL: &str = "http://localhost:8080";

/// Password used for identities created through the sign-up service in tests.
pub static TEST_PASSWORD: &str = "correct horse battery staple";

/// Placeholder password hash for identities inserted directly as fixtures.
///
/// Not a valid PHC string, sign-in against these identities always fails.
pub static TEST_PASSWORD_HASH: &str = "fixture-password-hash";
