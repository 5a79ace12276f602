use super::*;

#[test]
fn endpoint_paths_match_backend_contract() {
    assert_eq!(LOGIN, "/auth/login");
    assert_eq!(ME, "/me");
    assert_eq!(PROFILE, "/profile");
    assert_eq!(PAYOUT_BANK, "/admin/payout/bank");
}

#[test]
fn endpoint_paths_resolve_against_the_base_url() {
    for path in [LOGIN, ME, PROFILE, PAYOUT_BANK] {
        assert!(path.starts_with('/'), "{path} must be base-relative");
    }
}
