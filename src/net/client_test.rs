use super::*;

// =============================================================================
// Disposition::from_status
// =============================================================================

#[test]
fn status_401_forces_logout() {
    assert_eq!(Disposition::from_status(401), Disposition::ForceLogout);
}

#[test]
fn status_403_is_forbidden_without_logout() {
    assert_eq!(Disposition::from_status(403), Disposition::Forbidden);
}

#[test]
fn status_422_passes_validation_to_caller() {
    assert_eq!(Disposition::from_status(422), Disposition::Validation);
}

#[test]
fn server_statuses_are_faults() {
    assert_eq!(Disposition::from_status(500), Disposition::ServerFault);
    assert_eq!(Disposition::from_status(502), Disposition::ServerFault);
    assert_eq!(Disposition::from_status(503), Disposition::ServerFault);
}

#[test]
fn other_statuses_pass_through() {
    assert_eq!(Disposition::from_status(200), Disposition::Pass);
    assert_eq!(Disposition::from_status(201), Disposition::Pass);
    assert_eq!(Disposition::from_status(404), Disposition::Pass);
    assert_eq!(Disposition::from_status(409), Disposition::Pass);
}

// =============================================================================
// Pre-flight privilege check
// =============================================================================

#[test]
fn preflight_super_admin_required_rejects_lower_tiers() {
    let err = preflight(Privilege::SuperAdmin, "admin").unwrap_err();
    assert_eq!(err, ApiError::Authorization(Privilege::SuperAdmin));
    assert!(preflight(Privilege::SuperAdmin, "user").is_err());
}

#[test]
fn preflight_admin_required_rejects_plain_users() {
    let err = preflight(Privilege::Admin, "user").unwrap_err();
    assert_eq!(err, ApiError::Authorization(Privilege::Admin));
}

#[test]
fn preflight_admin_required_accepts_admin_and_super_admin() {
    assert!(preflight(Privilege::Admin, "admin").is_ok());
    assert!(preflight(Privilege::Admin, "super-admin").is_ok());
}

#[test]
fn preflight_none_accepts_everyone() {
    assert!(preflight(Privilege::None, "user").is_ok());
    assert!(preflight(Privilege::None, "editor").is_ok());
}

// =============================================================================
// Header construction
// =============================================================================

#[test]
fn bearer_header_formats_token() {
    assert_eq!(bearer_header("tok-123"), "Bearer tok-123");
}
