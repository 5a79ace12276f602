use super::*;

// =============================================================================
// Login response
// =============================================================================

#[test]
fn login_response_parses_token_and_nested_identity() {
    let raw = r#"{
        "token": "tok-123",
        "me": {
            "user": {
                "id": "u-1",
                "name": "Jane Doe",
                "email": "jane@example.com",
                "roles": [{ "name": "admin" }, { "name": "user" }]
            },
            "menus": [{ "label": "Dashboard", "path": "/dashboard" }]
        }
    }"#;
    let parsed: LoginResponse = serde_json::from_str(raw).unwrap();
    assert_eq!(parsed.token, "tok-123");
    assert_eq!(parsed.me.user.name, "Jane Doe");
    assert_eq!(parsed.me.user.roles[0].name, "admin");
    assert_eq!(parsed.me.menus[0].path, "/dashboard");
}

#[test]
fn me_payload_defaults_missing_menus_to_empty() {
    let raw = r#"{ "user": { "id": "u-1", "name": "A", "email": "a@b.com" } }"#;
    let parsed: MePayload = serde_json::from_str(raw).unwrap();
    assert!(parsed.menus.is_empty());
    assert!(parsed.user.roles.is_empty());
}

#[test]
fn menu_item_icon_is_optional() {
    let raw = r#"{ "label": "Results", "path": "/results" }"#;
    let parsed: MenuItem = serde_json::from_str(raw).unwrap();
    assert_eq!(parsed.icon, None);
}

// =============================================================================
// Profile envelope
// =============================================================================

#[test]
fn profile_envelope_parses_bank_account_fields() {
    let raw = r#"{
        "data": {
            "name": "Jane Doe",
            "email": "jane@example.com",
            "bank_account": {
                "bank_name": "GTBank",
                "account_name": "Jane Doe",
                "account_number": "0123456789",
                "bank_code": "058"
            }
        }
    }"#;
    let parsed: DataEnvelope<Profile> = serde_json::from_str(raw).unwrap();
    let account = parsed.data.bank_account.unwrap();
    assert_eq!(account.bank_name, "GTBank");
    assert_eq!(account.account_name, "Jane Doe");
    assert_eq!(account.account_number, "0123456789");
    assert_eq!(account.bank_code, "058");
}

#[test]
fn profile_missing_fields_default_to_none() {
    let parsed: Profile = serde_json::from_str("{}").unwrap();
    assert_eq!(parsed.name, None);
    assert_eq!(parsed.email, None);
    assert!(parsed.bank_account.is_none());
}

// =============================================================================
// Bank form
// =============================================================================

#[test]
fn bank_form_mirrors_account_exactly() {
    let account = BankAccount {
        bank_name: "GTBank".into(),
        account_name: "Jane Doe".into(),
        account_number: "0123456789".into(),
        bank_code: "058".into(),
    };
    let form = BankForm::from_account(&account);
    assert_eq!(form.bank_name, "GTBank");
    assert_eq!(form.account_name, "Jane Doe");
    assert_eq!(form.account_number, "0123456789");
    assert_eq!(form.bank_code, "058");
}

#[test]
fn bank_form_serializes_all_four_fields() {
    let form = BankForm {
        bank_name: "GTBank".into(),
        account_name: "Jane Doe".into(),
        account_number: "0123456789".into(),
        bank_code: "058".into(),
    };
    let json = serde_json::to_value(&form).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "bank_name": "GTBank",
            "account_name": "Jane Doe",
            "account_number": "0123456789",
            "bank_code": "058"
        })
    );
}

#[test]
fn credentials_serialize_to_expected_payload() {
    let credentials = Credentials {
        email: "jane@example.com".into(),
        password: "hunter2".into(),
    };
    let json = serde_json::to_value(&credentials).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "email": "jane@example.com", "password": "hunter2" })
    );
}

// =============================================================================
// Error body
// =============================================================================

#[test]
fn error_body_message_is_optional() {
    let parsed: ErrorBody = serde_json::from_str("{}").unwrap();
    assert_eq!(parsed.message, None);

    let parsed: ErrorBody = serde_json::from_str(r#"{ "message": "Invalid credentials" }"#).unwrap();
    assert_eq!(parsed.message.as_deref(), Some("Invalid credentials"));
}
