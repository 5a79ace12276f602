use super::*;

fn gtbank_account() -> BankAccount {
    BankAccount {
        bank_name: "GTBank".to_owned(),
        account_name: "Jane Doe".to_owned(),
        account_number: "0123456789".to_owned(),
        bank_code: "058".to_owned(),
    }
}

// =============================================================================
// apply_profile
// =============================================================================

#[test]
fn apply_profile_fills_fields_and_mirrors_bank_form() {
    let mut state = ProfileState::default();
    state.apply_profile(Profile {
        name: Some("Jane Doe".to_owned()),
        email: Some("jane@example.com".to_owned()),
        bank_account: Some(gtbank_account()),
    });

    assert_eq!(state.name, "Jane Doe");
    assert_eq!(state.email, "jane@example.com");
    assert_eq!(state.bank_form.bank_name, "GTBank");
    assert_eq!(state.bank_form.account_name, "Jane Doe");
    assert_eq!(state.bank_form.account_number, "0123456789");
    assert_eq!(state.bank_form.bank_code, "058");
}

#[test]
fn apply_profile_blanks_missing_fields() {
    let mut state = ProfileState::default();
    state.name = "Old".to_owned();
    state.apply_profile(Profile::default());

    assert_eq!(state.name, "");
    assert_eq!(state.email, "");
    assert!(state.bank_account.is_none());
}

#[test]
fn apply_profile_without_bank_account_keeps_form_drafts() {
    let mut state = ProfileState::default();
    state.bank_form.bank_name = "Draft Bank".to_owned();
    state.apply_profile(Profile {
        name: Some("Jane".to_owned()),
        email: None,
        bank_account: None,
    });
    assert_eq!(state.bank_form.bank_name, "Draft Bank");
}

// =============================================================================
// Create vs update
// =============================================================================

#[test]
fn save_method_is_create_without_existing_account() {
    assert_eq!(ProfileState::default().bank_save_method(), Method::Post);
}

#[test]
fn save_method_is_update_with_existing_account() {
    let mut state = ProfileState::default();
    state.bank_account = Some(gtbank_account());
    assert_eq!(state.bank_save_method(), Method::Put);
}

#[test]
fn apply_saved_bank_replaces_local_account() {
    let mut state = ProfileState::default();
    let mut account = gtbank_account();
    account.account_number = "9876543210".to_owned();
    state.apply_saved_bank(account);
    assert_eq!(
        state.bank_account.as_ref().unwrap().account_number,
        "9876543210"
    );
    assert_eq!(state.bank_save_method(), Method::Put);
}

// =============================================================================
// SaveOutcome
// =============================================================================

#[test]
fn save_outcome_constructors() {
    assert_eq!(
        SaveOutcome::ok(),
        SaveOutcome {
            success: true,
            error: None
        }
    );
    assert_eq!(
        SaveOutcome::failed("boom".to_owned()),
        SaveOutcome {
            success: false,
            error: Some("boom".to_owned())
        }
    );
    assert_eq!(
        SaveOutcome::discarded(),
        SaveOutcome {
            success: false,
            error: None
        }
    );
}
