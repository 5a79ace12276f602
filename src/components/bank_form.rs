//! Controlled inputs for the four bank-payout fields.

use leptos::prelude::*;

use crate::state::profile::ProfileState;

/// Bank-details form bound to the profile view state. Submitting invokes
/// `on_save`; the create-vs-update choice stays inside the view-model.
#[component]
pub fn BankFormFields(state: RwSignal<ProfileState>, on_save: Callback<()>) -> impl IntoView {
    view! {
        <form
            class="bank-form"
            on:submit=move |ev| {
                ev.prevent_default();
                on_save.run(());
            }
        >
            <label class="bank-form__label">
                "Bank Name"
                <input
                    class="bank-form__input"
                    type="text"
                    prop:value=move || state.get().bank_form.bank_name
                    on:input=move |ev| {
                        state.update(|s| s.bank_form.bank_name = event_target_value(&ev));
                    }
                />
            </label>
            <label class="bank-form__label">
                "Account Name"
                <input
                    class="bank-form__input"
                    type="text"
                    prop:value=move || state.get().bank_form.account_name
                    on:input=move |ev| {
                        state.update(|s| s.bank_form.account_name = event_target_value(&ev));
                    }
                />
            </label>
            <label class="bank-form__label">
                "Account Number"
                <input
                    class="bank-form__input"
                    type="text"
                    maxlength="10"
                    prop:value=move || state.get().bank_form.account_number
                    on:input=move |ev| {
                        state.update(|s| s.bank_form.account_number = event_target_value(&ev));
                    }
                />
            </label>
            <label class="bank-form__label">
                "Bank Code"
                <input
                    class="bank-form__input"
                    type="text"
                    prop:value=move || state.get().bank_form.bank_code
                    on:input=move |ev| {
                        state.update(|s| s.bank_form.bank_code = event_target_value(&ev));
                    }
                />
            </label>
            <button class="btn btn--primary" type="submit" disabled=move || state.get().loading>
                {move || {
                    if state.get().bank_account.is_some() {
                        "Update Bank Details"
                    } else {
                        "Save Bank Details"
                    }
                }}
            </button>
        </form>
    }
}
