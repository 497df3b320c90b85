use crate::meta::Catalog;
use crate::pricing::BillingCadence;
use crate::util::SignupError;
use crate::wizard::validator::{EMAIL_ERROR, NAME_ERROR, PHONE_ERROR};
use crate::wizard::{
    render_view, AddonSelection, ContactField, SignupWizard, Step, Transition, WizardAction,
};

fn new_wizard() -> SignupWizard {
    SignupWizard::new(Catalog::builtin()).unwrap()
}

fn fill_contact(wizard: &mut SignupWizard) {
    wizard.update_field(ContactField::Name, "Stephen King".to_string());
    wizard.update_field(ContactField::Email, "stephenking@lorem.com".to_string());
    wizard.update_field(ContactField::Phone, "+1 234 567 890".to_string());
}

/// A wizard that has passed step 1 and sits on `step`.
fn wizard_at(step: Step) -> SignupWizard {
    let mut wizard = new_wizard();
    fill_contact(&mut wizard);
    assert!(matches!(wizard.next(), Transition::Moved { .. }));
    while wizard.state().current_step != step {
        wizard.next();
    }
    wizard
}

#[test]
fn test_wizard_initialization() {
    let wizard = new_wizard();
    let state = wizard.state();

    assert_eq!(state.current_step, Step::ContactInfo);
    assert_eq!(state.billing_cadence, BillingCadence::Monthly);
    assert_eq!(state.selected_plan.name, "Arcade");
    assert_eq!(state.selected_plan.monthly_price, 9);
    assert_eq!(state.selected_plan.yearly_price, 90);
    assert!(state.selected_addons.is_empty());
    assert!(state.user.is_none());
    assert!(state.summary.is_none());
    assert!(!wizard.has_pending_actions());
}

#[test]
fn test_empty_catalog_is_rejected() {
    let result = SignupWizard::new(Catalog { plans: vec![], addons: vec![] });
    assert!(matches!(result, Err(SignupError::InvalidCatalog(_))));
}

#[test]
fn test_next_with_empty_form_reports_every_field() {
    let mut wizard = new_wizard();

    assert_eq!(wizard.next(), Transition::Rejected);

    let state = wizard.state();
    assert_eq!(state.current_step, Step::ContactInfo);
    assert_eq!(state.field_errors.name.as_deref(), Some(NAME_ERROR));
    assert_eq!(state.field_errors.email.as_deref(), Some(EMAIL_ERROR));
    assert_eq!(state.field_errors.phone.as_deref(), Some(PHONE_ERROR));
    assert!(state.user.is_none());
}

#[test]
fn test_errors_do_not_accumulate_between_attempts() {
    let mut wizard = new_wizard();
    wizard.next();

    wizard.update_field(ContactField::Name, "Jo".to_string());
    wizard.update_field(ContactField::Phone, "555-0100".to_string());
    assert_eq!(wizard.next(), Transition::Rejected);

    let errors = &wizard.state().field_errors;
    assert!(errors.name.is_none());
    assert_eq!(errors.email.as_deref(), Some(EMAIL_ERROR));
    assert!(errors.phone.is_none());
}

#[test]
fn test_valid_contact_advances_and_commits_trimmed_values() {
    let mut wizard = new_wizard();
    wizard.update_field(ContactField::Name, "  Stephen King  ".to_string());
    wizard.update_field(ContactField::Email, " stephenking@lorem.com ".to_string());
    wizard.update_field(ContactField::Phone, " +1 234 567 890".to_string());

    assert_eq!(
        wizard.next(),
        Transition::Moved { from: Step::ContactInfo, to: Step::SelectPlan }
    );

    let state = wizard.state();
    let user = state.user.as_ref().unwrap();
    assert_eq!(user.name, "Stephen King");
    assert_eq!(user.email, "stephenking@lorem.com");
    assert_eq!(user.phone, "+1 234 567 890");
    assert!(state.field_errors.is_empty());
}

#[test]
fn test_user_is_kept_after_later_invalid_edit() {
    let mut wizard = wizard_at(Step::SelectPlan);
    wizard.back();
    wizard.update_field(ContactField::Email, "broken".to_string());

    assert_eq!(wizard.next(), Transition::Rejected);
    assert_eq!(wizard.state().user.as_ref().unwrap().email, "stephenking@lorem.com");
}

#[test]
fn test_full_forward_progression() {
    let mut wizard = wizard_at(Step::SelectPlan);

    assert_eq!(
        wizard.next(),
        Transition::Moved { from: Step::SelectPlan, to: Step::AddOns }
    );
    assert!(wizard.state().summary.is_none());

    assert_eq!(
        wizard.next(),
        Transition::Moved { from: Step::AddOns, to: Step::Summary }
    );
    assert!(wizard.state().summary.is_some());
}

#[test]
fn test_next_on_summary_is_noop() {
    let mut wizard = wizard_at(Step::Summary);
    assert_eq!(wizard.next(), Transition::Stayed);
    assert_eq!(wizard.state().current_step, Step::Summary);
}

#[test]
fn test_back_is_floored_at_first_step() {
    let mut wizard = new_wizard();
    assert_eq!(wizard.back(), Transition::Stayed);
    assert_eq!(wizard.state().current_step, Step::ContactInfo);

    let mut wizard = wizard_at(Step::Summary);
    wizard.back();
    assert_eq!(wizard.state().current_step, Step::AddOns);
    wizard.back();
    wizard.back();
    assert_eq!(wizard.state().current_step, Step::ContactInfo);
    wizard.back();
    assert_eq!(wizard.state().current_step, Step::ContactInfo);
}

#[test]
fn test_confirm_only_from_summary() {
    let mut wizard = wizard_at(Step::AddOns);
    assert_eq!(wizard.confirm(), Transition::Stayed);
    assert!(wizard.state().confirmation_id.is_none());

    wizard.next();
    assert_eq!(
        wizard.confirm(),
        Transition::Moved { from: Step::Summary, to: Step::ThankYou }
    );
    let state = wizard.state();
    assert!(state.is_complete());
    assert!(state.confirmation_id.is_some());
    assert!(state.summary.is_some());
}

#[test]
fn test_thank_you_is_terminal_for_navigation() {
    let mut wizard = wizard_at(Step::Summary);
    wizard.confirm();

    assert_eq!(wizard.next(), Transition::Stayed);
    assert_eq!(wizard.back(), Transition::Stayed);
    assert_eq!(wizard.confirm(), Transition::Stayed);
    for step in [Step::ContactInfo, Step::SelectPlan, Step::AddOns, Step::Summary] {
        assert_eq!(
            wizard.apply(WizardAction::GoToStep { step }).unwrap(),
            Transition::Stayed
        );
    }
    assert_eq!(wizard.state().current_step, Step::ThankYou);
    assert!(wizard.state().confirmation_id.is_some());
}

#[test]
fn test_change_after_confirm_reopens_order() {
    let mut wizard = wizard_at(Step::Summary);
    wizard.confirm();
    wizard.change_plan();

    assert_eq!(wizard.state().current_step, Step::SelectPlan);
    assert!(wizard.state().confirmation_id.is_none());
    assert!(render_view(&wizard).confirmation_id.is_none());

    wizard.next();
    wizard.next();
    wizard.confirm();
    assert!(wizard.state().confirmation_id.is_some());
}

#[test]
fn test_change_plan_keeps_selections() {
    let mut wizard = wizard_at(Step::SelectPlan);
    wizard.select_plan("advanced").unwrap();
    wizard.next();
    wizard.toggle_addon("online-service", true).unwrap();
    wizard.next();
    wizard.confirm();

    assert_eq!(
        wizard.change_plan(),
        Transition::Moved { from: Step::ThankYou, to: Step::SelectPlan }
    );
    let state = wizard.state();
    assert_eq!(state.selected_plan.name, "Advanced");
    assert_eq!(state.selected_addons.len(), 1);
    assert!(state.user.is_some());
}

#[test]
fn test_change_plan_from_summary() {
    let mut wizard = wizard_at(Step::Summary);
    wizard.change_plan();
    assert_eq!(wizard.state().current_step, Step::SelectPlan);
}

#[test]
fn test_change_plan_ignored_without_summary() {
    let mut wizard = wizard_at(Step::AddOns);
    assert_eq!(wizard.change_plan(), Transition::Stayed);
    assert_eq!(wizard.state().current_step, Step::AddOns);
}

#[test]
fn test_select_plan_is_idempotent() {
    let mut wizard = new_wizard();
    wizard.select_plan("pro").unwrap();
    let first = wizard.state().selected_plan.clone();
    wizard.select_plan("pro").unwrap();
    assert_eq!(wizard.state().selected_plan, first);
    assert_eq!(first.monthly_price, 15);
    assert_eq!(first.yearly_price, 150);
}

#[test]
fn test_unknown_plan_leaves_state_untouched() {
    let mut wizard = new_wizard();
    let err = wizard.select_plan("platinum").unwrap_err();
    assert!(matches!(err, SignupError::UnknownPlan(id) if id == "platinum"));
    assert_eq!(wizard.state().selected_plan.name, "Arcade");
}

#[test]
fn test_toggle_addon_twice_keeps_one_entry() {
    let mut wizard = new_wizard();
    wizard.toggle_addon("online-service", true).unwrap();
    wizard.toggle_addon("online-service", true).unwrap();

    assert_eq!(
        wizard.state().selected_addons,
        vec![AddonSelection { name: "Online service".to_string(), price: 1 }]
    );
}

#[test]
fn test_toggle_addon_off_removes_entry() {
    let mut wizard = new_wizard();
    wizard.toggle_addon("online-service", true).unwrap();
    wizard.toggle_addon("larger-storage", true).unwrap();
    wizard.toggle_addon("online-service", false).unwrap();

    let names: Vec<&str> = wizard
        .state()
        .selected_addons
        .iter()
        .map(|a| a.name.as_str())
        .collect();
    assert_eq!(names, vec!["Larger storage"]);

    // Unchecking something never selected is harmless
    wizard.toggle_addon("customizable-profile", false).unwrap();
    assert_eq!(wizard.state().selected_addons.len(), 1);
}

#[test]
fn test_unknown_addon() {
    let mut wizard = new_wizard();
    assert!(matches!(
        wizard.toggle_addon("tv-bundle", true),
        Err(SignupError::UnknownAddon(_))
    ));
    assert!(wizard.state().selected_addons.is_empty());
}

#[test]
fn test_addon_price_snapshot_survives_cadence_change() {
    let mut wizard = new_wizard();
    wizard.toggle_addon("larger-storage", true).unwrap();
    wizard.set_billing_cadence(BillingCadence::Yearly);
    wizard.toggle_addon("online-service", true).unwrap();

    let prices: Vec<u32> = wizard.state().selected_addons.iter().map(|a| a.price).collect();
    assert_eq!(prices, vec![2, 10]);
    assert_eq!(wizard.state().plan_price(), 90);
}

#[test]
fn test_jump_requires_validated_contact() {
    let mut wizard = new_wizard();
    assert_eq!(wizard.apply(WizardAction::GoToStep { step: Step::AddOns }).unwrap(), Transition::Stayed);

    let mut wizard = wizard_at(Step::AddOns);
    assert_eq!(
        wizard.apply(WizardAction::GoToStep { step: Step::Summary }).unwrap(),
        Transition::Moved { from: Step::AddOns, to: Step::Summary }
    );
    assert!(wizard.state().summary.is_some());
    assert_eq!(
        wizard.apply(WizardAction::GoToStep { step: Step::ThankYou }).unwrap(),
        Transition::Stayed
    );
}

#[test]
fn test_summary_recomputed_on_reentry() {
    let mut wizard = wizard_at(Step::Summary);
    assert_eq!(wizard.state().summary.as_ref().unwrap().total, 9);

    wizard.change_plan();
    wizard.select_plan("pro").unwrap();
    wizard.next();
    wizard.toggle_addon("customizable-profile", true).unwrap();
    // Summary is not live; it refreshes on entering the step
    assert_eq!(wizard.state().summary.as_ref().unwrap().total, 9);
    wizard.next();
    assert_eq!(wizard.state().summary.as_ref().unwrap().total, 17);
}

#[test]
fn test_action_queuing() {
    let mut wizard = new_wizard();

    wizard.dispatch(WizardAction::UpdateField {
        field: ContactField::Name,
        value: "Stephen King".to_string(),
    });
    wizard.dispatch(WizardAction::UpdateField {
        field: ContactField::Email,
        value: "stephenking@lorem.com".to_string(),
    });
    wizard.dispatch(WizardAction::UpdateField {
        field: ContactField::Phone,
        value: "+1 234 567 890".to_string(),
    });
    wizard.dispatch(WizardAction::Next);

    assert!(wizard.has_pending_actions());
    assert_eq!(wizard.update().unwrap(), Some(Transition::Updated));
    // Nothing else has run yet
    assert_eq!(wizard.state().form.email, "");

    let transitions = wizard.run_pending().unwrap();
    assert_eq!(transitions.len(), 3);
    assert_eq!(
        transitions.last(),
        Some(&Transition::Moved { from: Step::ContactInfo, to: Step::SelectPlan })
    );
    assert!(!wizard.has_pending_actions());
    assert_eq!(wizard.update().unwrap(), None);
}

#[test]
fn test_run_pending_stops_at_failure() {
    let mut wizard = new_wizard();
    wizard.dispatch(WizardAction::SelectPlan { plan_id: "nope".to_string() });
    wizard.dispatch(WizardAction::ToggleBilling { checked: true });

    assert!(wizard.run_pending().is_err());
    assert!(wizard.has_pending_actions());
    assert_eq!(wizard.state().billing_cadence, BillingCadence::Monthly);

    wizard.clear_pending_actions();
    assert!(!wizard.has_pending_actions());
}

#[test]
fn test_toggle_billing_action() {
    let mut wizard = new_wizard();
    wizard.apply(WizardAction::ToggleBilling { checked: true }).unwrap();
    assert_eq!(wizard.state().billing_cadence, BillingCadence::Yearly);
    wizard.apply(WizardAction::ToggleBilling { checked: false }).unwrap();
    assert_eq!(wizard.state().billing_cadence, BillingCadence::Monthly);
}

#[test]
fn test_view_indicators_and_panels() {
    let mut wizard = wizard_at(Step::AddOns);
    let view = render_view(&wizard);

    assert_eq!(view.visible_panel, Step::AddOns);
    let active: Vec<u8> = view.indicators.iter().filter(|i| i.active).map(|i| i.number).collect();
    assert_eq!(active, vec![3]);
    assert_eq!(view.indicators.len(), 4);
    assert!(view.summary_html.is_none());

    wizard.next();
    wizard.confirm();
    let view = render_view(&wizard);
    assert_eq!(view.visible_panel, Step::ThankYou);
    assert!(view.indicators.iter().all(|i| !i.active));
    assert!(view.summary_html.is_some());
    assert!(view.confirmation_id.is_some());
}

#[test]
fn test_view_price_labels_follow_cadence() {
    let mut wizard = new_wizard();
    wizard.toggle_addon("online-service", true).unwrap();

    let view = render_view(&wizard);
    assert!(!view.billing_toggle_checked);
    assert_eq!(view.plans[0].price_label, "$9/mo");
    assert!(view.plans[0].selected);
    assert_eq!(view.addons[0].price_label, "+$1/mo");
    assert!(view.addons[0].selected);
    assert!(!view.addons[1].selected);

    wizard.set_billing_cadence(BillingCadence::Yearly);
    wizard.select_plan("pro").unwrap();
    let view = render_view(&wizard);
    assert!(view.billing_toggle_checked);
    assert_eq!(view.plans[2].price_label, "$150/yr");
    assert!(view.plans[2].selected);
    assert!(!view.plans[0].selected);
    assert_eq!(view.addons[1].price_label, "+$20/yr");
}

#[test]
fn test_view_is_idempotent() {
    let wizard = wizard_at(Step::Summary);
    assert_eq!(render_view(&wizard), render_view(&wizard));
}

#[test]
fn test_view_shows_field_errors() {
    let mut wizard = new_wizard();
    wizard.next();
    let view = render_view(&wizard);
    assert_eq!(view.field_errors.get(ContactField::Phone), Some(PHONE_ERROR));
}
