use std::sync::Arc;

use visdomwave_lib::wire_services;
use vw_core::{
    registration::{RegistrationError, RegistrationState},
    AppConfig, FieldInput, SubmissionKind,
};
use vw_infra::ChannelCollector;

fn parent_details() -> FieldInput {
    FieldInput::new()
        .text("parentName", "Asha")
        .text("parentSurname", "Rao")
        .text("alternateMobile", "")
        .text("email", "asha@example.com")
        .text("address", "12 Lake Road")
        .text("country", "India")
        .text("state", "Karnataka")
        .text("city", "Mysuru")
        .text("district", "Mysuru")
        .text("motherTongue", "Kannada")
}

fn child_details() -> FieldInput {
    FieldInput::new()
        .text("childName", "Ravi")
        .text("dob", "2015-06-01")
        .text("gender", "male")
        .text("class", "4")
        .text("syllabus", "CBSE")
        .text("schoolName", "Green Valley")
        .text("medium", "English")
        .text("firstLanguage", "English")
        .text("secondLanguage", "Hindi")
        .text("childPin", "4321")
        .text("confirmChildPin", "4321")
        .flag("agreeToTerms", true)
}

#[tokio::test]
async fn full_sign_up_reaches_collector_once() {
    let (collector, mut received) = ChannelCollector::new();
    let services = wire_services(&AppConfig::default(), Arc::new(collector)).unwrap();
    let mut flow = services.registration_flow();

    flow.submit_step(1, FieldInput::new().text("mobile", "9876543210"))
        .unwrap();
    let err = flow
        .submit_step(2, FieldInput::new().text("pin", "1234").text("confirmPin", "1243"))
        .unwrap_err();
    assert!(matches!(err, RegistrationError::Invalid { step: 2, .. }));
    flow.submit_step(2, FieldInput::new().text("pin", "1234").text("confirmPin", "1234"))
        .unwrap();
    flow.submit_step(3, parent_details()).unwrap();

    // Going back and forth keeps what was entered.
    flow.go_back();
    assert_eq!(flow.draft().text("parentName"), Some("Asha"));
    flow.submit_step(3, parent_details()).unwrap();

    let state = flow.submit_final(child_details()).unwrap();
    assert_eq!(state, RegistrationState::Completed);

    let submission = received.recv().await.unwrap();
    assert_eq!(submission.kind, SubmissionKind::Registration);
    assert_eq!(submission.fields.text_of("mobile"), Some("9876543210"));
    assert_eq!(submission.fields.text_of("parentName"), Some("Asha"));
    assert_eq!(submission.fields.text_of("secondLanguage"), Some("Hindi"));
    assert!(received.try_recv().is_err());
}

#[tokio::test]
async fn sign_in_and_contact_share_the_collector() {
    let (collector, mut received) = ChannelCollector::new();
    let services = wire_services(&AppConfig::default(), Arc::new(collector)).unwrap();

    services
        .sign_in()
        .execute(&FieldInput::new().text("mobile", "9876543210").text("pin", "1234"))
        .unwrap();
    let errors = services
        .contact()
        .execute(&FieldInput::new().text("name", "Meera"))
        .unwrap_err();
    assert!(errors.contains("email"));
    assert!(errors.contains("phone"));
    assert!(errors.contains("message"));

    assert_eq!(received.recv().await.unwrap().kind, SubmissionKind::SignIn);
    assert!(received.try_recv().is_err());
}
