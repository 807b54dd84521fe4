//! Form schemas used by the site.
//!
//! 站点使用的表单校验规则。
//!
//! Field names match the keys the page markup submits, so they stay in
//! camelCase.

use crate::error::ConfigurationError;
use crate::validation::{FieldRule, FieldSpec, StepSchema};

const MOBILE_MSG: &str = "Please enter a valid mobile number";
const PIN_MSG: &str = "PIN must be 4 digits";
const PIN_MISMATCH_MSG: &str = "PINs don't match";
const EMAIL_MSG: &str = "Please enter a valid email";

fn required(name: &str, message: &str) -> FieldSpec {
    FieldSpec::new(name).rule(FieldRule::required(message))
}

fn four_digit_pin(name: &str) -> FieldSpec {
    FieldSpec::new(name).rule(FieldRule::digits(4, PIN_MSG))
}

/// Registration step 1: mobile number.
pub fn mobile_step() -> Result<StepSchema, ConfigurationError> {
    StepSchema::new(
        "registration.mobile",
        vec![FieldSpec::new("mobile").rule(FieldRule::min_length(10, MOBILE_MSG))],
    )
}

/// Registration step 2: parent PIN and its confirmation.
pub fn parent_pin_step() -> Result<StepSchema, ConfigurationError> {
    StepSchema::new(
        "registration.parent_pin",
        vec![
            four_digit_pin("pin"),
            FieldSpec::new("confirmPin").rule(FieldRule::equals_field("pin", PIN_MISMATCH_MSG)),
        ],
    )
}

/// Registration step 3: parent details.
pub fn parent_details_step() -> Result<StepSchema, ConfigurationError> {
    StepSchema::new(
        "registration.parent_details",
        vec![
            required("parentName", "Name is required"),
            required("parentSurname", "Surname is required"),
            FieldSpec::new("alternateMobile").optional(),
            FieldSpec::new("email").rule(FieldRule::email(EMAIL_MSG)),
            required("address", "Address is required"),
            required("country", "Country is required"),
            required("state", "State is required"),
            required("city", "City is required"),
            required("district", "District is required"),
            required("motherTongue", "Mother tongue is required"),
        ],
    )
}

/// Registration step 4: child details, child PIN and terms acceptance.
pub fn child_details_step() -> Result<StepSchema, ConfigurationError> {
    StepSchema::new(
        "registration.child_details",
        vec![
            required("childName", "Child name is required"),
            required("dob", "Date of birth is required"),
            required("gender", "Gender is required"),
            required("class", "Class is required"),
            required("syllabus", "Syllabus is required"),
            required("schoolName", "School name is required"),
            required("medium", "Medium of instruction is required"),
            required("firstLanguage", "First language is required"),
            FieldSpec::new("secondLanguage").optional(),
            FieldSpec::new("thirdLanguage").optional(),
            four_digit_pin("childPin"),
            FieldSpec::new("confirmChildPin")
                .rule(FieldRule::equals_field("childPin", PIN_MISMATCH_MSG)),
            FieldSpec::new("agreeToTerms")
                .rule(FieldRule::must_be_true("You must agree to terms and conditions")),
        ],
    )
}

/// Sign-in with mobile number and PIN.
pub fn sign_in() -> Result<StepSchema, ConfigurationError> {
    StepSchema::new(
        "sign_in",
        vec![
            FieldSpec::new("mobile").rule(FieldRule::min_length(10, MOBILE_MSG)),
            four_digit_pin("pin"),
        ],
    )
}

/// Contact page enquiry.
pub fn contact() -> Result<StepSchema, ConfigurationError> {
    StepSchema::new(
        "contact",
        vec![
            required("name", "Name is required"),
            FieldSpec::new("email").rule(FieldRule::email(EMAIL_MSG)),
            FieldSpec::new("phone").rule(FieldRule::min_length(10, "Please enter a valid phone number")),
            FieldSpec::new("message")
                .rule(FieldRule::min_length(10, "Message must be at least 10 characters")),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{FieldInput, FieldValue};

    #[test]
    fn all_schemas_build() {
        for schema in [
            mobile_step(),
            parent_pin_step(),
            parent_details_step(),
            child_details_step(),
            sign_in(),
            contact(),
        ] {
            assert!(schema.is_ok());
        }
    }

    #[test]
    fn short_mobile_is_rejected() {
        let errors = mobile_step()
            .unwrap()
            .validate(&FieldInput::new().text("mobile", "98765"))
            .unwrap_err();
        assert_eq!(errors.messages("mobile"), [MOBILE_MSG]);
    }

    #[test]
    fn child_step_requires_terms_and_matching_pins() {
        let input = FieldInput::new()
            .text("childName", "Asha")
            .text("dob", "2015-04-01")
            .text("gender", "female")
            .text("class", "4")
            .text("syllabus", "CBSE")
            .text("schoolName", "Sunrise Public School")
            .text("medium", "English")
            .text("firstLanguage", "Hindi")
            .text("childPin", "4321")
            .text("confirmChildPin", "4312");
        let errors = child_details_step().unwrap().validate(&input).unwrap_err();
        assert_eq!(
            errors.fields().collect::<Vec<_>>(),
            vec!["agreeToTerms", "confirmChildPin"]
        );
    }

    #[test]
    fn contact_message_needs_ten_characters() {
        let input = FieldInput::new()
            .text("name", "Ravi")
            .text("email", "ravi@example.com")
            .text("phone", "9876543210")
            .text("message", "Hi there");
        let errors = contact().unwrap().validate(&input).unwrap_err();
        assert_eq!(
            errors.messages("message"),
            ["Message must be at least 10 characters"]
        );
    }

    #[test]
    fn pins_must_be_four_digits() {
        let schema = parent_pin_step().unwrap();
        for pin in ["abcd", "123", "12345", "12 4"] {
            let input = FieldInput::new().text("pin", pin).text("confirmPin", pin);
            let errors = schema.validate(&input).unwrap_err();
            assert_eq!(errors.messages("pin"), [PIN_MSG], "pin {pin:?}");
        }
        let ok = FieldInput::new().text("pin", "0042").text("confirmPin", "0042");
        assert!(schema.validate(&ok).is_ok());
    }

    #[test]
    fn sign_in_rejects_letters_in_pin() {
        let input = FieldInput::new().text("mobile", "9876543210").text("pin", "abcd");
        let errors = sign_in().unwrap().validate(&input).unwrap_err();
        assert_eq!(errors.messages("pin"), [PIN_MSG]);
    }

    #[test]
    fn ticked_checkboxes_do_not_satisfy_text_fields() {
        let pins = FieldInput::new().flag("pin", true).flag("confirmPin", true);
        let errors = parent_pin_step().unwrap().validate(&pins).unwrap_err();
        assert_eq!(errors.messages("pin"), [PIN_MSG]);
        assert_eq!(errors.messages("confirmPin"), [PIN_MISMATCH_MSG]);

        let mut details = FieldInput::new()
            .text("parentName", "Asha")
            .text("parentSurname", "Rao")
            .text("email", "asha@example.com")
            .text("address", "12 Lake Road")
            .text("country", "India")
            .text("state", "Karnataka")
            .text("city", "Mysuru")
            .text("district", "Mysuru");
        details.insert("motherTongue", FieldValue::Flag(false));
        let errors = parent_details_step().unwrap().validate(&details).unwrap_err();
        assert_eq!(
            errors.fields().collect::<Vec<_>>(),
            vec!["motherTongue"]
        );
    }

    #[test]
    fn terms_need_a_ticked_checkbox() {
        let input = FieldInput::new()
            .text("childName", "Asha")
            .text("dob", "2015-04-01")
            .text("gender", "female")
            .text("class", "4")
            .text("syllabus", "CBSE")
            .text("schoolName", "Sunrise Public School")
            .text("medium", "English")
            .text("firstLanguage", "Hindi")
            .text("childPin", "4321")
            .text("confirmChildPin", "4321")
            .text("agreeToTerms", "true");
        let errors = child_details_step().unwrap().validate(&input).unwrap_err();
        assert_eq!(
            errors.messages("agreeToTerms"),
            ["You must agree to terms and conditions"]
        );
        assert!(child_details_step()
            .unwrap()
            .validate(&input.flag("agreeToTerms", true))
            .is_ok());
    }
}
