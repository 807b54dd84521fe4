mod submit_form;

pub use submit_form::SubmitForm;
