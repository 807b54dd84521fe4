mod flow;

pub use flow::RegistrationFlow;
