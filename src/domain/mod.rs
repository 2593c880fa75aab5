mod response_envelope;
mod subscription_form;

pub use response_envelope::{ApiData, ApiResult, ResponseEnvelope};
pub use subscription_form::SubscriptionFormValues;
