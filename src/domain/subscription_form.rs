use serde::{Deserialize, Serialize};

/// Values collected by a subscription form.
///
/// Serialized field-for-field into the body of the Fishbowl request.
/// Nothing here is validated: missing optional values go over the wire as `null`.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionFormValues {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub zip_code: String,
    pub birthday_month: u8,
    pub birthday_day: u8,
    pub birthday_year: u16,
    pub receive_sms: bool,
    pub store_uuid: String,
    pub join_loyalty_program: bool,
    pub tag: Option<String>,
    pub campaign_uuid: Option<String>,
    pub source: String,
    pub brand_uuid: String,
    pub list_uuid: String,
}
