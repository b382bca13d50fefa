use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};
use serde_with::skip_serializing_none;

use crate::api::serialize::Time;

use super::{FilterQuery, ID, resource};

/// Delivery scenarios define how tickets reach the customer.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeliveryScenario {
    /// Unique ID. Ignored when creating or updating.
    pub id: Option<ID>,
    /// Name of the delivery scenario. Translatable.
    pub name: Option<String>,
    /// Short description, shown to customers. Translatable.
    pub shortdescription: Option<String>,
    pub internalremark: Option<String>,
    /// Kind of delivery, e.g. e-ticket or mail.
    pub typeid: Option<i64>,
    /// Whether a delivery address is required.
    pub needsaddress: Option<bool>,
    pub availability: Option<DeliveryscenarioAvailability>,
    /// Order mail template used when the tickets are delivered.
    pub ordermailtemplateid_delivery: Option<ID>,
    /// When tickets may be delivered as e-tickets.
    pub allowetickets: Option<i64>,
    pub createdts: Option<Time>,
    pub lastupdatets: Option<Time>,
    pub isarchived: Option<bool>,
}

/// Sales channels a delivery scenario can be used in.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeliveryscenarioAvailability {
    pub saleschannels: Option<Vec<ID>>,
    /// Use a script to determine availability instead.
    pub usescript: Option<bool>,
    pub script: Option<String>,
}

/// Kind of [`PaymentScenario`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_repr, Deserialize_repr)]
#[repr(i64)]
pub enum PaymentScenarioType {
    /// Payment has to happen immediately.
    Immediate = 2701,
    /// Payment may happen later, e.g. by bank transfer.
    Deferred = 2702,
}

/// Payment scenarios define how and when an order is paid.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentScenario {
    pub id: Option<ID>,
    /// Name of the payment scenario. Translatable.
    pub name: Option<String>,
    /// Short description, shown to customers. Translatable.
    pub shortdescription: Option<String>,
    pub internalremark: Option<String>,
    pub typeid: Option<PaymentScenarioType>,
    /// When an unpaid order becomes overdue. Deferred scenarios only.
    pub overdueparameters: Option<PaymentscenarioOverdueParameters>,
    /// When an unpaid order expires. Deferred scenarios only.
    pub expiryparameters: Option<PaymentscenarioExpiryParameters>,
    pub availability: Option<PaymentscenarioAvailability>,
    /// Payment methods that can be used.
    pub paymentmethods: Option<Vec<ID>>,
    pub ordermailtemplateid_paymentinstruction: Option<ID>,
    pub ordermailtemplateid_overdue: Option<ID>,
    pub ordermailtemplateid_expiry: Option<ID>,
    pub createdts: Option<Time>,
    pub lastupdatets: Option<Time>,
    pub isarchived: Option<bool>,
}

/// Sales channels a payment scenario can be used in.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentscenarioAvailability {
    pub saleschannels: Option<Vec<ID>>,
    pub usescript: Option<bool>,
    pub script: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentscenarioExpiryParameters {
    pub daysafterordercreation: Option<i64>,
    pub daysbeforeevent: Option<i64>,
    /// Delete the order instead of only marking it expired.
    pub deleteonexpiry: Option<bool>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentscenarioOverdueParameters {
    pub daysafterordercreation: Option<i64>,
    pub daysbeforeevent: Option<i64>,
}

resource!(
    /// Delivery scenarios of the account.
    DeliveryScenarios,
    delivery_scenarios,
    "/{accountname}/settings/ticketsales/deliveryscenarios",
    DeliveryScenario,
    FilterQuery,
    Editable,
    Translatable
);

resource!(
    /// Payment scenarios of the account.
    PaymentScenarios,
    payment_scenarios,
    "/{accountname}/settings/ticketsales/paymentscenarios",
    PaymentScenario,
    FilterQuery,
    Editable,
    Translatable
);

#[cfg(test)]
mod test {
    use serde_json::json;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{body_json, method, path},
    };

    use super::*;
    use crate::api::rest::{Client, Credentials};

    fn client(ms: &MockServer) -> Client {
        Client::builder(Credentials::new("qa", "accesskey", "secretkey"))
            .server(&ms.uri().parse().unwrap())
            .retries(0)
            .build()
    }

    #[tokio::test]
    async fn create_payment_scenario() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/1/qa/settings/ticketsales/paymentscenarios"))
            .and(body_json(json!({
                "name": "Payment scenario test",
                "shortdescription": "Short test",
                "internalremark": "Testing",
                "typeid": 2702,
                "availability": {"saleschannels": [1], "usescript": false},
                "expiryparameters": {"daysafterordercreation": 24, "daysbeforeevent": 2},
                "overdueparameters": {"daysafterordercreation": 12, "daysbeforeevent": 5},
                "paymentmethods": [1, 2],
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": 17,
                "name": "Payment scenario test",
                "typeid": 2702,
            })))
            .expect(1)
            .mount(&mock_server)
            .await;
        let client = client(&mock_server);
        let created = client
            .payment_scenarios()
            .create(&PaymentScenario {
                name: Some("Payment scenario test".to_string()),
                shortdescription: Some("Short test".to_string()),
                internalremark: Some("Testing".to_string()),
                typeid: Some(PaymentScenarioType::Deferred),
                availability: Some(PaymentscenarioAvailability {
                    saleschannels: Some(vec![1]),
                    usescript: Some(false),
                    script: None,
                }),
                expiryparameters: Some(PaymentscenarioExpiryParameters {
                    daysafterordercreation: Some(24),
                    daysbeforeevent: Some(2),
                    deleteonexpiry: None,
                }),
                overdueparameters: Some(PaymentscenarioOverdueParameters {
                    daysafterordercreation: Some(12),
                    daysbeforeevent: Some(5),
                }),
                paymentmethods: Some(vec![1, 2]),
                ..Default::default()
            })
            .await
            .unwrap();
        mock_server.verify().await;
        assert_eq!(created.id, Some(17));
        assert_eq!(created.typeid, Some(PaymentScenarioType::Deferred));
    }

    #[tokio::test]
    async fn delivery_scenario_translations() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/1/qa/settings/ticketsales/deliveryscenarios/4/translate"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "nameen": "E-ticket",
                "shortdescriptionen": "Print at home",
            })))
            .expect(1)
            .mount(&mock_server)
            .await;
        let client = client(&mock_server);
        let translations = client.delivery_scenarios().translations(4).await.unwrap();
        mock_server.verify().await;
        assert_eq!(translations.len(), 2);
    }
}
