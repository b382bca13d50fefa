use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_with::skip_serializing_none;

use crate::api::{custom_fields::CustomFields, serialize::Time};

use super::{ID, resource};

/// Event describes a single performance that tickets can be sold for.
///
/// Taken from the [Developer Documentation](https://www.ticketmatic.com/docs/api/types/Event)
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Unique ID. Ignored when creating or updating.
    pub id: Option<ID>,
    pub name: Option<String>,
    pub subtitle: Option<String>,
    pub subtitle2: Option<String>,
    /// Small description shown in the web sales pages.
    pub webremark: Option<String>,
    /// Start of the event.
    pub startts: Option<Time>,
    /// Start of the sales period.
    pub salestartts: Option<Time>,
    /// End of the sales period.
    pub saleendts: Option<Time>,
    /// When the event becomes visible on the web sales pages.
    pub publishedts: Option<Time>,
    pub endts: Option<Time>,
    /// Event code, used as a reference in external systems.
    pub code: Option<String>,
    pub externalcode: Option<String>,
    /// Production this event belongs to, if any.
    pub productionid: Option<ID>,
    pub locationid: Option<ID>,
    /// Name of the location. Ignored when creating or updating.
    pub locationname: Option<String>,
    pub seatingplanid: Option<ID>,
    pub seatingplanpricelistid: Option<ID>,
    pub seatingplaneventspecificprices: Option<Value>,
    pub seatingplancontingents: Option<Value>,
    /// Contingents for events without a seating plan.
    pub contingents: Option<Value>,
    /// Price availability, see [`super::PriceAvailability`].
    pub priceavailabilityid: Option<ID>,
    pub ticketfeeid: Option<ID>,
    pub revenuesplitid: Option<ID>,
    pub ticketlayoutid: Option<ID>,
    pub maxnbrofticketsperbasket: Option<i64>,
    /// Current status of the event. Ignored when creating or updating.
    pub currentstatus: Option<i64>,
    /// Prices per sales channel, only filled in when requested with a context.
    pub prices: Option<Value>,
    pub saleschannels: Option<Vec<EventSalesChannel>>,
    /// Availability per sales channel, only filled in when requested with a context.
    pub availability: Option<Value>,
    /// Ignored when creating or updating.
    pub createdts: Option<Time>,
    /// Ignored when creating or updating.
    pub lastupdatets: Option<Time>,
    /// Custom fields defined for events in this account, sent as `c_<name>`.
    #[serde(flatten)]
    pub custom_fields: CustomFields,
}

/// Sales period of an [`Event`] in a single sales channel.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventSalesChannel {
    pub eventid: Option<ID>,
    pub saleschannelid: Option<ID>,
    pub salestartts: Option<Time>,
    pub saleendts: Option<Time>,
    /// Whether the event is sold in this channel.
    pub isactive: Option<bool>,
}

/// Filters for [`Events`] lists.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize)]
pub struct EventQuery {
    /// Filter the returned items by specifying a query on the public data model that
    /// returns the ids.
    pub filter: Option<String>,
    /// Also return archived events.
    pub includearchived: Option<bool>,
    /// Only return events updated since this timestamp.
    pub lastupdatesince: Option<Time>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
    /// Order by the given field. Supported values: `name`, `startts`.
    pub orderby: Option<String>,
    /// Output format, either `ids` or `default`.
    pub output: Option<String>,
    pub searchterm: Option<String>,
    /// A simple filter, sent as JSON.
    pub simplefilter: Option<EventFilter>,
    /// Sales channel context, used to fill in prices and availability.
    pub context: Option<EventContext>,
}

/// Quick filter for [`EventQuery`].
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize)]
pub struct EventFilter {
    /// Only return events of this production.
    pub productionid: Option<ID>,
}

/// Sales channel that prices and availability are calculated for.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize)]
pub struct EventContext {
    pub saleschannelid: Option<ID>,
}

resource!(
    /// Events of the account.
    Events, events, "/{accountname}/events", Event, EventQuery, Editable
);

#[cfg(test)]
mod test {
    use serde_json::json;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{method, path, query_param},
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
    async fn list_encodes_nested_filters_as_json() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/1/qa/events"))
            .and(query_param("simplefilter", r#"{"productionid":7}"#))
            .and(query_param("context", r#"{"saleschannelid":1}"#))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [{
                    "id": 5,
                    "name": "Concert",
                    "startts": "2024-06-01 20:00:00",
                    "saleschannels": [{"saleschannelid": 1, "isactive": true}],
                    "c_genre": "jazz",
                }],
                "nbrofresults": 1,
            })))
            .expect(1)
            .mount(&mock_server)
            .await;
        let client = client(&mock_server);
        let list = client
            .events()
            .list(Some(&EventQuery {
                simplefilter: Some(EventFilter {
                    productionid: Some(7),
                }),
                context: Some(EventContext {
                    saleschannelid: Some(1),
                }),
                ..Default::default()
            }))
            .await
            .unwrap();
        mock_server.verify().await;
        let event = &list.data[0];
        assert_eq!(event.name.as_deref(), Some("Concert"));
        assert_eq!(
            event.startts.map(|t| t.to_string()).as_deref(),
            Some("2024-06-01 20:00:00")
        );
        assert_eq!(event.saleschannels.as_ref().map(Vec::len), Some(1));
        assert_eq!(event.custom_fields.get("genre"), Some(&json!("jazz")));
    }

    #[tokio::test]
    async fn delete_archives_event() {
        let mock_server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/api/1/qa/events/5"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&mock_server)
            .await;
        client(&mock_server).events().delete(5).await.unwrap();
        mock_server.verify().await;
    }
}
