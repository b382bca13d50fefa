use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use serde_repr::{Deserialize_repr, Serialize_repr};
use serde_with::skip_serializing_none;

use crate::api::{custom_fields::CustomFields, serialize::Time};

use super::{Address, Endpoint, Format, ID, Request, Resource, Result, item_path, resource};

/// Lifecycle state of an [`Order`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_repr, Deserialize_repr)]
#[repr(i64)]
pub enum OrderStatus {
    Unconfirmed = 21001,
    Confirmed = 21002,
    Archived = 21003,
}

/// How much of an [`Order`] has been paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_repr, Deserialize_repr)]
#[repr(i64)]
pub enum PaymentStatus {
    Incomplete = 0,
    FullyPaid = 1,
    Overpaid = 2,
}

/// Whether the tickets of an [`Order`] have been delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_repr, Deserialize_repr)]
#[repr(i64)]
pub enum DeliveryStatus {
    NotDelivered = 2601,
    Delivered = 2602,
    ChangedAfterDelivery = 2603,
}

/// Order is a set of tickets bought together, along with payments and delivery settings.
///
/// Taken from the [Developer Documentation](https://www.ticketmatic.com/docs/api/types/Order)
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Unique ID.
    pub orderid: Option<ID>,
    pub status: Option<OrderStatus>,
    /// Order code, used on tickets and in payment references.
    pub code: Option<String>,
    /// Contact the order belongs to.
    pub customerid: Option<ID>,
    /// Whether the customer was authenticated while buying.
    pub isauthenticatedcustomer: Option<bool>,
    pub totalamount: Option<f64>,
    pub amountpaid: Option<f64>,
    pub paymentstatus: Option<PaymentStatus>,
    pub deliverystatus: Option<DeliveryStatus>,
    pub deliveryaddress: Option<Address>,
    /// Properties of a deferred payment, as set by the payment scenario.
    pub deferredpaymentproperties: Option<Value>,
    pub saleschannelid: Option<ID>,
    pub paymentscenarioid: Option<ID>,
    pub deliveryscenarioid: Option<ID>,
    /// When the payment reminder is sent.
    pub rappelts: Option<Time>,
    pub rappelsent: Option<bool>,
    /// When the order expires if it stays unpaid.
    pub expiryts: Option<Time>,
    pub tickets: Option<Vec<Ticket>>,
    pub payments: Option<Value>,
    /// Related objects (events, contacts, ...) keyed by type.
    pub lookup: Option<Map<String, Value>>,
    pub ordercosts: Option<Value>,
    pub createdts: Option<Time>,
    pub lastupdatets: Option<Time>,
    /// Custom fields defined for orders in this account, sent as `c_<name>`.
    #[serde(flatten)]
    pub custom_fields: CustomFields,
}

/// A single ticket in an [`Order`].
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: Option<ID>,
    pub orderid: Option<ID>,
    pub tickettypeid: Option<Value>,
    pub baskettickettypepriceid: Option<Value>,
    pub price: Option<f64>,
    pub servicecharge: Option<Value>,
    /// Contact the ticket is meant for.
    pub ticketholderid: Option<ID>,
    pub ticketname: Option<Value>,
    /// Parent ticket when this ticket is part of a bundle.
    pub aboparentid: Option<Value>,
    pub eventid: Option<ID>,
    pub pricetypeid: Option<ID>,
    pub seatdescription: Option<Value>,
    pub seatname: Option<Value>,
    pub tickettypename: Option<Value>,
}

/// Filters for [`Orders`] lists.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize)]
pub struct OrderQuery {
    /// Filter the returned items by specifying a query on the public data model that
    /// returns the ids.
    pub filter: Option<String>,
    pub includearchived: Option<bool>,
    pub lastupdatesince: Option<Time>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
    pub orderby: Option<String>,
    /// Output format, either `ids` or `default`.
    pub output: Option<String>,
    pub searchterm: Option<String>,
    /// A simple filter, sent as JSON.
    pub simplefilter: Option<OrderFilter>,
}

/// Quick filter for [`OrderQuery`].
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize)]
pub struct OrderFilter {
    pub createdsince: Option<Time>,
    pub saleschannelid: Option<ID>,
    pub customerid: Option<ID>,
    pub status: Option<OrderStatus>,
}

/// Request body to create a new, empty order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateOrder {
    /// Sales channel the order is created in. Required.
    pub saleschannelid: ID,
}

/// A ticket to add, see [`AddTickets`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateTicket {
    /// Ticket type price to buy, which determines event, price type and price.
    pub tickettypepriceid: ID,
}

/// Request body to add tickets to an order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AddTickets {
    pub tickets: Vec<CreateTicket>,
}

/// Response to [`Endpoint::add_tickets`].
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddTicketsResult {
    pub nbrofaddedtickets: Option<i64>,
    /// The modified order.
    pub order: Option<Order>,
}

/// Request body to remove tickets from an order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DeleteTickets {
    /// IDs of the tickets to remove.
    pub tickets: Vec<ID>,
}

/// Request body to modify tickets in an order.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateTickets {
    /// IDs of the tickets to modify.
    pub tickets: Vec<ID>,
    /// Operation to perform, e.g. `setticketholders` or `updatepricetype`.
    pub operation: String,
    /// Parameters of the operation.
    pub params: Option<Map<String, Value>>,
}

/// Request body to modify the settings of an order.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateOrder {
    pub deliveryscenarioid: Option<ID>,
    pub deliveryaddress: Option<Address>,
    pub paymentscenarioid: Option<ID>,
    pub customerid: Option<ID>,
    /// Custom field values keyed by their full name.
    pub customfields: Option<Map<String, Value>>,
}

/// Request body to register a payment.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AddPayments {
    pub paymentmethodid: ID,
    pub amount: f64,
}

/// Request body to refund (part of) a payment.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AddRefunds {
    /// Payment to refund.
    pub paymentid: ID,
    pub amount: f64,
}

/// Request body to generate a PDF for a selection of tickets.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize)]
pub struct TicketsPdfRequest {
    /// Tickets to include. All tickets of the order when left empty.
    pub ticketids: Option<Vec<ID>>,
}

/// Request body to deliver the tickets of an order by email.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize)]
pub struct TicketsEmaildeliveryRequest {
    /// Order mail template to use. The delivery scenario's template when left empty.
    pub templateid: Option<ID>,
}

/// A link to a generated document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Url {
    pub url: String,
}

/// A single change in the history of an order.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogItem {
    pub id: Option<ID>,
    pub ts: Option<Time>,
    pub userid: Option<ID>,
    /// Kind of change.
    pub typeid: Option<i64>,
    pub orderid: Option<ID>,
    pub username: Option<String>,
    pub info: Option<Map<String, Value>>,
    /// The order as it was after the change.
    pub model: Option<Map<String, Value>>,
    pub lookupinfo: Option<Map<String, Value>>,
}

resource!(
    /// Orders of the account.
    Orders, orders, "/{accountname}/orders", Order, OrderQuery
);

impl Endpoint<'_, Orders> {
    /// Creates a new, empty order.
    pub async fn create(&self, data: &CreateOrder) -> Result<Order> {
        self.client
            .new_request(Method::POST, Orders::PATH, Format::Json)
            .body(data)
            .run()
            .await
    }

    /// Modifies the settings of an order.
    pub async fn update(&self, id: ID, data: &UpdateOrder) -> Result<Order> {
        self.call(Method::PUT, id, "").body(data).run().await
    }

    /// Confirms an order, after which it can no longer expire as a pending basket.
    pub async fn confirm(&self, id: ID) -> Result<Order> {
        self.call(Method::POST, id, "").run().await
    }

    pub async fn add_tickets(&self, id: ID, data: &AddTickets) -> Result<AddTicketsResult> {
        self.call(Method::POST, id, "/tickets")
            .body(data)
            .run()
            .await
    }

    pub async fn update_tickets(&self, id: ID, data: &UpdateTickets) -> Result<Order> {
        self.call(Method::PUT, id, "/tickets").body(data).run().await
    }

    pub async fn delete_tickets(&self, id: ID, data: &DeleteTickets) -> Result<Order> {
        self.call(Method::DELETE, id, "/tickets")
            .body(data)
            .run()
            .await
    }

    pub async fn add_payments(&self, id: ID, data: &AddPayments) -> Result<Order> {
        self.call(Method::POST, id, "/payments")
            .body(data)
            .run()
            .await
    }

    pub async fn add_refunds(&self, id: ID, data: &AddRefunds) -> Result<Order> {
        self.call(Method::POST, id, "/refunds").body(data).run().await
    }

    /// Generates a PDF with the tickets and returns a link to download it.
    pub async fn tickets_pdf(&self, id: ID, data: &TicketsPdfRequest) -> Result<Url> {
        self.call(Method::POST, id, "/tickets/pdf")
            .body(data)
            .run()
            .await
    }

    /// Sends the tickets to the customer by email.
    pub async fn tickets_email_delivery(
        &self,
        id: ID,
        data: &TicketsEmaildeliveryRequest,
    ) -> Result<Order> {
        self.call(Method::POST, id, "/tickets/emaildelivery")
            .body(data)
            .run()
            .await
    }

    /// Returns the history of an order, oldest first.
    pub async fn logs(&self, id: ID) -> Result<Vec<LogItem>> {
        self.call(Method::GET, id, "/logs").run().await
    }

    fn call(&self, method: Method, id: ID, suffix: &str) -> Request<'_> {
        self.client
            .new_request(method, &item_path::<Orders>(suffix), Format::Json)
            .url_parameters([("id", id)])
    }
}
