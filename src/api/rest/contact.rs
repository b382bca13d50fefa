use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::api::{custom_fields::CustomFields, serialize::Time};

use super::{ID, resource};

/// A single address of a [`Contact`].
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    /// Unique ID. Ignored when creating or updating a contact.
    pub id: Option<ID>,
    /// Contact this address belongs to. Ignored when creating or updating a contact.
    pub customerid: Option<ID>,
    /// Name of the person or company the address is for, when it differs from the contact.
    pub addressee: Option<String>,
    /// ISO 3166-1 alpha-2 country code.
    pub countrycode: Option<String>,
    /// Country name, derived from `countrycode`. Ignored when creating or updating.
    pub country: Option<String>,
    pub zip: Option<String>,
    pub city: Option<String>,
    pub street1: Option<String>,
    pub street2: Option<String>,
    pub street3: Option<String>,
    pub street4: Option<String>,
    /// Address type, see [`super::ContactAddressType`].
    pub typeid: Option<ID>,
    /// Address type name. Ignored when creating or updating.
    #[serde(rename = "type")]
    pub type_name: Option<String>,
}

/// A single phone number of a [`Contact`].
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Phonenumber {
    /// Unique ID. Ignored when creating or updating a contact.
    pub id: Option<ID>,
    /// Contact this number belongs to. Ignored when creating or updating a contact.
    pub customerid: Option<ID>,
    /// The phone number itself.
    pub number: Option<String>,
    /// Phone number type.
    pub typeid: Option<ID>,
    /// Phone number type name. Ignored when creating or updating.
    #[serde(rename = "type")]
    pub type_name: Option<String>,
}

/// Contact describes a person or organisation known to the account.
///
/// Taken from the [Developer Documentation](https://www.ticketmatic.com/docs/api/types/Contact)
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    /// Unique ID. Ignored when creating or updating.
    pub id: Option<ID>,
    pub email: Option<String>,
    /// Contact title (Mr, Mrs, ...).
    pub customertitleid: Option<ID>,
    pub firstname: Option<String>,
    pub middlename: Option<String>,
    pub lastname: Option<String>,
    /// Preferred language, ISO 639-1.
    pub languagecode: Option<String>,
    pub birthdate: Option<Time>,
    pub company: Option<String>,
    /// Function of the contact within `company`.
    pub organizationfunction: Option<String>,
    pub addresses: Option<Vec<Address>>,
    pub vatnumber: Option<String>,
    pub phonenumbers: Option<Vec<Phonenumber>>,
    /// Relation types the contact belongs to, see [`super::RelationType`].
    pub relationtypes: Option<Vec<ID>>,
    /// Whether the contact is subscribed to the newsletter.
    pub subscribed: Option<bool>,
    /// Customer status, for example `active`.
    pub status: Option<String>,
    /// Account type. Ignored when creating or updating.
    pub account_type: Option<i64>,
    /// Whether the contact was deleted. Ignored when creating or updating.
    pub isdeleted: Option<bool>,
    /// Ignored when creating or updating.
    pub createdts: Option<Time>,
    /// Ignored when creating or updating.
    pub lastupdatets: Option<Time>,
    /// Custom fields defined for contacts in this account, sent as `c_<name>`.
    #[serde(flatten)]
    pub custom_fields: CustomFields,
}

/// Filters for [`Contacts`] lists.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize)]
pub struct ContactQuery {
    /// Filter the returned items by specifying a query on the public data model that
    /// returns the ids.
    pub filter: Option<String>,
    /// Also return archived contacts.
    pub includearchived: Option<bool>,
    /// Only return contacts updated since this timestamp.
    pub lastupdatesince: Option<Time>,
    /// Maximum number of results. Defaults to 100.
    pub limit: Option<i64>,
    /// Number of results to skip, for paging.
    pub offset: Option<i64>,
    /// Order by the given field. Supported values: `name`, `city`.
    pub orderby: Option<String>,
    /// Output format, either `ids` or `default`.
    pub output: Option<String>,
    /// Full text search across name, email and address.
    pub searchterm: Option<String>,
}

resource!(
    /// Contacts of the account.
    Contacts, contacts, "/{accountname}/contacts", Contact, ContactQuery, Editable
);
