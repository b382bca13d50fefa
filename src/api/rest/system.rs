use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use serde_with::skip_serializing_none;

use crate::api::serialize::Time;

use super::{FilterQuery, ID, resource};

/// Kind of contact address, e.g. home or work.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactAddressType {
    /// Unique ID. Ignored when creating or updating.
    pub id: Option<ID>,
    /// Name of the address type. Translatable.
    pub name: Option<String>,
    pub createdts: Option<Time>,
    pub lastupdatets: Option<Time>,
    pub isarchived: Option<bool>,
}

/// A possible value of a custom field with a fixed set of choices.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomFieldValue {
    pub id: Option<ID>,
    /// Custom field this value belongs to.
    pub typeid: Option<ID>,
    /// Value stored in the custom field.
    pub code: Option<String>,
    /// Label shown for the value. Translatable.
    pub name: Option<String>,
    pub sortorder: Option<i64>,
    pub createdts: Option<Time>,
    pub lastupdatets: Option<Time>,
    pub isarchived: Option<bool>,
}

/// Filters for [`CustomFieldValues`] lists.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize)]
pub struct CustomFieldValueQuery {
    /// Only return values of this custom field.
    pub typeid: Option<ID>,
    pub filter: Option<String>,
    pub includearchived: Option<bool>,
    pub lastupdatesince: Option<Time>,
}

/// Relation between the account and a contact, e.g. member or press.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RelationType {
    pub id: Option<ID>,
    pub name: Option<String>,
    /// Relation types can be nested.
    pub parentid: Option<ID>,
    pub createdts: Option<Time>,
    pub lastupdatets: Option<Time>,
    pub isarchived: Option<bool>,
}

/// Report definition.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub id: Option<ID>,
    /// Name of the report. Translatable.
    pub name: Option<String>,
    pub description: Option<String>,
    pub reporttypeid: Option<ID>,
    pub createdts: Option<Time>,
    pub lastupdatets: Option<Time>,
    pub isarchived: Option<bool>,
    /// Report layout and query definitions.
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

resource!(
    /// Contact address types of the account.
    ContactAddressTypes,
    contact_address_types,
    "/{accountname}/settings/system/contactaddresstypes",
    ContactAddressType,
    FilterQuery,
    Editable,
    Translatable
);

resource!(
    /// Values of choice custom fields.
    CustomFieldValues,
    custom_field_values,
    "/{accountname}/settings/system/customfieldvalues",
    CustomFieldValue,
    CustomFieldValueQuery,
    Editable,
    Translatable
);

resource!(
    /// Relation types of the account.
    RelationTypes,
    relation_types,
    "/{accountname}/settings/system/relationtypes",
    RelationType,
    FilterQuery,
    Editable
);

resource!(
    /// Reports of the account.
    Reports,
    reports,
    "/{accountname}/settings/system/reports",
    Report,
    FilterQuery,
    Editable,
    Translatable
);
