use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::api::serialize::Time;

use super::{ID, resource};

/// Defines which price types are available in which sales channels.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceAvailability {
    /// Unique ID. Ignored when creating or updating.
    pub id: Option<ID>,
    pub name: Option<String>,
    /// Not set when retrieving a list of price availabilities.
    pub rules: Option<PriceAvailabilityRules>,
    pub createdts: Option<Time>,
    pub lastupdatets: Option<Time>,
    /// Whether the item is archived. Ignored when creating or updating.
    pub isarchived: Option<bool>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceAvailabilityRules {
    /// Sales channels every price type is available in, unless an exception says otherwise.
    pub defaultsaleschannelids: Option<Vec<ID>>,
    pub exceptions: Option<Vec<PriceAvailabilityRuleException>>,
}

/// Overrides the default sales channels for one price type.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceAvailabilityRuleException {
    pub pricetypeid: Option<ID>,
    pub saleschannelids: Option<Vec<ID>>,
}

/// Filter parameters shared by most settings lists.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize)]
pub struct FilterQuery {
    /// Also return archived items.
    pub includearchived: Option<bool>,
    /// Only return items updated since this timestamp.
    pub lastupdatesince: Option<Time>,
    /// Filter the returned items by specifying a query on the public data model that
    /// returns the ids.
    pub filter: Option<String>,
}

resource!(
    /// Price availabilities of the account.
    PriceAvailabilities,
    price_availabilities,
    "/{accountname}/settings/pricing/priceavailabilities",
    PriceAvailability,
    FilterQuery,
    Editable
);
