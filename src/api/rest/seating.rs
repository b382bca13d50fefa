use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use serde_with::skip_serializing_none;

use crate::api::serialize::Time;

use super::{Endpoint, FilterQuery, Format, ID, Request, Result, item_path, resource};

/// SeatingPlan describes the layout of a venue, split up in zones.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeatingPlan {
    /// Unique ID. Ignored when creating or updating.
    pub id: Option<ID>,
    pub name: Option<String>,
    /// Whether the plan is still being drawn or can be used for events.
    pub status: Option<String>,
    pub zones: Option<Vec<SeatingPlanZone>>,
    pub createdts: Option<Time>,
    pub lastupdatets: Option<Time>,
    pub isarchived: Option<bool>,
}

/// A part of a [`SeatingPlan`] that is drawn separately.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeatingPlanZone {
    pub id: Option<String>,
    pub name: Option<String>,
}

/// A named set of seats that can be locked in one go.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LockTemplate {
    pub name: Option<String>,
    /// Everything else the API sends, passed back untouched when saving.
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

/// Describes how seat descriptions are built for a range of seats.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeatDescriptionTemplate {
    pub name: Option<String>,
    /// Everything else the API sends, passed back untouched when saving.
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

/// The seats, rows and sections of a single zone.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogicalPlan {
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

resource!(
    /// Seating plans of the account.
    SeatingPlans,
    seating_plans,
    "/{accountname}/settings/seatingplans/seatingplans",
    SeatingPlan,
    FilterQuery,
    Editable
);

impl Endpoint<'_, SeatingPlans> {
    /// Returns the drawing of a single zone.
    pub async fn svg(&self, id: ID, zoneid: &str) -> Result<String> {
        self.zone(Method::GET, id, "/svg/{zoneid}", zoneid, Format::Svg)
            .run_svg()
            .await
    }

    /// Replaces the drawing of a single zone and returns the stored version.
    pub async fn save_svg(&self, id: ID, zoneid: &str, data: &str) -> Result<String> {
        self.zone(Method::POST, id, "/svg/{zoneid}", zoneid, Format::Svg)
            .svg_body(data)
            .run_svg()
            .await
    }

    pub async fn lock_templates(&self, id: ID) -> Result<Vec<LockTemplate>> {
        self.call(Method::GET, id, "/locktemplates").run().await
    }

    pub async fn save_lock_templates(
        &self,
        id: ID,
        data: &[LockTemplate],
    ) -> Result<Vec<LockTemplate>> {
        self.call(Method::POST, id, "/locktemplates")
            .body(data)
            .run()
            .await
    }

    pub async fn seat_description_templates(
        &self,
        id: ID,
    ) -> Result<Vec<SeatDescriptionTemplate>> {
        self.call(Method::GET, id, "/seatdescriptiontemplates")
            .run()
            .await
    }

    pub async fn save_seat_description_templates(
        &self,
        id: ID,
        data: &[SeatDescriptionTemplate],
    ) -> Result<Vec<SeatDescriptionTemplate>> {
        self.call(Method::POST, id, "/seatdescriptiontemplates")
            .body(data)
            .run()
            .await
    }

    pub async fn logical_plan(&self, id: ID, zoneid: &str) -> Result<LogicalPlan> {
        self.zone(Method::GET, id, "/logicalplan/{zoneid}", zoneid, Format::Json)
            .run()
            .await
    }

    pub async fn save_logical_plan(
        &self,
        id: ID,
        zoneid: &str,
        data: &LogicalPlan,
    ) -> Result<LogicalPlan> {
        self.zone(Method::POST, id, "/logicalplan/{zoneid}", zoneid, Format::Json)
            .body(data)
            .run()
            .await
    }

    /// Removes all drawings and logical plans of a seating plan.
    pub async fn purge(&self, id: ID) -> Result<()> {
        self.call(Method::PUT, id, "/purge").run_empty().await
    }

    fn call(&self, method: Method, id: ID, suffix: &str) -> Request<'_> {
        self.client
            .new_request(method, &item_path::<SeatingPlans>(suffix), Format::Json)
            .url_parameters([("id", id)])
    }

    fn zone(&self, method: Method, id: ID, suffix: &str, zoneid: &str, format: Format) -> Request<'_> {
        self.client
            .new_request(method, &item_path::<SeatingPlans>(suffix), format)
            .url_parameters([("id", id.to_string()), ("zoneid", zoneid.to_string())])
    }
}
