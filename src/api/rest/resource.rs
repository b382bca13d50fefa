//! Generic operations shared by most API objects.
//!
//! Nearly every collection in the API supports the same calls: list, get, create,
//! update, delete and, for objects with translatable fields, fetching and setting
//! translations. [`Endpoint`] implements them once for any [`Resource`].
use std::{collections::HashMap, marker::PhantomData};

use reqwest::Method;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};

use super::{Client, Format, Result};

/// Unique ID of an object.
pub type ID = i64;

/// Translations map `<field><language code>` keys (e.g. `namenl`) to translated strings.
pub type Translations = HashMap<String, String>;

/// Describes a collection of objects in the API.
pub trait Resource {
    /// Path of the collection, relative to the API root.
    const PATH: &'static str;
    /// The object type stored in the collection.
    type Item: Serialize + DeserializeOwned;
    /// Filter parameters accepted by [`Endpoint::list`].
    type Query: Serialize;
}

/// Marks resources that can be created, updated and deleted through the generic calls.
pub trait Editable: Resource {}

/// Marks resources with translatable fields.
pub trait Translatable: Resource {}

/// List results as returned by every `getlist` call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct List<T> {
    /// Result data.
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    /// The total number of results that are available without considering limit and
    /// offset, useful for paging.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nbrofresults: Option<i64>,
    /// Related objects, only sent when asking for `withlookup` output.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lookup: Option<Map<String, Value>>,
}

impl<T> Default for List<T> {
    fn default() -> Self {
        List {
            data: Vec::new(),
            nbrofresults: None,
            lookup: None,
        }
    }
}

/// Calls for a single [`Resource`], obtained through one of the accessors on [`Client`].
pub struct Endpoint<'a, R> {
    pub(crate) client: &'a Client,
    resource: PhantomData<R>,
}

impl<'a, R> Endpoint<'a, R> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Endpoint {
            client,
            resource: PhantomData,
        }
    }
}

impl<R: Resource> Endpoint<'_, R> {
    /// Returns a list of objects, filtered by `query` if given.
    pub async fn list(&self, query: Option<&R::Query>) -> Result<List<R::Item>> {
        let mut req = self
            .client
            .new_request(Method::GET, R::PATH, Format::Json);
        if let Some(query) = query {
            req = req.add_query(query);
        }
        req.run().await
    }

    /// Returns a single object.
    pub async fn get(&self, id: ID) -> Result<R::Item> {
        self.client
            .new_request(Method::GET, &item_path::<R>(""), Format::Json)
            .url_parameters([("id", id)])
            .run()
            .await
    }
}

impl<R: Editable> Endpoint<'_, R> {
    /// Creates a new object and returns it as stored by the API.
    pub async fn create(&self, data: &R::Item) -> Result<R::Item> {
        self.client
            .new_request(Method::POST, R::PATH, Format::Json)
            .body(data)
            .run()
            .await
    }

    /// Modifies an existing object. Fields left empty are not changed.
    pub async fn update(&self, id: ID, data: &R::Item) -> Result<R::Item> {
        self.client
            .new_request(Method::PUT, &item_path::<R>(""), Format::Json)
            .url_parameters([("id", id)])
            .body(data)
            .run()
            .await
    }

    /// Removes an object.
    ///
    /// Most object types are archivable: they are not actually deleted but marked as
    /// archived, so they no longer show up in most places.
    pub async fn delete(&self, id: ID) -> Result<()> {
        self.client
            .new_request(Method::DELETE, &item_path::<R>(""), Format::Json)
            .url_parameters([("id", id)])
            .run_empty()
            .await
    }
}

impl<R: Translatable> Endpoint<'_, R> {
    /// Returns the translated values of all translatable fields.
    pub async fn translations(&self, id: ID) -> Result<Translations> {
        self.client
            .new_request(Method::GET, &item_path::<R>("/translate"), Format::Json)
            .url_parameters([("id", id)])
            .run()
            .await
    }

    /// Sets updated translation strings and returns the full set.
    pub async fn translate(&self, id: ID, data: &Translations) -> Result<Translations> {
        self.client
            .new_request(Method::PUT, &item_path::<R>("/translate"), Format::Json)
            .url_parameters([("id", id)])
            .body(data)
            .run()
            .await
    }
}

/// Path of a single object in `R`, followed by `suffix`.
pub(crate) fn item_path<R: Resource>(suffix: &str) -> String {
    format!("{}/{{id}}{}", R::PATH, suffix)
}

/// Declares a [`Resource`] marker type together with its accessor on [`Client`].
macro_rules! resource {
    (
        $(#[$meta:meta])*
        $name:ident, $accessor:ident, $path:literal, $item:ty, $query:ty
        $(, $marker:ident)*
    ) => {
        $(#[$meta])*
        pub struct $name;

        impl $crate::api::rest::Resource for $name {
            const PATH: &'static str = $path;
            type Item = $item;
            type Query = $query;
        }

        $(impl $crate::api::rest::$marker for $name {})*

        impl $crate::api::rest::Client {
            $(#[$meta])*
            pub fn $accessor(&self) -> $crate::api::rest::Endpoint<'_, $name> {
                $crate::api::rest::Endpoint::new(self)
            }
        }
    };
}

pub(crate) use resource;
