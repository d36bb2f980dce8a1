//! Stories and banners shown on the catalog screen.

use serde::{Deserialize, Serialize};

/// An item in the auto-advancing story strip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Story {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

/// A promotional banner, fetched per position slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Banner {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
}
