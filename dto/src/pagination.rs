use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationDto {
    pub page: i32,
    pub page_size: i32,
    pub page_count: i64,
    pub total: i64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MetaDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<PaginationDto>,
}

/// Strapi collection envelope: `{ "data": [...], "meta": {...} }`
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ListDto<T> {
    pub data: Vec<T>,

    #[serde(default)]
    pub meta: MetaDto,
}

/// Strapi single type envelope, `data` is null when nothing was published
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ItemDto<T> {
    pub data: Option<T>,

    #[serde(default)]
    pub meta: MetaDto,
}

/// Request body wrapper, Strapi expects writes under `data`
#[derive(Clone, Debug, Serialize)]
pub struct DataDto<T> {
    pub data: T,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ErrorBodyDto {
    pub error: ErrorDto,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ErrorDto {
    pub status: u16,
    pub name: String,
    pub message: String,

    #[serde(default)]
    pub details: Option<serde_json::Value>,
}
