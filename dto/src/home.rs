use serde::{Deserialize, Serialize};

pub const HERO_SECTION: &str = "layout.hero-section";
pub const FOOTER: &str = "layout.footer";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomePageDto {
    pub id: i64,

    #[serde(default)]
    pub document_id: Option<String>,

    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub blocks: Vec<BlockDto>,
}

/// Dynamic zone block, tagged by `__component`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "__component")]
pub enum BlockDto {
    #[serde(rename = "layout.hero-section")]
    HeroSection(HeroSectionDto),

    #[serde(rename = "layout.footer")]
    Footer(FooterDto),

    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroSectionDto {
    #[serde(default)]
    pub id: Option<i64>,

    #[serde(default)]
    pub heading: Option<String>,

    #[serde(default)]
    pub sub_heading: Option<String>,

    #[serde(default)]
    pub image: Option<ImageDto>,

    #[serde(default)]
    pub link: Option<LinkDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterDto {
    #[serde(default)]
    pub id: Option<i64>,

    #[serde(default)]
    pub text: Option<String>,

    #[serde(default)]
    pub image: Option<ImageDto>,

    #[serde(default)]
    pub link: Option<LinkDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageDto {
    #[serde(default)]
    pub id: Option<i64>,

    pub url: String,

    #[serde(default)]
    pub alternative_text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkDto {
    #[serde(default)]
    pub id: Option<i64>,

    #[serde(default)]
    pub href: Option<String>,

    #[serde(default)]
    pub label: Option<String>,

    #[serde(default)]
    pub is_external: bool,
}

impl HomePageDto {
    /// First hero section block, if the page has one
    pub fn hero(&self) -> Option<&HeroSectionDto> {
        self.blocks.iter().find_map(|block| match block {
            BlockDto::HeroSection(hero) => Some(hero),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagination::ItemDto;

    const HOME_PAGE: &str = r#"{
        "data": {
            "id": 3,
            "documentId": "k2m8v0x1c9b7n5a3s4d6f8g0",
            "title": "Home Page",
            "description": "Keep your passwords in one place",
            "blocks": [
                {
                    "__component": "layout.card-grid",
                    "id": 9
                },
                {
                    "__component": "layout.hero-section",
                    "id": 1,
                    "heading": "Your passwords",
                    "subHeading": "Safe and searchable",
                    "image": {
                        "id": 7,
                        "url": "/uploads/hero_4f1b.jpg",
                        "alternativeText": "Padlock"
                    },
                    "link": {"id": 2, "href": "/entries", "label": "Browse", "isExternal": false}
                },
                {
                    "__component": "layout.footer",
                    "id": 2,
                    "text": "All rights reserved"
                }
            ]
        },
        "meta": {}
    }"#;

    #[test]
    fn test_parse_home_page() {
        let res: ItemDto<HomePageDto> = serde_json::from_str(HOME_PAGE).unwrap();
        let home = res.data.unwrap();
        assert_eq!(home.blocks.len(), 3);
        assert!(matches!(home.blocks[0], BlockDto::Unknown));

        let hero = home.hero().unwrap();
        assert_eq!(hero.heading.as_deref(), Some("Your passwords"));
        let image = hero.image.as_ref().unwrap();
        assert_eq!(image.url, "/uploads/hero_4f1b.jpg");
        assert_eq!(image.alternative_text.as_deref(), Some("Padlock"));
        assert_eq!(hero.link.as_ref().unwrap().href.as_deref(), Some("/entries"));

        match &home.blocks[2] {
            BlockDto::Footer(footer) => {
                assert_eq!(footer.text.as_deref(), Some("All rights reserved"))
            }
            _ => panic!("Expected footer block"),
        }
    }

    #[test]
    fn test_home_page_without_blocks() {
        let res: ItemDto<HomePageDto> =
            serde_json::from_str(r#"{"data": {"id": 1}, "meta": {}}"#).unwrap();
        let home = res.data.unwrap();
        assert!(home.hero().is_none());
        assert!(home.blocks.is_empty());
    }

    #[test]
    fn test_home_page_unpublished() {
        let res: ItemDto<HomePageDto> = serde_json::from_str(r#"{"data": null}"#).unwrap();
        assert!(res.data.is_none());
    }
}
