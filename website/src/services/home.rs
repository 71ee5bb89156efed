use tracing::warn;

use crate::ctx::Credential;
use crate::services::strapi::StrapiSource;
use dto::home::HomePageDto;

pub const DEFAULT_HERO_ALT: &str = "Hero Image";

/// Hero section ready for rendering
#[derive(Clone, Debug, PartialEq)]
pub struct HeroView {
    pub heading: String,
    pub sub_heading: String,
    pub image_url: String,
    pub image_alt: String,
    pub link_href: String,
    pub link_label: String,
    pub link_external: bool,
}

impl HeroView {
    pub fn has_image(&self) -> bool {
        !self.image_url.is_empty()
    }

    pub fn has_link(&self) -> bool {
        !self.link_href.is_empty()
    }
}

pub fn hero_view(page: &HomePageDto, source: &dyn StrapiSource) -> Option<HeroView> {
    let hero = page.hero()?;
    let image_url = hero
        .image
        .as_ref()
        .map(|img| source.media_url(&img.url))
        .unwrap_or_default();
    let image_alt = hero
        .image
        .as_ref()
        .and_then(|img| img.alternative_text.clone())
        .filter(|alt| !alt.is_empty())
        .unwrap_or(DEFAULT_HERO_ALT.to_string());

    let link = hero.link.as_ref();

    Some(HeroView {
        heading: hero.heading.clone().unwrap_or_default(),
        sub_heading: hero.sub_heading.clone().unwrap_or_default(),
        image_url,
        image_alt,
        link_href: link.and_then(|l| l.href.clone()).unwrap_or_default(),
        link_label: link.and_then(|l| l.label.clone()).unwrap_or_default(),
        link_external: link.map(|l| l.is_external).unwrap_or(false),
    })
}

/// Loads the hero section, a missing or broken home page renders no hero
pub async fn load_hero(source: &dyn StrapiSource, credential: &Credential) -> Option<HeroView> {
    match source.get_home_page(credential).await {
        Ok(page) => hero_view(&page, source),
        Err(e) => {
            warn!("Unable to load home page: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::strapi::StrapiTestSource;
    use dto::home::{BlockDto, HeroSectionDto, ImageDto, LinkDto};

    fn page_with_hero(hero: HeroSectionDto) -> HomePageDto {
        HomePageDto {
            id: 1,
            document_id: None,
            title: None,
            description: None,
            blocks: vec![BlockDto::Unknown, BlockDto::HeroSection(hero)],
        }
    }

    #[tokio::test]
    async fn test_load_hero() {
        let page = page_with_hero(HeroSectionDto {
            id: Some(1),
            heading: Some("Your passwords".to_string()),
            sub_heading: None,
            image: Some(ImageDto {
                id: Some(3),
                url: "/uploads/hero.jpg".to_string(),
                alternative_text: None,
            }),
            link: Some(LinkDto {
                id: None,
                href: Some("/users".to_string()),
                label: Some("Users".to_string()),
                is_external: false,
            }),
        });
        let source = StrapiTestSource::new(Some(page), Vec::new());

        let hero = load_hero(&source, &Credential::anonymous()).await.unwrap();
        assert_eq!(hero.heading, "Your passwords");
        assert_eq!(hero.image_url, "http://strapi.test/uploads/hero.jpg");
        assert_eq!(hero.image_alt, DEFAULT_HERO_ALT);
        assert!(hero.has_image());
        assert!(hero.has_link());
    }

    #[tokio::test]
    async fn test_hero_without_image() {
        let page = page_with_hero(HeroSectionDto {
            id: None,
            heading: None,
            sub_heading: None,
            image: None,
            link: None,
        });
        let source = StrapiTestSource::new(Some(page), Vec::new());

        let hero = load_hero(&source, &Credential::anonymous()).await.unwrap();
        assert!(!hero.has_image());
        assert!(!hero.has_link());
    }

    #[tokio::test]
    async fn test_missing_home_page() {
        let source = StrapiTestSource::new(None, Vec::new());
        assert!(load_hero(&source, &Credential::anonymous()).await.is_none());
    }
}
