use std::collections::HashSet;

use serde::Deserialize;
use thiserror::Error;

const BUNDLED: &str = include_str!("../content/site.json");

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("malformed site content: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("site content lists no signature drinks")]
    NoDrinks,
    #[error("drink {0:?} has no ingredients")]
    EmptyDescription(String),
    #[error("review by {author:?} has rating {rating}, expected 1-5")]
    Rating { author: String, rating: u8 },
    #[error("{list} lists {key:?} more than once")]
    DuplicateKey { list: &'static str, key: String },
}

fn ensure_unique<'a>(
    list: &'static str,
    keys: impl IntoIterator<Item = &'a str>,
) -> Result<(), ContentError> {
    let mut seen = HashSet::new();
    for key in keys {
        if !seen.insert(key) {
            return Err(ContentError::DuplicateKey { list, key: key.to_string() });
        }
    }
    Ok(())
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SiteContent {
    pub name: String,
    pub tagline: String,
    pub logo: String,
    pub hero_image: String,
    pub about: About,
    pub laboratory: Laboratory,
    pub drinks: Drinks,
    pub reviews: Reviews,
    pub find_us: FindUs,
    pub copyright_holder: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct About {
    pub heading: String,
    pub image: String,
    pub image_alt: String,
    pub paragraphs: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Laboratory {
    pub heading: String,
    pub intro: String,
    pub pillars: Vec<Pillar>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Pillar {
    pub title: String,
    pub description: String,
    pub icon: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Drinks {
    pub heading: String,
    pub intro: String,
    pub items: Vec<Drink>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Drink {
    pub name: String,
    /// Ingredient list separated by `", "`.
    pub description: String,
    pub image: String,
    pub story: String,
}

impl Drink {
    pub fn ingredients(&self) -> Vec<&str> {
        self.description
            .split(", ")
            .map(str::trim)
            .filter(|i| !i.is_empty())
            .collect()
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Reviews {
    pub heading: String,
    pub intro: String,
    pub items: Vec<Review>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Review {
    pub author: String,
    pub rating: u8,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct FindUs {
    pub heading: String,
    pub intro: String,
    pub contact: Contact,
    pub hours: Vec<OpeningHours>,
    pub socials: Vec<SocialLink>,
    pub map_embed_url: String,
    pub map_title: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Contact {
    pub address: String,
    pub phone: String,
    pub email: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct OpeningHours {
    pub days: String,
    pub hours: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
}

impl SiteContent {
    /// Parses and validates the copy bundled into the binary.
    pub fn load() -> Result<SiteContent, ContentError> {
        Self::from_json(BUNDLED)
    }

    pub fn from_json(json: &str) -> Result<SiteContent, ContentError> {
        let content: SiteContent = serde_json::from_str(json)?;
        content.validate()?;
        Ok(content)
    }

    fn validate(&self) -> Result<(), ContentError> {
        if self.drinks.items.is_empty() {
            return Err(ContentError::NoDrinks);
        }
        if let Some(drink) = self.drinks.items.iter().find(|d| d.ingredients().is_empty()) {
            return Err(ContentError::EmptyDescription(drink.name.clone()));
        }
        if let Some(review) = self.reviews.items.iter().find(|r| !(1..=5).contains(&r.rating)) {
            return Err(ContentError::Rating {
                author: review.author.clone(),
                rating: review.rating,
            });
        }
        // These double as list keys when rendering.
        ensure_unique("drinks", self.drinks.items.iter().map(|d| d.name.as_str()))?;
        ensure_unique("reviews", self.reviews.items.iter().map(|r| r.author.as_str()))?;
        ensure_unique("laboratory", self.laboratory.pillars.iter().map(|p| p.title.as_str()))?;
        ensure_unique("hours", self.find_us.hours.iter().map(|h| h.days.as_str()))?;
        ensure_unique("socials", self.find_us.socials.iter().map(|s| s.label.as_str()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bundled_value() -> serde_json::Value {
        serde_json::from_str(BUNDLED).unwrap()
    }

    #[test]
    fn bundled_content_loads() {
        let content = SiteContent::load().unwrap();
        assert_eq!(content.name, "SEASONS");
        assert_eq!(content.drinks.items.len(), 4);
        assert_eq!(content.reviews.items.len(), 3);
        assert_eq!(content.laboratory.pillars.len(), 3);
        assert!(content.find_us.map_embed_url.starts_with("https://www.google.com/maps/embed"));
    }

    #[test]
    fn ingredients_split_on_commas() {
        let content = SiteContent::load().unwrap();
        let amalfi = &content.drinks.items[0];
        assert_eq!(amalfi.ingredients(), ["Limoncello", "gin", "fresh lemon", "basil"]);
    }

    #[test]
    fn ingredients_skip_blank_entries() {
        let drink = Drink {
            name: "Test.".into(),
            description: "rum, , lime, ".into(),
            image: String::new(),
            story: String::new(),
        };
        assert_eq!(drink.ingredients(), ["rum", "lime"]);
    }

    #[test]
    fn comma_without_space_stays_one_ingredient() {
        let drink = Drink {
            name: "Test.".into(),
            description: "Gin,tonic, lime".into(),
            image: String::new(),
            story: String::new(),
        };
        assert_eq!(drink.ingredients(), ["Gin,tonic", "lime"]);
    }

    #[test]
    fn rejects_duplicate_drink_names() {
        let mut value = bundled_value();
        value["drinks"]["items"][3]["name"] = "Amalfi.".into();
        match SiteContent::from_json(&value.to_string()) {
            Err(ContentError::DuplicateKey { list, key }) => {
                assert_eq!(list, "drinks");
                assert_eq!(key, "Amalfi.");
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn rejects_duplicate_review_authors() {
        let mut value = bundled_value();
        value["reviews"]["items"][2]["author"] = "S.M.".into();
        assert!(matches!(
            SiteContent::from_json(&value.to_string()),
            Err(ContentError::DuplicateKey { list: "reviews", .. })
        ));
    }

    #[test]
    fn rejects_duplicate_opening_days() {
        let mut value = bundled_value();
        value["find_us"]["hours"][2]["days"] = "Monday - Thursday".into();
        assert!(matches!(
            SiteContent::from_json(&value.to_string()),
            Err(ContentError::DuplicateKey { list: "hours", .. })
        ));
    }

    #[test]
    fn rejects_duplicate_pillar_titles() {
        let mut value = bundled_value();
        value["laboratory"]["pillars"][1]["title"] = "Precision".into();
        assert!(matches!(
            SiteContent::from_json(&value.to_string()),
            Err(ContentError::DuplicateKey { list: "laboratory", .. })
        ));
    }

    #[test]
    fn rejects_out_of_range_rating() {
        let mut value = bundled_value();
        value["reviews"]["items"][1]["rating"] = 6.into();
        let err = SiteContent::from_json(&value.to_string()).unwrap_err();
        assert!(matches!(err, ContentError::Rating { rating: 6, .. }));
    }

    #[test]
    fn rejects_zero_rating() {
        let mut value = bundled_value();
        value["reviews"]["items"][0]["rating"] = 0.into();
        assert!(matches!(
            SiteContent::from_json(&value.to_string()),
            Err(ContentError::Rating { rating: 0, .. })
        ));
    }

    #[test]
    fn rejects_empty_drink_list() {
        let mut value = bundled_value();
        value["drinks"]["items"] = serde_json::json!([]);
        assert!(matches!(
            SiteContent::from_json(&value.to_string()),
            Err(ContentError::NoDrinks)
        ));
    }

    #[test]
    fn rejects_drink_without_ingredients() {
        let mut value = bundled_value();
        value["drinks"]["items"][2]["description"] = " , ".into();
        match SiteContent::from_json(&value.to_string()) {
            Err(ContentError::EmptyDescription(name)) => assert_eq!(name, "Summer Solstice."),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            SiteContent::from_json("{ not json"),
            Err(ContentError::Parse(_))
        ));
    }
}
