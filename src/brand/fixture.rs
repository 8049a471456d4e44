//! テスト用ブランドビルダー

use super::*;

/// テスト用のブランドを作成
pub fn brand(id: &str, name: &str, country: &str, score: u8) -> Brand {
    Brand {
        id: id.to_string(),
        user_id: None,
        name: name.to_string(),
        country: country.to_string(),
        category: "Clothing".to_string(),
        price_range: "$$".to_string(),
        material: "Organic Cotton".to_string(),
        sustainability_score: score,
        rating: 4.0,
        ethical_practices: "Fair Trade".to_string(),
        description: None,
        extra: serde_json::Map::new(),
    }
}

/// Brand をフィールド単位で上書きするためのビルダー
pub struct BrandBuilder {
    brand: Brand,
}

impl BrandBuilder {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            brand: brand(id, name, "US", 50),
        }
    }

    pub fn country(mut self, country: &str) -> Self {
        self.brand.country = country.to_string();
        self
    }

    pub fn category(mut self, category: &str) -> Self {
        self.brand.category = category.to_string();
        self
    }

    pub fn material(mut self, material: &str) -> Self {
        self.brand.material = material.to_string();
        self
    }

    pub fn score(mut self, score: u8) -> Self {
        self.brand.sustainability_score = score;
        self
    }

    pub fn rating(mut self, rating: f64) -> Self {
        self.brand.rating = rating;
        self
    }

    pub fn owner(mut self, owner: &str) -> Self {
        self.brand.user_id = Some(owner.to_string());
        self
    }

    pub fn build(self) -> Brand {
        self.brand
    }
}

/// 有効なドラフト
pub fn valid_draft() -> BrandDraft {
    BrandDraft {
        name: "Patagonia".to_string(),
        country: "US".to_string(),
        category: "Clothing".to_string(),
        price_range: "$$$".to_string(),
        material: "Recycled Polyester".to_string(),
        sustainability_score: 92,
        rating: 4.7,
        ethical_practices: "Fair Trade, B Corp".to_string(),
        description: Some("Outdoor apparel".to_string()),
    }
}
