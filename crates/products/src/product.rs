use serde::{Deserialize, Serialize};

use storefront_core::{DomainError, DomainResult, Entity, ProductId, ValueObject};

/// A product available for display and purchase.
///
/// `price` is a display string; no arithmetic is ever performed on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub image: String,
    #[serde(default)]
    pub description: String,
    pub price: String,
}

impl Product {
    pub fn new(
        id: ProductId,
        title: impl Into<String>,
        image: impl Into<String>,
        description: impl Into<String>,
        price: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            image: image.into(),
            description: description.into(),
            price: price.into(),
        }
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> ProductId {
        self.id
    }
}

/// One input of the add-product form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductField {
    Title,
    Image,
    Description,
    Price,
}

impl ProductField {
    /// Every form input, in form order.
    pub const ALL: [ProductField; 4] = [
        ProductField::Title,
        ProductField::Image,
        ProductField::Description,
        ProductField::Price,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProductField::Title => "title",
            ProductField::Image => "image",
            ProductField::Description => "description",
            ProductField::Price => "price",
        }
    }

    /// Whether the field must be non-empty for the draft to be accepted.
    pub fn is_required(&self) -> bool {
        !matches!(self, ProductField::Description)
    }
}

impl core::str::FromStr for ProductField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "title" => Ok(ProductField::Title),
            "image" => Ok(ProductField::Image),
            "description" => Ok(ProductField::Description),
            "price" => Ok(ProductField::Price),
            other => Err(DomainError::validation(format!("unknown product field: {other}"))),
        }
    }
}

/// Fields typed by a user before an identifier is assigned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductDraft {
    pub title: String,
    pub image: String,
    pub description: String,
    pub price: String,
}

impl ValueObject for ProductDraft {}

impl ProductDraft {
    pub fn new(
        title: impl Into<String>,
        image: impl Into<String>,
        price: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            image: image.into(),
            description: String::new(),
            price: price.into(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn field(&self, field: ProductField) -> &str {
        match field {
            ProductField::Title => &self.title,
            ProductField::Image => &self.image,
            ProductField::Description => &self.description,
            ProductField::Price => &self.price,
        }
    }

    /// Replace a single field (form input binding).
    pub fn set_field(&mut self, field: ProductField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ProductField::Title => self.title = value,
            ProductField::Image => self.image = value,
            ProductField::Description => self.description = value,
            ProductField::Price => self.price = value,
        }
    }

    /// Required fields left empty, in form order.
    pub fn missing_fields(&self) -> Vec<ProductField> {
        ProductField::ALL
            .into_iter()
            .filter(|f| f.is_required() && self.field(*f).is_empty())
            .collect()
    }

    /// Presence check only: a required field is present iff it is non-empty.
    pub fn validate(&self) -> DomainResult<()> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            return Ok(());
        }
        let names: Vec<&str> = missing.iter().map(ProductField::as_str).collect();
        Err(DomainError::validation(format!(
            "missing required fields: {}",
            names.join(", ")
        )))
    }

    /// Validate and attach an identifier.
    pub fn into_product(self, id: ProductId) -> DomainResult<Product> {
        self.validate()?;
        Ok(Product {
            id,
            title: self.title,
            image: self.image,
            description: self.description,
            price: self.price,
        })
    }
}

/// The fixed sample catalog used when no stored catalog exists.
pub fn sample_products() -> Vec<Product> {
    vec![
        Product::new(
            ProductId::new(1),
            "Nike Air Max - Grails",
            "https://i.pinimg.com/originals/de/84/78/de847819dc8c0dcfea42e1f14faa5775.gif",
            "In 1987, the Air Max 1 was born, igniting a love for Nike's iconic cushioning system.",
            "$29.99",
        ),
        Product::new(
            ProductId::new(2),
            "Nike — Lincoln Design Co.",
            "https://i.pinimg.com/564x/8f/73/78/8f73780edb4779dd02b553d9abc19277.jpg",
            "In reality, the Nike Swoosh was designed by graphic designer Carolyn.",
            "$59.99",
        ),
        Product::new(
            ProductId::new(3),
            "One Piece - Anime",
            "https://i.pinimg.com/736x/4e/67/4d/4e674d8daeb50f147d5234227d4c9054.jpg",
            "One Piece has received praise for its storytelling, world-building, art, characterization, and humour.",
            "$109.99",
        ),
    ]
}
