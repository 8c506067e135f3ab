//! The session facade a presentation layer drives.

use storefront_core::{DomainError, ProductId};
use storefront_events::NotificationSink;
use storefront_infra::KeyValueStore;
use storefront_products::{Clock, Product, ProductDraft, ProductField, SystemClock};

use crate::cart::Cart;
use crate::catalog::ProductCatalog;
use crate::config::StorefrontConfig;
use crate::error::StorefrontResult;

pub const LABEL_ADD_TO_CART: &str = "Add to Cart";
pub const LABEL_IN_CART: &str = "Added";
pub const MSG_UNKNOWN_PRODUCT: &str = "That product is no longer available.";

/// Result of an accepted add-product action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddProductOutcome {
    pub product: Product,
    /// The add-product input surface should be closed.
    pub close_form: bool,
}

/// One running session: the catalog, the cart, and the add-product form.
///
/// Both containers are owned here and only change through the methods below;
/// callers get read-only slices. Handlers run one at a time (`&mut self`).
#[derive(Debug)]
pub struct Storefront<S, N, C = SystemClock> {
    catalog: ProductCatalog,
    cart: Cart,
    form: ProductDraft,
    store: S,
    notifier: N,
    clock: C,
}

impl<S, N> Storefront<S, N, SystemClock>
where
    S: KeyValueStore,
    N: NotificationSink,
{
    /// Load both containers from `store` using the wall clock for new ids.
    pub fn open(config: &StorefrontConfig, store: S, notifier: N) -> StorefrontResult<Self> {
        Self::open_with_clock(config, store, notifier, SystemClock)
    }
}

impl<S, N, C> Storefront<S, N, C>
where
    S: KeyValueStore,
    N: NotificationSink,
    C: Clock,
{
    pub fn open_with_clock(
        config: &StorefrontConfig,
        store: S,
        notifier: N,
        clock: C,
    ) -> StorefrontResult<Self> {
        config.validate()?;
        let catalog = ProductCatalog::initialize(&store, &config.products_key, config.on_corrupt)?;
        let cart = Cart::initialize(&store, &config.cart_key, config.on_corrupt)?;
        Ok(Self {
            catalog,
            cart,
            form: ProductDraft::default(),
            store,
            notifier,
            clock,
        })
    }

    /// getProducts
    pub fn products(&self) -> &[Product] {
        self.catalog.products()
    }

    /// getCart
    pub fn cart(&self) -> &[Product] {
        self.cart.items()
    }

    pub fn add_product(&mut self, draft: ProductDraft) -> StorefrontResult<AddProductOutcome> {
        let product = self
            .catalog
            .add_product(draft, &self.clock, &self.store, &self.notifier)?;
        Ok(AddProductOutcome {
            product,
            close_form: true,
        })
    }

    pub fn add_to_cart(&mut self, product: &Product) -> StorefrontResult<()> {
        self.cart
            .add(product.clone(), &self.store, &self.notifier)
    }

    /// Add the catalog product with `id`; `NotFound` if the catalog lacks it.
    pub fn add_to_cart_by_id(&mut self, id: ProductId) -> StorefrontResult<()> {
        let Some(product) = self.catalog.get(id).cloned() else {
            tracing::warn!(product_id = %id, "cart add for unknown product rejected");
            self.notifier.error(MSG_UNKNOWN_PRODUCT);
            return Err(DomainError::not_found(id).into());
        };
        self.cart.add(product, &self.store, &self.notifier)
    }

    pub fn remove_from_cart(&mut self, id: ProductId) -> StorefrontResult<usize> {
        self.cart.remove(id, &self.store, &self.notifier)
    }

    pub fn is_in_cart(&self, id: ProductId) -> bool {
        self.cart.contains(id)
    }

    /// Text of the add-to-cart control for `id`; it is disabled once "Added".
    pub fn cart_button_label(&self, id: ProductId) -> &'static str {
        if self.is_in_cart(id) {
            LABEL_IN_CART
        } else {
            LABEL_ADD_TO_CART
        }
    }

    pub fn cart_count(&self) -> usize {
        self.cart.len()
    }

    pub fn form(&self) -> &ProductDraft {
        &self.form
    }

    pub fn set_form_field(&mut self, field: ProductField, value: impl Into<String>) {
        self.form.set_field(field, value);
    }

    /// Submit the bound form. Cleared on success, kept as typed on rejection.
    pub fn submit_form(&mut self) -> StorefrontResult<AddProductOutcome> {
        let outcome = self.add_product(self.form.clone())?;
        self.form = ProductDraft::default();
        Ok(outcome)
    }
}
