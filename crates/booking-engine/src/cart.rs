//! In-memory cart of booking candidates awaiting checkout.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::{Professional, Service};
use crate::time::TimeOfDay;

/// One chosen slot, ready to be ordered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub id: Uuid,
    pub service: Service,
    /// `None` means no preference.
    pub professional: Option<Professional>,
    pub date: NaiveDate,
    pub time: TimeOfDay,
    pub location_name: String,
    pub price: f64,
}

impl CartItem {
    /// A new item with a fresh id, priced at the service's price.
    pub fn new(
        service: Service,
        professional: Option<Professional>,
        date: NaiveDate,
        time: TimeOfDay,
        location_name: impl Into<String>,
    ) -> Self {
        let price = service.price;
        Self {
            id: Uuid::new_v4(),
            service,
            professional,
            date,
            time,
            location_name: location_name.into(),
            price,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, item: CartItem) {
        self.items.push(item);
    }

    /// Remove the item with `id`, returning it if it was present.
    pub fn remove(&mut self, id: Uuid) -> Option<CartItem> {
        let index = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(index))
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn total(&self) -> f64 {
        self.items.iter().map(|item| item.price).sum()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
