//! Inventory item entities.
//!
//! An [`Item`] is a stored inventory record. Clients submit an [`ItemDraft`]
//! for both creation and update; the store assigns the identifier and the
//! service assigns `insert_date`.

use chrono::{DateTime, Utc};

use crate::domain::{DocumentId, EmailAddress};

/// Client-writable item fields.
///
/// `quantity` is deliberately unbounded: negative counts are accepted and
/// stored as supplied. `expiry_date` is kept as the raw string the client
/// sent; range filters compare it lexically, which is only meaningful for
/// zero-padded ISO-8601 dates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDraft {
    /// Submitter name.
    pub name: String,
    /// Submitter email.
    pub email: EmailAddress,
    /// Item label.
    pub item_name: String,
    /// Item count.
    pub quantity: i64,
    /// Expiry date as an ISO-8601 date string.
    pub expiry_date: String,
}

/// Item draft stamped with its creation time, ready for insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItem {
    /// Client-supplied fields.
    pub draft: ItemDraft,
    /// Server-assigned creation time.
    pub insert_date: DateTime<Utc>,
}

/// Stored inventory item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// Store-generated identifier.
    pub id: DocumentId,
    /// Submitter name.
    pub name: String,
    /// Submitter email.
    pub email: EmailAddress,
    /// Item label.
    pub item_name: String,
    /// Item count.
    pub quantity: i64,
    /// Expiry date as an ISO-8601 date string.
    pub expiry_date: String,
    /// Creation time; never changes after insert.
    pub insert_date: DateTime<Utc>,
}

/// Predicates for listing items; every present predicate must hold.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemFilter {
    /// Exact email match.
    pub email: Option<String>,
    /// Lexical lower bound (inclusive) on `expiry_date`.
    pub expiry_date_from: Option<String>,
    /// Lower bound (inclusive) on `insert_date`.
    pub inserted_from: Option<DateTime<Utc>>,
    /// Lower bound (inclusive) on `quantity`.
    pub min_quantity: Option<i64>,
}

impl ItemFilter {
    /// Evaluate the filter against an item the same way the store does.
    ///
    /// # Examples
    /// ```
    /// use backend::domain::ItemFilter;
    ///
    /// let filter = ItemFilter {
    ///     expiry_date_from: Some("2024-06-01".to_owned()),
    ///     ..ItemFilter::default()
    /// };
    /// assert_ne!(filter, ItemFilter::default());
    /// ```
    pub fn matches(&self, item: &Item) -> bool {
        self.email
            .as_deref()
            .is_none_or(|email| item.email.as_ref() == email)
            && self
                .expiry_date_from
                .as_deref()
                .is_none_or(|from| item.expiry_date.as_str() >= from)
            && self.inserted_from.is_none_or(|from| item.insert_date >= from)
            && self.min_quantity.is_none_or(|min| item.quantity >= min)
    }
}

/// Number of items submitted under one email address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailItemCount {
    /// Grouping key. Kept as a raw string because stored documents are not
    /// re-validated on read.
    pub email: String,
    /// Number of items carrying `email`.
    pub count: u64,
}

/// Maximum number of documents returned by list and aggregate operations.
pub const LIST_LIMIT: usize = 1000;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::{fixture, rstest};

    #[fixture]
    fn item() -> Item {
        Item {
            id: DocumentId::new("65a1f0c2e4b0a1b2c3d4e5f6").expect("valid id"),
            name: "Ada".to_owned(),
            email: EmailAddress::new("a@x.com").expect("valid email"),
            item_name: "Widget".to_owned(),
            quantity: 5,
            expiry_date: "2024-06-15".to_owned(),
            insert_date: Utc
                .with_ymd_and_hms(2024, 1, 10, 12, 0, 0)
                .single()
                .expect("valid timestamp"),
        }
    }

    #[rstest]
    fn empty_filter_matches_everything(item: Item) {
        assert!(ItemFilter::default().matches(&item));
    }

    #[rstest]
    #[case(ItemFilter { email: Some("a@x.com".to_owned()), ..ItemFilter::default() }, true)]
    #[case(ItemFilter { email: Some("b@x.com".to_owned()), ..ItemFilter::default() }, false)]
    #[case(ItemFilter { expiry_date_from: Some("2024-06-15".to_owned()), ..ItemFilter::default() }, true)]
    #[case(ItemFilter { expiry_date_from: Some("2024-07-01".to_owned()), ..ItemFilter::default() }, false)]
    #[case(ItemFilter { min_quantity: Some(5), ..ItemFilter::default() }, true)]
    #[case(ItemFilter { min_quantity: Some(6), ..ItemFilter::default() }, false)]
    fn predicates_apply(item: Item, #[case] filter: ItemFilter, #[case] expected: bool) {
        assert_eq!(filter.matches(&item), expected);
    }

    #[rstest]
    fn inserted_from_is_inclusive(item: Item) {
        let filter = ItemFilter {
            inserted_from: Some(item.insert_date),
            ..ItemFilter::default()
        };
        assert!(filter.matches(&item));
    }
}
