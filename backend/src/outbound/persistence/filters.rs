//! Query, update, and pipeline documents sent to the store.
//!
//! Kept free of I/O so the exact shapes can be asserted in unit tests.

use mongodb::bson::{Document, doc};

use crate::domain::{ClockInDraft, ClockInFilter, ItemDraft, ItemFilter};

use super::documents::to_bson_datetime;

/// Conjunction of the item filter predicates; empty when none are set.
pub(crate) fn item_filter(filter: &ItemFilter) -> Document {
    let mut query = Document::new();
    if let Some(email) = &filter.email {
        query.insert("email", email.as_str());
    }
    if let Some(from) = &filter.expiry_date_from {
        query.insert("expiry_date", doc! { "$gte": from.as_str() });
    }
    if let Some(from) = filter.inserted_from {
        query.insert("insert_date", doc! { "$gte": to_bson_datetime(from) });
    }
    if let Some(min) = filter.min_quantity {
        query.insert("quantity", doc! { "$gte": min });
    }
    query
}

/// Conjunction of the clock-in filter predicates; empty when none are set.
pub(crate) fn clock_in_filter(filter: &ClockInFilter) -> Document {
    let mut query = Document::new();
    if let Some(email) = &filter.email {
        query.insert("email", email.as_str());
    }
    if let Some(location) = &filter.location {
        query.insert("location", location.as_str());
    }
    if let Some(from) = filter.inserted_from {
        query.insert("insert_datetime", doc! { "$gte": to_bson_datetime(from) });
    }
    query
}

/// `$set` of the client-writable item fields; `insert_date` is never touched.
pub(crate) fn item_update(draft: &ItemDraft) -> Document {
    doc! {
        "$set": {
            "name": draft.name.as_str(),
            "email": draft.email.to_string(),
            "item_name": draft.item_name.as_str(),
            "quantity": draft.quantity,
            "expiry_date": draft.expiry_date.as_str(),
        }
    }
}

/// `$set` of the client-writable clock-in fields.
pub(crate) fn clock_in_update(draft: &ClockInDraft) -> Document {
    doc! {
        "$set": {
            "email": draft.email.to_string(),
            "location": draft.location.as_str(),
        }
    }
}

/// Group items by email and count them, ordered by email.
pub(crate) fn count_by_email_pipeline(limit: usize) -> Vec<Document> {
    let limit = i64::try_from(limit).unwrap_or(i64::MAX);
    vec![
        doc! { "$group": { "_id": "$email", "count": { "$sum": 1 } } },
        doc! { "$sort": { "_id": 1 } },
        doc! { "$limit": limit },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::EmailAddress;
    use crate::test_support::fixture_timestamp;
    use rstest::rstest;

    #[rstest]
    fn empty_filters_select_everything() {
        assert!(item_filter(&ItemFilter::default()).is_empty());
        assert!(clock_in_filter(&ClockInFilter::default()).is_empty());
    }

    #[rstest]
    fn item_filter_combines_every_predicate() {
        let filter = ItemFilter {
            email: Some("a@x.com".to_owned()),
            expiry_date_from: Some("2024-06-01".to_owned()),
            inserted_from: Some(fixture_timestamp()),
            min_quantity: Some(5),
        };
        assert_eq!(
            item_filter(&filter),
            doc! {
                "email": "a@x.com",
                "expiry_date": { "$gte": "2024-06-01" },
                "insert_date": { "$gte": to_bson_datetime(fixture_timestamp()) },
                "quantity": { "$gte": 5_i64 },
            }
        );
    }

    #[rstest]
    fn clock_in_filter_matches_location_exactly() {
        let filter = ClockInFilter {
            location: Some("Leeds".to_owned()),
            ..ClockInFilter::default()
        };
        assert_eq!(clock_in_filter(&filter), doc! { "location": "Leeds" });
    }

    #[rstest]
    fn item_update_sets_only_client_fields() {
        let draft = ItemDraft {
            name: "Ada".to_owned(),
            email: EmailAddress::new("a@x.com").expect("valid email"),
            item_name: "Widget".to_owned(),
            quantity: 0,
            expiry_date: "2024-06-15".to_owned(),
        };
        let update = item_update(&draft);
        let set = update.get_document("$set").expect("$set");
        assert_eq!(set.len(), 5);
        assert!(!set.contains_key("insert_date"));
        assert!(!set.contains_key("_id"));
    }

    #[rstest]
    fn pipeline_groups_then_limits() {
        let pipeline = count_by_email_pipeline(1000);
        assert_eq!(pipeline.len(), 3);
        assert_eq!(pipeline[2], doc! { "$limit": 1000_i64 });
    }
}
