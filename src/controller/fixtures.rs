//! Shared helpers for controller tests.

use serde_json::{json, Value};
use std::sync::Arc;

use super::{Dialogs, Inquiry, ListController};
use crate::operations::GetAllRentalsByAdmin;
use crate::transport::fake::FakeTransport;
use crate::transport::Transport;

pub(crate) fn rental_json(id: &str) -> Value {
    json!({
        "_id": id,
        "rentalStatus": "PENDING",
        "propertyId": "p1",
        "renterId": "m1",
        "ownerId": "m2",
        "startDate": "2026-03-01T00:00:00Z",
        "endDate": "2026-03-04T00:00:00Z",
        "totalPrice": 315.0,
        "createdAt": "2026-02-20T09:00:00Z",
        "updatedAt": "2026-02-20T09:00:00Z",
        "propertyData": { "_id": "p1", "propertyTitle": "Hyundai Sonata", "propertyImages": [] },
        "renterData": { "_id": "m1", "memberNick": "renter" },
        "ownerData": null
    })
}

/// `getAllRentalsByAdmin` data object for the given ids
pub(crate) fn rentals_page(ids: &[&str], total: u64) -> Value {
    let list: Vec<Value> = ids.iter().map(|id| rental_json(id)).collect();
    json!({
        "getAllRentalsByAdmin": { "list": list, "metaCounter": [{ "total": total }] }
    })
}

pub(crate) fn rentals_controller(
    fake: &Arc<FakeTransport>,
    dialogs: impl Dialogs + 'static,
) -> ListController<GetAllRentalsByAdmin> {
    let transport: Arc<dyn Transport> = fake.clone();
    ListController::new(transport, Arc::new(dialogs), Inquiry::default())
}

pub(crate) fn ids(controller: &ListController<GetAllRentalsByAdmin>) -> Vec<String> {
    controller
        .snapshot()
        .list
        .into_iter()
        .map(|rental| rental.id)
        .collect()
}

pub(crate) async fn wait_for_requests(fake: &FakeTransport, count: usize) {
    while fake.requests().len() < count {
        tokio::task::yield_now().await;
    }
}
