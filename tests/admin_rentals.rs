//! End-to-end flows of the rentals admin page against a scripted backend.

use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use carmarket_admin::controller::{
    Dialogs, Inquiry, ListController, MutationOutcome, StatusTab,
};
use carmarket_admin::models::RentalStatus;
use carmarket_admin::operations::{GetAllRentalsByAdmin, RemoveRentalByAdmin};
use carmarket_admin::render::{Assets, TableView, NO_DATA};
use carmarket_admin::transport::{FetchPolicy, GraphQlRequest, Transport};
use carmarket_admin::ClientError;

#[derive(Default)]
struct Backend {
    replies: Mutex<VecDeque<Value>>,
    sent: Mutex<Vec<GraphQlRequest>>,
}

impl Backend {
    fn push(&self, data: Value) {
        self.replies.lock().unwrap().push_back(data);
    }

    fn sent(&self, operation: &str) -> Vec<Value> {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .filter(|request| request.operation_name == operation)
            .map(|request| request.variables.clone())
            .collect()
    }
}

#[async_trait]
impl Transport for Backend {
    async fn send(
        &self,
        request: &GraphQlRequest,
        _policy: FetchPolicy,
    ) -> Result<Value, ClientError> {
        self.sent.lock().unwrap().push(request.clone());
        let reply = self.replies.lock().unwrap().pop_front();
        reply.ok_or_else(|| ClientError::MissingData(request.operation_name.to_string()))
    }
}

/// Answers every confirmation the same way and records messages
struct Scripted {
    confirm: bool,
    messages: Mutex<Vec<String>>,
}

impl Scripted {
    fn new(confirm: bool) -> Self {
        Self {
            confirm,
            messages: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl Dialogs for Scripted {
    async fn confirm(&self, message: &str) -> bool {
        self.messages.lock().unwrap().push(message.to_string());
        self.confirm
    }

    async fn error(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }

    async fn notify(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

fn rental(id: &str, status: &str) -> Value {
    json!({
        "_id": id,
        "rentalStatus": status,
        "propertyId": "p1",
        "renterId": "m1",
        "ownerId": "m2",
        "startDate": "2026-05-01T00:00:00Z",
        "endDate": "2026-05-03T00:00:00Z",
        "totalPrice": 240.0,
        "createdAt": "2026-04-28T12:00:00Z",
        "updatedAt": "2026-04-28T12:00:00Z",
        "propertyData": {
            "_id": "p1",
            "propertyTitle": "Kia Sportage",
            "propertyImages": ["uploads/property/sportage.png"]
        },
        "renterData": { "_id": "m1", "memberNick": "jun" },
        "ownerData": { "_id": "m2", "memberNick": null }
    })
}

fn page(count: usize, total: u64) -> Value {
    let list: Vec<Value> = (0..count)
        .map(|i| rental(&format!("r{i}"), "PENDING"))
        .collect();
    json!({ "getAllRentalsByAdmin": { "list": list, "metaCounter": [{ "total": total }] } })
}

fn controller(
    backend: &Arc<Backend>,
    dialogs: &Arc<Scripted>,
) -> ListController<GetAllRentalsByAdmin> {
    let transport: Arc<dyn Transport> = backend.clone();
    let dialogs: Arc<dyn Dialogs> = dialogs.clone();
    ListController::new(transport, dialogs, Inquiry::default())
}

#[tokio::test]
async fn first_page_then_rows_per_page() {
    let backend = Arc::new(Backend::default());
    let dialogs = Arc::new(Scripted::new(true));
    backend.push(page(10, 37));
    backend.push(page(20, 37));

    let rentals = controller(&backend, &dialogs);
    rentals.mount().await.unwrap();

    let snapshot = rentals.snapshot();
    let assets = Assets::new("http://localhost:3007");
    let table = TableView::from_snapshot(&snapshot, &assets).render();
    let rows = table.lines().filter(|line| line.starts_with('r')).count();
    assert_eq!(rows, 10);
    assert!(table.ends_with("page 1 | 10 rows per page | total 37"));
    assert!(table.contains("http://localhost:3007/uploads/property/sportage.png"));

    rentals.change_rows_per_page(20).await.unwrap();

    let sent = backend.sent("GetAllRentalsByAdmin");
    assert_eq!(sent.len(), 2);
    assert_eq!(
        sent[1],
        json!({ "input": {
            "page": 1, "limit": 20, "sort": "createdAt", "direction": "DESC", "search": {}
        }})
    );
    assert_eq!(rentals.snapshot().list.len(), 20);
    assert!(dialogs.messages.lock().unwrap().is_empty());
}

#[tokio::test]
async fn pending_tab_then_all_tab() {
    let backend = Arc::new(Backend::default());
    let dialogs = Arc::new(Scripted::new(true));
    backend.push(page(3, 3));
    backend.push(page(1, 1));
    backend.push(page(0, 0));

    let rentals = controller(&backend, &dialogs);
    rentals.mount().await.unwrap();

    rentals
        .change_status_tab("rentalStatus", StatusTab::Only(RentalStatus::Pending))
        .await
        .unwrap();
    let pending = &backend.sent("GetAllRentalsByAdmin")[1]["input"];
    assert_eq!(pending["search"], json!({ "rentalStatus": "PENDING" }));
    assert_eq!(pending["page"], json!(1));

    rentals
        .change_status_tab("rentalStatus", StatusTab::<RentalStatus>::All)
        .await
        .unwrap();
    let all = &backend.sent("GetAllRentalsByAdmin")[2]["input"];
    assert!(all["search"].as_object().unwrap().get("rentalStatus").is_none());

    // the last page came back empty
    let snapshot = rentals.snapshot();
    let assets = Assets::new("http://localhost:3007");
    assert!(TableView::from_snapshot(&snapshot, &assets)
        .render()
        .contains(NO_DATA));
}

#[tokio::test]
async fn declined_removal_sends_no_mutation() {
    let backend = Arc::new(Backend::default());
    let dialogs = Arc::new(Scripted::new(false));
    backend.push(page(2, 2));

    let rentals = controller(&backend, &dialogs);
    rentals.mount().await.unwrap();
    rentals.open_menu(1, "actions");

    let outcome = rentals
        .remove_record::<RemoveRentalByAdmin>("r1")
        .await
        .unwrap();

    assert!(matches!(outcome, MutationOutcome::Declined));
    assert!(backend.sent("RemoveRentalByAdmin").is_empty());
    assert_eq!(backend.sent("GetAllRentalsByAdmin").len(), 1);
    assert!(rentals.snapshot().open_menus.is_empty());
    assert_eq!(rentals.snapshot().list.len(), 2);
}

#[tokio::test]
async fn confirmed_removal_refetches_once() {
    let backend = Arc::new(Backend::default());
    let dialogs = Arc::new(Scripted::new(true));
    backend.push(page(2, 2));
    backend.push(json!({ "removeRentalByAdmin": rental("r0", "CANCELLED") }));
    backend.push(page(1, 1));

    let rentals = controller(&backend, &dialogs);
    rentals.mount().await.unwrap();

    let outcome = rentals
        .remove_record::<RemoveRentalByAdmin>("r0")
        .await
        .unwrap();

    match outcome {
        MutationOutcome::Applied(removed) => {
            assert_eq!(removed.rental_status, RentalStatus::Cancelled)
        }
        MutationOutcome::Declined => panic!("removal was confirmed"),
    }
    assert_eq!(backend.sent("RemoveRentalByAdmin"), vec![json!({ "input": "r0" })]);
    assert_eq!(backend.sent("GetAllRentalsByAdmin").len(), 2);
    assert_eq!(rentals.total(), 1);
}
