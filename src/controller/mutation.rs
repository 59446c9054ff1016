use tracing::{info, warn};

use super::list::ListController;
use crate::error::ClientError;
use crate::operations::{Input, ListQuery, Operation};
use crate::transport::{execute, FetchPolicy};

pub const REMOVE_CONFIRMATION: &str = "Are you sure to remove?";

#[derive(Debug, Clone, PartialEq)]
pub enum MutationOutcome<T> {
    Applied(T),
    /// The user declined the confirmation; nothing was sent
    Declined,
}

impl<Q: ListQuery> ListController<Q> {
    /// Send a state-changing mutation, then refetch the list.
    ///
    /// Nothing is patched locally: on success the owning query runs once more,
    /// on failure the user sees an error dialog and the list is left as is.
    /// Open row menus are closed either way.
    pub async fn update_record<M: Operation>(
        &self,
        variables: M::Variables,
    ) -> Result<M::Output, ClientError> {
        let result = execute::<M>(
            self.transport.as_ref(),
            &variables,
            FetchPolicy::NetworkOnly,
        )
        .await;
        self.close_menus();

        match result {
            Ok(output) => {
                info!("{} succeeded, refreshing {}", M::NAME, Q::NAME);
                if let Err(e) = self.fetch().await {
                    warn!("refresh after {} failed: {e}", M::NAME);
                }
                Ok(output)
            }
            Err(e) => {
                warn!("{} failed: {e}", M::NAME);
                self.dialogs.error(&e.user_message()).await;
                Err(e)
            }
        }
    }

    /// Remove a record after explicit confirmation
    pub async fn remove_record<M>(
        &self,
        id: &str,
    ) -> Result<MutationOutcome<M::Output>, ClientError>
    where
        M: Operation<Variables = Input<String>>,
    {
        if !self.dialogs.confirm(REMOVE_CONFIRMATION).await {
            self.close_menus();
            return Ok(MutationOutcome::Declined);
        }

        self.update_record::<M>(Input::new(id.to_string()))
            .await
            .map(MutationOutcome::Applied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::dialogs::MockDialogs;
    use crate::controller::fixtures::{ids, rental_json, rentals_controller, rentals_page};
    use crate::models::{RentalStatus, RentalUpdate};
    use crate::operations::{RemoveRentalByAdmin, UpdateRentalByAdmin};
    use crate::transport::fake::FakeTransport;
    use crate::transport::GraphQlError;
    use serde_json::json;
    use std::sync::Arc;

    const LIST: &str = "GetAllRentalsByAdmin";
    const REMOVE: &str = "RemoveRentalByAdmin";

    fn confirming(answer: bool) -> MockDialogs {
        let mut dialogs = MockDialogs::new();
        dialogs
            .expect_confirm()
            .withf(|message| message.contains("remove"))
            .times(1)
            .returning(move |_| answer);
        dialogs
    }

    #[tokio::test]
    async fn successful_remove_refetches_once() {
        let fake = Arc::new(FakeTransport::new());
        fake.reply(Ok(rentals_page(&["r1", "r2"], 2)));
        fake.reply(Ok(json!({ "removeRentalByAdmin": rental_json("r1") })));
        fake.reply(Ok(rentals_page(&["r2"], 1)));

        let controller = rentals_controller(&fake, confirming(true));
        controller.mount().await.unwrap();
        controller.open_menu(0, "remove");

        let outcome = controller
            .remove_record::<RemoveRentalByAdmin>("r1")
            .await
            .unwrap();

        assert!(matches!(outcome, MutationOutcome::Applied(rental) if rental.id == "r1"));
        assert_eq!(fake.count(REMOVE), 1);
        assert_eq!(fake.count(LIST), 2);
        assert_eq!(ids(&controller), vec!["r2"]);
        assert!(controller.snapshot().open_menus.is_empty());
        assert_eq!(fake.requests()[1].variables, json!({ "input": "r1" }));
    }

    #[tokio::test]
    async fn failed_remove_leaves_list_untouched() {
        let fake = Arc::new(FakeTransport::new());
        fake.reply(Ok(rentals_page(&["r1", "r2"], 2)));
        fake.reply(Err(ClientError::GraphQl {
            status: 200,
            errors: vec![GraphQlError {
                message: "Rental is already finished".into(),
                path: vec![json!("removeRentalByAdmin")],
                locations: vec![],
                extensions: None,
            }],
        }));

        let mut dialogs = confirming(true);
        dialogs
            .expect_error()
            .withf(|message| message.trim() == "Rental is already finished")
            .times(1)
            .returning(|_| ());

        let controller = rentals_controller(&fake, dialogs);
        controller.mount().await.unwrap();
        controller.open_menu(1, "remove");

        let err = controller
            .remove_record::<RemoveRentalByAdmin>("r1")
            .await
            .unwrap_err();

        assert!(matches!(err, ClientError::GraphQl { .. }));
        assert_eq!(fake.count(LIST), 1);
        assert_eq!(ids(&controller), vec!["r1", "r2"]);
        assert!(controller.snapshot().open_menus.is_empty());
    }

    #[tokio::test]
    async fn declined_remove_sends_nothing() {
        let fake = Arc::new(FakeTransport::new());
        fake.reply(Ok(rentals_page(&["r1"], 1)));

        let controller = rentals_controller(&fake, confirming(false));
        controller.mount().await.unwrap();
        controller.open_menu(0, "remove");

        let outcome = controller
            .remove_record::<RemoveRentalByAdmin>("r1")
            .await
            .unwrap();

        assert_eq!(outcome, MutationOutcome::Declined);
        assert_eq!(fake.count(REMOVE), 0);
        assert_eq!(fake.count(LIST), 1);
        assert!(controller.snapshot().open_menus.is_empty());
    }

    #[tokio::test]
    async fn status_update_refetches_without_confirmation() {
        let fake = Arc::new(FakeTransport::new());
        fake.reply(Ok(rentals_page(&["r1"], 1)));
        let mut updated = rental_json("r1");
        updated["rentalStatus"] = json!("CONFIRMED");
        fake.reply(Ok(json!({ "updateRentalByAdmin": updated.clone() })));
        fake.reply(Ok(json!({
            "getAllRentalsByAdmin": { "list": [updated], "metaCounter": [{ "total": 1 }] }
        })));

        // no confirmation expected for updates
        let controller = rentals_controller(&fake, MockDialogs::new());
        controller.mount().await.unwrap();
        controller.open_menu(0, "status");

        let rental = controller
            .update_record::<UpdateRentalByAdmin>(Input::new(RentalUpdate {
                id: "r1".into(),
                rental_status: Some(RentalStatus::Confirmed),
            }))
            .await
            .unwrap();

        assert_eq!(rental.rental_status, RentalStatus::Confirmed);
        assert_eq!(fake.count(LIST), 2);
        assert_eq!(
            controller.snapshot().list[0].rental_status,
            RentalStatus::Confirmed
        );
        assert!(controller.snapshot().open_menus.is_empty());
    }

    #[tokio::test]
    async fn update_with_null_result_shows_error_without_refetch() {
        let fake = Arc::new(FakeTransport::new());
        fake.reply(Ok(rentals_page(&["r1"], 1)));
        fake.reply(Ok(json!({ "updateRentalByAdmin": null })));

        let mut dialogs = MockDialogs::new();
        dialogs
            .expect_error()
            .withf(|message| message.trim() == "Something went wrong!")
            .times(1)
            .returning(|_| ());

        let controller = rentals_controller(&fake, dialogs);
        controller.mount().await.unwrap();
        controller.open_menu(0, "status");

        let err = controller
            .update_record::<UpdateRentalByAdmin>(Input::new(RentalUpdate {
                id: "r1".into(),
                rental_status: Some(RentalStatus::Cancelled),
            }))
            .await
            .unwrap_err();

        assert!(matches!(err, ClientError::MissingData(_)));
        assert_eq!(fake.count(LIST), 1);
        assert_eq!(ids(&controller), vec!["r1"]);
        assert!(controller.snapshot().open_menus.is_empty());
    }
}
