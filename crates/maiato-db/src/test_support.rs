//! Shared test utilities for maiato-db unit tests.

pub(crate) mod helpers {
    use std::sync::Arc;

    use maiato_core::entities::{Customer, NewCustomer};

    use crate::MaiatoDb;
    use crate::notify::RecordingNotifier;
    use crate::service::MaiatoService;

    /// Create an in-memory service whose notices are recorded.
    pub async fn test_service() -> (MaiatoService, Arc<RecordingNotifier>) {
        let db = MaiatoDb::open_local(":memory:").await.unwrap();
        let notifier = Arc::new(RecordingNotifier::new());
        let svc = MaiatoService::from_db(db)
            .with_user_id("usr-test")
            .with_notifier(notifier.clone());
        (svc, notifier)
    }

    /// Create a customer with only a name.
    pub async fn create_named(svc: &MaiatoService, name: &str) -> Customer {
        svc.create_customer(&NewCustomer::named(name)).await.unwrap()
    }
}
