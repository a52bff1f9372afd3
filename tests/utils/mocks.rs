use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use uuid::Uuid;

use otaku_sphere::{
    AppResult, BrowseQuery, CatalogEntry, CatalogRepository, Notifier, RemoteError, Severity,
    WatchCategory, WatchlistRemote,
};

mockall::mock! {
    pub Remote {}

    #[async_trait::async_trait]
    impl WatchlistRemote for Remote {
        async fn update_status(
            &self,
            anime_id: Uuid,
            from: WatchCategory,
            to: WatchCategory,
        ) -> Result<(), RemoteError>;
    }
}

mockall::mock! {
    pub Catalog {}

    #[async_trait::async_trait]
    impl CatalogRepository for Catalog {
        async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<CatalogEntry>>;
        async fn find_by_name(&self, name: &str) -> AppResult<Option<CatalogEntry>>;
        async fn browse(&self, query: &BrowseQuery) -> AppResult<Vec<CatalogEntry>>;
        async fn save(&self, entry: &CatalogEntry) -> AppResult<CatalogEntry>;
        async fn update(&self, entry: &CatalogEntry) -> AppResult<CatalogEntry>;
    }
}

/// Notification double that records every toast and sign-in prompt.
#[derive(Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<(String, Severity)>>,
    sign_in_prompts: AtomicUsize,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<(String, Severity)> {
        self.messages.lock().unwrap().clone()
    }

    pub fn sign_in_prompts(&self) -> usize {
        self.sign_in_prompts.load(Ordering::SeqCst)
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str, severity: Severity) {
        self.messages
            .lock()
            .unwrap()
            .push((message.to_string(), severity));
    }

    fn prompt_sign_in(&self) {
        self.sign_in_prompts.fetch_add(1, Ordering::SeqCst);
    }
}
