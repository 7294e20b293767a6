use std::sync::Arc;

use crate::store::DataStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<DataStore>,
}
