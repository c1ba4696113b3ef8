use std::sync::Arc;

use crate::config::Config;
use crate::email::Mailer;
use crate::generation::Generator;
use crate::store::{ResponseStore, SurveyStore};

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub config: Config,
    pub surveys: Arc<dyn SurveyStore>,
    pub responses: Arc<dyn ResponseStore>,
    pub generator: Arc<dyn Generator>,
    pub mailer: Option<Arc<dyn Mailer>>,
}
