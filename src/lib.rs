pub mod cli;
pub mod config;
pub mod error;
pub mod git;
pub mod hooks;
pub mod logging;
pub mod models;
pub mod recorder;
pub mod store;

pub use cli::{Cli, Command};
pub use config::TrkConfig;
pub use error::{Result, TrkError};
pub use git::{is_valid_ref_name, resolve_branch};
pub use hooks::{handle_post_checkout, CheckoutOutcome, PostCheckoutInput};
pub use logging::{LogEntry, OpLog};
pub use models::VisitEvent;
pub use recorder::{BranchVisitRecorder, JsonRecorder, MemoryRecorder};
pub use store::{VisitLog, STORE_FILE_NAME};
