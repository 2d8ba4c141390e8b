pub mod cli;
pub mod config;
pub mod error;
pub mod fees;
pub mod log;
pub mod models;
pub mod post_onboarding;
pub mod utils;

pub use crate::error::{HubError, HubResult};
pub use crate::fees::{FeeView, Transaction, extract_fee_fields, to_display_amount};
pub use crate::models::{AccountLike, DeviceModelId};
pub use crate::post_onboarding::{Action, ActionId, get_action_by_id, get_actions_for_device};
