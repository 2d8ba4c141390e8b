//! Post onboarding hub: the tasks offered to a user after setting up a device.
//!
//! The catalog of [`Action`]s is built once and never mutated. Resolution is a plain
//! match on the [`DeviceModelId`](crate::models::DeviceModelId): devices without any
//! implemented actions, and devices the wallet does not know, resolve to an empty list.
//!
//! ```rust,ignore
//! use wallet_hub::models::DeviceModelId;
//! use wallet_hub::post_onboarding::get_actions_for_device;
//!
//! for action in get_actions_for_device(DeviceModelId::Stax, false) {
//!     println!("{}", action.title);
//! }
//! ```

mod action;
mod catalog;
mod registry;

pub use action::{
    Action, ActionContext, ActionId, DrawerOpener, DrawerOptions, DrawerRequest, DrawerTarget, Icon, StartAction,
};
pub use registry::{FeatureFlags, filter_enabled, get_action_by_id, get_action_by_name, get_actions_for_device};
