use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::HubError;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum ActionId {
    ClaimMock,
    MigrateAssetsMock,
    PersonalizeMock,
    CustomImage,
    AssetsTransfer,
    BuyCrypto,
}

impl ActionId {
    pub const ALL: [ActionId; 6] = [
        Self::ClaimMock,
        Self::MigrateAssetsMock,
        Self::PersonalizeMock,
        Self::CustomImage,
        Self::AssetsTransfer,
        Self::BuyCrypto,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ClaimMock => "claimMock",
            Self::MigrateAssetsMock => "migrateAssetsMock",
            Self::PersonalizeMock => "personalizeMock",
            Self::CustomImage => "customImage",
            Self::AssetsTransfer => "assetsTransfer",
            Self::BuyCrypto => "buyCrypto",
        }
    }
}

impl std::fmt::Display for ActionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ActionId {
    type Err = HubError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| HubError::UnknownActionId(s.to_string()))
    }
}

/// Icon reference resolved by the rendering layer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Icon {
    Gift,
    PictureImage,
    ArrowDown,
    Plus,
}

/// Surface a drawer can be opened on, together with the props it receives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "target", rename_all = "camelCase")]
pub enum DrawerTarget {
    PostOnboardingMockAction {
        id: ActionId,
    },
    #[serde(rename_all = "camelCase")]
    CustomImage {
        is_from_post_onboarding_entry_point: bool,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawerOptions {
    pub force_disable_focus_trap: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DrawerRequest {
    #[serde(flatten)]
    pub target: DrawerTarget,
    pub options: DrawerOptions,
}

/// Opens drawers on behalf of an action. Implemented by the UI layer.
pub trait DrawerOpener {
    fn set_drawer(&self, request: DrawerRequest);
}

/// Callbacks handed to [`Action::start`] by the caller. Not retained after the call.
pub struct ActionContext<'a> {
    pub open_modal_callback: &'a dyn Fn(&str),
    pub navigation_callback: &'a dyn Fn(&str),
    pub drawer: &'a dyn DrawerOpener,
}

pub type StartAction = fn(&ActionContext<'_>);

/// A post onboarding task offered to the user once their device is set up.
///
/// String fields are either literal text or translation keys; they are passed through
/// untouched.
#[derive(Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Action {
    pub id: ActionId,
    pub icon: Icon,
    pub title: String,
    pub title_completed: String,
    pub description: String,
    pub action_completed_popup_label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_label_for_analytics_event: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feature_flag_id: Option<String>,
    #[serde(skip)]
    pub start_action: StartAction,
}

impl Action {
    pub fn start(&self, ctx: &ActionContext<'_>) {
        (self.start_action)(ctx)
    }
}

impl std::fmt::Debug for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Action")
            .field("id", &self.id)
            .field("icon", &self.icon)
            .field("title", &self.title)
            .field("feature_flag_id", &self.feature_flag_id)
            .finish_non_exhaustive()
    }
}
