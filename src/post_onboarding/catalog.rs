use std::collections::HashMap;
use std::sync::LazyLock;

use super::action::{Action, ActionContext, ActionId, DrawerOptions, DrawerRequest, DrawerTarget, Icon};
use crate::models::DeviceModelId;

fn open_mock_drawer(ctx: &ActionContext<'_>, id: ActionId) {
    ctx.drawer.set_drawer(DrawerRequest {
        target: DrawerTarget::PostOnboardingMockAction { id },
        options: DrawerOptions::default(),
    });
}

fn claim_mock() -> Action {
    Action {
        id: ActionId::ClaimMock,
        icon: Icon::Gift,
        title: "Claim my NFT".to_string(),
        title_completed: "Claim my NFT".to_string(),
        description: "A special NFT for you.".to_string(),
        action_completed_popup_label: "NFT claimed".to_string(),
        tag_label: Some("Free".to_string()),
        button_label_for_analytics_event: None,
        feature_flag_id: None,
        start_action: |ctx| open_mock_drawer(ctx, ActionId::ClaimMock),
    }
}

fn personalize_mock() -> Action {
    let title = format!("Personalize my {}", DeviceModelId::Stax.product_name().unwrap_or_default());
    Action {
        id: ActionId::PersonalizeMock,
        icon: Icon::PictureImage,
        title: title.clone(),
        title_completed: title,
        description: "By customizing the screen.".to_string(),
        action_completed_popup_label: "Device personalized".to_string(),
        tag_label: None,
        button_label_for_analytics_event: None,
        feature_flag_id: None,
        start_action: |ctx| open_mock_drawer(ctx, ActionId::PersonalizeMock),
    }
}

fn migrate_assets_mock() -> Action {
    Action {
        id: ActionId::MigrateAssetsMock,
        icon: Icon::ArrowDown,
        title: "Transfer assets to my Ledger".to_string(),
        title_completed: "Transfer assets to my Ledger".to_string(),
        description: "Easily secure assets from coinbase or another exchange.".to_string(),
        action_completed_popup_label: "Assets transfered".to_string(),
        tag_label: None,
        button_label_for_analytics_event: None,
        feature_flag_id: None,
        start_action: |ctx| open_mock_drawer(ctx, ActionId::MigrateAssetsMock),
    }
}

fn custom_image() -> Action {
    Action {
        id: ActionId::CustomImage,
        icon: Icon::PictureImage,
        title: "customImage.postOnboarding.title".to_string(),
        title_completed: "customImage.postOnboarding.title".to_string(),
        description: "customImage.postOnboarding.description".to_string(),
        action_completed_popup_label: "customImage.postOnboarding.actionCompletedPopupLabel".to_string(),
        tag_label: None,
        button_label_for_analytics_event: Some("Set lock screen picture".to_string()),
        feature_flag_id: None,
        start_action: |ctx| {
            ctx.drawer.set_drawer(DrawerRequest {
                target: DrawerTarget::CustomImage {
                    is_from_post_onboarding_entry_point: true,
                },
                options: DrawerOptions {
                    force_disable_focus_trap: true,
                },
            })
        },
    }
}

fn assets_transfer() -> Action {
    Action {
        id: ActionId::AssetsTransfer,
        icon: Icon::ArrowDown,
        title: "postOnboarding.actions.assetsTransfer.title".to_string(),
        title_completed: "postOnboarding.actions.assetsTransfer.titleCompleted".to_string(),
        description: "postOnboarding.actions.assetsTransfer.description".to_string(),
        action_completed_popup_label: "postOnboarding.actions.assetsTransfer.popupLabel".to_string(),
        tag_label: None,
        button_label_for_analytics_event: Some("Secure your assets on Ledger".to_string()),
        feature_flag_id: Some("postOnboardingAssetsTransfer".to_string()),
        start_action: |ctx| (ctx.open_modal_callback)("MODAL_RECEIVE"),
    }
}

fn buy_crypto() -> Action {
    Action {
        id: ActionId::BuyCrypto,
        icon: Icon::Plus,
        title: "postOnboarding.actions.buyCrypto.title".to_string(),
        title_completed: "postOnboarding.actions.buyCrypto.titleCompleted".to_string(),
        description: "postOnboarding.actions.buyCrypto.description".to_string(),
        action_completed_popup_label: "postOnboarding.actions.buyCrypto.popupLabel".to_string(),
        tag_label: None,
        button_label_for_analytics_event: Some("Buy Crypto".to_string()),
        feature_flag_id: None,
        start_action: |ctx| (ctx.navigation_callback)("/exchange"),
    }
}

/// Every implemented post onboarding action, keyed by id.
pub(super) static CATALOG: LazyLock<HashMap<ActionId, Action>> = LazyLock::new(|| {
    [
        claim_mock(),
        migrate_assets_mock(),
        personalize_mock(),
        custom_image(),
        assets_transfer(),
        buy_crypto(),
    ]
    .into_iter()
    .map(|action| (action.id, action))
    .collect()
});
