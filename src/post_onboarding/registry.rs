use std::collections::HashMap;

use log::debug;
use serde::{Deserialize, Serialize};

use super::action::{Action, ActionId};
use super::catalog::CATALOG;
use crate::models::DeviceModelId;

/// Demo sequence shown on a Stax when mock actions are enabled.
const STAX_MOCK_ACTIONS: [ActionId; 3] = [ActionId::ClaimMock, ActionId::PersonalizeMock, ActionId::MigrateAssetsMock];

/// Stax journey: personalisation, then securing assets, then buying.
const STAX_ACTIONS: [ActionId; 3] = [ActionId::CustomImage, ActionId::AssetsTransfer, ActionId::BuyCrypto];

pub fn get_action_by_id(id: ActionId) -> Option<&'static Action> {
    CATALOG.get(&id)
}

/// Looks an action up by its string id. Unknown ids yield `None`.
pub fn get_action_by_name(name: &str) -> Option<&'static Action> {
    name.parse::<ActionId>().ok().and_then(get_action_by_id)
}

fn resolve(ids: &[ActionId]) -> Vec<&'static Action> {
    ids.iter().filter_map(|id| get_action_by_id(*id)).collect()
}

/// Returns the post onboarding actions for a device, in display order.
///
/// Devices without any implemented actions get an empty list.
pub fn get_actions_for_device(device_model_id: DeviceModelId, mock: bool) -> Vec<&'static Action> {
    let actions = match device_model_id {
        DeviceModelId::NanoS => Vec::new(),
        DeviceModelId::NanoSP => Vec::new(),
        DeviceModelId::NanoX => Vec::new(),
        DeviceModelId::Stax if mock => resolve(&STAX_MOCK_ACTIONS),
        DeviceModelId::Stax => resolve(&STAX_ACTIONS),
        DeviceModelId::Blue | DeviceModelId::Unknown => Vec::new(),
    };

    debug!(
        device = device_model_id.as_str(),
        mock = mock,
        count = actions.len();
        "Resolved post onboarding actions"
    );

    actions
}

/// Feature flag states keyed by flag id. Flags that are not listed are disabled.
///
/// Ids are matched case-insensitively, since configuration sources may lowercase keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "HashMap<String, bool>", into = "HashMap<String, bool>")]
pub struct FeatureFlags(HashMap<String, bool>);

impl FeatureFlags {
    pub fn new(flags: HashMap<String, bool>) -> Self {
        flags.into_iter().collect()
    }

    pub fn is_enabled(&self, flag_id: &str) -> bool {
        self.0.get(&flag_id.to_lowercase()).copied().unwrap_or(false)
    }
}

impl FromIterator<(String, bool)> for FeatureFlags {
    fn from_iter<I: IntoIterator<Item = (String, bool)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(id, enabled)| (id.to_lowercase(), enabled)).collect())
    }
}

impl From<HashMap<String, bool>> for FeatureFlags {
    fn from(flags: HashMap<String, bool>) -> Self {
        Self::new(flags)
    }
}

impl From<FeatureFlags> for HashMap<String, bool> {
    fn from(flags: FeatureFlags) -> Self {
        flags.0
    }
}

/// Drops actions gated behind a disabled feature flag, keeping order.
pub fn filter_enabled<'a>(actions: &[&'a Action], flags: &FeatureFlags) -> Vec<&'a Action> {
    actions
        .iter()
        .copied()
        .filter(|action| match &action.feature_flag_id {
            Some(flag_id) => flags.is_enabled(flag_id),
            None => true,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::post_onboarding::{ActionContext, DrawerOpener, DrawerRequest, DrawerTarget};

    fn ids(actions: &[&Action]) -> Vec<ActionId> {
        actions.iter().map(|a| a.id).collect()
    }

    #[derive(Default)]
    struct RecordingDrawer {
        requests: RefCell<Vec<DrawerRequest>>,
    }

    impl DrawerOpener for RecordingDrawer {
        fn set_drawer(&self, request: DrawerRequest) {
            self.requests.borrow_mut().push(request);
        }
    }

    #[test]
    fn every_catalog_id_resolves_to_itself() {
        for id in ActionId::ALL {
            let action = get_action_by_id(id).expect("action should be in the catalog");
            assert_eq!(action.id, id);
        }
    }

    #[test]
    fn lookup_by_unknown_name_is_absent() {
        assert!(get_action_by_name("notAnAction").is_none());
        assert_eq!(get_action_by_name("buyCrypto").unwrap().id, ActionId::BuyCrypto);
    }

    #[test]
    fn stax_production_sequence() {
        let actions = get_actions_for_device(DeviceModelId::Stax, false);
        assert_eq!(
            ids(&actions),
            vec![ActionId::CustomImage, ActionId::AssetsTransfer, ActionId::BuyCrypto]
        );
    }

    #[test]
    fn stax_mock_sequence() {
        let actions = get_actions_for_device(DeviceModelId::Stax, true);
        assert_eq!(
            ids(&actions),
            vec![ActionId::ClaimMock, ActionId::PersonalizeMock, ActionId::MigrateAssetsMock]
        );
    }

    #[test]
    fn other_devices_have_no_actions() {
        for device in [
            DeviceModelId::NanoS,
            DeviceModelId::NanoSP,
            DeviceModelId::NanoX,
            DeviceModelId::Blue,
            DeviceModelId::Unknown,
        ] {
            assert!(get_actions_for_device(device, false).is_empty());
            assert!(get_actions_for_device(device, true).is_empty());
        }
    }

    #[test]
    fn resolution_is_deterministic() {
        for mock in [false, true] {
            let first = ids(&get_actions_for_device(DeviceModelId::Stax, mock));
            let second = ids(&get_actions_for_device(DeviceModelId::Stax, mock));
            assert_eq!(first, second);
        }
    }

    #[test]
    fn personalize_mock_title_uses_product_name() {
        let action = get_action_by_id(ActionId::PersonalizeMock).unwrap();
        assert_eq!(action.title, "Personalize my Ledger Stax");
    }

    #[test]
    fn assets_transfer_is_hidden_without_flag() {
        let actions = get_actions_for_device(DeviceModelId::Stax, false);

        let filtered = filter_enabled(&actions, &FeatureFlags::default());
        assert_eq!(ids(&filtered), vec![ActionId::CustomImage, ActionId::BuyCrypto]);

        let flags: FeatureFlags = [("postOnboardingAssetsTransfer".to_string(), true)]
            .into_iter()
            .collect();
        let filtered = filter_enabled(&actions, &flags);
        assert_eq!(ids(&filtered), ids(&actions));
    }

    #[test]
    fn feature_flags_ignore_key_case() {
        let flags: FeatureFlags = serde_json::from_str(r#"{ "postonboardingassetstransfer": true }"#).unwrap();
        assert!(flags.is_enabled("postOnboardingAssetsTransfer"));
        assert!(!flags.is_enabled("somethingElse"));
    }

    #[test]
    fn start_actions_use_the_supplied_context() {
        let modals = RefCell::new(Vec::<String>::new());
        let routes = RefCell::new(Vec::<String>::new());
        let drawer = RecordingDrawer::default();
        let open_modal = |name: &str| modals.borrow_mut().push(name.to_string());
        let navigate = |path: &str| routes.borrow_mut().push(path.to_string());
        let ctx = ActionContext {
            open_modal_callback: &open_modal,
            navigation_callback: &navigate,
            drawer: &drawer,
        };

        for action in get_actions_for_device(DeviceModelId::Stax, false) {
            action.start(&ctx);
        }
        get_action_by_id(ActionId::ClaimMock).unwrap().start(&ctx);

        assert_eq!(*modals.borrow(), vec!["MODAL_RECEIVE".to_string()]);
        assert_eq!(*routes.borrow(), vec!["/exchange".to_string()]);

        let requests = drawer.requests.borrow();
        assert_eq!(requests.len(), 2);
        assert_eq!(
            requests[0].target,
            DrawerTarget::CustomImage {
                is_from_post_onboarding_entry_point: true
            }
        );
        assert!(requests[0].options.force_disable_focus_trap);
        assert_eq!(
            requests[1].target,
            DrawerTarget::PostOnboardingMockAction { id: ActionId::ClaimMock }
        );
        assert!(!requests[1].options.force_disable_focus_trap);
    }
}
