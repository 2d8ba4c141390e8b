use anyhow::{Context, Result, anyhow};
use clap::Parser;
use log::{debug, info};
use wallet_hub::cli::{Cli, Commands};
use wallet_hub::config::{CliOverrides, load_configuration};
use wallet_hub::fees::{EvmGasLimit, Transaction, extract_fee_fields, format_display_amount, parse_amount};
use wallet_hub::models::{AccountLike, DeviceModelId};
use wallet_hub::post_onboarding::{
    ActionContext, DrawerOpener, DrawerRequest, filter_enabled, get_action_by_name, get_actions_for_device,
};
use wallet_hub::utils::read_json_file;

/// Prints the drawers an action asks for instead of rendering them.
struct ConsoleDrawer;

impl DrawerOpener for ConsoleDrawer {
    fn set_drawer(&self, request: DrawerRequest) {
        match serde_json::to_string(&request) {
            Ok(json) => println!("drawer {}", json),
            Err(e) => println!("drawer {:?} ({})", request, e),
        }
    }
}

fn main() -> Result<()> {
    wallet_hub::log::init_logging()?;
    let cli = Cli::parse();

    match cli.command {
        Commands::Actions { device, mock, all } => {
            let overrides = CliOverrides {
                mock: mock.then_some(true),
            };
            let config = load_configuration(&cli.config, &overrides)?;

            let device_model_id = DeviceModelId::from_str_lossy(&device);
            if device_model_id == DeviceModelId::Unknown {
                info!(device = device.as_str(); "Unknown device model, no actions available");
            }

            let actions = get_actions_for_device(device_model_id, config.post_onboarding.mock);
            let actions = if all {
                actions
            } else {
                filter_enabled(&actions, &config.feature_flags)
            };

            println!("{}", serde_json::to_string_pretty(&actions)?);
        },
        Commands::Action { id } => {
            let action = get_action_by_name(&id).ok_or_else(|| anyhow!("Unknown post onboarding action '{}'", id))?;
            println!("{}", serde_json::to_string_pretty(action)?);
        },
        Commands::StartAction { id } => {
            let action = get_action_by_name(&id).ok_or_else(|| anyhow!("Unknown post onboarding action '{}'", id))?;
            let open_modal = |name: &str| println!("modal {}", name);
            let navigate = |path: &str| println!("navigate {}", path);
            let ctx = ActionContext {
                open_modal_callback: &open_modal,
                navigation_callback: &navigate,
                drawer: &ConsoleDrawer,
            };

            debug!(action = action.id.as_str(); "Starting post onboarding action");
            action.start(&ctx);
        },
        Commands::Fees { transaction } => {
            let tx: Transaction = read_json_file(&transaction)
                .with_context(|| format!("Could not read transaction from {}", transaction.display()))?;
            let view = extract_fee_fields(&tx, &EvmGasLimit);
            println!("{}", serde_json::to_string_pretty(&view)?);
        },
        Commands::Convert { amount, account } => {
            let amount = parse_amount(&amount)?;
            let account: AccountLike = read_json_file(&account)
                .with_context(|| format!("Could not read account from {}", account.display()))?;

            match wallet_hub::to_display_amount(Some(amount), &account) {
                Some(display) => match account.main_unit() {
                    Some(unit) => println!("{} ({})", display, format_display_amount(display, unit)),
                    None => println!("{}", display),
                },
                None => return Err(anyhow!("Amount {} cannot be represented in display units", amount)),
            }
        },
    }

    Ok(())
}
