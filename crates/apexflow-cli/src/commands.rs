use anyhow::Context as _;
use apexflow_client_core::{
    config::get_configuration, storage::FileStorage, Client, SessionStore,
};
use apexflow_shared::{
    req_args::{
        api::{inventory::LowStockReqArgs, order::ListReqArgs},
        LoginReqArgs,
    },
    session::SessionState,
    uac::Permission,
};
use futures::channel::oneshot;
use secrecy::SecretString;
use tracing::info;

use crate::cli::{Cli, Command};

/// Executes one command against the backend named in the configuration
#[tracing::instrument(skip(cli), fields(command = ?cli.command))]
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let configuration =
        get_configuration(&cli.config_dir).context("failed to read configuration")?;
    let session = SessionStore::new(FileStorage::new(&configuration.session.storage_dir));
    let client = Client::new(&configuration.client, session)?;
    info!(base_url = %configuration.client.base_url, "client ready");

    match cli.command {
        Command::Login { username } => {
            let args = LoginReqArgs::new(username, read_password()?);
            let user_info = wait(client.login(args, || {})).await?;
            println!("Logged in as {}", user_info.display_name());
            print_session(&client.session_state());
        }
        Command::Logout => {
            if !client.is_logged_in() {
                println!("Not logged in");
                return Ok(());
            }
            // Local session is gone whatever the server says
            if let Err(e) = wait(client.logout(|| {})).await {
                eprintln!("Server did not confirm logout: {e:#}");
            }
            println!("Logged out");
        }
        Command::Whoami => print_session(&client.session_state()),
        Command::RefreshPermissions => {
            wait(client.refresh_permissions(|| {})).await?;
            print_session(&client.session_state());
        }
        Command::Orders {
            page,
            page_size,
            keyword,
        } => {
            let args = ListReqArgs {
                page: Some(page),
                page_size: Some(page_size),
                keyword,
            };
            print_json(&wait(client.list_orders(args, || {})).await?)?;
        }
        Command::LowStock { threshold } => {
            let args = threshold
                .map(|threshold| LowStockReqArgs { threshold })
                .unwrap_or_default();
            print_json(&wait(client.low_stock_products(args, || {})).await?)?;
        }
        Command::IncomeStats => print_json(&wait(client.income_stats(|| {})).await?)?,
    }
    Ok(())
}

async fn wait<T>(rx: oneshot::Receiver<anyhow::Result<T>>) -> anyhow::Result<T> {
    rx.await.context("response channel closed")?
}

fn read_password() -> anyhow::Result<SecretString> {
    eprint!("Password: ");
    let mut line = String::new();
    std::io::stdin()
        .read_line(&mut line)
        .context("failed to read password")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string().into())
}

fn print_json(value: &serde_json::Value) -> anyhow::Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(value).context("failed to format response")?
    );
    Ok(())
}

fn print_session(state: &SessionState) {
    for line in session_summary(state) {
        println!("{line}");
    }
}

fn session_summary(state: &SessionState) -> Vec<String> {
    let mut result = vec![
        format!("User: {}", state.display_name()),
        format!("Role: {}", state.user_role_text()),
    ];
    if !state.is_logged_in() {
        return result;
    }
    let modules: Vec<_> = Permission::modules()
        .filter(|&module| state.can_access(module))
        .map(|module| module.to_string())
        .collect();
    result.push(format!(
        "Modules: {}",
        if modules.is_empty() {
            "none".to_string()
        } else {
            modules.join(", ")
        }
    ));
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use apexflow_shared::{
        token::AuthToken,
        uac::{Permissions, UserInfo},
    };

    fn logged_in(permissions: Vec<Permission>) -> SessionState {
        SessionState::default()
            .with_token(AuthToken::try_from("tok").unwrap())
            .with_session(UserInfo::new("alice"), permissions.into())
    }

    #[test]
    fn summary_when_logged_out() {
        let actual = session_summary(&SessionState::default());
        assert_eq!(actual.len(), 2);
        assert_eq!(actual[0], "User: Not Logged In");
    }

    #[test]
    fn admin_sees_every_module() {
        let actual = session_summary(&logged_in(vec![Permission::Admin]));
        let expected = Permission::modules().count();
        assert_eq!(actual[2].matches(", ").count() + 1, expected, "{actual:?}");
        assert!(actual[2].contains("Finance Management"), "{actual:?}");
    }

    #[test]
    fn no_modules() {
        let state = SessionState::default()
            .with_token(AuthToken::try_from("tok").unwrap())
            .with_session(UserInfo::new("bob"), Permissions::default());
        let actual = session_summary(&state);
        assert_eq!(actual[2], "Modules: none");
    }
}
