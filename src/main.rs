use std::process::ExitCode;

use anyhow::Result;
use clap::Parser as _;
use hamk_core::{
    entities::MapPoint,
    gateways::{location::is_secure_context, navigate::Page},
    map::MapRenderer,
    notification::Toaster,
    usecases::{AuthManager, ResultsArea, SearchPage, SearchSettings},
};
use hamk_gateways::device_location::Permission;
use hamk_view::{map, notification, results};

mod cli;
mod config;
mod gateways;

use self::{
    cli::{AuthCommand, Cli, Command, Format},
    config::Config,
    gateways::TerminalNavigation,
};

fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    env_logger::init();
    let cli = Cli::parse();
    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            log::error!("{err:#}");
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

/// Returns `false` if the user request failed.
fn run(cli: Cli) -> Result<bool> {
    let Cli {
        config,
        format,
        map,
        command,
    } = cli;
    let cfg = Config::try_load_from_file_or_default(config)?;
    match command {
        Command::Search { location } => {
            let page = search_page(&cfg, map, None, None)?;
            page.search(&location.join(" "));
            Ok(print_search_outcome(&page, format, map))
        }
        Command::NearMe {
            position,
            permission,
        } => {
            let page = search_page(&cfg, map, position, permission.map(Into::into))?;
            page.search_device_location();
            Ok(print_search_outcome(&page, format, map))
        }
        Command::Auth { command } => Ok(run_auth(&cfg, command, format)),
    }
}

fn search_page(
    cfg: &Config,
    map: bool,
    position: Option<MapPoint>,
    permission: Option<Permission>,
) -> Result<SearchPage> {
    let location = gateways::device_location_gateway(cfg, position, permission);
    let search_gateways = gateways::search_gateways(cfg, location)?;
    let settings = SearchSettings {
        radius: cfg.places.radius,
        ..Default::default()
    };
    let secure_context = is_secure_context(&cfg.app.origin);
    if !secure_context {
        log::debug!("{} is not a secure context", cfg.app.origin);
    }
    Ok(SearchPage::new(
        search_gateways,
        settings,
        secure_context,
        MapRenderer::new(map),
    ))
}

fn print_search_outcome(page: &SearchPage, format: Format, with_map: bool) -> bool {
    let area = page.results();
    match format {
        Format::Text => print!("{}", results::results_area_text(&area)),
        Format::Html => println!("{}", results::results_area(&area).into_string()),
    }
    if with_map {
        if let Some(state) = page.map_state() {
            match serde_json::to_string_pretty(&map::map_geojson(&state)) {
                Ok(json) => println!("{json}"),
                Err(err) => log::warn!("Could not export the map: {err}"),
            }
        }
    }
    matches!(area, ResultsArea::Results { .. })
}

fn run_auth(cfg: &Config, command: AuthCommand, format: Format) -> bool {
    let manager = AuthManager::new(TerminalNavigation::new(Page::Login));
    match gateways::identity_gateway(cfg) {
        Ok(backend) => manager.backend_ready(backend),
        Err(err) => manager.backend_failed(&err),
    }
    let succeeded = match command {
        AuthCommand::SignUp {
            email,
            password,
            name,
        } => manager.sign_up(&email, &password, &name).is_ok(),
        AuthCommand::SignIn { email, password } => {
            let signed_in = manager.sign_in(&email, &password).is_ok();
            if signed_in {
                manager.redirect_to_dashboard();
            }
            signed_in
        }
        AuthCommand::SignOut => {
            manager.sign_out();
            manager.is_initialized() && !manager.is_authenticated()
        }
        AuthCommand::ResetPassword { email } => manager.reset_password(&email).is_ok(),
    };
    print_notification(manager.toaster(), format);
    succeeded
}

fn print_notification(toaster: &Toaster, format: Format) {
    let Some(n) = toaster.current() else {
        return;
    };
    match format {
        Format::Text => println!("{}", notification::notification_text(&n)),
        Format::Html => println!("{}", notification::notification(&n).into_string()),
    }
}
