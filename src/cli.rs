use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use hamk_core::entities::MapPoint;
use hamk_gateways::device_location::Permission;

#[derive(Parser)]
#[command(name = "hamk", version, about = "Find NGOs nearby that accept clothes donations")]
pub struct Cli {
    /// Configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output format of results and notifications
    #[arg(long, value_enum, default_value_t = Format::Text, global = true)]
    pub format: Format,

    /// Print the map as GeoJSON
    #[arg(long, global = true)]
    pub map: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Html,
}

#[derive(Subcommand)]
pub enum Command {
    /// Search NGOs around a city or address
    Search {
        #[arg(required = true, value_name = "LOCATION")]
        location: Vec<String>,
    },
    /// Search NGOs around the current position of this device
    NearMe {
        /// The position as "LAT,LNG"
        #[arg(long, allow_hyphen_values = true)]
        position: Option<MapPoint>,
        /// Simulate the permission of the location request
        #[arg(long, value_enum)]
        permission: Option<LocationPermission>,
    },
    /// Manage your account
    Auth {
        #[command(subcommand)]
        command: AuthCommand,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LocationPermission {
    Granted,
    Denied,
}

impl From<LocationPermission> for Permission {
    fn from(from: LocationPermission) -> Self {
        match from {
            LocationPermission::Granted => Self::Granted,
            LocationPermission::Denied => Self::Denied,
        }
    }
}

#[derive(Subcommand)]
pub enum AuthCommand {
    /// Create a new donor account
    SignUp {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long, value_name = "FULL_NAME")]
        name: String,
    },
    SignIn {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    SignOut,
    /// Send an email to reset the password
    ResetPassword {
        #[arg(long)]
        email: String,
    },
}
