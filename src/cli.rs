use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "chargectl",
    version,
    about = "Start and stop charging sessions through the charge point control API",
    override_usage = "chargectl [OPTIONS] start <cpid> <connectorId> [idTag]\n       \
                      chargectl [OPTIONS] stop <cpid> <connectorId>",
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output (-v info, -vv debug), logs go to stderr
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Base URL of the control API
    #[arg(long, global = true, env = "CHARGECTL_BASE_URL")]
    pub base_url: Option<String>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Start charging on a connector
    Start {
        /// Charge point identifier
        cpid: String,

        #[arg(value_name = "connectorId")]
        connector_id: u32,

        /// Identity tag authorizing the session [default: DEMO_IDTAG]
        #[arg(value_name = "idTag")]
        id_tag: Option<String>,
    },
    /// Stop charging on a connector, releasing it if no session is found
    Stop {
        /// Charge point identifier
        cpid: String,

        #[arg(value_name = "connectorId")]
        connector_id: u32,
    },
}
