use clap::Parser;
use tasklist_shared::const_config::client::DEFAULT_SERVER_ADDRESS;

#[derive(Parser)]
#[command(author, version, about)]
pub struct Cli {
    #[arg(
        short = 's',
        long = "stdout",
        action,
        help = "Controls if it logs to stdout/stderr instead of to a file"
    )]
    pub is_to_std_out: bool,

    #[arg(
        long = "server-address",
        default_value = DEFAULT_SERVER_ADDRESS,
        help = "Base URL of the task list API"
    )]
    pub server_address: String,
}
