use clap::{Parser, Subcommand};
use url::Url;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Open a Stripe checkout for a plan and print the URL to visit
    Checkout {
        /// Plan tier (associates, bachelors, masters)
        plan: String,

        /// Billing cadence (monthly, annual)
        cadence: String,
    },

    /// Store the session token used to identify the student
    SetToken { token: String },

    /// Forget the stored session token
    ClearToken,

    /// Show the student id and email the next checkout will send
    Whoami,

    /// Confirm the URL Stripe redirected back to after payment
    ConfirmReturn { url: Url },
}
