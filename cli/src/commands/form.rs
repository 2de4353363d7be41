//! # SafeSpace Form Commands
//!
//! File: cli/src/commands/form.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Terminal versions of the site's four forms. Each subcommand validates its
//! fields with `safespace_core::forms` and prints the confirmation message.
//! Nothing is stored and no payment is taken; an invalid submission exits
//! with an error naming the first field that failed.
//!
//! ## Examples
//!
//! ```bash
//! safespace form counseling --name "Amina" --email amina@example.org --phone 0700000000
//! safespace form donate --name "Kevin" --email kevin@example.com --amount 500
//! safespace form volunteer --name "Wanjiru" --email w@example.com --phone 0711111111 --role Outreach
//! safespace form partner --name "NGH" --email partners@ngh.example --phone 020000000 --kind Sponsor
//! ```
//!
use crate::core::error::Result;
use clap::{Args, Parser, Subcommand};
use safespace_core::forms::{
    Confirmation, CounselingMode, CounselingRegistration, Donation, PartnershipInquiry,
    VolunteerSignup, DEFAULT_PARTNERSHIP_KIND, DEFAULT_VOLUNTEER_ROLE,
};
use tracing::info;

/// # Form Command Group Arguments (`FormArgs`)
///
/// Captures which form the user wants to submit.
#[derive(Parser, Debug)]
pub struct FormArgs {
    #[command(subcommand)]
    command: FormCommand,
}

/// # Form Subcommands (`FormCommand`)
#[derive(Subcommand, Debug)]
enum FormCommand {
    /// Register for counseling.
    Counseling(CounselingArgs),
    /// Pledge a donation (no payment is processed).
    Donate(DonateArgs),
    /// Sign up as a volunteer.
    Volunteer(VolunteerArgs),
    /// Send a partnership inquiry.
    Partner(PartnerArgs),
}

/// Fields every form asks for.
#[derive(Args, Debug)]
struct ContactArgs {
    /// Full name.
    #[arg(long)]
    name: String,
    /// Email address.
    #[arg(long)]
    email: String,
}

#[derive(Args, Debug)]
struct CounselingArgs {
    #[command(flatten)]
    contact: ContactArgs,
    /// Phone number.
    #[arg(long)]
    phone: String,
    /// Attend in person instead of online.
    #[arg(long)]
    in_person: bool,
}

#[derive(Args, Debug)]
struct DonateArgs {
    #[command(flatten)]
    contact: ContactArgs,
    /// Amount in Kenyan shillings (minimum 100).
    #[arg(long)]
    amount: u64,
}

#[derive(Args, Debug)]
struct VolunteerArgs {
    #[command(flatten)]
    contact: ContactArgs,
    /// Phone number.
    #[arg(long)]
    phone: String,
    /// Preferred role.
    #[arg(long, default_value = DEFAULT_VOLUNTEER_ROLE)]
    role: String,
}

#[derive(Args, Debug)]
struct PartnerArgs {
    #[command(flatten)]
    contact: ContactArgs,
    /// Phone number.
    #[arg(long)]
    phone: String,
    /// Kind of partnership (e.g. Partner, Sponsor).
    #[arg(long, default_value = DEFAULT_PARTNERSHIP_KIND)]
    kind: String,
}

/// Handles `safespace form <FORM>`.
pub fn handle_form(args: FormArgs) -> Result<()> {
    let confirmation = submit(args.command)?;
    info!("Confirmed {} at {}", confirmation.form, confirmation.submitted_at);
    println!("{}", confirmation.message);
    Ok(())
}

fn submit(command: FormCommand) -> Result<Confirmation> {
    let confirmation = match command {
        FormCommand::Counseling(args) => CounselingRegistration {
            name: args.contact.name,
            email: args.contact.email,
            phone: args.phone,
            mode: if args.in_person {
                CounselingMode::InPerson
            } else {
                CounselingMode::Online
            },
        }
        .submit()?,
        FormCommand::Donate(args) => Donation {
            name: args.contact.name,
            email: args.contact.email,
            amount_ksh: args.amount,
        }
        .submit()?,
        FormCommand::Volunteer(args) => VolunteerSignup {
            name: args.contact.name,
            email: args.contact.email,
            phone: args.phone,
            role: args.role,
        }
        .submit()?,
        FormCommand::Partner(args) => PartnershipInquiry {
            name: args.contact.name,
            email: args.contact.email,
            phone: args.phone,
            kind: args.kind,
        }
        .submit()?,
    };
    Ok(confirmation)
}
