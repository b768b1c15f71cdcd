//! Interactive CLI for the GreenCoin SDK
//!
//! Run with: cargo run --example interactive
//!
//! Requires PRIVATE_KEY environment variable

use std::io::{self, Write};

use greencoin_sdk::{
    ImageArtifact, KeyWallet, SessionConfig, SessionController, SessionState, TxStatus,
};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Load environment
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    // Get private key from env
    let private_key = std::env::var("PRIVATE_KEY").expect("PRIVATE_KEY must be set");

    let config = SessionConfig::default();
    let wallet = KeyWallet::new(&private_key, &config.rpc_url)?;
    let mut session = SessionController::new(wallet, config);

    println!("\n========================================");
    println!("      GreenCoin SDK Interactive CLI");
    println!("========================================");

    // Main loop
    loop {
        println!("\n----------------------------------------");
        match session.account() {
            Some(account) => println!("Connected: {account}"),
            None => println!("Not connected"),
        }
        println!("Select an option:");
        println!("  1. Connect wallet");
        println!("  2. Add verifier");
        println!("  3. Grant points");
        println!("  4. View my points");
        println!("  5. Verify proof-of-action image");
        println!("  q. Quit");
        println!("----------------------------------------");

        let choice = prompt("Enter choice: ")?;

        let result = match choice.as_str() {
            "1" => connect_flow(&mut session).await,
            "2" => add_verifier_flow(&mut session).await,
            "3" => grant_points_flow(&mut session).await,
            "4" => view_points_flow(&mut session).await,
            "5" => verify_proof_flow(&mut session).await,
            "q" | "Q" => {
                println!("\nGoodbye!");
                break;
            }
            _ => {
                println!("\nInvalid choice. Please try again.");
                continue;
            }
        };

        if let Err(err) = result {
            println!("\nError: {err}");
        }
    }

    Ok(())
}

fn prompt(message: &str) -> eyre::Result<String> {
    print!("{message}");
    io::stdout().flush()?;
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

async fn connect_flow(session: &mut SessionController<KeyWallet>) -> eyre::Result<()> {
    if session.state() == SessionState::Connected {
        println!("\nAlready connected.");
        return Ok(());
    }
    let account = session.connect().await?;
    println!("\nConnected as {account}");
    Ok(())
}

async fn add_verifier_flow(session: &mut SessionController<KeyWallet>) -> eyre::Result<()> {
    let verifier = prompt("Verifier address: ")?;

    println!("Submitting addVerifier...");
    let pending = session.add_verifier(&verifier).await?;
    report(&pending.summary, pending.status);
    Ok(())
}

async fn grant_points_flow(session: &mut SessionController<KeyWallet>) -> eyre::Result<()> {
    let to = prompt("Recipient address: ")?;
    let amount = prompt("Amount: ")?;
    let action = prompt("Action description (may be empty): ")?;

    println!("Submitting grantPoints...");
    let pending = session.grant_points(&to, &amount, &action).await?;
    report(&pending.summary, pending.status);
    Ok(())
}

async fn view_points_flow(session: &mut SessionController<KeyWallet>) -> eyre::Result<()> {
    let balance = session.fetch_points().await?;
    println!("\nYou have {} GRC", balance.value);
    Ok(())
}

async fn verify_proof_flow(session: &mut SessionController<KeyWallet>) -> eyre::Result<()> {
    let path = prompt("Image path: ")?;

    let artifact = ImageArtifact::from_path(&path).await?;
    println!("Uploading {}...", artifact.file_name);
    let result = session.verify_proof(artifact).await?;

    if result.is_valid() {
        println!("\nImage accepted: {}", result.message);
        println!("You may proceed to grant points for this action.");
    } else {
        println!("\nImage rejected: {}", result.message);
    }
    Ok(())
}

fn report(summary: &str, status: TxStatus) {
    match status {
        TxStatus::Confirmed => println!("Confirmed: {summary}"),
        TxStatus::Submitted => {
            println!("Still pending: {summary}");
            println!("The transaction was accepted but not yet included; check back later.");
        }
        TxStatus::Failed => println!("Failed: {summary}"),
    }
}
