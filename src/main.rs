use anyhow::Result;
use clap::Parser;
use sponsoration_notifier::{config::Config, telemetry, Notifier};
use std::process::ExitCode;
use std::time::Duration;

const DEFAULT_TEST_EMAIL: &str = "test@example.com";

/// Send one of each Sponsoration notification to a test inbox
#[derive(Debug, Parser)]
#[command(name = "test-email", version)]
struct Cli {
    /// Destination address
    email: Option<String>,

    /// Pause between sends, in milliseconds
    #[arg(long, default_value_t = 1000)]
    pause_ms: u64,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = Config::from_env()?;
    telemetry::init(&config.telemetry);

    let test_email = match cli.email {
        Some(email) => email,
        None => {
            println!("⚠️  Warning: No email address provided!");
            println!("Usage: ENV=production test-email your-email@example.com");
            println!("\nProceeding with default {}...\n", DEFAULT_TEST_EMAIL);
            DEFAULT_TEST_EMAIL.to_string()
        }
    };

    println!("🧪 Testing Email Service...\n");
    println!("📧 Test email will be sent to: {}", test_email);
    println!("🌍 Environment: {}", config.environment_name());
    println!(
        "📨 From: {} <{}>",
        config.notifier.from_name, config.notifier.from_email
    );
    println!("\n{}\n", "=".repeat(60));

    let notifier = Notifier::new(config.notifier)?;
    let pause = Duration::from_millis(cli.pause_ms);

    println!("1️⃣  Testing Verification Email...");
    let verification = notifier.send_verification(&test_email, "TEST123").await;
    print_result(&verification);

    tokio::time::sleep(pause).await;

    println!("2️⃣  Testing Password Reset Email...");
    let reset = notifier
        .send_password_reset(&test_email, "RESET456", Some("Test User"))
        .await;
    print_result(&reset);

    tokio::time::sleep(pause).await;

    println!("3️⃣  Testing Welcome Email...");
    let welcome = notifier.send_welcome(&test_email, "Test User").await;
    print_result(&welcome);

    println!("{}", "=".repeat(60));

    if verification.is_ok() && reset.is_ok() && welcome.is_ok() {
        println!("\n🎉 All email tests passed!");
        println!("\n📬 Check your inbox at: {}", test_email);
        println!("   (Don't forget to check spam folder)");
        Ok(ExitCode::SUCCESS)
    } else {
        println!("\n⚠️  Some email tests failed!");
        println!("   Check the error messages above for details.");
        Ok(ExitCode::FAILURE)
    }
}

fn print_result<T>(result: &sponsoration_notifier::Result<T>) {
    match result {
        Ok(_) => println!("   ✅ Success\n"),
        Err(e) => eprintln!("   ❌ Failed: {}\n", e),
    }
}
